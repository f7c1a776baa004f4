use color_eyre::Result;
use std::sync::Arc;
use user_service::{ApiConfig, HttpUserApi};
use userdesk_tui::Route;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let api = HttpUserApi::new(ApiConfig::default())?;
    userdesk_tui::run(Arc::new(api), Route::Login).await
}
