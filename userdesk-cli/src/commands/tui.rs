use std::sync::Arc;

use clap::Args;
use color_eyre::Result;
use user_service::HttpUserApi;
use userdesk_tui::Route;

#[derive(Args, Debug)]
pub struct TuiArgs {
    /// Path to open first: /, /users or /edit/{id}
    #[arg(long, value_name = "PATH")]
    pub route: Option<Route>,
}

pub async fn execute(api: HttpUserApi, args: TuiArgs) -> Result<()> {
    let start = args.route.unwrap_or(Route::Login);
    tracing::info!(route = %start, base_url = %api.config().base_url, "starting tui");
    userdesk_tui::run(Arc::new(api), start).await
}
