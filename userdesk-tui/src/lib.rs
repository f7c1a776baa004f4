mod app;
mod events;
mod requests;
mod router;
mod ui;

pub use router::{Route, RouteError};

use app::App;
use color_eyre::Result;
use std::sync::Arc;
use user_service::UserApi;

/// Take over the terminal and run the UI starting at `start` until the user quits
pub async fn run(api: Arc<dyn UserApi>, start: Route) -> Result<()> {
    let terminal = ratatui::init();
    let result = App::new(api, start).run(terminal).await;
    ratatui::restore();
    result
}
