pub mod delete;
pub mod list;
pub mod show;
pub mod tui;
pub mod update;

use std::time::Duration;

use clap::{Args, Subcommand};
use color_eyre::Result;
use user_service::{ApiConfig, HttpUserApi, DEFAULT_BASE_URL};

/// Where the users API lives
#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// Base URL of the users API
    #[arg(long, env = "USERDESK_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Value for the x-api-key header
    #[arg(long, env = "USERDESK_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,
}

impl ApiArgs {
    pub fn config(&self) -> ApiConfig {
        let mut config = ApiConfig::default().with_base_url(&self.api_url);
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }

    pub fn client(&self) -> Result<HttpUserApi> {
        Ok(HttpUserApi::new(self.config())?)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive terminal UI (default)
    Tui(tui::TuiArgs),

    /// Print one page of users
    List(list::ListArgs),

    /// Print a single user
    Show(show::ShowArgs),

    /// Change a user's name or email
    Update(update::UpdateArgs),

    /// Delete a user
    Delete(delete::DeleteArgs),
}

impl Command {
    pub fn is_interactive(&self) -> bool {
        matches!(self, Command::Tui(_))
    }
}
