mod commands;
mod output;
mod telemetry;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use commands::tui::TuiArgs;
use commands::{ApiArgs, Command};

/// userdesk - manage the users of a reqres-style REST API
#[derive(Parser, Debug)]
#[command(name = "userdesk", version, about)]
struct Cli {
    #[command(flatten)]
    api: ApiArgs,

    /// Write logs to this file (the only log sink while the TUI runs)
    #[arg(long, value_name = "FILE", global = true)]
    log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Command::Tui(TuiArgs { route: None }));
    telemetry::init(cli.verbose, cli.log_file.as_deref(), command.is_interactive())?;

    let api = cli.api.client()?;
    let mut stdout = std::io::stdout().lock();

    match command {
        Command::Tui(args) => commands::tui::execute(api, args).await,
        Command::List(args) => commands::list::execute(&api, args, &mut stdout).await,
        Command::Show(args) => commands::show::execute(&api, args, &mut stdout).await,
        Command::Update(args) => commands::update::execute(&api, args).await,
        Command::Delete(args) => commands::delete::execute(&api, args).await,
    }
}
