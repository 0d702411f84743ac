use crate::advise::{run_advise, run_rules, AdviseArgs, RulesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use milreg::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "milreg",
    about = "Advisory checks for military registration records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print recommendations for persons read from a JSON or CSV file
    Advise(AdviseArgs),
    /// List the rules of the active catalog in evaluation order
    Rules(RulesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Advise(args) => run_advise(args),
        Command::Rules(args) => run_rules(args),
    }
}
