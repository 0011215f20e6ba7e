use crate::commands::{run_analyze, run_foods, run_suggest, AnalyzeArgs, CatalogArgs, SuggestArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nutrisync::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nutrisync",
    about = "Score food pairings and suggest foods from the command line or over HTTP",
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
    /// Score how well two foods go together
    Analyze(AnalyzeArgs),
    /// Suggest foods for an eater profile
    Suggest(SuggestArgs),
    /// List the foods in the catalog
    Foods(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured food catalog CSV
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Suggest(args) => run_suggest(args),
        Command::Foods(args) => run_foods(args),
    }
}
