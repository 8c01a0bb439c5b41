use crate::preview::{run_routine_preview, RoutineArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use faceguard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "FaceGuard",
    about = "Serve the FaceGuard skincare API or preview routines from the command line",
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
    /// Print the routine and safety report generated for an analysis payload
    Routine(RoutineArgs),
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
        Command::Routine(args) => run_routine_preview(args),
    }
}
