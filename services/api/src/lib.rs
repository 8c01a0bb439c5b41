mod cli;
mod infra;
mod preview;
mod routes;
mod server;

use faceguard::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
