mod advise;
mod cli;
mod infra;
mod routes;
mod server;

use milreg::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
