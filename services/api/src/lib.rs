mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use forever_style::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
