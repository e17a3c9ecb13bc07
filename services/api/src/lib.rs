mod cli;
mod demo;
mod infra;
mod printable;
mod routes;
mod server;

use footprint_quiz::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
