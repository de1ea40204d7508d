mod analyze;
mod cli;
mod infra;
mod routes;
mod server;

use essay_feedback::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
