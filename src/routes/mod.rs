pub mod booking;
pub mod health;
pub mod slots;

use actix_web::web;
use tokio::task;

use crate::error::ApiError;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::InvalidJson(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::InvalidInput(err.to_string()).into()),
    )
    .configure(health::init)
    .configure(slots::init)
    .configure(booking::init);
}

/// File access blocks, so keep it off the actix worker thread.
async fn run_blocking<T, F>(job: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(job)
        .await
        .map_err(|e| ApiError::Internal(format!("blocking task failed: {}", e)))?
}
