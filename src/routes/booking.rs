use actix_web::{HttpResponse, post, web};
use chrono::Local;

use super::run_blocking;
use crate::AppState;
use crate::error::ApiError;
use crate::handlers::booking::record_booking;
use crate::models::booking::{BookingConfirmation, BookingRequest};

#[post("/log_booking")]
async fn log_booking(
    body: web::Json<BookingRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    let appointment = run_blocking(move || {
        record_booking(&state.store, request, Local::now().naive_local())
    })
    .await?;

    Ok(HttpResponse::Created().json(BookingConfirmation::success(appointment)))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(log_booking);
}
