use actix_web::{HttpResponse, get, web};
use chrono::Local;
use serde::Deserialize;

use super::run_blocking;
use crate::AppState;
use crate::error::ApiError;
use crate::handlers::slots::available_slots;

#[derive(Debug, Deserialize)]
struct SlotsQuery {
    day: Option<String>,
}

// GET /get_slots?day=Saturday
#[get("/get_slots")]
async fn get_slots(
    query: web::Query<SlotsQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let day = match query.into_inner().day {
        Some(day) if !day.is_empty() => day,
        _ => {
            return Err(ApiError::MissingParameter(
                "Please provide a 'day' parameter.".to_string(),
            ));
        }
    };

    let slots = run_blocking(move || {
        available_slots(&state.store, &state.lunch, &day, Local::now().naive_local())
    })
    .await?;

    Ok(HttpResponse::Ok().json(slots))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(get_slots);
}
