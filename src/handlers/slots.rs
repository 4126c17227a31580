use chrono::NaiveDateTime;

use crate::error::ApiError;
use crate::models::slots::SlotsResponse;
use crate::scheduling::dates::{normalize_day, resolve_upcoming_date};
use crate::scheduling::slots::{LunchWindow, booked_slots, open_slots, slot_grid, without_lunch};
use crate::store::JsonStore;

/// Open slots for the next occurrence of `day`, as seen from `now`.
pub fn available_slots(
    store: &JsonStore,
    lunch: &LunchWindow,
    day: &str,
    now: NaiveDateTime,
) -> Result<SlotsResponse, ApiError> {
    let schedules = store.load_schedules()?;
    let appointments = store.load_appointments()?;

    let day = normalize_day(day);
    let Some(schedule) = schedules.get(&day) else {
        return Err(ApiError::NotFound(format!("No schedule found for {}", day)));
    };

    let (start, end) = schedule.working_hours()?;
    let grid = without_lunch(slot_grid(start, end), lunch);

    let target = resolve_upcoming_date(&day, now)?;
    let booked = booked_slots(&appointments, target.date());

    Ok(SlotsResponse {
        doctor: schedule.doctor.clone(),
        available_slots: open_slots(&grid, &booked),
    })
}
