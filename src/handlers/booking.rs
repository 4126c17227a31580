use chrono::{Duration, NaiveDateTime};

use crate::error::ApiError;
use crate::models::appointment::Appointment;
use crate::models::booking::BookingRequest;
use crate::scheduling::constants::SLOT_MINUTES;
use crate::scheduling::dates::{normalize_day, resolve_upcoming_date};
use crate::scheduling::slots::parse_slot;
use crate::store::JsonStore;

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::MissingParameter(format!("Missing '{}' in booking", field)))
}

/// Records a booking on the next occurrence of the requested day.
///
/// Nothing checks that the slot is free or inside working hours, so the same
/// slot can be booked twice.
pub fn record_booking(
    store: &JsonStore,
    request: BookingRequest,
    now: NaiveDateTime,
) -> Result<Appointment, ApiError> {
    let name = required(request.name, "name")?;
    let doctor = required(request.doctor, "doctor")?;
    let day = normalize_day(&required(request.day, "day")?);
    let slot = required(request.slot, "slot")?;

    let target = resolve_upcoming_date(&day, now)?;
    let slot_time = parse_slot(&slot)
        .ok_or_else(|| ApiError::InvalidInput(format!("'{}' is not an HH:MM slot", slot)))?;

    let start_time = target.date().and_time(slot_time);
    let appointment = Appointment {
        name,
        start_time,
        end_time: start_time + Duration::minutes(SLOT_MINUTES),
    };

    store.append_appointment(&appointment)?;

    tracing::info!(
        "Appended new booking for {} at {} on {} with {}",
        appointment.name,
        slot,
        day,
        doctor
    );

    Ok(appointment)
}
