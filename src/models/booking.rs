use serde::{Deserialize, Serialize};

use crate::models::appointment::Appointment;

/// Body of `POST /log_booking`. Every field is required; presence is checked
/// by the handler so a missing field gets a proper error message.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BookingRequest {
    pub name: Option<String>,
    pub doctor: Option<String>,
    pub day: Option<String>,
    pub slot: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub status: &'static str,
    pub message: &'static str,
    pub details: Appointment,
}

impl BookingConfirmation {
    pub fn success(details: Appointment) -> Self {
        BookingConfirmation {
            status: "success",
            message: "Booking successful",
            details,
        }
    }
}
