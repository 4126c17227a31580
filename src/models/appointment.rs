use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One booked slot. Timestamps are naive local time, stored as ISO 8601.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Appointment {
    pub name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// Read view of a stored appointment. Only the start matters when looking
/// for taken slots, so records missing other fields still load.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BookedSlot {
    pub start_time: NaiveDateTime,
}

impl From<&Appointment> for BookedSlot {
    fn from(appointment: &Appointment) -> Self {
        BookedSlot {
            start_time: appointment.start_time,
        }
    }
}
