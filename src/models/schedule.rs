use std::collections::HashMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::scheduling::slots::parse_slot;

/// Weekday name -> working hours for that day.
pub type Schedules = HashMap<String, WeekdaySchedule>;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeekdaySchedule {
    pub doctor: String,
    pub start_time: String, // "HH:MM"
    pub end_time: String,   // "HH:MM"
}

impl WeekdaySchedule {
    pub fn working_hours(&self) -> Result<(NaiveTime, NaiveTime), ApiError> {
        let parse = |value: &str| {
            parse_slot(value).ok_or_else(|| {
                ApiError::Internal(format!(
                    "schedule for {} has malformed time '{}'",
                    self.doctor, value
                ))
            })
        };

        Ok((parse(&self.start_time)?, parse(&self.end_time)?))
    }
}
