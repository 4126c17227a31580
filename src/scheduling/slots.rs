use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::models::appointment::BookedSlot;
use crate::scheduling::constants::{SLOT_FORMAT, SLOT_MINUTES};

/// Half-open `[start, end)` interval during which no slot is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunchWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl LunchWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        LunchWindow { start, end }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time < self.end
    }
}

pub fn format_slot(time: NaiveTime) -> String {
    time.format(SLOT_FORMAT).to_string()
}

pub fn parse_slot(slot: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(slot.trim(), SLOT_FORMAT).ok()
}

/// Every slot start from `start` (inclusive) up to `end` (exclusive).
pub fn slot_grid(start: NaiveTime, end: NaiveTime) -> Vec<NaiveTime> {
    let step = Duration::minutes(SLOT_MINUTES);
    let mut grid = Vec::new();
    let mut current = start;

    while current < end {
        grid.push(current);
        let (next, wrapped) = current.overflowing_add_signed(step);
        if wrapped != 0 {
            break;
        }
        current = next;
    }

    grid
}

/// Drops slots starting inside the lunch window. A grid that never reaches
/// the window comes back unchanged.
pub fn without_lunch(grid: Vec<NaiveTime>, lunch: &LunchWindow) -> Vec<NaiveTime> {
    grid.into_iter().filter(|slot| !lunch.contains(*slot)).collect()
}

/// "HH:MM" of every appointment starting on `date`.
pub fn booked_slots(appointments: &[BookedSlot], date: NaiveDate) -> HashSet<String> {
    appointments
        .iter()
        .filter(|appt| appt.start_time.date() == date)
        .map(|appt| format_slot(appt.start_time.time()))
        .collect()
}

/// Formats the grid, skipping anything already booked. Generation order is kept.
pub fn open_slots(grid: &[NaiveTime], booked: &HashSet<String>) -> Vec<String> {
    grid.iter()
        .map(|slot| format_slot(*slot))
        .filter(|slot| !booked.contains(slot))
        .collect()
}
