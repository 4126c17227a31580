pub mod appointment;
pub mod booking;
pub mod schedule;
pub mod slots;
