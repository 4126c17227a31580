pub mod booking;
pub mod slots;
