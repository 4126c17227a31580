// slot grid
pub const SLOT_MINUTES: i64 = 30;
pub const SLOT_FORMAT: &str = "%H:%M";

// default lunch window, overridable through LUNCH_START / LUNCH_END
pub const DEFAULT_LUNCH_START: &str = "13:00";
pub const DEFAULT_LUNCH_END: &str = "14:00";

// Monday = 0 ... Sunday = 6
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
