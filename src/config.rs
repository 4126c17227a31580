use std::env;
use std::path::PathBuf;

use chrono::NaiveTime;
use tracing::warn;

use crate::scheduling::constants::{DEFAULT_LUNCH_END, DEFAULT_LUNCH_START};
use crate::scheduling::slots::{LunchWindow, parse_slot};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SCHEDULES_PATH: &str = "data/schedules.json";
const DEFAULT_APPOINTMENTS_PATH: &str = "data/appointments.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub schedules_path: PathBuf,
    pub appointments_path: PathBuf,
    pub lunch: LunchWindow,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Unset or unparseable
    /// values fall back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let mut lunch = LunchWindow::new(
            time_var(&lookup, "LUNCH_START", DEFAULT_LUNCH_START),
            time_var(&lookup, "LUNCH_END", DEFAULT_LUNCH_END),
        );
        if lunch.start > lunch.end {
            warn!(
                "LUNCH_START is after LUNCH_END, using {}-{}",
                DEFAULT_LUNCH_START, DEFAULT_LUNCH_END
            );
            lunch = Self::default_lunch();
        }

        AppConfig {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            schedules_path: lookup("SCHEDULES_PATH")
                .unwrap_or_else(|| DEFAULT_SCHEDULES_PATH.to_string())
                .into(),
            appointments_path: lookup("APPOINTMENTS_PATH")
                .unwrap_or_else(|| DEFAULT_APPOINTMENTS_PATH.to_string())
                .into(),
            lunch,
        }
    }

    pub fn default_lunch() -> LunchWindow {
        LunchWindow::new(default_time(DEFAULT_LUNCH_START), default_time(DEFAULT_LUNCH_END))
    }
}

fn time_var<F>(lookup: &F, key: &str, default: &str) -> NaiveTime
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => parse_slot(&raw).unwrap_or_else(|| {
            warn!("{} '{}' is not HH:MM, using {}", key, raw, default);
            default_time(default)
        }),
        None => default_time(default),
    }
}

fn default_time(value: &str) -> NaiveTime {
    parse_slot(value).unwrap_or(NaiveTime::MIN)
}
