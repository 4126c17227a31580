pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod scheduling;
pub mod store;

use crate::config::AppConfig;
use crate::scheduling::slots::LunchWindow;
use crate::store::JsonStore;

/// Shared by every worker through `web::Data`.
pub struct AppState {
    pub store: JsonStore,
    pub lunch: LunchWindow,
}

impl AppState {
    pub fn new(store: JsonStore, lunch: LunchWindow) -> Self {
        AppState { store, lunch }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        AppState::new(
            JsonStore::new(&config.schedules_path, &config.appointments_path),
            config.lunch,
        )
    }
}
