use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreError;
use crate::models::appointment::{Appointment, BookedSlot};
use crate::models::schedule::Schedules;

/// File-backed schedule and appointment stores.
///
/// Every call reads the whole file again. Reads share the lock, the booking
/// read-modify-write holds it exclusively so two workers never interleave an
/// append. A crash halfway through `fs::write` still leaves a truncated file.
pub struct JsonStore {
    schedules_path: PathBuf,
    appointments_path: PathBuf,
    lock: RwLock<()>,
}

impl JsonStore {
    pub fn new(schedules_path: impl Into<PathBuf>, appointments_path: impl Into<PathBuf>) -> Self {
        JsonStore {
            schedules_path: schedules_path.into(),
            appointments_path: appointments_path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn schedules_path(&self) -> &Path {
        &self.schedules_path
    }

    pub fn appointments_path(&self) -> &Path {
        &self.appointments_path
    }

    pub fn load_schedules(&self) -> Result<Schedules, StoreError> {
        let _guard = self.lock.read().unwrap_or_else(PoisonError::into_inner);
        read_json(&self.schedules_path)
    }

    pub fn load_appointments(&self) -> Result<Vec<BookedSlot>, StoreError> {
        let _guard = self.lock.read().unwrap_or_else(PoisonError::into_inner);
        read_json(&self.appointments_path)
    }

    /// Appends one appointment, leaving existing records exactly as they were
    /// read (unknown fields included). Never creates the file.
    pub fn append_appointment(&self, appointment: &Appointment) -> Result<(), StoreError> {
        let _guard = self.lock.write().unwrap_or_else(PoisonError::into_inner);
        let path = &self.appointments_path;

        let mut appointments: Vec<Value> = read_json(path)?;
        let record = serde_json::to_value(appointment).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        appointments.push(record);

        let body = serde_json::to_string_pretty(&appointments).map_err(|source| {
            StoreError::Json {
                path: path.clone(),
                source,
            }
        })?;
        fs::write(path, body).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(
            "Wrote {} appointments to {}",
            appointments.len(),
            path.display()
        );
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => StoreError::Missing(path.to_path_buf()),
        _ => StoreError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonStore {
        JsonStore::new(
            dir.path().join("schedules.json"),
            dir.path().join("appointments.json"),
        )
    }

    fn sample() -> Appointment {
        let start = NaiveDate::from_ymd_opt(2024, 5, 13)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Appointment {
            name: "Alice".to_string(),
            start_time: start,
            end_time: start + chrono::Duration::minutes(30),
        }
    }

    #[test]
    fn missing_files_are_reported_as_missing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(matches!(store.load_schedules(), Err(StoreError::Missing(_))));
        assert!(matches!(store.load_appointments(), Err(StoreError::Missing(_))));
        assert!(matches!(
            store.append_appointment(&sample()),
            Err(StoreError::Missing(_))
        ));
        assert!(!store.appointments_path().exists());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.schedules_path(), "{ not json").unwrap();

        assert!(matches!(store.load_schedules(), Err(StoreError::Json { .. })));
    }

    #[test]
    fn concurrent_appends_are_not_lost() {
        const WRITERS: usize = 32;

        let dir = TempDir::new().unwrap();
        let store = Arc::new(store_in(&dir));
        fs::write(store.appointments_path(), "[]").unwrap();

        let handles: Vec<_> = (0..WRITERS)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let mut appointment = sample();
                    appointment.name = format!("Patient {}", i);
                    store.append_appointment(&appointment).unwrap();
                    store.load_appointments().unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let raw: Vec<Value> =
            serde_json::from_str(&fs::read_to_string(store.appointments_path()).unwrap()).unwrap();
        assert_eq!(raw.len(), WRITERS);
        for i in 0..WRITERS {
            let name = format!("Patient {}", i);
            assert!(raw.iter().any(|r| r["name"] == name.as_str()), "{} was lost", name);
        }
    }

    #[test]
    fn records_without_end_time_still_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.appointments_path(),
            r#"[{"name": "Hand edited", "start_time": "2024-05-13T11:00:00"}]"#,
        )
        .unwrap();

        let loaded = store.load_appointments().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded[0].start_time,
            NaiveDate::from_ymd_opt(2024, 5, 13)
                .unwrap()
                .and_hms_opt(11, 0, 0)
                .unwrap()
        );

        store.append_appointment(&sample()).unwrap();
        assert_eq!(store.load_appointments().unwrap().len(), 2);
    }

    #[test]
    fn append_preserves_existing_records() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let existing = r#"[
  {
    "name": "Bob",
    "start_time": "2024-05-06T10:00:00",
    "end_time": "2024-05-06T10:30:00",
    "note": "kept as is"
  }
]"#;
        fs::write(store.appointments_path(), existing).unwrap();

        store.append_appointment(&sample()).unwrap();

        let raw: Vec<Value> =
            serde_json::from_str(&fs::read_to_string(store.appointments_path()).unwrap()).unwrap();
        let before: Vec<Value> = serde_json::from_str(existing).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0], before[0]);
        assert_eq!(raw[1]["name"], "Alice");
        assert_eq!(raw[1]["start_time"], "2024-05-13T09:00:00");
        assert_eq!(raw[1]["end_time"], "2024-05-13T09:30:00");

        let loaded = store.load_appointments().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1], BookedSlot::from(&sample()));
    }
}
