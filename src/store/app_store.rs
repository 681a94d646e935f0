//! In-process store holding the last submitted measurements

use super::traits::MeasurementStore;
use crate::state::{NormalizedRecord, SizeFormSnapshot};
use chrono::{DateTime, Local};
use serde::Serialize;

/// A record together with the moment it was handed over
#[derive(Debug, Clone, Serialize)]
pub struct StoredRecord {
    pub captured_at: DateTime<Local>,
    pub measurements: NormalizedRecord,
}

/// Store backing the running application
#[derive(Debug, Clone, Default)]
pub struct AppStore {
    record: Option<StoredRecord>,
    form_state: SizeFormSnapshot,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently submitted record, if any
    pub fn record(&self) -> Option<&StoredRecord> {
        self.record.as_ref()
    }

    /// Consume the store, yielding the last record
    pub fn into_record(self) -> Option<StoredRecord> {
        self.record
    }
}

impl MeasurementStore for AppStore {
    fn set_measurement_data(&mut self, record: NormalizedRecord) {
        tracing::info!(fields = record.len(), "Measurement data stored");
        self.record = Some(StoredRecord {
            captured_at: Local::now(),
            measurements: record,
        });
    }

    fn measurement_form_state(&self) -> SizeFormSnapshot {
        self.form_state.clone()
    }

    fn set_measurement_form_state(&mut self, state: SizeFormSnapshot) {
        self.form_state = state;
    }
}
