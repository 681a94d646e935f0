//! Trait abstraction for the collaborators a form hands its results to

use crate::state::{NormalizedRecord, SizeFormSnapshot};

/// Process-wide state container that receives finished measurements
#[cfg_attr(test, mockall::automock)]
pub trait MeasurementStore {
    /// Take ownership of a finished measurement record
    fn set_measurement_data(&mut self, record: NormalizedRecord);

    /// Read the mirrored size form state
    fn measurement_form_state(&self) -> SizeFormSnapshot;

    /// Replace the mirrored size form state wholesale
    fn set_measurement_form_state(&mut self, state: SizeFormSnapshot);
}

/// Closes modal dialogs by identifier
#[cfg_attr(test, mockall::automock)]
pub trait DialogManager {
    fn close_dialog(&mut self, id: &str);
}
