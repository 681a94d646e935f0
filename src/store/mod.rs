//! Application store and dialog management

mod app_store;
mod dialogs;
mod traits;

pub use app_store::{AppStore, StoredRecord};
pub use dialogs::DialogStack;
pub use traits::{DialogManager, MeasurementStore};

#[cfg(test)]
pub use traits::{MockDialogManager, MockMeasurementStore};

/// Identifier of the measurement modal
pub const MEASUREMENT_MODAL_ID: &str = "measurement-modal";
