//! Focus handling shared by the measurement forms, and submit outcomes

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trait for common form operations
pub trait Form {
    fn control_count(&self) -> usize;
    fn active_control(&self) -> usize;
    fn set_active_control(&mut self, index: usize);
    fn next_control(&mut self) {
        let count = self.control_count();
        let current = self.active_control();
        self.set_active_control((current + 1) % count);
    }
    fn prev_control(&mut self) {
        let count = self.control_count();
        let current = self.active_control();
        if current == 0 {
            self.set_active_control(count - 1);
        } else {
            self.set_active_control(current - 1);
        }
    }
}

/// Why a submit did not produce a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{count} field(s) need attention")]
    Invalid { count: usize },
    #[error("Please select a standard size or enter custom measurements")]
    NoMeasurement,
}

/// Which measurement form the modal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    #[default]
    Detailed,
    Size,
}

impl FormVariant {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Detailed => Self::Size,
            Self::Size => Self::Detailed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Detailed => "Kandora / Body",
            Self::Size => "Size / Custom",
        }
    }

    /// Parse a config or environment value ("detailed" / "size")
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "detailed" => Some(Self::Detailed),
            "size" => Some(Self::Size),
            _ => None,
        }
    }
}
