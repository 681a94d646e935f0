//! Configuration handling for the TUI

use crate::state::{FormVariant, GarmentType};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the form shown at startup
const VARIANT_ENV: &str = "MEASUREMENT_TUI_VARIANT";

/// Unit shown in field placeholders when none is configured
const DEFAULT_UNIT_LABEL: &str = "CM";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MeasurementConfig {
    /// Form shown when the modal first opens
    pub default_variant: Option<FormVariant>,
    /// Garment preselected in the detailed form
    pub default_garment: Option<GarmentType>,
    /// Unit shown in field placeholders
    pub unit_label: Option<String>,
}

impl MeasurementConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "measurement", "measurement-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: MeasurementConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Startup form, honouring the environment override
    pub fn variant(&self) -> FormVariant {
        Self::resolve_variant(std::env::var(VARIANT_ENV).ok().as_deref(), self.default_variant)
    }

    fn resolve_variant(env: Option<&str>, configured: Option<FormVariant>) -> FormVariant {
        env.and_then(FormVariant::from_code)
            .or(configured)
            .unwrap_or_default()
    }

    pub fn garment(&self) -> GarmentType {
        self.default_garment.unwrap_or_default()
    }

    pub fn unit_label(&self) -> &str {
        self.unit_label.as_deref().unwrap_or(DEFAULT_UNIT_LABEL)
    }
}
