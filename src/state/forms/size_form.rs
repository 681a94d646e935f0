//! Standard size vs custom measurement form

use super::field::{
    field_value, pop_char, push_char, ErrorMap, FieldDefinition, NormalizedRecord, ValueMap,
};
use super::form_state::{Form, SubmitError};
use super::validation::{validate, MessageStyle};
use crate::store::{DialogManager, MeasurementStore, MEASUREMENT_MODAL_ID};
use serde::{Deserialize, Serialize};

/// Standard sizes, in display order
pub const STANDARD_SIZES: [u16; 6] = [32, 34, 36, 38, 40, 42];

/// Custom measurement fields, in display order
pub const CUSTOM_FIELDS: [FieldDefinition; 12] = [
    FieldDefinition::optional("Shoulder"),
    FieldDefinition::required("Bust"),
    FieldDefinition::optional("Under Bust"),
    FieldDefinition::required("Waist"),
    FieldDefinition::optional("Small Hip"),
    FieldDefinition::required("Large Hip"),
    FieldDefinition::optional("Thigh"),
    FieldDefinition::optional("Knee"),
    FieldDefinition::optional("Calf"),
    FieldDefinition::optional("Waist to Knee"),
    FieldDefinition::required("Skirt Length"),
    FieldDefinition::optional("Hem Width"),
];

/// Store-side mirror of the size form, replaced wholesale on every update
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SizeFormSnapshot {
    pub selected_size: Option<u16>,
    pub show_custom: bool,
    #[serde(default)]
    pub values: ValueMap,
}

/// A focusable control of the size form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeControl {
    Mode,
    Size,
    Field(&'static str),
    Submit,
}

/// State of the standard size / custom measurement form
#[derive(Debug, Clone, Default)]
pub struct SizeForm {
    selected_size: Option<u16>,
    show_custom: bool,
    values: ValueMap,
    errors: ErrorMap,
    active_control_index: usize,
}

impl SizeForm {
    /// Rebuild the form from the store mirror, e.g. when the modal reopens.
    /// Only the side matching `show_custom` survives: a size in standard mode,
    /// custom values in custom mode.
    pub fn restore(snapshot: SizeFormSnapshot) -> Self {
        let SizeFormSnapshot {
            selected_size,
            show_custom,
            mut values,
        } = snapshot;
        let selected_size = if show_custom {
            None
        } else {
            values.clear();
            selected_size.filter(|size| STANDARD_SIZES.contains(size))
        };
        Self {
            selected_size,
            show_custom,
            values,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> SizeFormSnapshot {
        SizeFormSnapshot {
            selected_size: self.selected_size,
            show_custom: self.show_custom,
            values: self.values.clone(),
        }
    }

    pub fn selected_size(&self) -> Option<u16> {
        self.selected_size
    }

    pub fn show_custom(&self) -> bool {
        self.show_custom
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors
            .get(name)
            .map(String::as_str)
            .filter(|e| !e.is_empty())
    }

    fn sync(&self, store: &mut dyn MeasurementStore) {
        store.set_measurement_form_state(self.snapshot());
    }

    /// Pick a standard size. Ignored in custom mode or for sizes outside the list.
    pub fn select_size(&mut self, size: u16, store: &mut dyn MeasurementStore) -> bool {
        if self.show_custom || !STANDARD_SIZES.contains(&size) {
            return false;
        }
        self.selected_size = Some(size);
        self.sync(store);
        true
    }

    /// Switch between standard size and custom mode, discarding all input
    pub fn toggle_custom(&mut self, store: &mut dyn MeasurementStore) {
        self.show_custom = !self.show_custom;
        tracing::debug!(custom = self.show_custom, "Switching size form mode");
        self.selected_size = None;
        self.values.clear();
        self.errors.clear();
        self.active_control_index = self.active_control_index.min(self.control_count() - 1);
        self.sync(store);
    }

    /// Store raw input for a custom field and clear its inline error
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<String>,
        store: &mut dyn MeasurementStore,
    ) {
        self.values.insert(name.to_string(), value.into());
        self.errors.remove(name);
        self.sync(store);
    }

    pub fn controls(&self) -> Vec<SizeControl> {
        let mut controls = vec![SizeControl::Mode];
        if self.show_custom {
            controls.extend(CUSTOM_FIELDS.iter().map(|f| SizeControl::Field(f.name)));
        } else {
            controls.push(SizeControl::Size);
        }
        controls.push(SizeControl::Submit);
        controls
    }

    pub fn active(&self) -> SizeControl {
        self.controls()
            .get(self.active_control_index)
            .copied()
            .unwrap_or(SizeControl::Mode)
    }

    /// Cycle the focused selector: the mode toggle or the size picker
    pub fn cycle_active(&mut self, forward: bool, store: &mut dyn MeasurementStore) {
        match self.active() {
            SizeControl::Mode => self.toggle_custom(store),
            SizeControl::Size => {
                let len = STANDARD_SIZES.len();
                let next = match self
                    .selected_size
                    .and_then(|s| STANDARD_SIZES.iter().position(|v| *v == s))
                {
                    Some(pos) if forward => (pos + 1) % len,
                    Some(pos) => (pos + len - 1) % len,
                    None if forward => 0,
                    None => len - 1,
                };
                self.select_size(STANDARD_SIZES[next], store);
            }
            SizeControl::Field(_) | SizeControl::Submit => {}
        }
    }

    pub fn input_char(&mut self, c: char, store: &mut dyn MeasurementStore) {
        if let SizeControl::Field(name) = self.active() {
            let value = push_char(&self.values, name, c);
            self.set_value(name, value, store);
        }
    }

    pub fn backspace(&mut self, store: &mut dyn MeasurementStore) {
        if let SizeControl::Field(name) = self.active() {
            let value = pop_char(&self.values, name);
            self.set_value(name, value, store);
        }
    }

    /// Validate all custom fields, replacing the error map
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&CUSTOM_FIELDS, &self.values, MessageStyle::Verbose);
        self.errors.is_empty()
    }

    /// Custom fields that carry a value; empty optional fields are omitted
    fn custom_record(&self) -> NormalizedRecord {
        CUSTOM_FIELDS
            .iter()
            .filter_map(|def| {
                field_value(&self.values, def.name)
                    .map(|value| (def.name.to_string(), value.to_string()))
            })
            .collect()
    }

    /// Build the record for the active mode and hand it to the store
    pub fn submit(
        &mut self,
        store: &mut dyn MeasurementStore,
        dialogs: &mut dyn DialogManager,
    ) -> Result<(), SubmitError> {
        let record = if self.show_custom {
            if !self.validate() {
                return Err(SubmitError::Invalid {
                    count: self.errors.len(),
                });
            }
            self.custom_record()
        } else if let Some(size) = self.selected_size {
            let mut record = NormalizedRecord::new();
            record.insert("StandardSize".to_string(), size.to_string());
            record
        } else {
            return Err(SubmitError::NoMeasurement);
        };

        store.set_measurement_data(record);
        dialogs.close_dialog(MEASUREMENT_MODAL_ID);
        Ok(())
    }
}

impl Form for SizeForm {
    fn control_count(&self) -> usize {
        self.controls().len()
    }
    fn active_control(&self) -> usize {
        self.active_control_index
    }
    fn set_active_control(&mut self, index: usize) {
        self.active_control_index = index.min(self.control_count() - 1);
    }
}
