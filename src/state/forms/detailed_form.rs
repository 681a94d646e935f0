//! Kandora / Body measurement form

use super::field::{field_value, pop_char, push_char, ErrorMap, NormalizedRecord, ValueMap};
use super::form_state::{Form, SubmitError};
use super::validation::{validate, MessageStyle};
use crate::state::{Fitting, GarmentType, RegionalStyle, ShoulderLine};
use crate::store::{DialogManager, MeasurementStore, MEASUREMENT_MODAL_ID};

/// A focusable control of the detailed form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailedControl {
    Garment,
    Fitting,
    ShoulderLine,
    NeckStyle,
    LengthStyle,
    Field(&'static str),
    Submit,
}

impl DetailedControl {
    pub fn is_selector(&self) -> bool {
        !matches!(self, Self::Field(_) | Self::Submit)
    }
}

/// State of the Kandora / Body measurement form
#[derive(Debug, Clone, Default)]
pub struct DetailedForm {
    garment: GarmentType,
    fitting: Fitting,
    neck_style: RegionalStyle,
    length_style: RegionalStyle,
    shoulder_line: ShoulderLine,
    values: ValueMap,
    errors: ErrorMap,
    active_control_index: usize,
}

impl DetailedForm {
    pub fn with_garment(garment: GarmentType) -> Self {
        Self {
            garment,
            ..Self::default()
        }
    }

    pub fn garment(&self) -> GarmentType {
        self.garment
    }

    pub fn fitting(&self) -> Fitting {
        self.fitting
    }

    pub fn neck_style(&self) -> RegionalStyle {
        self.neck_style
    }

    pub fn length_style(&self) -> RegionalStyle {
        self.length_style
    }

    pub fn shoulder_line(&self) -> ShoulderLine {
        self.shoulder_line
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

    /// Switch garment type. Values and errors of the previous field set are discarded.
    pub fn set_garment(&mut self, garment: GarmentType) {
        if garment == self.garment {
            return;
        }
        tracing::debug!(garment = garment.label(), "Switching garment type");
        self.garment = garment;
        self.values.clear();
        self.errors.clear();
        self.active_control_index = self.active_control_index.min(self.control_count() - 1);
    }

    pub fn set_fitting(&mut self, fitting: Fitting) {
        self.fitting = fitting;
    }

    pub fn set_neck_style(&mut self, style: RegionalStyle) {
        self.neck_style = style;
    }

    pub fn set_length_style(&mut self, style: RegionalStyle) {
        self.length_style = style;
    }

    pub fn set_shoulder_line(&mut self, line: ShoulderLine) {
        self.shoulder_line = line;
    }

    /// Store raw input for a field and clear its inline error
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
        self.errors.remove(name);
    }

    /// Controls in focus order. Neck and Length sit beside their style toggles.
    pub fn controls(&self) -> Vec<DetailedControl> {
        let mut controls = vec![
            DetailedControl::Garment,
            DetailedControl::Fitting,
            DetailedControl::ShoulderLine,
            DetailedControl::NeckStyle,
            DetailedControl::Field("Neck"),
            DetailedControl::LengthStyle,
            DetailedControl::Field("Length"),
        ];
        controls.extend(
            self.garment
                .fields()
                .iter()
                .filter(|f| f.name != "Neck" && f.name != "Length")
                .map(|f| DetailedControl::Field(f.name)),
        );
        controls.push(DetailedControl::Submit);
        controls
    }

    pub fn active(&self) -> DetailedControl {
        self.controls()
            .get(self.active_control_index)
            .copied()
            .unwrap_or(DetailedControl::Garment)
    }

    /// Cycle the focused selector forwards or backwards
    pub fn cycle_active(&mut self, forward: bool) {
        match self.active() {
            DetailedControl::Garment => self.set_garment(self.garment.next()),
            DetailedControl::Fitting => {
                let fitting = if forward {
                    self.fitting.next()
                } else {
                    self.fitting.prev()
                };
                self.set_fitting(fitting);
            }
            DetailedControl::ShoulderLine => {
                let line = if forward {
                    self.shoulder_line.next()
                } else {
                    self.shoulder_line.prev()
                };
                self.set_shoulder_line(line);
            }
            DetailedControl::NeckStyle => self.set_neck_style(self.neck_style.toggle()),
            DetailedControl::LengthStyle => self.set_length_style(self.length_style.toggle()),
            DetailedControl::Field(_) | DetailedControl::Submit => {}
        }
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let DetailedControl::Field(name) = self.active() {
            let value = push_char(&self.values, name, c);
            self.set_value(name, value);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let DetailedControl::Field(name) = self.active() {
            let value = pop_char(&self.values, name);
            self.set_value(name, value);
        }
    }

    /// Validate the active field set, replacing the error map
    pub fn validate(&mut self) -> bool {
        self.errors = validate(self.garment.fields(), &self.values, MessageStyle::Terse);
        self.errors.is_empty()
    }

    /// Labelled record for the current selections and field values
    pub fn build_record(&self) -> NormalizedRecord {
        let mut record = NormalizedRecord::new();
        record.insert(
            "MeasurementType".to_string(),
            self.garment.record_label().to_string(),
        );
        record.insert("Fitting".to_string(), self.fitting.label());
        record.insert("NeckType".to_string(), self.neck_style.label().to_string());
        record.insert(
            "LengthType".to_string(),
            self.length_style.label().to_string(),
        );
        record.insert("ShoulderLine".to_string(), self.shoulder_line.label());
        for def in self.garment.fields() {
            if let Some(value) = field_value(&self.values, def.name) {
                record.insert(def.name.to_string(), value.to_string());
            }
        }
        record
    }

    /// Validate, hand the record to the store and close the modal
    pub fn submit(
        &mut self,
        store: &mut dyn MeasurementStore,
        dialogs: &mut dyn DialogManager,
    ) -> Result<(), SubmitError> {
        if !self.validate() {
            return Err(SubmitError::Invalid {
                count: self.errors.len(),
            });
        }
        store.set_measurement_data(self.build_record());
        dialogs.close_dialog(MEASUREMENT_MODAL_ID);
        Ok(())
    }
}

impl Form for DetailedForm {
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
