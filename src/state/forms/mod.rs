//! Form domain layer
//!
//! Field definitions, validation and the two measurement forms:
//! - `detailed_form`: Kandora / Body measurements with fitting options
//! - `size_form`: standard size or custom measurements

mod detailed_form;
mod field;
mod form_state;
mod size_form;
mod validation;

pub use detailed_form::{DetailedControl, DetailedForm};
pub use field::{title_case, FieldDefinition, NormalizedRecord};
pub use form_state::{Form, FormVariant, SubmitError};
pub use size_form::{SizeControl, SizeForm, SizeFormSnapshot, CUSTOM_FIELDS, STANDARD_SIZES};
