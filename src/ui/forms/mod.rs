//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field and selector rendering utilities
//! - `detailed_form`: Kandora / Body measurement form
//! - `size_form`: Standard size / custom measurement form

mod detailed_form;
mod field_renderer;
mod size_form;

pub use detailed_form::{detailed_form_height, draw_detailed_form};
pub use size_form::{draw_size_form, size_form_height};
