//! Reusable UI components

mod button;
mod prompt;

pub use button::{render_button, BUTTON_HEIGHT};
pub use prompt::{centered_area, render_prompt_dialog};
