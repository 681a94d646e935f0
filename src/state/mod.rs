//! Application state module

mod app_state;
mod forms;
mod selectors;

pub use app_state::*;
pub use forms::*;
pub use selectors::*;
