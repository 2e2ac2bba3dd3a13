//! Application state module

mod app_state;
mod dialog;
mod forms;
mod provider;
mod toasts;

pub use app_state::*;
pub use dialog::*;
pub use forms::*;
pub use provider::*;
pub use toasts::*;
