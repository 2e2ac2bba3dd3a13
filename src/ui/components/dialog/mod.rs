//! Dialog components for TUI

mod base;
mod rename_dialog;

pub use base::wrap_text;
pub use rename_dialog::render_rename_dialog;
