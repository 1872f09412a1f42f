//! Terminal front end: display line, language dialog and a stdin picker.

pub mod terminal;

pub use terminal::{TerminalPicker, render_dialog, render_display};
