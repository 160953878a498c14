//! Geteilte Konfiguration für Kern und App-Schicht.

pub mod options;

pub use options::FreehandOptions;
pub use options::{EDIT_COMMAND_LABEL, MIN_PIXEL_DISTANCE, TOLERANCE_MAX, TOLERANCE_MIN};
