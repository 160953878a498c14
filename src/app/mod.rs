//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod host;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Erfassung (Layer, Werkzeug, Optionen).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use host::{FeatureHost, ValidityPrompt};
pub use state::AppState;
pub use tools::{AbandonReason, CaptureAction, CaptureKey, CapturePhase, FreehandTool, PointerSample};
pub use use_cases::capture::CaptureOutcome;
