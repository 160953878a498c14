//! Freihand-Erfassung für Linien- und Polygon-Layer.
//! Core-Funktionalität als Library exportiert für Host-Integration und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AbandonReason, AppCommand, AppController, AppIntent, AppState, CaptureKey, CaptureOutcome,
    FeatureHost, FreehandTool, PointerSample, ValidityPrompt,
};
pub use core::{
    AttributeValue, BuiltinCrsRegistry, CaptureError, Crs, CrsRegistry, FeatureDraft,
    GeometryDefect, GeometryKind, LayerInfo, RawGeometry, ValidatedGeometry,
};
pub use shared::FreehandOptions;
