//! Freihand-Werkzeug: sammelt eine kontinuierliche Zeigerspur als Vertex-Folge
//! und versiegelt sie beim Loslassen in eine Linie oder ein Polygon.
//!
//! Zustände: `Idle → Capturing → (Finished | Abandoned) → Idle`.

mod lifecycle;
mod state;

pub use state::{CapturePhase, FreehandTool};
