//! Application State: zentrale Datenhaltung der Freihand-Erfassung.

use super::tools::FreehandTool;
use super::use_cases::capture::CaptureOutcome;
use super::CommandLog;
use crate::core::{BuiltinCrsRegistry, Crs, CrsRegistry, LayerInfo};
use crate::shared::FreehandOptions;
use std::path::PathBuf;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktueller Ziel-Layer (None = kein Layer gewählt)
    pub layer: Option<LayerInfo>,
    /// CRS der Kartenansicht, in dem Zeigerpositionen gemeldet werden
    pub canvas_crs: Crs,
    /// Persistierte Einstellungen
    pub options: FreehandOptions,
    /// Pfad der Einstellungsdatei (None = nicht persistieren)
    pub settings_path: Option<PathBuf>,
    /// Freihand-Werkzeug
    pub tool: FreehandTool,
    /// Ob das Freihand-Werkzeug das aktive Karten-Werkzeug ist
    pub tool_active: bool,
    /// Projektions-Registry des Hosts
    pub crs_registry: Box<dyn CrsRegistry>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Ergebnis des letzten Erfassungsversuchs
    pub last_outcome: Option<CaptureOutcome>,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen und eingebauter Registry
    pub fn new() -> Self {
        Self::with_options(FreehandOptions::default(), None)
    }

    /// Erstellt einen App-State mit geladenen Optionen.
    ///
    /// Ist `settings_path` gesetzt, werden Änderungen sofort dorthin geschrieben.
    pub fn with_options(options: FreehandOptions, settings_path: Option<PathBuf>) -> Self {
        let mut tool = FreehandTool::new();
        tool.set_min_pixel_distance(options.min_pixel_distance);
        Self {
            layer: None,
            canvas_crs: Crs::WEB_MERCATOR,
            options,
            settings_path,
            tool,
            tool_active: false,
            crs_registry: Box::new(BuiltinCrsRegistry),
            command_log: CommandLog::new(),
            last_outcome: None,
        }
    }

    /// Ersetzt die Projektions-Registry (z.B. durch die CRS-Datenbank des Hosts).
    pub fn set_crs_registry(&mut self, registry: Box<dyn CrsRegistry>) {
        self.crs_registry = registry;
    }

    /// Ob die Freihand-Aktion aktiviert sein darf.
    pub fn can_start_capture(&self) -> bool {
        crate::core::can_start_capture(self.layer.as_ref())
    }

    /// Ob das Toleranz-Eingabefeld aktiviert sein darf.
    pub fn tolerance_editable(&self) -> bool {
        crate::core::tolerance_editable(self.layer.as_ref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
