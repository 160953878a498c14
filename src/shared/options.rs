//! Zentrale Konfiguration der Freihand-Erfassung.
//!
//! `FreehandOptions` enthält alle persistenten, zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Toleranz ────────────────────────────────────────────────────────

/// Standard-Toleranz (keine Vereinfachung).
pub const TOLERANCE_DEFAULT: f64 = 0.0;
/// Minimal einstellbare Toleranz.
pub const TOLERANCE_MIN: f64 = 0.0;
/// Maximal einstellbare Toleranz.
pub const TOLERANCE_MAX: f64 = 5.0;
/// Schrittweite des Toleranz-Eingabefelds.
pub const TOLERANCE_STEP: f64 = 0.1;
/// Angezeigte/gespeicherte Nachkommastellen der Toleranz.
pub const TOLERANCE_DECIMALS: u32 = 3;

// ── Erfassung ───────────────────────────────────────────────────────

/// Mindestabstand in Screen-Pixeln zwischen zwei aufgezeichneten Vertices.
pub const MIN_PIXEL_DISTANCE: f32 = 2.0;
/// Beschriftung der Edit-Transaktion beim Hinzufügen eines Features.
pub const EDIT_COMMAND_LABEL: &str = "Feature added";
/// Dateiname der Optionen-Datei.
pub const CONFIG_FILE_NAME: &str = "freehand_edit.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle persistenten Optionen der Freihand-Erfassung.
/// Wird als `freehand_edit.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FreehandOptions {
    /// Vereinfachungs-Toleranz in Einheiten des Speicher-CRS
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Attribut-Dialog nach dem Erfassen überspringen
    #[serde(default)]
    pub skip_attribute_dialog: bool,
    /// Mindestabstand (Screen-Pixel) zwischen aufgezeichneten Vertices
    #[serde(default = "default_min_pixel_distance")]
    pub min_pixel_distance: f32,
}

impl Default for FreehandOptions {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE_DEFAULT,
            skip_attribute_dialog: false,
            min_pixel_distance: MIN_PIXEL_DISTANCE,
        }
    }
}

/// Serde-Default für `tolerance` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_tolerance() -> f64 {
    TOLERANCE_DEFAULT
}

/// Serde-Default für `min_pixel_distance`.
fn default_min_pixel_distance() -> f32 {
    MIN_PIXEL_DISTANCE
}

/// Klemmt eine Toleranz in den gültigen Bereich und rundet auf die Anzeige-Genauigkeit.
///
/// Nicht-endliche Werte fallen auf den Standardwert zurück.
pub fn normalize_tolerance(value: f64) -> f64 {
    if !value.is_finite() {
        return TOLERANCE_DEFAULT;
    }
    let scale = 10f64.powi(TOLERANCE_DECIMALS as i32);
    (value.clamp(TOLERANCE_MIN, TOLERANCE_MAX) * scale).round() / scale
}

impl FreehandOptions {
    /// Setzt die Toleranz (geklemmt und gerundet). Gibt `true` bei Änderung zurück.
    pub fn set_tolerance(&mut self, value: f64) -> bool {
        let normalized = normalize_tolerance(value);
        if normalized == self.tolerance {
            return false;
        }
        self.tolerance = normalized;
        true
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(mut opts) => {
                    opts.tolerance = normalize_tolerance(opts.tolerance);
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Lädt Optionen; existiert die Datei noch nicht, werden die Standardwerte angelegt.
    pub fn load_or_init(path: &std::path::Path) -> Self {
        if path.exists() {
            return Self::load_from_file(path);
        }
        let opts = Self::default();
        if let Err(e) = opts.save_to_file(path) {
            log::warn!("Standard-Optionen konnten nicht angelegt werden: {:#}", e);
        }
        opts
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad der Optionen-Datei im Verzeichnis des laufenden Programms.
    ///
    /// Ist das Programmverzeichnis nicht ermittelbar, relativ zum Arbeitsverzeichnis.
    pub fn config_path() -> std::path::PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(std::path::Path::to_path_buf))
            .unwrap_or_default();
        dir.join(CONFIG_FILE_NAME)
    }
}
