//! Zentrale Konfiguration für den Wegpunkt-Editor.
//!
//! `EditorOptions` bündelt Feld-Geometrie, Glyph-Maße und Engine-Parameter.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{FieldGeometry, Pose};
use serde::{Deserialize, Serialize};

// ── Feld ────────────────────────────────────────────────────────────

/// Standard-Ursprungs-Pose in Pixeln `[x, y, dx, dy, ddx, ddy]`.
pub const DEFAULT_ORIGIN_PX: [f64; 6] = [509.0, 230.0, -35.0, 0.0, 0.0, 0.0];
/// Betrag der Standard-Geschwindigkeit, wenn nur ein Heading bekannt ist.
pub const HEADING_WEIGHT: f64 = 35.0;

// ── Glyphen ─────────────────────────────────────────────────────────

/// Roboter-Länge des Pose-Rechtecks in Pixeln.
pub const ROBOT_LENGTH_PX: f64 = 34.0;
/// Roboter-Breite des Pose-Rechtecks in Pixeln.
pub const ROBOT_WIDTH_PX: f64 = 30.0;
/// Radius des Geschwindigkeits-Griffs in Pixeln.
pub const VELOCITY_TIP_RADIUS_PX: f64 = 5.0;

// ── Engine ──────────────────────────────────────────────────────────

/// Parametersatz für die schnelle Pfad-Vorschau.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewParams {
    /// Abtastung nach maximalen Schritten in x, y und Zeit
    Cheesy { max_dx: f64, max_dy: f64, max_dt: f64 },
    /// Abtastung nach Bogenlänge und Kruemmungsänderung
    Jaci { max_ds: f64, max_dc: f64 },
}

impl PreviewParams {
    /// Grobe Cheesy-Abtastung (Standard für Live-Vorschau).
    pub const SPARSE_CHEESY: Self = Self::Cheesy {
        max_dx: 2.0,
        max_dy: 1.0,
        max_dt: 1.0,
    };
    /// Feine Cheesy-Abtastung.
    pub const FINE_CHEESY: Self = Self::Cheesy {
        max_dx: 1.0,
        max_dy: 1.0,
        max_dt: 1.0,
    };
    /// Jaci-Abtastung.
    pub const JACI: Self = Self::Jaci {
        max_ds: 0.1,
        max_dc: 0.01,
    };
}

impl Default for PreviewParams {
    fn default() -> Self {
        Self::SPARSE_CHEESY
    }
}

/// Parametersatz für die Offset-Optimierung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizeParams {
    /// Schrittweite der numerischen Ableitung
    pub eps: f64,
    /// Stützstellen pro Segment für das Kosten-Integral
    pub samples: u64,
    /// Maximale Iterationen
    pub max_iters: u64,
    /// Abbruch, sobald die Kosten darunter fallen
    pub target_cost: f64,
}

impl Default for OptimizeParams {
    fn default() -> Self {
        Self {
            eps: 1e-4,
            samples: 10,
            max_iters: 10,
            target_cost: 0.0,
        }
    }
}

/// Maße der Canvas-Glyphen einer Pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphStyle {
    /// Länge des Pose-Rechtecks (entlang des Headings)
    pub robot_length: f64,
    /// Breite des Pose-Rechtecks
    pub robot_width: f64,
    /// Radius des Geschwindigkeits-Griffs
    pub tip_radius: f64,
    /// Feste Anzeigelänge des Geschwindigkeitsvektors beim Drag
    pub velocity_display_length: f64,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            robot_length: ROBOT_LENGTH_PX,
            robot_width: ROBOT_WIDTH_PX,
            tip_radius: VELOCITY_TIP_RADIUS_PX,
            velocity_display_length: HEADING_WEIGHT,
        }
    }
}

// ── Optionen (serialisierbar) ──────────────────────────────────────

/// Alle Editor-Optionen; werden beim Start einmal geladen.
/// Wird als `wayfinder_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Pixel-Box und physikalische Ausdehnung des Feldes
    #[serde(default)]
    pub field: FieldGeometry,
    /// Glyph-Maße auf dem Canvas
    #[serde(default)]
    pub glyphs: GlyphStyle,
    /// Geschwindigkeits-Betrag für reine Heading-Eingaben (Tabelle, neue Posen)
    #[serde(default = "default_heading_weight")]
    pub heading_weight: f64,
    /// Ursprungs-Pose in Pixeln
    #[serde(default = "default_origin_px")]
    pub origin_px: [f64; 6],
    /// Parameter der Live-Vorschau
    #[serde(default)]
    pub preview: PreviewParams,
    /// Parameter der Optimierung
    #[serde(default)]
    pub optimize: OptimizeParams,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            field: FieldGeometry::default(),
            glyphs: GlyphStyle::default(),
            heading_weight: HEADING_WEIGHT,
            origin_px: DEFAULT_ORIGIN_PX,
            preview: PreviewParams::default(),
            optimize: OptimizeParams::default(),
        }
    }
}

/// Serde-Default für `heading_weight`.
fn default_heading_weight() -> f64 {
    HEADING_WEIGHT
}

/// Serde-Default für `origin_px`.
fn default_origin_px() -> [f64; 6] {
    DEFAULT_ORIGIN_PX
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
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

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ursprungs-Pose im Pixel-Raum.
    pub fn origin_pose_px(&self) -> Pose {
        Pose::from_array(self.origin_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_field_constants() {
        let opts = EditorOptions::default();
        assert_eq!(opts.field.field_box, [144.0, 20.0, 854.0, 384.0]);
        assert_eq!(opts.heading_weight, 35.0);
        assert_eq!(opts.glyphs.velocity_display_length, 35.0);
        assert_eq!(opts.origin_pose_px().to_array(), DEFAULT_ORIGIN_PX);
    }

    #[test]
    fn toml_round_trip() {
        let mut opts = EditorOptions::default();
        opts.preview = PreviewParams::JACI;
        opts.optimize.max_iters = 25;

        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let back: EditorOptions = toml::from_str(&text).expect("deserialisierbar");
        assert_eq!(back, opts);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let text = r#"
heading_weight = 20.0

[preview]
kind = "cheesy"
max_dx = 1.0
max_dy = 1.0
max_dt = 1.0
"#;
        let opts: EditorOptions = toml::from_str(text).expect("teilweise Datei gültig");
        assert_eq!(opts.heading_weight, 20.0);
        assert_eq!(opts.preview, PreviewParams::FINE_CHEESY);
        assert_eq!(opts.field, FieldGeometry::default());
        assert_eq!(opts.optimize, OptimizeParams::default());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("wayfinder_editor_does_not_exist.toml");
        let opts = EditorOptions::load_from_file(&path);
        assert_eq!(opts, EditorOptions::default());
    }

    #[test]
    fn save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "wayfinder_editor_options_{}.toml",
            std::process::id()
        ));
        let mut opts = EditorOptions::default();
        opts.glyphs.tip_radius = 8.0;
        opts.save_to_file(&path).expect("schreibbar");

        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }
}
