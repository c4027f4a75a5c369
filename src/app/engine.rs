//! Schnittstelle zur externen Pfad-Engine (Vorschau und Optimierung).

use crate::core::{EditorError, EditorResult, WaypointDescriptor};
use crate::shared::{OptimizeParams, PreviewParams};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ein Abtastpunkt der Vorschau. Gezeichnet wird nur `position`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PathPoint {
    pub position: DVec2,
    pub velocity: DVec2,
    pub acceleration: DVec2,
    pub jerk: DVec2,
}

/// Externe Pfad-Engine. Die Mathematik dahinter liegt ausserhalb dieser Crate.
pub trait PathEngine {
    /// Erzeugt Abtastpunkte für die Live-Vorschau.
    fn generate_preview(
        &mut self,
        waypoints: &[WaypointDescriptor],
        params: &PreviewParams,
    ) -> Vec<PathPoint>;

    /// Optimiert die Kruemmungs-Offsets.
    ///
    /// Liefert flache Paare `[ddx, ddy, ...]` für die Posen ab Index 1.
    fn optimize(&mut self, waypoints: &[WaypointDescriptor], params: &OptimizeParams) -> Vec<f64>;
}

/// Versionierte Optimierungs-Anfrage. Das Ergebnis gehört zu `revision`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub revision: u64,
    pub waypoints: Vec<WaypointDescriptor>,
    pub params: OptimizeParams,
}

impl OptimizationRequest {
    /// Serialisiert die Anfrage für Engines hinter einer FFI-/wasm-Grenze.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Prüft ein Offset-Array gegen die Anzahl der Posen (inkl. Ursprung).
///
/// Erlaubt sind gerade Längen bis `2·(N−1)`.
pub fn validate_offsets(offsets: &[f64], pose_count: usize) -> EditorResult<()> {
    let capacity = 2 * pose_count.saturating_sub(1);
    if offsets.len() % 2 != 0 || offsets.len() > capacity {
        return Err(EditorError::InvalidOffsets {
            len: offsets.len(),
            poses: pose_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_must_be_pairs_within_capacity() {
        assert!(validate_offsets(&[1.0, 2.0, 3.0, 4.0], 3).is_ok());
        assert!(validate_offsets(&[1.0, 2.0], 4).is_ok());
        assert!(validate_offsets(&[], 1).is_ok());
        assert_eq!(
            validate_offsets(&[1.0, 2.0, 3.0], 4),
            Err(EditorError::InvalidOffsets { len: 3, poses: 4 })
        );
        assert!(validate_offsets(&[1.0, 2.0], 1).is_err());
    }

    #[test]
    fn request_serializes_with_revision() {
        let request = OptimizationRequest {
            revision: 7,
            waypoints: vec![WaypointDescriptor {
                point: DVec2::new(1.0, 2.0),
                tangent: DVec2::X,
                curvature: DVec2::ZERO,
            }],
            params: OptimizeParams::default(),
        };
        let json = request.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["revision"], 7);
        assert_eq!(value["waypoints"].as_array().map(Vec::len), Some(1));

        let back: OptimizationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
