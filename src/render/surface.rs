//! Vertrag zum Render-Substrat: positionierte Formen pro Pose.

use glam::DVec2;

/// Opaquer Griff auf eine vom Substrat verwaltete Form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeHandle(pub u64);

/// Eine an eine Pose gebundene Form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Orientiertes Rechteck für Position + Heading
    PoseMarker {
        center: DVec2,
        width: f64,
        height: f64,
        heading_deg: f64,
        pose_index: usize,
    },
    /// Kreis am Ende des Geschwindigkeitsvektors
    VelocityTip {
        center: DVec2,
        radius: f64,
        pose_index: usize,
    },
    /// Linie von der Position zum Geschwindigkeits-Griff
    VelocityLine {
        from: DVec2,
        to: DVec2,
        pose_index: usize,
    },
}

impl Shape {
    /// Index der gebundenen Pose.
    pub fn pose_index(&self) -> usize {
        match *self {
            Shape::PoseMarker { pose_index, .. }
            | Shape::VelocityTip { pose_index, .. }
            | Shape::VelocityLine { pose_index, .. } => pose_index,
        }
    }
}

/// Minimale Schnittstelle des Render-Substrats.
///
/// Drag-Ereignisse liefert das Substrat über `EditorIntent`s an den Controller.
pub trait ShapeSurface {
    /// Legt eine neue Form an.
    fn create(&mut self, shape: Shape) -> ShapeHandle;
    /// Ersetzt Geometrie und Datensatz einer bestehenden Form.
    fn update(&mut self, handle: ShapeHandle, shape: Shape);
    /// Entfernt eine Form.
    fn remove(&mut self, handle: ShapeHandle);
    /// Setzt die Aktiv-Markierung (laufender Drag).
    fn set_active(&mut self, handle: ShapeHandle, active: bool);
    /// Zeichnet die Pfad-Vorschau neu; eine leere Liste löscht sie.
    fn draw_path(&mut self, points: &[DVec2]);
}
