//! Drag-Zustandsmaschine der Canvas (`start → drag* → end`).

use glam::DVec2;

/// Art des laufenden Drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Positions-Marker einer Pose wird verschoben
    Position,
    /// Geschwindigkeits-Griff einer Pose wird gedreht
    Velocity,
    /// Drag auf freier Feldfläche: legt beim Start eine neue Pose an
    Background,
}

/// Zustand eines aktiven Drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub kind: DragKind,
    /// Index der gegriffenen (bzw. neu erzeugten) Pose
    pub pose_index: usize,
    /// Anzahl verarbeiteter (nicht-leerer) Drag-Events
    pub moves: u32,
}

impl ActiveDrag {
    pub fn new(kind: DragKind, pose_index: usize) -> Self {
        Self {
            kind,
            pose_index,
            moves: 0,
        }
    }
}

/// Leere Drag-Events (Delta 0) werden ignoriert.
pub fn is_zero_delta(delta: DVec2) -> bool {
    delta.x == 0.0 && delta.y == 0.0
}

/// Punkt im Abstand `length` von `origin` entlang `heading` (Radiant).
pub fn project_along_heading(origin: DVec2, heading: f64, length: f64) -> DVec2 {
    origin + DVec2::new(heading.cos(), heading.sin()) * length
}

/// Heading vom Ursprung zum Zeiger.
pub fn heading_towards(origin: DVec2, pointer: DVec2) -> f64 {
    let d = pointer - origin;
    d.y.atan2(d.x)
}
