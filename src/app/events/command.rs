use crate::app::drag::DragKind;
use crate::core::Pose;
use crate::form::FormField;
use crate::shared::PreviewParams;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Drag auf einer bestehenden Pose starten
    BeginDrag { kind: DragKind, pose_index: usize },
    /// Neue Pose (Pixel) in beide Stores einfügen und Hintergrund-Drag starten
    BeginBackgroundDrag { pose: Pose },
    /// Zeigerbewegung des laufenden Drags verarbeiten
    DragPose {
        kind: DragKind,
        pointer: DVec2,
        delta: DVec2,
    },
    /// Drag abschliessen und in die Tabelle übernehmen
    EndDrag { kind: DragKind, pointer: Option<DVec2> },

    /// Einzelfeld-Eingabe übernehmen
    ApplyFieldEdit { row: usize, field: FormField },
    /// Zeile und Pose in beiden Stores löschen
    DeleteRow { row: usize },
    /// Tabelle aus den Zeilen neu aufbauen
    RefreshFromRows,
    /// Ursprung setzen (Zoll)
    SetOrigin { position: DVec2 },
    /// Alle Posen ausser dem Ursprung entfernen
    ResetPoses,
    /// Kruemmungs-Offsets zurücksetzen
    ResetCurvature,

    /// Vorschau neu zeichnen
    RenderPreview,
    /// Vorschau-Parameter setzen
    SetPreviewParams { params: PreviewParams },
    /// Optimierung synchron ausführen
    OptimizePath,
    /// Offsets einer Optimierung übernehmen (verworfen, falls veraltet)
    ApplyOptimizationResult { revision: u64, offsets: Vec<f64> },
}
