use crate::form::FormField;
use crate::shared::PreviewParams;
use glam::DVec2;

/// Editor-Intents.
/// Intents sind Eingaben aus den Substraten (Canvas, Formular, Host) ohne Mutationslogik.
/// Zeiger-Koordinaten sind Pixel, Positionen aus dem Formular sind Zoll.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    /// Positions-Marker einer Pose gegriffen
    PositionDragStarted { pose_index: usize },
    /// Positions-Marker bewegt
    PositionDragged { pointer: DVec2, delta: DVec2 },
    /// Positions-Marker losgelassen
    PositionDragEnded,

    /// Geschwindigkeits-Griff einer Pose gegriffen
    VelocityDragStarted { pose_index: usize },
    /// Geschwindigkeits-Griff bewegt
    VelocityDragged { pointer: DVec2, delta: DVec2 },
    /// Geschwindigkeits-Griff losgelassen
    VelocityDragEnded,

    /// Drag auf freier Feldfläche begonnen (legt eine neue Pose an)
    BackgroundDragStarted { pointer: DVec2 },
    /// Zeiger während des Hintergrund-Drags bewegt
    BackgroundDragged { pointer: DVec2, delta: DVec2 },
    /// Hintergrund-Drag beendet
    BackgroundDragEnded { pointer: DVec2 },

    /// Ein Feld einer Tabellenzeile wurde geändert
    RowFieldEdited { row: usize, field: FormField },
    /// Löschen einer Tabellenzeile angefordert
    RowDeleteRequested { row: usize },
    /// Alle Posen aus den Tabellenzeilen neu aufbauen
    TableRefreshRequested,
    /// Ursprung auf eine Position (Zoll) setzen
    OriginSetRequested { position: DVec2 },
    /// Alle Posen ausser dem Ursprung entfernen
    ResetRequested,
    /// Alle Kruemmungs-Offsets auf 0 setzen
    ResetCurvatureRequested,

    /// Vorschau neu zeichnen
    PreviewRequested,
    /// Vorschau-Parametersatz wechseln
    PreviewParamsSelected { params: PreviewParams },
    /// Synchrone Optimierung anstossen
    OptimizeRequested,
    /// Ergebnis einer (asynchronen) Optimierung ist eingetroffen
    OptimizationResultReceived { revision: u64, offsets: Vec<f64> },
}
