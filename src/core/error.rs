//! Domänen-Fehler des Editor-Kerns.

/// Ergebnis-Typ für Store-, Sync- und Ableitungs-Operationen.
pub type EditorResult<T> = Result<T, EditorError>;

/// Fehler, die der Kern an Aufrufer signalisiert.
///
/// `IndexOutOfRange` und `StoreDesync` bedeuten, dass Tabelle und Canvas
/// auseinandergelaufen sind. Bei korrekter Nutzung tritt das nicht auf.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Index {index} ausserhalb des Bereichs (Laenge {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Stores desynchronisiert: Tabelle hat {table} Posen, Canvas hat {canvas}")]
    StoreDesync { table: usize, canvas: usize },

    #[error("Die Ursprungs-Pose (Index 0) kann nicht entfernt werden")]
    OriginNotRemovable,

    #[error("Mindestens 2 Posen noetig, vorhanden: {len}")]
    TooFewPoses { len: usize },

    #[error("Pose {index} hat keine Geschwindigkeit, Tangente nicht skalierbar")]
    DegenerateTangent { index: usize },

    #[error("Es laeuft bereits ein Drag auf Pose {pose_index}")]
    DragInProgress { pose_index: usize },

    #[error("Kein passender Drag aktiv")]
    NoActiveDrag,

    #[error("Ungueltige Offsets: {len} Werte fuer {poses} Posen")]
    InvalidOffsets { len: usize, poses: usize },
}

impl EditorError {
    /// Kurzform für einen Bereichsfehler.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// `true` für Fehler, die auf eine Desynchronisation der Stores hinweisen.
    pub fn is_desync(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::StoreDesync { .. }
        )
    }
}
