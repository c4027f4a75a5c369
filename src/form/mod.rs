//! Tabellen-Substrat: eine Formularzeile pro Pose.

mod memory;
mod row;

pub use memory::MemoryForm;
pub use row::{parse_field, FormField, RowFields, RowValues};

/// Minimale Schnittstelle des Tabellen-Substrats.
///
/// Zeilen werden über ihre Position adressiert; Zeile 0 dient als Vorlage
/// für neue Zeilen.
pub trait FormSurface {
    /// Anzahl der Zeilen.
    fn row_count(&self) -> usize;
    /// Hängt eine Zeile an (Klon der Vorlage).
    fn add_row(&mut self);
    /// Entfernt die Zeile an `index`.
    fn remove_row(&mut self, index: usize);
    /// Liest die Rohtexte einer Zeile.
    fn read_row(&self, index: usize) -> Option<RowFields>;
    /// Schreibt die angezeigten Werte einer Zeile.
    fn write_row(&mut self, index: usize, values: &RowValues);
}
