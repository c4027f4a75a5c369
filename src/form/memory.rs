//! Formular im Speicher: Referenz-Implementierung von `FormSurface`.

use super::{FormField, FormSurface, RowFields, RowValues};

/// Zeilenliste im Speicher, beginnt mit einer leeren Vorlagen-Zeile.
#[derive(Debug, Clone)]
pub struct MemoryForm {
    rows: Vec<RowFields>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self {
            rows: vec![RowFields::default()],
        }
    }

    pub fn rows(&self) -> &[RowFields] {
        &self.rows
    }

    /// Simuliert eine Benutzereingabe in ein Feld.
    pub fn type_into(&mut self, index: usize, field: FormField, raw: &str) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.set(field, raw);
                true
            }
            None => false,
        }
    }
}

impl Default for MemoryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSurface for MemoryForm {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn add_row(&mut self) {
        let template = self.rows.first().cloned().unwrap_or_default();
        self.rows.push(template);
    }

    fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        } else {
            log::warn!("Zeile {} existiert nicht ({} Zeilen)", index, self.rows.len());
        }
    }

    fn read_row(&self, index: usize) -> Option<RowFields> {
        self.rows.get(index).cloned()
    }

    fn write_row(&mut self, index: usize, values: &RowValues) {
        match self.rows.get_mut(index) {
            Some(row) => *row = values.to_fields(),
            None => log::warn!("Schreiben in fehlende Zeile {}", index),
        }
    }
}
