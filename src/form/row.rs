//! Zeilen-Datentypen und Parsing der Rohtexte.

/// Editierbares Feld einer Tabellenzeile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    X,
    Y,
    /// Heading in Grad
    Heading,
}

/// Rohtexte einer Zeile, wie sie im Formular stehen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowFields {
    pub x: String,
    pub y: String,
    pub heading_deg: String,
}

impl RowFields {
    pub fn new(x: impl Into<String>, y: impl Into<String>, heading_deg: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            heading_deg: heading_deg.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::X => &self.x,
            FormField::Y => &self.y,
            FormField::Heading => &self.heading_deg,
        }
    }

    pub fn set(&mut self, field: FormField, raw: impl Into<String>) {
        let slot = match field {
            FormField::X => &mut self.x,
            FormField::Y => &mut self.y,
            FormField::Heading => &mut self.heading_deg,
        };
        *slot = raw.into();
    }
}

/// Angezeigte Werte einer Zeile: gerundete Position und Heading in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowValues {
    pub x: f64,
    pub y: f64,
    pub heading_deg: f64,
}

impl RowValues {
    /// Formatiert die Werte als Rohtexte.
    pub fn to_fields(&self) -> RowFields {
        RowFields::new(
            format_value(self.x),
            format_value(self.y),
            format_value(self.heading_deg),
        )
    }
}

fn format_value(value: f64) -> String {
    // -0 soll als "0" erscheinen
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}

/// Parst einen Rohtext als ganze Zahl (Nachkommastellen werden gerundet).
///
/// `None` bei leerem, nicht-numerischem oder nicht-endlichem Inhalt.
pub fn parse_field(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then(|| value.round())
}
