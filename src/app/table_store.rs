//! Table-Store: autoritative Pose-Liste in Zoll, gebunden an das Formular.

use crate::core::{EditorResult, Pose, PoseList};
use crate::form::{parse_field, FormField, FormSurface, RowFields, RowValues};
use glam::DVec2;

/// Posen in physikalischen Einheiten plus die zugehörigen Formularzeilen.
///
/// Zeile `i` zeigt immer Pose `i`. Index 0 ist die Ursprungs-Pose.
pub struct TableStore<F: FormSurface> {
    poses: PoseList,
    form: F,
    heading_weight: f64,
}

impl<F: FormSurface> TableStore<F> {
    /// Erstellt den Store mit der Ursprungs-Pose und gleicht das Formular auf eine Zeile ab.
    pub fn new(mut form: F, origin: Pose, heading_weight: f64) -> Self {
        if form.row_count() == 0 {
            form.add_row();
        }
        while form.row_count() > 1 {
            form.remove_row(form.row_count() - 1);
        }
        let mut store = Self {
            poses: PoseList::with_origin(origin),
            form,
            heading_weight,
        };
        store.write_row(0);
        store
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn poses(&self) -> &[Pose] {
        self.poses.as_slice()
    }

    pub fn pose(&self, index: usize) -> EditorResult<&Pose> {
        self.poses.get(index)
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Zugriff für Substrat-Callbacks, die Eingaben ins Formular schreiben.
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Strukturelles Einfügen am Ende: neue Zeile + neue Pose.
    pub fn add_pose(&mut self, pose: Pose) -> usize {
        self.form.add_row();
        let index = self.poses.push(pose);
        self.write_row(index);
        log::info!("Tabelle: Pose {} angelegt", index);
        index
    }

    /// Entfernt Zeile und Pose an `index`; Nachfolger rücken auf.
    pub fn delete_row(&mut self, index: usize) -> EditorResult<Pose> {
        let removed = self.poses.remove(index)?;
        self.form.remove_row(index);
        log::info!("Tabelle: Pose {} entfernt, {} verbleiben", index, self.len());
        Ok(removed)
    }

    /// Entfernt alle Posen ausser dem Ursprung.
    pub fn reset(&mut self) -> usize {
        let removed = self.poses.truncate_to_origin();
        for _ in 0..removed {
            self.form.remove_row(1);
        }
        removed
    }

    /// Übernimmt eine Pose aus der Canvas (bereits in Zoll) und aktualisiert die Zeile.
    pub fn apply_external_update(&mut self, index: usize, pose: Pose) -> EditorResult<()> {
        self.poses.set(index, pose)?;
        self.write_row(index);
        Ok(())
    }

    /// Übernimmt eine Einzelfeld-Eingabe aus der Zeile `index`.
    ///
    /// Ungültige Eingaben behalten den bisherigen Wert; die Zeile wird dann
    /// auf den gültigen Wert zurückgeschrieben. Gibt `true` zurück, wenn sich
    /// die Pose geändert hat.
    pub fn edit_field(&mut self, index: usize, field: FormField) -> EditorResult<bool> {
        let heading_weight = self.heading_weight;
        let raw = self
            .form
            .read_row(index)
            .map(|row| row.get(field).to_string())
            .unwrap_or_default();
        self.poses.get(index)?;

        let Some(value) = parse_field(&raw) else {
            log::warn!(
                "Ungültige Eingabe {:?} in Zeile {} ({:?}), alter Wert bleibt",
                raw,
                index,
                field
            );
            self.write_row(index);
            return Ok(false);
        };

        let changed = self.poses.update(index, |pose| {
            let before = *pose;
            match field {
                FormField::X => pose.set_x(value),
                FormField::Y => pose.set_y(value),
                FormField::Heading => {
                    pose.set_velocity(heading_to_velocity(value, heading_weight));
                }
            }
            *pose != before
        })?;
        self.write_row(index);
        Ok(changed)
    }

    /// Baut alle Posen aus den Formularzeilen neu auf.
    ///
    /// Heading wird zu `heading_weight · (cos, sin)`, Kruemmungs-Offsets werden
    /// zurückgesetzt. Nicht parsbare Felder behalten den Wert der bisherigen Pose
    /// (bzw. 0, falls die Zeile keine Pose hatte).
    pub fn refresh_from_rows(&mut self) -> EditorResult<()> {
        let rows: Vec<RowFields> = (0..self.form.row_count())
            .map(|i| self.form.read_row(i).unwrap_or_default())
            .collect();

        let rebuilt: Vec<Pose> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| self.pose_from_row(i, row))
            .collect();

        self.poses.replace_all(rebuilt)?;
        for index in 0..self.poses.len() {
            self.write_row(index);
        }
        log::info!("Tabelle aus {} Zeilen neu aufgebaut", self.poses.len());
        Ok(())
    }

    fn pose_from_row(&self, index: usize, row: &RowFields) -> Pose {
        let previous = self.poses.get(index).ok().copied();
        let fallback_heading = previous.map(|p| p.heading_degrees().round()).unwrap_or(0.0);

        let parse_or = |field: FormField, fallback: f64| {
            parse_field(row.get(field)).unwrap_or_else(|| {
                log::warn!(
                    "Zeile {}: ungültiges Feld {:?} = {:?}, verwende {}",
                    index,
                    field,
                    row.get(field),
                    fallback
                );
                fallback
            })
        };

        let x = parse_or(FormField::X, previous.map(|p| p.x()).unwrap_or(0.0));
        let y = parse_or(FormField::Y, previous.map(|p| p.y()).unwrap_or(0.0));
        let heading = parse_or(FormField::Heading, fallback_heading);

        let mut pose = Pose::default();
        pose.set_position(DVec2::new(x, y));
        pose.set_velocity(heading_to_velocity(heading, self.heading_weight));
        pose
    }

    /// Setzt die Ursprungs-Position; die Geschwindigkeit wird auf `(-heading_weight, 0)` gesetzt.
    pub fn set_origin(&mut self, position: DVec2) -> EditorResult<()> {
        let heading_weight = self.heading_weight;
        self.poses.update(0, |origin| {
            origin.set_position(position);
            origin.set_velocity(DVec2::new(-heading_weight, 0.0));
        })?;
        self.write_row(0);
        Ok(())
    }

    /// Setzt alle Kruemmungs-Offsets auf 0.
    pub fn reset_curvature(&mut self) {
        self.poses
            .for_each_mut(|pose| pose.set_acceleration(DVec2::ZERO));
    }

    /// Angezeigte Werte für Pose `index`.
    pub fn row_values(&self, index: usize) -> EditorResult<RowValues> {
        let pose = self.poses.get(index)?;
        Ok(RowValues {
            x: pose.x().round(),
            y: pose.y().round(),
            heading_deg: pose.heading_degrees().round(),
        })
    }

    fn write_row(&mut self, index: usize) {
        if let Ok(values) = self.row_values(index) {
            self.form.write_row(index, &values);
        }
    }
}

/// Geschwindigkeitsvektor mit Betrag `weight` in Richtung `heading_deg`.
pub fn heading_to_velocity(heading_deg: f64, weight: f64) -> DVec2 {
    let rad = heading_deg.to_radians();
    DVec2::new(rad.cos(), rad.sin()) * weight
}
