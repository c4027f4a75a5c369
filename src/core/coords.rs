//! Umrechnung zwischen Pixel-Raum (Canvas) und physikalischem Raum (Zoll).

use super::Pose;
use serde::{Deserialize, Serialize};

/// Feste Feld-Geometrie: Pixel-Bounding-Box und physikalische Ausdehnung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldGeometry {
    /// Pixel-Bounding-Box des Spielfelds `[x0, y0, x1, y1]`
    pub field_box: [f64; 4],
    /// Feldlänge in Zoll (entlang der Pixel-x-Achse)
    pub field_length: f64,
    /// Feldbreite in Zoll (entlang der Pixel-y-Achse)
    pub field_width: f64,
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            field_box: [144.0, 20.0, 854.0, 384.0],
            field_length: 629.25,
            field_width: 323.25,
        }
    }
}

/// Achse einer Umrechnung.
///
/// `X`/`Y` sind Positionen (mit Offset und Clamping), `Vector` steht für
/// Geschwindigkeits- und Beschleunigungs-Komponenten (gemittelte Skala, kein Clamping).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Vector,
}

/// Zustandslose, bidirektionale Abbildung Pixel ↔ Zoll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    geometry: FieldGeometry,
    px_per_in: [f64; 2],
    vector_scale: f64,
}

impl CoordinateMapper {
    /// Leitet die Skalen aus der Feld-Geometrie ab.
    pub fn new(geometry: FieldGeometry) -> Self {
        let [x0, y0, x1, y1] = geometry.field_box;
        let px_per_in = [
            (x1 - x0) / geometry.field_length,
            (y1 - y0) / geometry.field_width,
        ];
        Self {
            geometry,
            px_per_in,
            vector_scale: (px_per_in[0] + px_per_in[1]) / 2.0,
        }
    }

    pub fn geometry(&self) -> &FieldGeometry {
        &self.geometry
    }

    /// Pixel pro Zoll für eine Achse (`Vector` → gemittelte Skala).
    pub fn scale(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.px_per_in[0],
            Axis::Y => self.px_per_in[1],
            Axis::Vector => self.vector_scale,
        }
    }

    /// Begrenzt einen Pixelwert auf die Feld-Box. Vektoren bleiben unverändert.
    pub fn clamp_pixels(&self, value: f64, axis: Axis) -> f64 {
        match axis_slot(axis) {
            Some(slot) => {
                let lo = self.geometry.field_box[slot];
                let hi = self.geometry.field_box[slot + 2];
                value.max(lo).min(hi)
            }
            None => value,
        }
    }

    /// Zoll → Pixel.
    pub fn to_pixels(&self, value: f64, axis: Axis) -> f64 {
        match axis_slot(axis) {
            Some(slot) => self.clamp_pixels(
                value * self.px_per_in[slot] + self.geometry.field_box[slot],
                axis,
            ),
            None => value * self.vector_scale,
        }
    }

    /// Pixel → Zoll, auf ganze Zoll gerundet. Positionen werden vorher geclampt.
    pub fn to_physical(&self, value: f64, axis: Axis) -> f64 {
        match axis_slot(axis) {
            Some(slot) => ((self.clamp_pixels(value, axis) - self.geometry.field_box[slot])
                / self.px_per_in[slot])
                .round(),
            None => (value / self.vector_scale).round(),
        }
    }

    /// Konvertiert alle sechs Skalare einer physikalischen Pose in Pixel.
    pub fn pose_to_pixels(&self, pose: &Pose) -> Pose {
        self.map_pose(pose, |v, axis| self.to_pixels(v, axis))
    }

    /// Konvertiert alle sechs Skalare einer Pixel-Pose in Zoll.
    pub fn pose_to_physical(&self, pose: &Pose) -> Pose {
        self.map_pose(pose, |v, axis| self.to_physical(v, axis))
    }

    fn map_pose(&self, pose: &Pose, convert: impl Fn(f64, Axis) -> f64) -> Pose {
        let [x, y, dx, dy, ddx, ddy] = pose.to_array();
        let mut mapped = Pose::new(
            convert(x, Axis::X),
            convert(y, Axis::Y),
            convert(dx, Axis::Vector),
            convert(dy, Axis::Vector),
            convert(ddx, Axis::Vector),
            convert(ddy, Axis::Vector),
        );
        mapped.pose_index = pose.pose_index();
        mapped
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(FieldGeometry::default())
    }
}

fn axis_slot(axis: Axis) -> Option<usize> {
    match axis {
        Axis::X => Some(0),
        Axis::Y => Some(1),
        Axis::Vector => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn scales_follow_field_box() {
        let mapper = CoordinateMapper::default();
        assert_relative_eq!(mapper.scale(Axis::X), 710.0 / 629.25);
        assert_relative_eq!(mapper.scale(Axis::Y), 364.0 / 323.25);
        assert_relative_eq!(
            mapper.scale(Axis::Vector),
            (710.0 / 629.25 + 364.0 / 323.25) / 2.0
        );
    }

    #[test]
    fn round_trip_for_in_bounds_values() {
        let mapper = CoordinateMapper::default();
        for v in [0.0, 1.4, 17.6, 100.0, 323.0, 500.3, 629.0] {
            let px = mapper.to_pixels(v, Axis::X);
            assert_eq!(mapper.to_physical(px, Axis::X), v.round());
        }
        for v in [0.0, 12.2, 161.0, 323.0] {
            let px = mapper.to_pixels(v, Axis::Y);
            assert_eq!(mapper.to_physical(px, Axis::Y), v.round());
        }
        for v in [-35.0, -3.6, 0.0, 12.4, 90.0] {
            let px = mapper.to_pixels(v, Axis::Vector);
            assert_eq!(mapper.to_physical(px, Axis::Vector), v.round());
        }
    }

    #[test]
    fn positions_are_clamped_vectors_are_not() {
        let mapper = CoordinateMapper::default();
        assert_eq!(mapper.to_pixels(-50.0, Axis::X), 144.0);
        assert_eq!(mapper.to_pixels(10_000.0, Axis::Y), 384.0);
        assert_eq!(mapper.to_physical(0.0, Axis::X), 0.0);
        assert_eq!(mapper.to_physical(2_000.0, Axis::Y), 323.0);

        let big = mapper.to_pixels(10_000.0, Axis::Vector);
        assert!(big > 384.0);
        assert_eq!(mapper.to_physical(big, Axis::Vector), 10_000.0);
    }

    #[test]
    fn pose_conversion_keeps_index() {
        let mapper = CoordinateMapper::default();
        let mut pose = Pose::new(100.0, 50.0, 10.0, -5.0, 1.0, 2.0);
        pose.pose_index = 3;
        let px = mapper.pose_to_pixels(&pose);
        assert_eq!(px.pose_index(), 3);
        let back = mapper.pose_to_physical(&px);
        assert_eq!(back.to_array(), pose.to_array());
        assert_eq!(back.pose_index(), 3);
    }

    #[test]
    fn pixel_x_600_maps_to_404_inches() {
        let mapper = CoordinateMapper::default();
        let expected = ((600.0 - 144.0) / mapper.scale(Axis::X)).round();
        assert_eq!(mapper.to_physical(600.0, Axis::X), expected);
        assert_eq!(expected, 404.0);
    }
}
