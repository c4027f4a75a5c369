//! Kinematischer Pose-Datensatz `[x, y, dx, dy, ddx, ddy]`.

use super::waypoint::WaypointDescriptor;
use glam::DVec2;

/// Unterhalb dieser Geschwindigkeit gelten Heading-Ableitungen als undefiniert.
pub const MIN_SPEED: f64 = 1e-9;

/// Eine Pose: Position, Geschwindigkeit (Richtung = Heading) und Kruemmungs-Offset.
///
/// Der Koordinatenraum (Pixel oder Zoll) ergibt sich aus dem besitzenden Store.
/// `heading`, `speed` und `curvature` werden bei jedem Zugriff neu berechnet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    data: [f64; 6],
    /// Position in der besitzenden Liste; wird von `PoseList` gepflegt
    pub(crate) pose_index: usize,
}

impl Pose {
    /// Erstellt eine Pose aus den sechs Skalaren.
    pub fn new(x: f64, y: f64, dx: f64, dy: f64, ddx: f64, ddy: f64) -> Self {
        Self::from_array([x, y, dx, dy, ddx, ddy])
    }

    /// Erstellt eine Pose aus dem gepackten Array.
    pub fn from_array(data: [f64; 6]) -> Self {
        Self {
            data,
            pose_index: 0,
        }
    }

    /// Gepackte Skalare `[x, y, dx, dy, ddx, ddy]`.
    pub fn to_array(&self) -> [f64; 6] {
        self.data
    }

    /// Index in der besitzenden Liste.
    pub fn pose_index(&self) -> usize {
        self.pose_index
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.data[0], self.data[1])
    }

    pub fn set_position(&mut self, value: DVec2) {
        self.data[0] = value.x;
        self.data[1] = value.y;
    }

    pub fn velocity(&self) -> DVec2 {
        DVec2::new(self.data[2], self.data[3])
    }

    pub fn set_velocity(&mut self, value: DVec2) {
        self.data[2] = value.x;
        self.data[3] = value.y;
    }

    pub fn acceleration(&self) -> DVec2 {
        DVec2::new(self.data[4], self.data[5])
    }

    pub fn set_acceleration(&mut self, value: DVec2) {
        self.data[4] = value.x;
        self.data[5] = value.y;
    }

    pub fn x(&self) -> f64 {
        self.data[0]
    }

    pub fn y(&self) -> f64 {
        self.data[1]
    }

    pub fn dx(&self) -> f64 {
        self.data[2]
    }

    pub fn dy(&self) -> f64 {
        self.data[3]
    }

    pub fn ddx(&self) -> f64 {
        self.data[4]
    }

    pub fn ddy(&self) -> f64 {
        self.data[5]
    }

    pub fn set_x(&mut self, value: f64) {
        self.data[0] = value;
    }

    pub fn set_y(&mut self, value: f64) {
        self.data[1] = value;
    }

    pub fn set_dx(&mut self, value: f64) {
        self.data[2] = value;
    }

    pub fn set_dy(&mut self, value: f64) {
        self.data[3] = value;
    }

    pub fn set_ddx(&mut self, value: f64) {
        self.data[4] = value;
    }

    pub fn set_ddy(&mut self, value: f64) {
        self.data[5] = value;
    }

    /// Heading in Radiant: `atan2(dy, dx)`.
    pub fn heading(&self) -> f64 {
        self.data[3].atan2(self.data[2])
    }

    /// Heading in Grad, wie es die Tabelle anzeigt.
    pub fn heading_degrees(&self) -> f64 {
        self.heading().to_degrees()
    }

    /// Betrag der Geschwindigkeit.
    pub fn speed(&self) -> f64 {
        self.velocity().length()
    }

    /// Signierte Kruemmung `(dx·ddy − ddx·dy) / speed³`.
    ///
    /// `None`, wenn die Geschwindigkeit unter [`MIN_SPEED`] liegt.
    pub fn curvature(&self) -> Option<f64> {
        let speed = self.speed();
        if !(speed >= MIN_SPEED) {
            return None;
        }
        let cross = self.data[2] * self.data[5] - self.data[4] * self.data[3];
        Some(cross / (speed * speed * speed))
    }

    /// Roh-Deskriptor ohne Tangenten-Skalierung.
    pub fn to_waypoint(&self) -> WaypointDescriptor {
        WaypointDescriptor {
            point: self.position(),
            tangent: self.velocity(),
            curvature: self.acceleration(),
        }
    }
}

impl From<[f64; 6]> for Pose {
    fn from(data: [f64; 6]) -> Self {
        Self::from_array(data)
    }
}
