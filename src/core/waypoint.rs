//! Ableitung von Wegpunkt-Deskriptoren für die Pfad-Engine.
//!
//! Die Tangenten werden auf die lokale Sehnenlänge skaliert (diskrete
//! Catmull-Rom-Heuristik): Endpunkte nutzen die eine angrenzende Sehne,
//! innere Punkte den Mittelwert beider Nachbar-Sehnen.

use super::{EditorError, EditorResult, Pose, MIN_SPEED};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Punkt/Tangente/Kruemmungs-Offset-Tripel, das die Pfad-Engine konsumiert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaypointDescriptor {
    pub point: DVec2,
    pub tangent: DVec2,
    pub curvature: DVec2,
}

/// Lokale charakteristische Distanz für Index `i` (Sehnenlänge bzw. Mittelwert).
fn chord_distance(points: &[DVec2], i: usize) -> f64 {
    let last = points.len() - 1;
    if i == 0 {
        points[0].distance(points[1])
    } else if i == last {
        points[last].distance(points[last - 1])
    } else {
        (points[i].distance(points[i + 1]) + points[i].distance(points[i - 1])) / 2.0
    }
}

/// Konvertiert eine geordnete Pose-Folge (ein Koordinatenraum) in Deskriptoren.
///
/// Benötigt mindestens 2 Posen, jede mit einer Geschwindigkeit über [`MIN_SPEED`].
/// Die Eingabe wird nicht verändert.
pub fn derive_waypoints(poses: &[Pose]) -> EditorResult<Vec<WaypointDescriptor>> {
    if poses.len() < 2 {
        return Err(EditorError::TooFewPoses { len: poses.len() });
    }

    let mut waypoints: Vec<WaypointDescriptor> = poses.iter().map(Pose::to_waypoint).collect();
    let points: Vec<DVec2> = waypoints.iter().map(|wp| wp.point).collect();

    for (i, wp) in waypoints.iter_mut().enumerate() {
        let magnitude = wp.tangent.length();
        if !(magnitude >= MIN_SPEED) {
            return Err(EditorError::DegenerateTangent { index: i });
        }
        wp.tangent = wp.tangent / magnitude * chord_distance(&points, i);
    }

    Ok(waypoints)
}

/// Klone der Posen, verschoben sodass der Ursprung (Index 0) auf (0, 0) liegt.
pub fn relative_to_origin(poses: &[Pose]) -> Vec<Pose> {
    let Some(origin) = poses.first().map(Pose::position) else {
        return Vec::new();
    };
    poses
        .iter()
        .map(|pose| {
            let mut shifted = *pose;
            shifted.set_position(pose.position() - origin);
            shifted
        })
        .collect()
}
