//! Core-Domänentypen: Pose, Pose-Liste, Koordinaten-Abbildung, Wegpunkt-Ableitung.

pub mod coords;
pub mod error;
/// Kinematischer Datensatz eines Wegpunkts
pub mod pose;
pub mod pose_list;
pub mod waypoint;

pub use coords::{Axis, CoordinateMapper, FieldGeometry};
pub use error::{EditorError, EditorResult};
pub use pose::{Pose, MIN_SPEED};
pub use pose_list::PoseList;
pub use waypoint::{derive_waypoints, relative_to_origin, WaypointDescriptor};
