//! Wayfinder Editor Library.
//! Kern eines Wegpunkt-Editors für Roboter-Bahnen: Posen, Tabelle ↔ Canvas
//! Synchronisation, Drag-Interaktion und Anbindung einer Pfad-Engine.

pub mod app;
pub mod core;
pub mod form;
pub mod render;
pub mod shared;

pub use app::{
    CanvasStore, EditorCommand, EditorController, EditorIntent, EditorState, OptimizationRequest,
    PathEngine, PathPoint, TableStore,
};
pub use core::{
    derive_waypoints, Axis, CoordinateMapper, EditorError, EditorResult, FieldGeometry, Pose,
    PoseList, WaypointDescriptor,
};
pub use form::{FormField, FormSurface, MemoryForm, RowFields, RowValues};
pub use render::{RetainedScene, Shape, ShapeHandle, ShapeSurface};
pub use shared::{EditorOptions, GlyphStyle, OptimizeParams, PreviewParams};
