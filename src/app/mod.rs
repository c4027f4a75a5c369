//! Application-Layer: Stores, Synchronisation, Controller und Events.

pub mod canvas_store;
pub mod command_log;
pub mod controller;
pub mod drag;
pub mod engine;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Editor-State
///
/// Hält beide Stores, die Engine und die Optionen.
pub mod state;
pub mod sync;
pub mod table_store;

pub use canvas_store::{CanvasStore, PoseGlyphs};
pub use command_log::CommandLog;
pub use controller::EditorController;
pub use drag::{ActiveDrag, DragKind};
pub use engine::{OptimizationRequest, PathEngine, PathPoint};
pub use events::{EditorCommand, EditorIntent};
pub use state::EditorState;
pub use table_store::{heading_to_velocity, TableStore};
