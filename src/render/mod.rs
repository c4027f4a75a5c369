//! Render-Substrat: Formen-Vertrag und Retained-Szene.

mod scene;
mod surface;

pub use scene::{RetainedScene, SceneShape};
pub use surface::{Shape, ShapeHandle, ShapeSurface};
