//! Mapping von Editor-Intents auf mutierende Editor-Commands.

use super::drag::DragKind;
use super::engine::PathEngine;
use super::{EditorCommand, EditorIntent, EditorState};
use crate::core::{Axis, Pose};
use crate::form::FormSurface;
use crate::render::ShapeSurface;

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorCommand`s.
pub fn map_intent_to_commands<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &EditorState<F, S, E>,
    intent: EditorIntent,
) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::PositionDragStarted { pose_index } => vec![EditorCommand::BeginDrag {
            kind: DragKind::Position,
            pose_index,
        }],
        EditorIntent::PositionDragged { pointer, delta } => vec![EditorCommand::DragPose {
            kind: DragKind::Position,
            pointer,
            delta,
        }],
        EditorIntent::PositionDragEnded => vec![EditorCommand::EndDrag {
            kind: DragKind::Position,
            pointer: None,
        }],

        EditorIntent::VelocityDragStarted { pose_index } => vec![EditorCommand::BeginDrag {
            kind: DragKind::Velocity,
            pose_index,
        }],
        EditorIntent::VelocityDragged { pointer, delta } => vec![EditorCommand::DragPose {
            kind: DragKind::Velocity,
            pointer,
            delta,
        }],
        EditorIntent::VelocityDragEnded => vec![EditorCommand::EndDrag {
            kind: DragKind::Velocity,
            pointer: None,
        }],

        EditorIntent::BackgroundDragStarted { pointer } => {
            // Neue Pose liegt immer innerhalb der Feld-Box und zeigt nach +x
            let x = state.mapper.clamp_pixels(pointer.x, Axis::X);
            let y = state.mapper.clamp_pixels(pointer.y, Axis::Y);
            let pose = Pose::new(x, y, state.options.heading_weight, 0.0, 0.0, 0.0);
            vec![EditorCommand::BeginBackgroundDrag { pose }]
        }
        EditorIntent::BackgroundDragged { pointer, delta } => vec![EditorCommand::DragPose {
            kind: DragKind::Background,
            pointer,
            delta,
        }],
        EditorIntent::BackgroundDragEnded { pointer } => vec![EditorCommand::EndDrag {
            kind: DragKind::Background,
            pointer: Some(pointer),
        }],

        EditorIntent::RowFieldEdited { row, field } => vec![
            EditorCommand::ApplyFieldEdit { row, field },
            EditorCommand::RenderPreview,
        ],
        EditorIntent::RowDeleteRequested { row } => vec![
            EditorCommand::DeleteRow { row },
            EditorCommand::RenderPreview,
        ],
        EditorIntent::TableRefreshRequested => vec![
            EditorCommand::RefreshFromRows,
            EditorCommand::RenderPreview,
        ],
        EditorIntent::OriginSetRequested { position } => vec![
            EditorCommand::SetOrigin { position },
            EditorCommand::RenderPreview,
        ],
        EditorIntent::ResetRequested => {
            vec![EditorCommand::ResetPoses, EditorCommand::RenderPreview]
        }
        EditorIntent::ResetCurvatureRequested => {
            vec![EditorCommand::ResetCurvature, EditorCommand::RenderPreview]
        }

        EditorIntent::PreviewRequested => vec![EditorCommand::RenderPreview],
        EditorIntent::PreviewParamsSelected { params } => vec![
            EditorCommand::SetPreviewParams { params },
            EditorCommand::RenderPreview,
        ],
        EditorIntent::OptimizeRequested => {
            vec![EditorCommand::OptimizePath, EditorCommand::RenderPreview]
        }
        EditorIntent::OptimizationResultReceived { revision, offsets } => vec![
            EditorCommand::ApplyOptimizationResult { revision, offsets },
            EditorCommand::RenderPreview,
        ],
    }
}

#[cfg(test)]
mod tests;
