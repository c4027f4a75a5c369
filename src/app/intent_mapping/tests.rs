use crate::app::drag::DragKind;
use crate::app::engine::{PathEngine, PathPoint};
use crate::app::{EditorCommand, EditorIntent, EditorState};
use crate::core::WaypointDescriptor;
use crate::form::{FormField, MemoryForm};
use crate::render::RetainedScene;
use crate::shared::{EditorOptions, OptimizeParams, PreviewParams};
use glam::DVec2;

use super::map_intent_to_commands;

struct NullEngine;

impl PathEngine for NullEngine {
    fn generate_preview(&mut self, _: &[WaypointDescriptor], _: &PreviewParams) -> Vec<PathPoint> {
        Vec::new()
    }

    fn optimize(&mut self, _: &[WaypointDescriptor], _: &OptimizeParams) -> Vec<f64> {
        Vec::new()
    }
}

fn state() -> EditorState<MemoryForm, RetainedScene, NullEngine> {
    EditorState::new(
        MemoryForm::new(),
        RetainedScene::new(),
        NullEngine,
        EditorOptions::default(),
    )
}

#[test]
fn position_drag_lifecycle_maps_to_drag_commands() {
    let state = state();

    let commands =
        map_intent_to_commands(&state, EditorIntent::PositionDragStarted { pose_index: 2 });
    assert_eq!(
        commands,
        vec![EditorCommand::BeginDrag {
            kind: DragKind::Position,
            pose_index: 2
        }]
    );

    let commands = map_intent_to_commands(&state, EditorIntent::PositionDragEnded);
    assert!(matches!(
        commands[0],
        EditorCommand::EndDrag {
            kind: DragKind::Position,
            pointer: None
        }
    ));
}

#[test]
fn background_drag_start_creates_clamped_pose_with_heading_weight() {
    let state = state();

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::BackgroundDragStarted {
            pointer: DVec2::new(900.0, 250.0),
        },
    );

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        EditorCommand::BeginBackgroundDrag { pose } => {
            assert_eq!(pose.to_array(), [854.0, 250.0, 35.0, 0.0, 0.0, 0.0]);
        }
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn table_intents_are_followed_by_preview() {
    let state = state();

    let commands = map_intent_to_commands(&state, EditorIntent::RowDeleteRequested { row: 1 });
    assert_eq!(
        commands,
        vec![
            EditorCommand::DeleteRow { row: 1 },
            EditorCommand::RenderPreview
        ]
    );

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::RowFieldEdited {
            row: 0,
            field: FormField::Heading,
        },
    );
    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        EditorCommand::ApplyFieldEdit {
            row: 0,
            field: FormField::Heading
        }
    ));
}

#[test]
fn optimization_result_keeps_revision() {
    let state = state();

    let commands = map_intent_to_commands(
        &state,
        EditorIntent::OptimizationResultReceived {
            revision: 4,
            offsets: vec![1.0, 2.0],
        },
    );

    assert!(matches!(
        &commands[0],
        EditorCommand::ApplyOptimizationResult { revision: 4, offsets } if offsets == &vec![1.0, 2.0]
    ));
    assert!(matches!(commands[1], EditorCommand::RenderPreview));
}
