//! Editor-Controller für zentrale Event-Verarbeitung.

use super::engine::PathEngine;
use super::{EditorCommand, EditorIntent, EditorState};
use crate::form::FormSurface;
use crate::render::ShapeSurface;

/// Orchestriert Substrat-Events und Handler auf den EditorState.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent<F: FormSurface, S: ShapeSurface, E: PathEngine>(
        &mut self,
        state: &mut EditorState<F, S, E>,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command<F: FormSurface, S: ShapeSurface, E: PathEngine>(
        &mut self,
        state: &mut EditorState<F, S, E>,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Drag ===
            EditorCommand::BeginDrag { kind, pose_index } => {
                handlers::drag::begin(state, kind, pose_index)?
            }
            EditorCommand::BeginBackgroundDrag { pose } => {
                handlers::drag::begin_background(state, pose)?
            }
            EditorCommand::DragPose {
                kind,
                pointer,
                delta,
            } => handlers::drag::drag_to(state, kind, pointer, delta)?,
            EditorCommand::EndDrag { kind, pointer } => handlers::drag::end(state, kind, pointer)?,

            // === Tabelle ===
            EditorCommand::ApplyFieldEdit { row, field } => {
                handlers::table::apply_field_edit(state, row, field)?
            }
            EditorCommand::DeleteRow { row } => handlers::table::delete_row(state, row)?,
            EditorCommand::RefreshFromRows => handlers::table::refresh_from_rows(state)?,
            EditorCommand::SetOrigin { position } => handlers::table::set_origin(state, position)?,
            EditorCommand::ResetPoses => handlers::table::reset(state)?,
            EditorCommand::ResetCurvature => handlers::table::reset_curvature(state)?,

            // === Engine ===
            EditorCommand::RenderPreview => handlers::engine::render_preview(state),
            EditorCommand::SetPreviewParams { params } => {
                handlers::engine::set_preview_params(state, params)
            }
            EditorCommand::OptimizePath => handlers::engine::optimize(state)?,
            EditorCommand::ApplyOptimizationResult { revision, offsets } => {
                handlers::engine::apply_result(state, revision, &offsets)?
            }
        }

        Ok(())
    }
}
