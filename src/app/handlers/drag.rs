//! Handler für die Drag-Interaktion auf der Canvas.

use crate::app::drag::DragKind;
use crate::app::engine::PathEngine;
use crate::app::{sync, EditorState};
use crate::core::Pose;
use crate::form::FormSurface;
use crate::render::ShapeSurface;
use glam::DVec2;

/// Startet einen Drag auf einer bestehenden Pose.
pub fn begin<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
    kind: DragKind,
    pose_index: usize,
) -> anyhow::Result<()> {
    state.canvas.begin_drag(kind, pose_index)?;
    Ok(())
}

/// Fügt die neue Pose in beide Stores ein und startet den Hintergrund-Drag auf ihr.
pub fn begin_background<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
    pose: Pose,
) -> anyhow::Result<()> {
    state.ensure_idle()?;
    let index = sync::insert_pose(&mut state.table, &mut state.canvas, &state.mapper, pose)?;
    state.canvas.begin_drag(DragKind::Background, index)?;
    state.mark_edited();
    state.render_preview();
    log::info!("Pose {} per Hintergrund-Drag angelegt", index);
    Ok(())
}

/// Verarbeitet eine Zeigerbewegung. Leere Bewegungen ändern nichts.
pub fn drag_to<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
    kind: DragKind,
    pointer: DVec2,
    delta: DVec2,
) -> anyhow::Result<()> {
    if state.canvas.drag_to(kind, pointer, delta)? {
        state.mark_edited();
        state.render_preview();
    }
    Ok(())
}

/// Schliesst den Drag ab und übernimmt die Pose in die Tabelle.
pub fn end<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
    kind: DragKind,
    pointer: Option<DVec2>,
) -> anyhow::Result<()> {
    let finished = state.canvas.end_drag(kind, pointer)?;
    sync::push_canvas_pose_to_table(
        &state.canvas,
        &mut state.table,
        &state.mapper,
        finished.pose_index,
    )?;
    state.mark_edited();
    state.render_preview();
    Ok(())
}
