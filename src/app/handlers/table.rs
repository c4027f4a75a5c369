//! Handler für Tabellen-Commands. Alle laufen nur ohne aktiven Drag.

use crate::app::engine::PathEngine;
use crate::app::{sync, EditorState};
use crate::form::{FormField, FormSurface};
use crate::render::ShapeSurface;
use glam::DVec2;

/// Übernimmt eine Einzelfeld-Eingabe und spiegelt die Pose auf die Canvas.
pub fn apply_field_edit<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
    row: usize,
    field: FormField,
) -> anyhow::Result<()> {
    state.ensure_idle()?;
    if state.table.edit_field(row, field)? {
        sync::push_table_pose_to_canvas(&state.table, &mut state.canvas, &state.mapper, row)?;
        state.mark_edited();
    }
    Ok(())
}

/// Löscht Zeile und Pose in beiden Stores.
pub fn delete_row<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
    row: usize,
) -> anyhow::Result<()> {
    state.ensure_idle()?;
    sync::delete_pose(&mut state.table, &mut state.canvas, row)?;
    state.mark_edited();
    Ok(())
}

/// Baut alle Posen aus den Zeilen neu auf und rendert die Canvas neu.
pub fn refresh_from_rows<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
) -> anyhow::Result<()> {
    state.ensure_idle()?;
    state.table.refresh_from_rows()?;
    sync::push_table_to_canvas(&state.table, &mut state.canvas, &state.mapper)?;
    state.mark_edited();
    Ok(())
}

/// Setzt den Ursprung (Zoll).
pub fn set_origin<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
    position: DVec2,
) -> anyhow::Result<()> {
    state.ensure_idle()?;
    state.table.set_origin(position)?;
    sync::push_table_pose_to_canvas(&state.table, &mut state.canvas, &state.mapper, 0)?;
    state.mark_edited();
    log::info!("Ursprung gesetzt auf ({}, {})", position.x, position.y);
    Ok(())
}

/// Entfernt alle Posen ausser dem Ursprung.
pub fn reset<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
) -> anyhow::Result<()> {
    state.ensure_idle()?;
    let removed = sync::reset_poses(&mut state.table, &mut state.canvas);
    sync::ensure_aligned(&state.table, &state.canvas)?;
    state.mark_edited();
    log::info!("Reset: {} Posen entfernt", removed);
    Ok(())
}

/// Setzt alle Kruemmungs-Offsets auf 0.
pub fn reset_curvature<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
) -> anyhow::Result<()> {
    state.ensure_idle()?;
    state.table.reset_curvature();
    sync::push_table_to_canvas(&state.table, &mut state.canvas, &state.mapper)?;
    state.mark_edited();
    Ok(())
}
