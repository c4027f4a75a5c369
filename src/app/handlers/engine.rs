//! Handler für Vorschau und Optimierung.

use crate::app::engine::PathEngine;
use crate::app::EditorState;
use crate::form::FormSurface;
use crate::render::ShapeSurface;
use crate::shared::PreviewParams;

/// Zeichnet die Vorschau aus den aktuellen Canvas-Posen.
pub fn render_preview<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
) {
    let drawn = state.render_preview();
    log::debug!("Vorschau mit {} Punkten gezeichnet", drawn);
}

/// Wechselt den Vorschau-Parametersatz.
pub fn set_preview_params<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
    params: PreviewParams,
) {
    state.options.preview = params;
    log::info!("Vorschau-Parameter: {:?}", params);
}

/// Führt die Optimierung synchron aus und verteilt die Offsets.
pub fn optimize<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
) -> anyhow::Result<()> {
    let request = state.begin_optimization()?;
    let offsets = state.engine.optimize(&request.waypoints, &request.params);
    log::info!(
        "Optimierung für Revision {} lieferte {} Werte",
        request.revision,
        offsets.len()
    );
    state.apply_optimization_result(request.revision, &offsets)?;
    Ok(())
}

/// Übernimmt ein eingetroffenes Optimierungs-Ergebnis.
pub fn apply_result<F: FormSurface, S: ShapeSurface, E: PathEngine>(
    state: &mut EditorState<F, S, E>,
    revision: u64,
    offsets: &[f64],
) -> anyhow::Result<()> {
    if !state.apply_optimization_result(revision, offsets)? {
        log::debug!("Veraltetes Ergebnis ignoriert");
    }
    Ok(())
}
