//! Synchronisation Tabelle ↔ Canvas.
//!
//! Einziger Code, der beide Stores anfasst. Daten wandern als Kopie über
//! `apply_external_update` und werden dabei zwischen Zoll und Pixel konvertiert.

use super::canvas_store::CanvasStore;
use super::engine::{validate_offsets, PathEngine};
use super::table_store::TableStore;
use crate::core::{derive_waypoints, CoordinateMapper, EditorError, EditorResult, Pose};
use crate::form::FormSurface;
use crate::render::ShapeSurface;
use crate::shared::PreviewParams;
use glam::DVec2;

/// Prüft, dass beide Stores gleich viele Posen halten.
pub fn ensure_aligned<F: FormSurface, S: ShapeSurface>(
    table: &TableStore<F>,
    canvas: &CanvasStore<S>,
) -> EditorResult<()> {
    if table.len() != canvas.len() {
        return Err(EditorError::StoreDesync {
            table: table.len(),
            canvas: canvas.len(),
        });
    }
    Ok(())
}

/// Tabelle → Canvas für alle Posen (nach Neuaufbau, Reset der Offsets, …).
pub fn push_table_to_canvas<F: FormSurface, S: ShapeSurface>(
    table: &TableStore<F>,
    canvas: &mut CanvasStore<S>,
    mapper: &CoordinateMapper,
) -> EditorResult<()> {
    let pixels: Vec<Pose> = table
        .poses()
        .iter()
        .map(|pose| mapper.pose_to_pixels(pose))
        .collect();
    canvas.set_poses(pixels)?;
    log::debug!("Sync: {} Posen Tabelle → Canvas", canvas.len());
    Ok(())
}

/// Tabelle → Canvas für eine einzelne Pose.
pub fn push_table_pose_to_canvas<F: FormSurface, S: ShapeSurface>(
    table: &TableStore<F>,
    canvas: &mut CanvasStore<S>,
    mapper: &CoordinateMapper,
    index: usize,
) -> EditorResult<()> {
    ensure_aligned(table, canvas)?;
    let pixel = mapper.pose_to_pixels(table.pose(index)?);
    canvas.apply_external_update(index, pixel)?;
    log::debug!("Sync: Pose {} Tabelle → Canvas", index);
    Ok(())
}

/// Canvas → Tabelle für eine einzelne Pose (Drag-Ende, Optimierer-Offsets).
pub fn push_canvas_pose_to_table<F: FormSurface, S: ShapeSurface>(
    canvas: &CanvasStore<S>,
    table: &mut TableStore<F>,
    mapper: &CoordinateMapper,
    index: usize,
) -> EditorResult<()> {
    ensure_aligned(table, canvas)?;
    let physical = mapper.pose_to_physical(canvas.pose(index)?);
    table.apply_external_update(index, physical)?;
    log::debug!("Sync: Pose {} Canvas → Tabelle", index);
    Ok(())
}

/// Strukturelles Einfügen in beide Stores aus einer Pixel-Pose.
///
/// Gibt den gemeinsamen Index der neuen Pose zurück.
pub fn insert_pose<F: FormSurface, S: ShapeSurface>(
    table: &mut TableStore<F>,
    canvas: &mut CanvasStore<S>,
    mapper: &CoordinateMapper,
    pixel: Pose,
) -> EditorResult<usize> {
    ensure_aligned(table, canvas)?;
    let canvas_index = canvas.push_pose(pixel);
    let table_index = table.add_pose(mapper.pose_to_physical(&pixel));
    if canvas_index != table_index {
        return Err(EditorError::StoreDesync {
            table: table.len(),
            canvas: canvas.len(),
        });
    }
    Ok(table_index)
}

/// Strukturelles Löschen in beiden Stores; Nachfolger werden in beiden neu nummeriert.
pub fn delete_pose<F: FormSurface, S: ShapeSurface>(
    table: &mut TableStore<F>,
    canvas: &mut CanvasStore<S>,
    index: usize,
) -> EditorResult<()> {
    ensure_aligned(table, canvas)?;
    table.delete_row(index)?;
    canvas.remove_pose(index)?;
    Ok(())
}

/// Entfernt in beiden Stores alle Posen ausser dem Ursprung.
pub fn reset_poses<F: FormSurface, S: ShapeSurface>(
    table: &mut TableStore<F>,
    canvas: &mut CanvasStore<S>,
) -> usize {
    let removed = table.reset();
    canvas.truncate_to_origin();
    removed
}

/// Verteilt Optimierer-Offsets paarweise ab Index 1 auf die Canvas-Posen
/// und schreibt jede geänderte Pose in die Tabelle zurück.
///
/// Der Ursprung wird nie beschrieben. Gibt die Anzahl geänderter Posen zurück.
pub fn distribute_offsets<F: FormSurface, S: ShapeSurface>(
    canvas: &mut CanvasStore<S>,
    table: &mut TableStore<F>,
    mapper: &CoordinateMapper,
    offsets: &[f64],
) -> EditorResult<usize> {
    ensure_aligned(table, canvas)?;
    validate_offsets(offsets, canvas.len())?;

    let mut written = 0;
    for (pair, chunk) in offsets.chunks_exact(2).enumerate() {
        let index = pair + 1;
        let mut pose = *canvas.pose(index)?;
        pose.set_acceleration(DVec2::new(chunk[0], chunk[1]));
        canvas.apply_external_update(index, pose)?;
        push_canvas_pose_to_table(canvas, table, mapper, index)?;
        written += 1;
    }
    log::info!("Offsets auf {} Posen verteilt", written);
    Ok(written)
}

/// Leitet Wegpunkte aus den Canvas-Posen ab, holt die Vorschau und zeichnet sie.
///
/// Scheitert die Ableitung (zu wenige Posen, Geschwindigkeit 0), wird ein
/// leerer Pfad gezeichnet. Gibt die Anzahl gezeichneter Punkte zurück.
pub fn render_preview<S: ShapeSurface, E: PathEngine>(
    canvas: &mut CanvasStore<S>,
    engine: &mut E,
    params: &PreviewParams,
) -> usize {
    let points: Vec<DVec2> = match derive_waypoints(canvas.poses()) {
        Ok(waypoints) => engine
            .generate_preview(&waypoints, params)
            .iter()
            .map(|p| p.position)
            .collect(),
        Err(e) => {
            log::debug!("Keine Vorschau: {}", e);
            Vec::new()
        }
    };
    canvas.draw_path(&points);
    points.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::engine::PathPoint;
    use crate::core::{FieldGeometry, WaypointDescriptor};
    use crate::form::MemoryForm;
    use crate::render::RetainedScene;
    use crate::shared::{GlyphStyle, OptimizeParams, DEFAULT_ORIGIN_PX};
    use approx::assert_relative_eq;

    struct EchoEngine;

    impl PathEngine for EchoEngine {
        fn generate_preview(
            &mut self,
            waypoints: &[WaypointDescriptor],
            _params: &PreviewParams,
        ) -> Vec<PathPoint> {
            waypoints
                .iter()
                .map(|w| PathPoint {
                    position: w.point,
                    ..PathPoint::default()
                })
                .collect()
        }

        fn optimize(&mut self, _: &[WaypointDescriptor], _: &OptimizeParams) -> Vec<f64> {
            Vec::new()
        }
    }

    fn stores() -> (TableStore<MemoryForm>, CanvasStore<RetainedScene>, CoordinateMapper) {
        let mapper = CoordinateMapper::new(FieldGeometry::default());
        let origin_px = Pose::from_array(DEFAULT_ORIGIN_PX);
        let table = TableStore::new(MemoryForm::new(), mapper.pose_to_physical(&origin_px), 35.0);
        let canvas = CanvasStore::new(
            RetainedScene::new(),
            origin_px,
            GlyphStyle::default(),
            FieldGeometry::default().field_box,
        );
        (table, canvas, mapper)
    }

    #[test]
    fn insert_converts_to_physical() {
        let (mut table, mut canvas, mapper) = stores();
        let index = insert_pose(
            &mut table,
            &mut canvas,
            &mapper,
            Pose::new(600.0, 250.0, 35.0, 0.0, 0.0, 0.0),
        )
        .unwrap();
        assert_eq!(index, 1);
        assert_eq!(table.pose(1).unwrap().x(), 404.0);
        assert_eq!(table.pose(1).unwrap().y(), 204.0);
        assert_eq!(table.form().rows()[1].heading_deg, "0");
        assert_eq!(canvas.surface().shape_count(), 6);
    }

    #[test]
    fn delete_keeps_both_stores_aligned() {
        let (mut table, mut canvas, mapper) = stores();
        for x in [300.0, 400.0, 500.0] {
            insert_pose(&mut table, &mut canvas, &mapper, Pose::new(x, 100.0, 35.0, 0.0, 0.0, 0.0))
                .unwrap();
        }
        delete_pose(&mut table, &mut canvas, 2).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(canvas.len(), 3);
        assert_eq!(canvas.pose(2).unwrap().x(), 500.0);
        assert_eq!(canvas.pose(2).unwrap().pose_index(), 2);
        assert_eq!(table.pose(2).unwrap().pose_index(), 2);

        assert_eq!(
            delete_pose(&mut table, &mut canvas, 0),
            Err(EditorError::OriginNotRemovable)
        );
        assert_eq!(canvas.len(), 3);
    }

    #[test]
    fn table_changes_reach_canvas_in_pixels() {
        let (mut table, mut canvas, mapper) = stores();
        table.set_origin(DVec2::new(0.0, 0.0)).unwrap();
        push_table_pose_to_canvas(&table, &mut canvas, &mapper, 0).unwrap();

        let origin = canvas.pose(0).unwrap();
        assert_eq!(origin.position(), DVec2::new(144.0, 20.0));
        assert_relative_eq!(origin.dx(), -35.0 * mapper.scale(crate::core::Axis::Vector));
    }

    #[test]
    fn offsets_skip_origin_and_reach_table() {
        let (mut table, mut canvas, mapper) = stores();
        for x in [300.0, 400.0, 500.0] {
            insert_pose(&mut table, &mut canvas, &mapper, Pose::new(x, 100.0, 35.0, 0.0, 0.0, 0.0))
                .unwrap();
        }
        let written =
            distribute_offsets(&mut canvas, &mut table, &mapper, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(written, 2);
        assert_eq!(canvas.pose(0).unwrap().acceleration(), DVec2::ZERO);
        assert_eq!(canvas.pose(1).unwrap().acceleration(), DVec2::new(1.0, 2.0));
        assert_eq!(canvas.pose(2).unwrap().acceleration(), DVec2::new(3.0, 4.0));
        assert_eq!(canvas.pose(3).unwrap().acceleration(), DVec2::ZERO);
        assert_eq!(table.pose(2).unwrap().acceleration(), DVec2::new(3.0, 4.0));

        assert!(distribute_offsets(&mut canvas, &mut table, &mapper, &[1.0; 8]).is_err());
    }

    #[test]
    fn desync_is_detected() {
        let (table, mut canvas, _) = stores();
        canvas.push_pose(Pose::new(300.0, 100.0, 35.0, 0.0, 0.0, 0.0));
        assert_eq!(
            ensure_aligned(&table, &canvas),
            Err(EditorError::StoreDesync { table: 1, canvas: 2 })
        );
    }

    #[test]
    fn preview_with_single_pose_draws_empty_path() {
        let (_, mut canvas, _) = stores();
        let drawn = render_preview(&mut canvas, &mut EchoEngine, &PreviewParams::default());
        assert_eq!(drawn, 0);
        assert_eq!(canvas.surface().path_draw_count(), 1);
        assert!(canvas.surface().path().is_empty());
    }

    #[test]
    fn preview_draws_engine_positions() {
        let (mut table, mut canvas, mapper) = stores();
        insert_pose(&mut table, &mut canvas, &mapper, Pose::new(600.0, 250.0, 35.0, 0.0, 0.0, 0.0))
            .unwrap();
        let drawn = render_preview(&mut canvas, &mut EchoEngine, &PreviewParams::default());
        assert_eq!(drawn, 2);
        assert_eq!(canvas.surface().path()[1], DVec2::new(600.0, 250.0));
    }
}
