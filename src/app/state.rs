//! Editor-State: zentrale Datenhaltung beider Stores plus Engine.

use super::canvas_store::CanvasStore;
use super::engine::{OptimizationRequest, PathEngine};
use super::sync;
use super::table_store::TableStore;
use super::CommandLog;
use crate::core::{
    derive_waypoints, relative_to_origin, CoordinateMapper, EditorError, EditorResult,
    WaypointDescriptor,
};
use crate::form::FormSurface;
use crate::render::ShapeSurface;
use crate::shared::EditorOptions;

/// Hauptzustand des Editors
pub struct EditorState<F: FormSurface, S: ShapeSurface, E: PathEngine> {
    /// Autoritative Posen in Zoll samt Formular
    pub table: TableStore<F>,
    /// Pixel-Spiegel samt Glyphen und Drag-Zustand
    pub canvas: CanvasStore<S>,
    /// Externe Pfad-Engine
    pub engine: E,
    /// Einmal geladene Optionen
    pub options: EditorOptions,
    /// Pixel ↔ Zoll
    pub mapper: CoordinateMapper,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    revision: u64,
}

impl<F: FormSurface, S: ShapeSurface, E: PathEngine> EditorState<F, S, E> {
    /// Erstellt den State mit der Ursprungs-Pose aus den Optionen.
    pub fn new(form: F, surface: S, engine: E, options: EditorOptions) -> Self {
        let mapper = CoordinateMapper::new(options.field);
        let origin_px = options.origin_pose_px();
        let table = TableStore::new(
            form,
            mapper.pose_to_physical(&origin_px),
            options.heading_weight,
        );
        let canvas = CanvasStore::new(
            surface,
            origin_px,
            options.glyphs,
            options.field.field_box,
        );
        log::info!(
            "Editor bereit, Ursprung bei ({}, {}) px",
            origin_px.x(),
            origin_px.y()
        );
        Self {
            table,
            canvas,
            engine,
            options,
            mapper,
            command_log: CommandLog::new(),
            revision: 0,
        }
    }

    /// Aktuelle Revision der Posen-Folge.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Markiert eine Änderung der Posen.
    pub fn mark_edited(&mut self) {
        self.revision += 1;
    }

    /// Lehnt Tabellen-Commands ab, solange ein Drag läuft.
    pub fn ensure_idle(&self) -> EditorResult<()> {
        match self.canvas.active_drag() {
            Some(active) => Err(EditorError::DragInProgress {
                pose_index: active.pose_index,
            }),
            None => Ok(()),
        }
    }

    /// Baut eine Optimierungs-Anfrage für die aktuelle Revision.
    ///
    /// Die Wegpunkte stammen aus den Canvas-Posen (Pixel), in diesem Raum
    /// werden auch die Offsets zurückerwartet.
    pub fn begin_optimization(&self) -> EditorResult<OptimizationRequest> {
        self.ensure_idle()?;
        Ok(OptimizationRequest {
            revision: self.revision,
            waypoints: derive_waypoints(self.canvas.poses())?,
            params: self.options.optimize,
        })
    }

    /// Übernimmt Offsets einer Optimierung.
    ///
    /// Gibt `Ok(false)` zurück, wenn `revision` veraltet ist; das Ergebnis wird dann verworfen.
    pub fn apply_optimization_result(&mut self, revision: u64, offsets: &[f64]) -> EditorResult<bool> {
        self.ensure_idle()?;
        if revision != self.revision {
            log::warn!(
                "Optimierungs-Ergebnis für Revision {} verworfen (aktuell {})",
                revision,
                self.revision
            );
            return Ok(false);
        }
        sync::distribute_offsets(&mut self.canvas, &mut self.table, &self.mapper, offsets)?;
        self.mark_edited();
        Ok(true)
    }

    /// Wegpunkte in Zoll, relativ zum Ursprung (Export an physikalische Engines).
    pub fn export_waypoints(&self) -> EditorResult<Vec<WaypointDescriptor>> {
        derive_waypoints(&relative_to_origin(self.table.poses()))
    }

    /// Zeichnet die Vorschau neu.
    pub fn render_preview(&mut self) -> usize {
        let params = self.options.preview;
        sync::render_preview(&mut self.canvas, &mut self.engine, &params)
    }
}
