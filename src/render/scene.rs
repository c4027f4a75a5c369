//! Retained-Mode-Szene im Speicher: Referenz-Implementierung von `ShapeSurface`.
//!
//! Dient als Headless-Substrat (Tests, Benchmarks, Host-Bridges, die
//! den Szenen-Zustand selbst abfragen).

use super::{Shape, ShapeHandle, ShapeSurface};
use glam::DVec2;
use std::collections::BTreeMap;

/// Eine Form samt Aktiv-Zustand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneShape {
    pub shape: Shape,
    pub active: bool,
}

/// Szene mit allen Formen und der aktuellen Pfad-Vorschau.
#[derive(Debug, Default, Clone)]
pub struct RetainedScene {
    shapes: BTreeMap<ShapeHandle, SceneShape>,
    path: Vec<DVec2>,
    next_handle: u64,
    /// Anzahl aller mutierenden Aufrufe (für No-op-Prüfungen)
    mutations: u64,
    /// Anzahl der `draw_path`-Aufrufe
    path_draws: u64,
}

impl RetainedScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn get(&self, handle: ShapeHandle) -> Option<&SceneShape> {
        self.shapes.get(&handle)
    }

    /// Alle Formen in Erstellungsreihenfolge.
    pub fn shapes(&self) -> impl Iterator<Item = (&ShapeHandle, &SceneShape)> {
        self.shapes.iter()
    }

    /// Formen, die an `pose_index` gebunden sind.
    pub fn shapes_for_pose(&self, pose_index: usize) -> Vec<Shape> {
        self.shapes
            .values()
            .filter(|s| s.shape.pose_index() == pose_index)
            .map(|s| s.shape)
            .collect()
    }

    /// Handles aller aktiv markierten Formen.
    pub fn active_handles(&self) -> Vec<ShapeHandle> {
        self.shapes
            .iter()
            .filter(|(_, s)| s.active)
            .map(|(h, _)| *h)
            .collect()
    }

    pub fn path(&self) -> &[DVec2] {
        &self.path
    }

    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    pub fn path_draw_count(&self) -> u64 {
        self.path_draws
    }
}

impl ShapeSurface for RetainedScene {
    fn create(&mut self, shape: Shape) -> ShapeHandle {
        let handle = ShapeHandle(self.next_handle);
        self.next_handle += 1;
        self.shapes.insert(
            handle,
            SceneShape {
                shape,
                active: false,
            },
        );
        self.mutations += 1;
        handle
    }

    fn update(&mut self, handle: ShapeHandle, shape: Shape) {
        match self.shapes.get_mut(&handle) {
            Some(entry) => entry.shape = shape,
            None => log::warn!("Update auf unbekannte Form {:?}", handle),
        }
        self.mutations += 1;
    }

    fn remove(&mut self, handle: ShapeHandle) {
        if self.shapes.remove(&handle).is_none() {
            log::warn!("Entfernen einer unbekannten Form {:?}", handle);
        }
        self.mutations += 1;
    }

    fn set_active(&mut self, handle: ShapeHandle, active: bool) {
        if let Some(entry) = self.shapes.get_mut(&handle) {
            entry.active = active;
        }
        self.mutations += 1;
    }

    fn draw_path(&mut self, points: &[DVec2]) {
        self.path.clear();
        self.path.extend_from_slice(points);
        self.path_draws += 1;
        self.mutations += 1;
    }
}
