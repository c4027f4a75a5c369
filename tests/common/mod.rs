//! Gemeinsame Test-Helfer: aufzeichnende Engine und Editor-Aufbau.

#![allow(dead_code)]

use glam::DVec2;
use wayfinder_editor::{
    Axis, EditorController, EditorIntent, EditorOptions, EditorState, MemoryForm, OptimizeParams,
    PathEngine, PathPoint, PreviewParams, RetainedScene, WaypointDescriptor,
};

/// Engine, die Aufrufe zählt, Wegpunkte als Vorschau zurückgibt und
/// vorgegebene Offsets liefert.
#[derive(Default)]
pub struct RecordingEngine {
    pub preview_calls: usize,
    pub optimize_calls: usize,
    pub last_waypoints: Vec<WaypointDescriptor>,
    pub offsets: Vec<f64>,
}

impl PathEngine for RecordingEngine {
    fn generate_preview(
        &mut self,
        waypoints: &[WaypointDescriptor],
        _params: &PreviewParams,
    ) -> Vec<PathPoint> {
        self.preview_calls += 1;
        self.last_waypoints = waypoints.to_vec();
        waypoints
            .iter()
            .map(|w| PathPoint {
                position: w.point,
                ..PathPoint::default()
            })
            .collect()
    }

    fn optimize(&mut self, waypoints: &[WaypointDescriptor], _params: &OptimizeParams) -> Vec<f64> {
        self.optimize_calls += 1;
        self.last_waypoints = waypoints.to_vec();
        self.offsets.clone()
    }
}

pub type TestState = EditorState<MemoryForm, RetainedScene, RecordingEngine>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn new_editor() -> (EditorController, TestState) {
    init_logging();
    let state = EditorState::new(
        MemoryForm::new(),
        RetainedScene::new(),
        RecordingEngine::default(),
        EditorOptions::default(),
    );
    (EditorController::new(), state)
}

/// Legt per Hintergrund-Drag eine Pose bei `at` an, die nach +x zeigt.
pub fn place_pose(controller: &mut EditorController, state: &mut TestState, at: DVec2) {
    controller
        .handle_intent(state, EditorIntent::BackgroundDragStarted { pointer: at })
        .expect("Hintergrund-Drag sollte starten");
    controller
        .handle_intent(
            state,
            EditorIntent::BackgroundDragEnded {
                pointer: at + DVec2::new(50.0, 0.0),
            },
        )
        .expect("Hintergrund-Drag sollte enden");
}

/// Prüft den eingeschwungenen Zustand: jede Tabellen-Pose entspricht in
/// Pixeln der Canvas-Pose bis auf eine halbe Rundungsstufe.
pub fn assert_settled(state: &TestState) {
    assert_eq!(state.table.len(), state.canvas.len());
    let half = |axis| 0.5 * state.mapper.scale(axis) + 1e-9;
    for (table, canvas) in state.table.poses().iter().zip(state.canvas.poses()) {
        let table_px = state.mapper.pose_to_pixels(table);
        let index = canvas.pose_index();
        assert!(
            (table_px.x() - canvas.x()).abs() <= half(Axis::X),
            "x von Pose {index}: Tabelle {} px, Canvas {} px",
            table_px.x(),
            canvas.x()
        );
        assert!(
            (table_px.y() - canvas.y()).abs() <= half(Axis::Y),
            "y von Pose {index}: Tabelle {} px, Canvas {} px",
            table_px.y(),
            canvas.y()
        );
        let vectors = [
            (table_px.velocity(), canvas.velocity()),
            (table_px.acceleration(), canvas.acceleration()),
        ];
        for (from_table, on_canvas) in vectors {
            let diff = (from_table - on_canvas).abs();
            assert!(
                diff.max_element() <= half(Axis::Vector),
                "Vektor von Pose {index}: Tabelle {from_table}, Canvas {on_canvas}"
            );
        }
    }
}
