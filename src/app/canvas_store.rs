//! Canvas-Store: Pixel-Spiegel der Posen samt Glyph-Lebenszyklus und Drag-Zustand.

use super::drag::{heading_towards, is_zero_delta, project_along_heading, ActiveDrag, DragKind};
use crate::core::{EditorError, EditorResult, Pose, PoseList};
use crate::render::{Shape, ShapeHandle, ShapeSurface};
use crate::shared::GlyphStyle;
use glam::DVec2;

/// Die drei Formen, die eine Pose auf der Canvas darstellen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoseGlyphs {
    pub marker: ShapeHandle,
    pub tip: ShapeHandle,
    pub line: ShapeHandle,
}

/// Posen in Pixeln, index-gleich zum Table-Store (ausser während eines Drags).
pub struct CanvasStore<S: ShapeSurface> {
    poses: PoseList,
    glyphs: Vec<PoseGlyphs>,
    surface: S,
    style: GlyphStyle,
    /// Pixel-Box des Feldes `[x0, y0, x1, y1]`; Positions-Drags bleiben darin
    field_box: [f64; 4],
    drag: Option<ActiveDrag>,
}

impl<S: ShapeSurface> CanvasStore<S> {
    /// Erstellt die Canvas mit der Ursprungs-Pose (Pixel) und legt deren Glyphen an.
    pub fn new(surface: S, origin: Pose, style: GlyphStyle, field_box: [f64; 4]) -> Self {
        let mut store = Self {
            poses: PoseList::with_origin(origin),
            glyphs: Vec::new(),
            surface,
            style,
            field_box,
            drag: None,
        };
        let origin = *store.poses.origin();
        let glyphs = store.create_glyphs(&origin);
        store.glyphs.push(glyphs);
        store
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn poses(&self) -> &[Pose] {
        self.poses.as_slice()
    }

    pub fn pose(&self, index: usize) -> EditorResult<&Pose> {
        self.poses.get(index)
    }

    pub fn glyphs(&self, index: usize) -> EditorResult<PoseGlyphs> {
        self.glyphs
            .get(index)
            .copied()
            .ok_or(EditorError::out_of_range(index, self.glyphs.len()))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn style(&self) -> &GlyphStyle {
        &self.style
    }

    /// Laufender Drag, falls vorhanden.
    pub fn active_drag(&self) -> Option<ActiveDrag> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // ── Struktur ────────────────────────────────────────────────────

    /// Ersetzt alle Posen (bereits in Pixeln) und gleicht die Glyphen ab.
    pub fn set_poses(&mut self, poses: Vec<Pose>) -> EditorResult<()> {
        self.poses.replace_all(poses)?;

        while self.glyphs.len() > self.poses.len() {
            if let Some(glyphs) = self.glyphs.pop() {
                self.remove_glyphs(glyphs);
            }
        }
        for index in 0..self.poses.len() {
            if index < self.glyphs.len() {
                self.render_glyphs(index)?;
            } else {
                let pose = *self.poses.get(index)?;
                let glyphs = self.create_glyphs(&pose);
                self.glyphs.push(glyphs);
            }
        }
        log::debug!("Canvas: {} Posen neu gerendert", self.poses.len());
        Ok(())
    }

    /// Hängt eine Pose an und legt ihre Glyphen an.
    pub fn push_pose(&mut self, pose: Pose) -> usize {
        let index = self.poses.push(pose);
        let stored = self.poses.as_slice()[index];
        let glyphs = self.create_glyphs(&stored);
        self.glyphs.push(glyphs);
        index
    }

    /// Entfernt Pose und Glyphen an `index`; Nachfolger werden neu gebunden.
    pub fn remove_pose(&mut self, index: usize) -> EditorResult<Pose> {
        let removed = self.poses.remove(index)?;
        let glyphs = self.glyphs.remove(index);
        self.remove_glyphs(glyphs);
        for follower in index..self.poses.len() {
            self.render_glyphs(follower)?;
        }
        Ok(removed)
    }

    /// Entfernt alle Posen ausser dem Ursprung.
    pub fn truncate_to_origin(&mut self) -> usize {
        let removed = self.poses.truncate_to_origin();
        for glyphs in self.glyphs.split_off(1) {
            self.remove_glyphs(glyphs);
        }
        removed
    }

    /// Übernimmt eine Pose (bereits in Pixeln) und rendert ihre Glyphen neu.
    pub fn apply_external_update(&mut self, index: usize, pose: Pose) -> EditorResult<()> {
        self.poses.set(index, pose)?;
        self.render_glyphs(index)
    }

    /// Zeichnet die Pfad-Vorschau.
    pub fn draw_path(&mut self, points: &[DVec2]) {
        self.surface.draw_path(points);
    }

    // ── Drag ────────────────────────────────────────────────────────

    /// `start`: wählt die Pose aus und markiert den gegriffenen Griff.
    pub fn begin_drag(&mut self, kind: DragKind, index: usize) -> EditorResult<()> {
        if let Some(active) = self.drag {
            return Err(EditorError::DragInProgress {
                pose_index: active.pose_index,
            });
        }
        let glyphs = self.glyphs(index)?;
        self.poses.get(index)?;

        self.surface.set_active(active_handle(kind, glyphs), true);
        self.drag = Some(ActiveDrag::new(kind, index));
        log::debug!("Drag {:?} auf Pose {} gestartet", kind, index);
        Ok(())
    }

    /// `drag`: verarbeitet eine Zeigerbewegung. Gibt `false` zurück, wenn das
    /// Event ein No-op war (Delta 0).
    pub fn drag_to(&mut self, kind: DragKind, pointer: DVec2, delta: DVec2) -> EditorResult<bool> {
        let active = self.expect_drag(kind)?;
        if is_zero_delta(delta) {
            return Ok(false);
        }

        let display_length = self.style.velocity_display_length;
        let target = clamp_to_box(pointer, self.field_box);
        self.poses.update(active.pose_index, |pose| match kind {
            DragKind::Position => pose.set_position(target),
            DragKind::Velocity | DragKind::Background => {
                aim_velocity(pose, pointer, display_length);
            }
        })?;
        self.render_glyphs(active.pose_index)?;
        if let Some(drag) = self.drag.as_mut() {
            drag.moves += 1;
        }
        Ok(true)
    }

    /// `end`: schliesst den Drag ab und gibt ihn zurück.
    ///
    /// Bei einem Hintergrund-Drag wird die Geschwindigkeit aus der finalen
    /// Zeigerposition bestimmt.
    pub fn end_drag(&mut self, kind: DragKind, pointer: Option<DVec2>) -> EditorResult<ActiveDrag> {
        let active = self.expect_drag(kind)?;

        if let (DragKind::Background, Some(pointer)) = (kind, pointer) {
            let display_length = self.style.velocity_display_length;
            self.poses.update(active.pose_index, |pose| {
                aim_velocity(pose, pointer, display_length)
            })?;
        }

        let glyphs = self.glyphs(active.pose_index)?;
        self.surface.set_active(active_handle(kind, glyphs), false);
        self.render_glyphs(active.pose_index)?;
        self.drag = None;
        log::debug!(
            "Drag {:?} auf Pose {} beendet nach {} Bewegungen",
            kind,
            active.pose_index,
            active.moves
        );
        Ok(active)
    }

    fn expect_drag(&self, kind: DragKind) -> EditorResult<ActiveDrag> {
        match self.drag {
            Some(active) if active.kind == kind => Ok(active),
            _ => Err(EditorError::NoActiveDrag),
        }
    }

    // ── Glyphen ─────────────────────────────────────────────────────

    /// Formen einer Pose: Rechteck, Griff und Verbindungslinie.
    pub fn shapes_for(&self, pose: &Pose) -> [Shape; 3] {
        let center = pose.position();
        let tip = center + pose.velocity();
        let pose_index = pose.pose_index();
        [
            Shape::PoseMarker {
                center,
                width: self.style.robot_length,
                height: self.style.robot_width,
                heading_deg: pose.heading_degrees(),
                pose_index,
            },
            Shape::VelocityTip {
                center: tip,
                radius: self.style.tip_radius,
                pose_index,
            },
            Shape::VelocityLine {
                from: center,
                to: tip,
                pose_index,
            },
        ]
    }

    fn create_glyphs(&mut self, pose: &Pose) -> PoseGlyphs {
        let [marker, tip, line] = self.shapes_for(pose);
        PoseGlyphs {
            marker: self.surface.create(marker),
            tip: self.surface.create(tip),
            line: self.surface.create(line),
        }
    }

    fn render_glyphs(&mut self, index: usize) -> EditorResult<()> {
        let glyphs = self.glyphs(index)?;
        let [marker, tip, line] = self.shapes_for(self.poses.get(index)?);
        self.surface.update(glyphs.marker, marker);
        self.surface.update(glyphs.tip, tip);
        self.surface.update(glyphs.line, line);
        Ok(())
    }

    fn remove_glyphs(&mut self, glyphs: PoseGlyphs) {
        self.surface.remove(glyphs.marker);
        self.surface.remove(glyphs.tip);
        self.surface.remove(glyphs.line);
    }
}

fn active_handle(kind: DragKind, glyphs: PoseGlyphs) -> ShapeHandle {
    match kind {
        DragKind::Position => glyphs.marker,
        DragKind::Velocity | DragKind::Background => glyphs.tip,
    }
}

fn clamp_to_box(point: DVec2, field_box: [f64; 4]) -> DVec2 {
    point.clamp(
        DVec2::new(field_box[0], field_box[1]),
        DVec2::new(field_box[2], field_box[3]),
    )
}

/// Richtet die Geschwindigkeit auf den Zeiger aus, mit fester Anzeigelänge.
fn aim_velocity(pose: &mut Pose, pointer: DVec2, display_length: f64) {
    let origin = pose.position();
    let heading = heading_towards(origin, pointer);
    let tip = project_along_heading(origin, heading, display_length);
    pose.set_velocity(tip - origin);
}
