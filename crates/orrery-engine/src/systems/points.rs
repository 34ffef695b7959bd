//! Static point batches (starfields, dust rings) projected per frame.
//!
//! Batches hold world-space points that rarely change; each frame they
//! are projected through the camera into one shared point buffer. A
//! batch can carry a yaw angle so a whole ring rotates as a rigid body
//! without touching individual points.

use crate::camera::Camera3D;
use crate::math::Vec3;
use crate::renderer::{PointBuffer, PointInstance};

/// A single world-space point sprite.
#[derive(Debug, Clone, Copy)]
pub struct PointSprite {
    pub pos: Vec3,
    pub size: f32,
    pub color: [f32; 4],
}

/// Handle to a batch inside `PointState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointBatchId(usize);

/// A group of point sprites sharing visibility and a yaw rotation.
pub struct PointBatch {
    pub points: Vec<PointSprite>,
    pub visible: bool,
    /// Rotation of the whole batch around the world Y axis.
    pub yaw: f32,
}

impl PointBatch {
    pub fn new(points: Vec<PointSprite>) -> Self {
        Self {
            points,
            visible: true,
            yaw: 0.0,
        }
    }
}

/// All point batches plus the shared projected buffer.
pub struct PointState {
    batches: Vec<PointBatch>,
    buffer: PointBuffer,
}

impl PointState {
    pub fn new(max_points: usize) -> Self {
        Self {
            batches: Vec::new(),
            buffer: PointBuffer::with_capacity(max_points),
        }
    }

    /// Register a batch and get a handle to it.
    pub fn add_batch(&mut self, batch: PointBatch) -> PointBatchId {
        self.batches.push(batch);
        PointBatchId(self.batches.len() - 1)
    }

    pub fn batch(&self, id: PointBatchId) -> &PointBatch {
        &self.batches[id.0]
    }

    pub fn batch_mut(&mut self, id: PointBatchId) -> &mut PointBatch {
        &mut self.batches[id.0]
    }

    /// Project all visible batches into the point buffer.
    /// Truncates at `max` points.
    pub fn rebuild(&mut self, camera: &Camera3D, max: usize) {
        self.buffer.clear();
        'outer: for batch in &self.batches {
            if !batch.visible {
                continue;
            }
            for p in &batch.points {
                if self.buffer.point_count() >= max {
                    break 'outer;
                }
                let world = if batch.yaw != 0.0 {
                    p.pos.rotate_y(batch.yaw)
                } else {
                    p.pos
                };
                let proj = camera.project(world);
                if proj.depth <= 0.1 {
                    continue;
                }
                self.buffer.push(PointInstance {
                    x: proj.pos.x,
                    y: proj.pos.y,
                    size: p.size * proj.scale,
                    r: p.color[0],
                    g: p.color[1],
                    b: p.color[2],
                    a: p.color[3],
                    depth: proj.depth,
                });
            }
        }
    }

    pub fn point_count(&self) -> usize {
        self.buffer.point_count()
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.points_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(pos: Vec3) -> PointSprite {
        PointSprite {
            pos,
            size: 1.0,
            color: [1.0, 1.0, 1.0, 0.5],
        }
    }

    #[test]
    fn hidden_batch_is_skipped() {
        let mut points = PointState::new(64);
        let id = points.add_batch(PointBatch::new(vec![star(Vec3::new(0.0, 0.0, 0.0))]));
        let camera = Camera3D::default();
        points.rebuild(&camera, 64);
        assert_eq!(points.point_count(), 1);

        points.batch_mut(id).visible = false;
        points.rebuild(&camera, 64);
        assert_eq!(points.point_count(), 0);
    }

    #[test]
    fn rebuild_truncates_at_max() {
        let mut points = PointState::new(64);
        let stars = (0..100)
            .map(|i| star(Vec3::new(i as f32, 0.0, 0.0)))
            .collect();
        points.add_batch(PointBatch::new(stars));
        points.rebuild(&Camera3D::default(), 10);
        assert_eq!(points.point_count(), 10);
    }

    #[test]
    fn yaw_rotates_whole_batch() {
        let mut points = PointState::new(64);
        let id = points.add_batch(PointBatch::new(vec![star(Vec3::new(90.0, 0.0, 0.0))]));
        let mut camera = Camera3D::default();
        camera.position = Vec3::new(0.0, 200.0, 0.1);
        camera.target = Vec3::ZERO;

        points.rebuild(&camera, 64);
        let x_before = {
            let ptr = points.buffer_ptr();
            unsafe { *ptr }
        };

        points.batch_mut(id).yaw = std::f32::consts::FRAC_PI_2;
        points.rebuild(&camera, 64);
        let x_after = {
            let ptr = points.buffer_ptr();
            unsafe { *ptr }
        };
        assert!((x_before - x_after).abs() > 1.0);
    }
}
