use bytemuck::{Pod, Zeroable};

/// Per-point render data for the point-sprite pipeline (stars, dust,
/// solar wind). 8 floats = 32 bytes per point.
///
/// `depth` lets the shader fade or discard points behind the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct PointInstance {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    pub depth: f32,
}

impl PointInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of point instances.
pub struct PointBuffer {
    points: Vec<PointInstance>,
}

impl PointBuffer {
    pub fn with_capacity(max: usize) -> Self {
        Self {
            points: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn push(&mut self, point: PointInstance) {
        self.points.push(point);
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.points.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_instance_is_32_bytes() {
        assert_eq!(std::mem::size_of::<PointInstance>(), 32);
        assert_eq!(PointInstance::FLOATS, 8);
    }
}
