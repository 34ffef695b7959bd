//! Lyon-based vector line rendering system.
//!
//! Provides CPU-side tessellation of stroked paths using Lyon, producing
//! a flat vertex buffer that gets rendered via WebGPU. Orbit paths and
//! rings are sampled in world space, projected per point, then stroked
//! here as screen-space polylines.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, StrokeOptions, StrokeTessellator, StrokeVertex,
    StrokeVertexConstructor, VertexBuffers,
};

/// Per-vertex data for vector line rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24
}

/// RGBA color for vector drawing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: VectorColor,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// State for vector line rendering.
///
/// Holds the lyon stroke tessellator and the output vertex buffer.
/// Cleared each frame and populated by drawing commands.
pub struct VectorState {
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
}

impl VectorState {
    /// Create a new VectorState.
    pub fn new() -> Self {
        Self {
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(16384 * VectorVertex::FLOATS),
        }
    }

    /// Clear the vertex buffer. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer (for SAB copy).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Flush indexed geometry to the flat buffer as triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    /// Tessellate a stroked polyline (open path).
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: VectorColor) {
        if points.len() < 2 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(false); // open path

        let path = builder.build();
        self.stroke_path(&path, width, color);
    }

    /// Tessellate a stroked closed polygon.
    pub fn stroke_polygon(&mut self, points: &[Vec2], width: f32, color: VectorColor) {
        if points.len() < 3 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.close();

        let path = builder.build();
        self.stroke_path(&path, width, color);
    }

    /// Tessellate a stroked circle.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();

        self.stroke_path(&path, width, color);
    }

    /// Tessellate an arbitrary stroked lyon Path.
    pub fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(0.5).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );

        if result.is_ok() {
            self.flush_geometry();
        }
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::FLOATS, 6);
        assert_eq!(VectorVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn vector_color_constructors() {
        let c1 = VectorColor::rgb(0.1, 0.2, 0.3);
        assert_eq!(c1.a, 1.0);

        let c2 = VectorColor::new(0.5, 0.6, 0.7, 0.8);
        assert_eq!(c2.r, 0.5);
        assert_eq!(c2.a, 0.8);

        let c3 = VectorColor::rgb8(255, 128, 0);
        assert!((c3.r - 1.0).abs() < 0.01);
        assert!((c3.g - 0.5).abs() < 0.01);
        assert_eq!(c3.b, 0.0);

        let c4 = VectorColor::WHITE.with_alpha(0.3);
        assert_eq!(c4.a, 0.3);
    }

    #[test]
    fn stroke_polyline_produces_vertices() {
        let mut state = VectorState::new();
        let points = [Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0)];
        state.stroke_polyline(&points, 5.0, VectorColor::WHITE);

        // A stroked line produces multiple vertices
        assert!(state.vertex_count() > 0);
    }

    #[test]
    fn stroke_circle_produces_vertices() {
        let mut state = VectorState::new();
        state.stroke_circle(Vec2::new(50.0, 50.0), 25.0, 2.0, VectorColor::WHITE);
        assert!(state.vertex_count() > 0);
    }

    #[test]
    fn clear_resets_buffer() {
        let mut state = VectorState::new();
        state.stroke_circle(Vec2::new(50.0, 50.0), 25.0, 2.0, VectorColor::WHITE);
        assert!(state.vertex_count() > 0);

        state.clear();
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn degenerate_inputs_produce_nothing() {
        let mut state = VectorState::new();
        state.stroke_polyline(&[Vec2::ZERO], 2.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 0);

        state.stroke_polygon(&[Vec2::ZERO, Vec2::ONE], 2.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 0);

        state.stroke_circle(Vec2::ZERO, -1.0, 2.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 0);
    }
}
