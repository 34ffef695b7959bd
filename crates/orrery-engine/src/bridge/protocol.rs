/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [SDF spheres: max_sdf_instances × 12 floats]
/// [Points: max_points × 8 floats]
/// [Effect points: max_effect_points × 8 floats]
/// [Vector vertices: max_vector_vertices × 6 floats]
/// [Labels: max_labels × 4 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_SDF_INSTANCES: usize = 3;
pub const HEADER_SDF_INSTANCE_COUNT: usize = 4;
pub const HEADER_MAX_POINTS: usize = 5;
pub const HEADER_POINT_COUNT: usize = 6;
pub const HEADER_MAX_EFFECT_POINTS: usize = 7;
pub const HEADER_EFFECT_POINT_COUNT: usize = 8;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 9;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 10;
pub const HEADER_MAX_LABELS: usize = 11;
pub const HEADER_LABEL_COUNT: usize = 12;
pub const HEADER_MAX_EVENTS: usize = 13;
pub const HEADER_EVENT_COUNT: usize = 14;
// Index 15 reserved.

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per SDF sphere instance (wire format — never changes).
pub const SDF_INSTANCE_FLOATS: usize = 12;

/// Floats per point sprite: x, y, size, r, g, b, a, depth.
pub const POINT_FLOATS: usize = 8;

/// Floats per vector vertex: x, y, r, g, b, a.
pub const VECTOR_VERTEX_FLOATS: usize = 6;

/// Floats per label anchor: index, x, y, visible.
pub const LABEL_FLOATS: usize = 4;

/// Floats per game event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum SDF sphere instances.
    pub max_sdf_instances: usize,
    /// Maximum static point sprites.
    pub max_points: usize,
    /// Maximum effect particles.
    pub max_effect_points: usize,
    /// Maximum vector vertices.
    pub max_vector_vertices: usize,
    /// Maximum label anchors.
    pub max_labels: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Size of SDF data section in floats.
    pub sdf_data_floats: usize,
    /// Size of point data section in floats.
    pub point_data_floats: usize,
    /// Size of effect data section in floats.
    pub effect_data_floats: usize,
    /// Size of vector data section in floats.
    pub vector_data_floats: usize,
    /// Size of label data section in floats.
    pub label_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where SDF data begins.
    pub sdf_data_offset: usize,
    /// Offset (in floats) where point data begins.
    pub point_data_offset: usize,
    /// Offset (in floats) where effect data begins.
    pub effect_data_offset: usize,
    /// Offset (in floats) where vector data begins.
    pub vector_data_offset: usize,
    /// Offset (in floats) where label data begins.
    pub label_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_sdf_instances: usize,
        max_points: usize,
        max_effect_points: usize,
        max_vector_vertices: usize,
        max_labels: usize,
        max_events: usize,
    ) -> Self {
        let sdf_data_floats = max_sdf_instances * SDF_INSTANCE_FLOATS;
        let point_data_floats = max_points * POINT_FLOATS;
        let effect_data_floats = max_effect_points * POINT_FLOATS;
        let vector_data_floats = max_vector_vertices * VECTOR_VERTEX_FLOATS;
        let label_data_floats = max_labels * LABEL_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let sdf_data_offset = HEADER_FLOATS;
        let point_data_offset = sdf_data_offset + sdf_data_floats;
        let effect_data_offset = point_data_offset + point_data_floats;
        let vector_data_offset = effect_data_offset + effect_data_floats;
        let label_data_offset = vector_data_offset + vector_data_floats;
        let event_data_offset = label_data_offset + label_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_sdf_instances,
            max_points,
            max_effect_points,
            max_vector_vertices,
            max_labels,
            max_events,
            sdf_data_floats,
            point_data_floats,
            effect_data_floats,
            vector_data_floats,
            label_data_floats,
            event_data_floats,
            sdf_data_offset,
            point_data_offset,
            effect_data_offset,
            vector_data_offset,
            label_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_sdf_instances,
            config.max_points,
            config.max_effect_points,
            config.max_vector_vertices,
            config.max_labels,
            config.max_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());

        assert_eq!(layout.max_sdf_instances, 64);
        assert_eq!(layout.max_points, 8192);
        assert_eq!(layout.max_effect_points, 1024);
        assert_eq!(layout.max_vector_vertices, 16384);
        assert_eq!(layout.max_labels, 16);
        assert_eq!(layout.max_events, 32);

        assert_eq!(layout.sdf_data_floats, 64 * 12);
        assert_eq!(layout.point_data_floats, 8192 * 8);
        assert_eq!(layout.effect_data_floats, 1024 * 8);
        assert_eq!(layout.vector_data_floats, 16384 * 6);
        assert_eq!(layout.label_data_floats, 16 * 4);
        assert_eq!(layout.event_data_floats, 32 * 4);

        let expected_total = HEADER_FLOATS
            + 64 * 12
            + 8192 * 8
            + 1024 * 8
            + 16384 * 6
            + 16 * 4
            + 32 * 4;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(32, 4096, 512, 8192, 8, 16);

        assert_eq!(layout.sdf_data_offset, HEADER_FLOATS);
        assert_eq!(
            layout.point_data_offset,
            layout.sdf_data_offset + layout.sdf_data_floats
        );
        assert_eq!(
            layout.effect_data_offset,
            layout.point_data_offset + layout.point_data_floats
        );
        assert_eq!(
            layout.vector_data_offset,
            layout.effect_data_offset + layout.effect_data_floats
        );
        assert_eq!(
            layout.label_data_offset,
            layout.vector_data_offset + layout.vector_data_floats
        );
        assert_eq!(
            layout.event_data_offset,
            layout.label_data_offset + layout.label_data_floats
        );
        assert_eq!(
            layout.buffer_total_floats,
            layout.event_data_offset + layout.event_data_floats
        );
    }

    #[test]
    fn stride_constants_match_instance_types() {
        use crate::renderer::{LabelInstance, PointInstance, SDFInstance};
        assert_eq!(SDF_INSTANCE_FLOATS, SDFInstance::FLOATS);
        assert_eq!(POINT_FLOATS, PointInstance::FLOATS);
        assert_eq!(LABEL_FLOATS, LabelInstance::FLOATS);
    }
}
