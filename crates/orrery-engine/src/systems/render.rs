//! Projection pass: entities with mesh components become 2D SDF
//! instances, sorted back-to-front for alpha blending.

use glam::Vec2;

use crate::api::types::EntityId;
use crate::camera::Camera3D;
use crate::components::entity::Entity;
use crate::renderer::{SDFBuffer, SDFInstance};

/// Near-plane cutoff: entities closer than this are culled.
const NEAR_DEPTH: f32 = 0.1;

/// Build the SDF instance buffer from entities with mesh components.
/// Instances are sorted far-to-near so translucent shells composite
/// correctly, and truncated at `max`.
pub fn build_sdf_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    camera: &Camera3D,
    buffer: &mut SDFBuffer,
    max: usize,
) {
    buffer.clear();
    let mut projected: Vec<SDFInstance> = Vec::new();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let proj = camera.project(entity.pos);
        if proj.depth <= NEAR_DEPTH {
            continue;
        }
        projected.push(SDFInstance {
            x: proj.pos.x,
            y: proj.pos.y,
            radius: mesh.shape.radius() * proj.scale,
            rotation: entity.rotation,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            alpha: mesh.alpha,
            shininess: mesh.shininess,
            emissive: mesh.emissive,
            // _pad1 carries the view depth for shader-side fog.
            _pad0: 0.0,
            _pad1: proj.depth,
        });
    }
    // Back-to-front.
    projected.sort_by(|a, b| {
        b._pad1
            .partial_cmp(&a._pad1)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    projected.truncate(max);
    for instance in projected {
        buffer.push(instance);
    }
}

/// Ray-pick the nearest entity whose mesh sphere the screen point hits.
pub fn pick<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    camera: &Camera3D,
    screen: Vec2,
) -> Option<EntityId> {
    let ray = camera.pick_ray(screen);
    let mut best: Option<(f32, EntityId)> = None;
    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        if let Some(t) = ray.hit_sphere(entity.pos, mesh.shape.radius()) {
            if best.map_or(true, |(bt, _)| t < bt) {
                best = Some((t, entity.id));
            }
        }
    }
    best.map(|(_, id)| id)
}
