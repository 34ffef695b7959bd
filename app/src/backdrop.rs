/// Procedural backdrop — layered starfield and the asteroid belt.
///
/// All points are generated once at init into `PointState` batches and
/// only reprojected per frame. The belt batch carries a yaw so the whole
/// ring slowly revolves without touching individual points.

use orrery_engine::{
    random_unit, PointBatch, PointBatchId, PointSprite, PointState, Rng, Vec3,
};

/// White starfield shells: (count, size, shell radius, alpha).
const STAR_LAYERS: [(usize, f32, f32, f32); 3] = [
    (1000, 0.5, 1500.0, 0.3),
    (2000, 1.0, 2000.0, 0.6),
    (3000, 0.3, 2500.0, 0.4),
];

/// Accent stars: (color, count, alpha).
const COLORED_STARS: [((f32, f32, f32), usize, f32); 3] = [
    ((1.0, 0.42, 0.42), 50, 0.8),
    ((0.306, 0.804, 0.769), 30, 0.6),
    ((0.271, 0.718, 0.820), 40, 0.7),
];
const COLORED_STAR_SIZE: f32 = 1.5;
const COLORED_STAR_RADIUS: f32 = 1800.0;

pub const BELT_COUNT: usize = 500;
pub const BELT_INNER: f32 = 85.0;
pub const BELT_OUTER: f32 = 95.0;
const BELT_HALF_HEIGHT: f32 = 1.0;
const BELT_MIN_SIZE: f32 = 0.1;
const BELT_MAX_SIZE: f32 = 0.6;

/// Spawn every starfield batch, returning the batch handles in layer order.
pub fn spawn_starfield(points: &mut PointState, rng: &mut Rng) -> Vec<PointBatchId> {
    let mut ids = Vec::new();
    for &(count, size, radius, alpha) in &STAR_LAYERS {
        let mut stars = Vec::with_capacity(count);
        for _ in 0..count {
            stars.push(PointSprite {
                pos: random_unit(rng) * radius,
                size,
                color: [1.0, 1.0, 1.0, alpha],
            });
        }
        ids.push(points.add_batch(PointBatch::new(stars)));
    }

    for &((r, g, b), count, alpha) in &COLORED_STARS {
        let mut stars = Vec::with_capacity(count);
        for _ in 0..count {
            stars.push(PointSprite {
                pos: random_unit(rng) * COLORED_STAR_RADIUS,
                size: COLORED_STAR_SIZE,
                color: [r, g, b, alpha],
            });
        }
        ids.push(points.add_batch(PointBatch::new(stars)));
    }
    ids
}

/// Spawn the asteroid belt as one rotatable batch between Mars and Jupiter.
pub fn spawn_belt(points: &mut PointState, rng: &mut Rng) -> PointBatchId {
    let mut rocks = Vec::with_capacity(BELT_COUNT);
    for _ in 0..BELT_COUNT {
        let angle = rng.next_range(0.0, std::f32::consts::TAU);
        let radius = rng.next_range(BELT_INNER, BELT_OUTER);
        let height = rng.next_range(-BELT_HALF_HEIGHT, BELT_HALF_HEIGHT);
        let grey = rng.next_range(0.4, 0.7);
        rocks.push(PointSprite {
            pos: Vec3::new(radius * angle.cos(), height, radius * angle.sin()),
            size: rng.next_range(BELT_MIN_SIZE, BELT_MAX_SIZE),
            color: [grey, grey, grey, 1.0],
        });
    }
    points.add_batch(PointBatch::new(rocks))
}

/// Total backdrop points, used to size the point buffer.
pub fn total_points() -> usize {
    let stars: usize = STAR_LAYERS.iter().map(|l| l.0).sum();
    let colored: usize = COLORED_STARS.iter().map(|l| l.1).sum();
    stars + colored + BELT_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn belt_rocks_stay_in_annulus() {
        let mut points = PointState::new(8192);
        let mut rng = Rng::new(3);
        let id = spawn_belt(&mut points, &mut rng);
        let batch = points.batch(id);
        assert_eq!(batch.points.len(), BELT_COUNT);
        for rock in &batch.points {
            let r = (rock.pos.x * rock.pos.x + rock.pos.z * rock.pos.z).sqrt();
            assert!(r >= BELT_INNER - 1e-3 && r <= BELT_OUTER + 1e-3);
            assert!(rock.pos.y.abs() <= BELT_HALF_HEIGHT + 1e-3);
        }
    }

    #[test]
    fn starfield_batches_cover_expected_total() {
        let mut points = PointState::new(8192);
        let mut rng = Rng::new(3);
        spawn_starfield(&mut points, &mut rng);
        spawn_belt(&mut points, &mut rng);
        assert!(total_points() <= 8192);
    }

    #[test]
    fn stars_sit_on_their_shells() {
        let mut points = PointState::new(8192);
        let mut rng = Rng::new(11);
        let ids = spawn_starfield(&mut points, &mut rng);
        assert_eq!(ids.len(), STAR_LAYERS.len() + COLORED_STARS.len());
        // First batch is the innermost white shell.
        let batch = points.batch(ids[0]);
        for star in batch.points.iter().take(20) {
            assert!((star.pos.length() - 1500.0).abs() < 1.0);
        }
    }
}
