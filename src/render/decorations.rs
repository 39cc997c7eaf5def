// SPDX-FileCopyrightText: 2026 Questmap Contributors
// SPDX-License-Identifier: MIT

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{CanvasSize, MapConfig};
use crate::model::{Decoration, DecorationKind, MapNode, Position};

use super::path::RoadGeometry;

const DECORATION_DOMAIN: u64 = 0x71c3_a90d_5b24_e681;
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0001_0000_01b3;

/// Road samples per curve segment used for the exclusion test.
const CORRIDOR_SAMPLES_PER_SEGMENT: usize = 8;

/// How many candidates to draw per requested decoration before giving up.
/// Keeps placement bounded and deterministic even when the corridor covers
/// most of the canvas; under-filling is acceptable there.
const ATTEMPTS_PER_DECORATION: usize = 8;

fn fnv1a(mut hash: u64, bytes: &[u8]) -> u64 {
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

fn world_seed(world_index: u32) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    hash = fnv1a(hash, &DECORATION_DOMAIN.to_le_bytes());
    hash = fnv1a(hash, &world_index.to_le_bytes());
    hash
}

/// The exclusion zone decorations must stay clear of: sampled points along
/// the road curve plus every node center.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadCorridor {
    keep_out: Vec<Position>,
}

impl RoadCorridor {
    pub fn new(road: &RoadGeometry, nodes: &[MapNode]) -> Self {
        let mut keep_out = road.sample_points(CORRIDOR_SAMPLES_PER_SEGMENT);
        keep_out.extend(nodes.iter().map(MapNode::position));
        Self { keep_out }
    }

    pub fn is_clear(&self, point: Position, clearance: f64) -> bool {
        self.keep_out
            .iter()
            .all(|p| p.distance_to(point) >= clearance)
    }
}

/// Deterministic scenery scatter for one world.
///
/// The random stream is keyed by `world_index` alone (no wall clock, no node
/// data), value-seeded so the same world always yields the same candidates.
/// The corridor only filters candidates by rejection; with the map geometry
/// being deterministic too, the accepted scatter is stable across renders.
pub fn decorations_for(
    world_index: u32,
    canvas: CanvasSize,
    corridor: &RoadCorridor,
    config: &MapConfig,
) -> Vec<Decoration> {
    let mut rng = ChaCha8Rng::seed_from_u64(world_seed(world_index));

    let mut decorations = Vec::with_capacity(config.decoration_count);
    let max_attempts = config.decoration_count * ATTEMPTS_PER_DECORATION;

    for _ in 0..max_attempts {
        if decorations.len() == config.decoration_count {
            break;
        }

        // Draw every attribute before the accept test so the stream position
        // does not depend on which candidates were rejected.
        let x = rng.gen_range(0.0..canvas.width());
        let y = rng.gen_range(0.0..canvas.height());
        let kind = DecorationKind::ALL[rng.gen_range(0..DecorationKind::ALL.len())];
        let size = rng.gen_range(0.6..1.4);
        let flip = rng.gen_bool(0.5);

        if !corridor.is_clear(Position::new(x, y), config.decoration_clearance) {
            continue;
        }

        decorations.push(Decoration {
            kind,
            x,
            y,
            size,
            flip,
        });
    }

    decorations
}

#[cfg(test)]
mod tests {
    use super::{decorations_for, world_seed, RoadCorridor};
    use crate::config::{CanvasSize, MapConfig};
    use crate::model::Position;
    use crate::render::path::RoadGeometry;

    fn canvas() -> CanvasSize {
        CanvasSize::new(800.0, 600.0).expect("canvas")
    }

    fn empty_corridor() -> RoadCorridor {
        RoadCorridor::new(&RoadGeometry::new(&[]), &[])
    }

    #[test]
    fn world_seeds_differ_between_worlds() {
        assert_ne!(world_seed(0), world_seed(1));
        assert_ne!(world_seed(1), world_seed(2));
    }

    #[test]
    fn same_world_yields_an_identical_scatter() {
        let config = MapConfig::default();
        let corridor = empty_corridor();
        let first = decorations_for(3, canvas(), &corridor, &config);
        let second = decorations_for(3, canvas(), &corridor, &config);
        assert_eq!(first, second);
        assert_eq!(first.len(), config.decoration_count);
    }

    #[test]
    fn different_worlds_yield_different_scatters() {
        let config = MapConfig::default();
        let corridor = empty_corridor();
        let a = decorations_for(1, canvas(), &corridor, &config);
        let b = decorations_for(2, canvas(), &corridor, &config);
        assert_ne!(a, b);
    }

    #[test]
    fn decorations_stay_clear_of_the_corridor() {
        let config = MapConfig::default();
        let road = RoadGeometry::new(&[
            Position::new(80.0, 300.0),
            Position::new(400.0, 300.0),
            Position::new(720.0, 300.0),
        ]);
        let corridor = RoadCorridor::new(&road, &[]);

        let decorations = decorations_for(7, canvas(), &corridor, &config);
        for decoration in &decorations {
            assert!(
                corridor.is_clear(
                    Position::new(decoration.x, decoration.y),
                    config.decoration_clearance
                ),
                "{decoration:?} is inside the corridor"
            );
        }
    }

    #[test]
    fn placement_terminates_even_when_nothing_fits() {
        let config = MapConfig {
            decoration_clearance: 10_000.0,
            ..MapConfig::default()
        };
        let road = RoadGeometry::new(&[Position::new(400.0, 300.0)]);
        let corridor = RoadCorridor::new(&road, &[]);

        let decorations = decorations_for(0, canvas(), &corridor, &config);
        assert!(decorations.is_empty());
    }

    #[test]
    fn decorations_fall_inside_the_canvas() {
        let config = MapConfig::default();
        let canvas = canvas();
        let decorations = decorations_for(5, canvas, &empty_corridor(), &config);
        for decoration in &decorations {
            assert!(decoration.x >= 0.0 && decoration.x < canvas.width());
            assert!(decoration.y >= 0.0 && decoration.y < canvas.height());
            assert!(decoration.size >= 0.6 && decoration.size < 1.4);
        }
    }
}
