//! Grid mobility: movement confined to the four cardinal directions, with
//! boundary reflection and a small chance of changing direction at each
//! step (modeling a node turning at a street intersection).

use ns_core::{NodeRng, Position, WorldBounds};

use crate::model::{Mobility, MobilityState};

const DIRECTIONS: [(f32, f32); 4] = [(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)];

/// Probability of re-rolling direction at each step, independent of
/// hitting a boundary.
const INTERSECTION_TURN_PROB: f64 = 0.10;

pub struct Grid;

impl Grid {
    fn random_dir(rng: &mut NodeRng) -> (f32, f32) {
        *rng.choose(&DIRECTIONS).expect("DIRECTIONS is non-empty")
    }
}

impl Mobility for Grid {
    fn init_state(&self, _pos: Position, _bounds: WorldBounds, rng: &mut NodeRng) -> MobilityState {
        MobilityState::Grid { dir: Self::random_dir(rng) }
    }

    fn advance(
        &self,
        state: &mut MobilityState,
        pos: Position,
        dt_s: f32,
        speed_mps: f32,
        bounds: WorldBounds,
        rng: &mut NodeRng,
    ) -> Position {
        let MobilityState::Grid { dir } = state else {
            return pos;
        };

        if rng.gen_bool(INTERSECTION_TURN_PROB) {
            *dir = Self::random_dir(rng);
        }

        let step = speed_mps * dt_s;
        let next = Position::new(pos.x + dir.0 * step, pos.y + dir.1 * step);
        let (clamped, hit_x, hit_y) = bounds.reflect(next);

        if hit_x || hit_y {
            *dir = Self::random_dir(rng);
        }

        clamped
    }
}
