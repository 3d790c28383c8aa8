//! Random Waypoint mobility: pick a random target, walk to it, pause, repeat.

use ns_core::{NodeRng, Position, WorldBounds};

use crate::model::{Mobility, MobilityState};

/// Restricts waypoint sampling to a disc instead of the full world bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundedArea {
    pub center: Position,
    pub max_radius: f32,
}

/// Classic Random Waypoint: move in a straight line to a randomly chosen
/// target, pause for a random duration, pick a new target, repeat.
///
/// When `bounded` is set, targets are sampled uniformly within a disc
/// (random angle, random distance up to `max_radius`) instead of uniformly
/// across the whole world — this models a node that roams around a fixed
/// point (e.g. a room or a yard) rather than the whole simulated area.
pub struct RandomWaypoint {
    pub bounded: Option<BoundedArea>,
    pub pause_min_s: f32,
    pub pause_max_s: f32,
}

impl RandomWaypoint {
    pub fn unbounded(pause_min_s: f32, pause_max_s: f32) -> Self {
        Self {
            bounded: None,
            pause_min_s,
            pause_max_s,
        }
    }

    pub fn bounded(area: BoundedArea, pause_min_s: f32, pause_max_s: f32) -> Self {
        Self {
            bounded: Some(area),
            pause_min_s,
            pause_max_s,
        }
    }

    fn sample_target(&self, bounds: WorldBounds, rng: &mut NodeRng) -> Position {
        match self.bounded {
            Some(area) => {
                let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
                let dist: f32 = rng.gen_range(0.0..area.max_radius);
                let p = Position::new(
                    area.center.x + dist * angle.cos(),
                    area.center.y + dist * angle.sin(),
                );
                let (clamped, _, _) = bounds.reflect(p);
                clamped
            }
            None => Position::new(
                rng.gen_range(0.0..bounds.width),
                rng.gen_range(0.0..bounds.height),
            ),
        }
    }
}

impl Mobility for RandomWaypoint {
    fn init_state(&self, pos: Position, bounds: WorldBounds, rng: &mut NodeRng) -> MobilityState {
        let _ = pos;
        MobilityState::RandomWaypoint {
            target: self.sample_target(bounds, rng),
            pause_remaining_s: 0.0,
        }
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
        let MobilityState::RandomWaypoint { target, pause_remaining_s } = state else {
            return pos;
        };

        if *pause_remaining_s > 0.0 {
            *pause_remaining_s = (*pause_remaining_s - dt_s).max(0.0);
            return pos;
        }

        let to_target = pos.distance_m(*target);
        let step = speed_mps * dt_s;

        if step >= to_target {
            let arrived = *target;
            *target = self.sample_target(bounds, rng);
            *pause_remaining_s = rng.gen_range(self.pause_min_s..=self.pause_max_s);
            arrived
        } else {
            let dx = target.x - pos.x;
            let dy = target.y - pos.y;
            let frac = step / to_target;
            Position::new(pos.x + dx * frac, pos.y + dy * frac)
        }
    }
}
