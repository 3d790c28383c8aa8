//! Unit tests for ns-mobility.

#[cfg(test)]
mod random_waypoint {
    use ns_core::{NodeId, Position, WorldBounds};

    use crate::random_waypoint::{BoundedArea, RandomWaypoint};
    use crate::{Mobility, MobilityStore};

    #[test]
    fn node_moves_toward_target_each_tick() {
        let model = RandomWaypoint::unbounded(0.0, 0.0);
        let bounds = WorldBounds::new(1000.0, 1000.0);
        let mut store = MobilityStore::new(bounds, 42);
        let node = NodeId(1);
        let start = Position::new(500.0, 500.0);
        store.register(node, start, &model);

        let next = store.advance(node, &model, start, 1.0, 1.0);
        // Node should have moved at least a little (unless the sampled
        // target happens to equal the start, astronomically unlikely).
        assert!(next.distance_m(start) > 0.0);
    }

    #[test]
    fn bounded_targets_stay_within_disc_radius_of_center_plus_slack() {
        let area = BoundedArea {
            center: Position::new(50.0, 50.0),
            max_radius: 10.0,
        };
        let model = RandomWaypoint::bounded(area, 0.0, 0.0);
        let bounds = WorldBounds::new(200.0, 200.0);
        let mut store = MobilityStore::new(bounds, 7);
        let node = NodeId(1);
        store.register(node, area.center, &model);

        // Run enough ticks to guarantee at least one waypoint re-sample.
        let mut pos = area.center;
        for _ in 0..50 {
            pos = store.advance(node, &model, pos, 0.1, 5.0);
            assert!(pos.distance_m(area.center) <= area.max_radius + 1.0);
        }
    }

    #[test]
    fn unregistered_node_does_not_move() {
        let model = RandomWaypoint::unbounded(0.0, 1.0);
        let bounds = WorldBounds::new(100.0, 100.0);
        let mut store = MobilityStore::new(bounds, 1);
        let pos = Position::new(10.0, 10.0);
        let next = store.advance(NodeId(99), &model, pos, 1.0, 1.0);
        assert_eq!(next, pos);
    }
}

#[cfg(test)]
mod grid {
    use ns_core::{NodeId, Position, WorldBounds};

    use crate::{Grid, Mobility, MobilityStore};

    #[test]
    fn node_reflects_at_boundary() {
        let model = Grid;
        let bounds = WorldBounds::new(10.0, 10.0);
        let mut store = MobilityStore::new(bounds, 5);
        let node = NodeId(1);
        let start = Position::new(9.9, 5.0);
        store.register(node, start, &model);

        let mut pos = start;
        for _ in 0..20 {
            pos = store.advance(node, &model, pos, 0.1, 5.0);
            assert!(bounds.contains(pos));
        }
    }
}
