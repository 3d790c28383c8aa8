//! Physical/energy duty-cycle tick.
//!
//! Mirrors the reference engine's `energy_tick`: sleep is tied to a fixed
//! 1-second duty cycle, independent of `tick_dt_s`, so `sleep_ratio` always
//! means "fraction of each wall-clock second the node spends asleep"
//! regardless of how finely the simulation ticks.

use ns_core::Phy;

use crate::Node;

/// Range check between two nodes: within the lesser of their two PHY
/// ranges. Sleep state doesn't gate this — it only affects energy draw,
/// see `tick` below.
pub fn in_range(a_pos: ns_core::Position, a_phy: Phy, b_pos: ns_core::Position, b_phy: Phy) -> bool {
    let range = a_phy.profile().range_m.min(b_phy.profile().range_m);
    a_pos.distance_m(b_pos) <= range
}

/// Advance one node's duty cycle and energy budget by `dt_s` simulated
/// seconds.
pub fn tick(node: &mut Node, now_s: f64, dt_s: f32) {
    let time_in_cycle = now_s.rem_euclid(1.0);
    node.awake = time_in_cycle > node.sleep_ratio as f64;

    let profile = node.phy.profile();
    let draw = if node.awake {
        profile.idle_energy_per_s
    } else {
        profile.sleep_energy_per_s
    };
    node.energy = (node.energy - draw * dt_s).max(0.0);
}
