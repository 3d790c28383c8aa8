//! Scheduler observer trait for progress reporting and data collection.

use ns_core::Tick;

use crate::metrics::Metrics;

/// Callbacks invoked by [`Scheduler::tick`][crate::Scheduler::tick] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SchedulerObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per drained MAC slot, after arbitration has resolved.
    fn on_mac_slot(&mut self, _tick: Tick) {}

    /// Called once per tick, after MQTT has been given a chance to run its
    /// processing step. `Mqtt` accumulates simulated time internally and
    /// only actually runs the step every `processing_interval_s`, so this
    /// can fire several times between two real MQTT steps.
    fn on_mqtt_step(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the freshly computed metrics
    /// view.
    fn on_tick_end(&mut self, _tick: Tick, _metrics: &Metrics) {}
}

/// A [`SchedulerObserver`] that does nothing.
pub struct NoopObserver;

impl SchedulerObserver for NoopObserver {}
