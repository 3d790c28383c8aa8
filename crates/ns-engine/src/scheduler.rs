//! The `Scheduler` struct and its tick loop.

use ns_core::{SimClock, Tick};

use crate::metrics::Metrics;
use crate::observer::SchedulerObserver;
use crate::store::Store;

/// Drives `Store` through one simulated step at a time.
///
/// Each [`tick`][Scheduler::tick] runs, in order:
///
/// 1. **Mobility** — every mobile node advances along its movement model.
/// 2. **Physical/energy** — every node's duty-cycle and energy budget
///    advances.
/// 3. **Routing** — one route-advertisement round runs if
///    `advertisement_interval_s` has elapsed.
/// 4. **MAC** — slots are drained one at a time while this tick's elapsed
///    time (accumulated across ticks) covers another `slot_s`; any packet
///    that reached an intermediate hop is immediately resolved and
///    re-enqueued toward its next hop.
/// 5. **MQTT** — given a chance to run its periodic processing step
///    (reachability, keep-alive, retransmission), which itself only fires
///    every `processing_interval_s`.
///
/// `running` gates whether `tick` does anything at all — `start`/`pause`
/// flip it, mirroring a simulation that can be paused and resumed from a
/// UI without losing state.
pub struct Scheduler {
    pub clock: SimClock,
    pub store: Store,
    running: bool,
    mac_accum_s: f32,
}

impl Scheduler {
    pub fn new(store: Store, tick_dt_s: f32) -> Self {
        Self {
            clock: SimClock::new(tick_dt_s),
            store,
            running: false,
            mac_accum_s: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Rebuild the store from scratch and rewind the clock. Does not change
    /// `running`.
    pub fn reset(&mut self) {
        self.store.reset();
        self.clock = SimClock::new(self.clock.tick_dt_s);
        self.mac_accum_s = 0.0;
    }

    /// Run one tick, calling `observer`'s hooks at each stage. A no-op if
    /// the scheduler is paused.
    pub fn tick(&mut self, observer: &mut dyn SchedulerObserver) {
        if !self.running {
            return;
        }

        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let dt_s = self.clock.tick_dt_s;
        self.store.set_now(self.clock.now_s);

        self.store.advance_mobility(dt_s);
        self.store.advance_physical(dt_s);
        self.store.maybe_emit_route_round(dt_s);

        self.drain_mac_slots(dt_s, now, observer);

        self.store.mqtt_tick(dt_s);
        observer.on_mqtt_step(now);

        let metrics = Metrics::compute(self.clock.now_s, &self.store.mac_stats());
        observer.on_tick_end(now, &metrics);

        self.clock.advance();
    }

    /// Run `n` ticks back to back. A no-op per tick while paused, same as
    /// calling `tick` directly `n` times.
    pub fn run_ticks(&mut self, n: u64, observer: &mut dyn SchedulerObserver) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    fn drain_mac_slots(&mut self, dt_s: f32, now: Tick, observer: &mut dyn SchedulerObserver) {
        self.mac_accum_s += dt_s;
        let slot_s = self.store.mac_slot_s();
        while self.mac_accum_s >= slot_s {
            self.mac_accum_s -= slot_s;
            let outcome = self.store.run_mac_slot();
            for pkt in outcome.to_forward {
                self.store.forward_packet(pkt);
            }
            observer.on_mac_slot(now);
        }
    }
}
