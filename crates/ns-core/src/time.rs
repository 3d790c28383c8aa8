//! Simulation time model.
//!
//! # Design
//!
//! Time is represented two ways:
//!
//!   - `Tick(u64)` — a monotonically increasing step counter, used for
//!     ordering and cheap equality comparisons.
//!   - `SimClock::now_s` — simulated wall-clock seconds, advanced by a fixed
//!     `tick_dt_s` each tick. Mobility, the MAC slot accumulator, and MQTT's
//!     periodic sweeps all reason in seconds, not ticks, so the clock keeps
//!     both in lockstep rather than forcing everything through tick
//!     arithmetic.
//!
//! Default tick length is 20 ms (`tick_dt_s = 0.020`), independent of the
//! MAC's own 10 ms slot length — the two accumulate independently.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Simulated wall-clock time, advanced by a fixed step each tick.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated seconds per tick. Default: 0.020 (20 ms).
    pub tick_dt_s: f32,
    /// Elapsed simulated seconds since tick 0.
    pub now_s: f64,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_dt_s: f32) -> Self {
        Self {
            tick_dt_s,
            now_s: 0.0,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.now_s += self.tick_dt_s as f64;
        self.current_tick = self.current_tick.offset(1);
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3}s)", self.current_tick, self.now_s)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration. Typically constructed by the host
/// (outside this crate's scope) and passed to `ns-engine::Store::new`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated seconds per tick. Default: 0.020 (20 ms).
    pub tick_dt_s: f32,
    /// Master RNG seed for the global `SimRng`. Per-node RNGs derive from
    /// this via `NodeRng::new`.
    pub seed: u64,
    /// World width, metres.
    pub world_width: f32,
    /// World height, metres.
    pub world_height: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_dt_s: 0.020,
            seed: 123,
            world_width: 500.0,
            world_height: 500.0,
        }
    }
}

impl SimConfig {
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_dt_s)
    }
}
