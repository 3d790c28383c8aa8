//! Radio PHY profiles.
//!
//! Every node is assigned one of a small, fixed set of physical-layer
//! profiles at creation time. The profile determines radio range, nominal
//! data rate, and energy draw — it never changes for the lifetime of the
//! node.

/// The radio technology a node transmits with.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Phy {
    WiFi,
    Ble,
}

impl Phy {
    /// The fixed profile associated with this PHY.
    #[inline]
    pub fn profile(self) -> PhyProfile {
        match self {
            Phy::WiFi => PhyProfile {
                range_m: 55.0,
                data_rate_bps: 54_000,
                idle_energy_per_s: 0.5,
                sleep_energy_per_s: 0.05,
            },
            Phy::Ble => PhyProfile {
                range_m: 15.0,
                data_rate_bps: 1_000,
                idle_energy_per_s: 0.1,
                sleep_energy_per_s: 0.01,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phy::WiFi => "wifi",
            Phy::Ble => "ble",
        }
    }
}

impl std::fmt::Display for Phy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed per-PHY constants (see the external defaults table).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhyProfile {
    pub range_m: f32,
    pub data_rate_bps: u32,
    pub idle_energy_per_s: f32,
    pub sleep_energy_per_s: f32,
}
