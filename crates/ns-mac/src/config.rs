//! MAC layer configuration.

use crate::MacError;

/// Fixed-at-construction MAC parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacConfig {
    pub slot_ms: f32,
    pub queue_capacity: usize,
    pub cw_min: u32,
    pub cw_max: u32,
    pub retry_limit: u32,
    pub base_loss_prob: f64,
    pub collision_losses: bool,
}

impl Default for MacConfig {
    fn default() -> Self {
        Self {
            slot_ms: 10.0,
            queue_capacity: 50,
            cw_min: 16,
            cw_max: 1024,
            retry_limit: 7,
            base_loss_prob: 0.01,
            collision_losses: true,
        }
    }
}

impl MacConfig {
    pub fn slot_s(&self) -> f32 {
        self.slot_ms / 1000.0
    }

    pub fn validate(&self) -> Result<(), MacError> {
        if self.cw_min == 0 || self.cw_min > self.cw_max {
            return Err(MacError::Config(format!(
                "cw_min ({}) must be nonzero and <= cw_max ({})",
                self.cw_min, self.cw_max
            )));
        }
        if self.retry_limit == 0 {
            return Err(MacError::Config("retry_limit must be > 0".into()));
        }
        if self.queue_capacity == 0 {
            return Err(MacError::Config("queue_capacity must be > 0".into()));
        }
        Ok(())
    }
}
