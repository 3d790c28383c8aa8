//! MQTT subsystem configuration.

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MqttConfig {
    /// How often (simulated seconds) the periodic processing step runs:
    /// reachability/reconnect sweep, keep-alive sweep, retransmission sweep.
    pub processing_interval_s: f32,
    pub ack_timeout_s: f32,
    pub max_retries: u32,
    pub keep_alive_s: f32,
    /// A client is marked disconnected once idle longer than
    /// `keep_alive_s * disconnect_multiplier`.
    pub disconnect_multiplier: f32,
    pub max_reconnect_attempts: u32,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            processing_interval_s: 0.1,
            ack_timeout_s: 5.0,
            max_retries: 3,
            keep_alive_s: 60.0,
            disconnect_multiplier: 1.5,
            max_reconnect_attempts: 5,
        }
    }
}
