//! MQTT-style messages and the deliveries derived from them.

use ns_core::NodeId;

/// A published message. QoS is `0` (fire-and-forget) or `1` (at-least-once,
/// acked and retransmitted on timeout).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MqttMessage {
    pub topic: String,
    pub payload: String,
    pub qos: u8,
    pub msg_id: u64,
    pub publisher_id: NodeId,
    pub timestamp: f64,
    /// Set on retransmitted copies only.
    pub dup: bool,
    pub retained: bool,
}

/// One subscriber's copy of a published message, carrying the
/// per-subscription effective QoS (`min(publisher_qos, subscriber_qos)`).
#[derive(Clone, Debug, PartialEq)]
pub struct Delivery {
    pub subscriber: NodeId,
    pub message: MqttMessage,
    pub effective_qos: u8,
}
