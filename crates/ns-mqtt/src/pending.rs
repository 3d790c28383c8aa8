//! QoS-1 pending acknowledgments.

use ns_core::NodeId;

use crate::MqttMessage;

#[derive(Clone, Debug)]
pub struct PendingAck {
    pub msg_id: u64,
    pub subscriber_id: NodeId,
    pub message: MqttMessage,
    pub retry_count: u32,
    pub last_sent: f64,
}
