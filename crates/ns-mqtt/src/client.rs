//! Per-client MQTT bookkeeping: subscriptions, dedup, connectivity.

use std::collections::HashSet;

use crate::stats::ClientStats;
use crate::{MqttConfig, MqttMessage};

pub struct ClientState {
    pub subscribed_topics: HashSet<String>,
    received_msg_ids: HashSet<u64>,
    pub connected: bool,
    pub last_activity: f64,
    pub reconnect_attempts: u32,
    stats: ClientStats,
}

impl ClientState {
    pub fn new(now_s: f64) -> Self {
        Self {
            subscribed_topics: HashSet::new(),
            received_msg_ids: HashSet::new(),
            connected: true,
            last_activity: now_s,
            reconnect_attempts: 0,
            stats: ClientStats::default(),
        }
    }

    pub fn stats(&self) -> ClientStats {
        self.stats
    }

    /// Receive `message` at `effective_qos`. Returns `Some(msg_id)` if an
    /// ack must be sent back to the broker (QoS 1, new or duplicate alike).
    pub fn receive(&mut self, message: &MqttMessage, effective_qos: u8, now_s: f64) -> Option<u64> {
        self.last_activity = now_s;
        if self.received_msg_ids.contains(&message.msg_id) {
            self.stats.duplicates_received += 1;
            return (effective_qos == 1).then(|| {
                self.stats.acks_sent += 1;
                message.msg_id
            });
        }

        self.received_msg_ids.insert(message.msg_id);
        self.stats.messages_received += 1;
        (effective_qos == 1).then(|| {
            self.stats.acks_sent += 1;
            message.msg_id
        })
    }

    pub fn record_publish(&mut self) {
        self.stats.messages_published += 1;
    }

    pub fn touch(&mut self, now_s: f64) {
        self.last_activity = now_s;
    }

    /// `true` if the client was connected and has now gone idle past the
    /// keep-alive disconnect threshold. Marks it disconnected as a side effect.
    pub fn check_keep_alive(&mut self, now_s: f64, config: &MqttConfig) -> bool {
        if self.connected && now_s - self.last_activity > (config.keep_alive_s * config.disconnect_multiplier) as f64 {
            self.connected = false;
            true
        } else {
            false
        }
    }
}
