//! A single MQTT broker: subscriptions, retained messages, QoS-1 pending
//! acks and their retransmission sweep.

use std::collections::HashMap;

use ns_core::NodeId;

use crate::pending::PendingAck;
use crate::stats::BrokerStats;
use crate::{Delivery, MqttConfig, MqttMessage};

#[derive(Default)]
pub struct Broker {
    /// topic -> (subscriber -> subscribed qos)
    subscriptions: HashMap<String, HashMap<NodeId, u8>>,
    retained: HashMap<String, MqttMessage>,
    pending_acks: HashMap<(u64, NodeId), PendingAck>,
    stats: BrokerStats,
    next_msg_id: u64,
}

impl Broker {
    pub fn stats(&self) -> BrokerStats {
        self.stats
    }

    pub fn next_msg_id(&mut self) -> u64 {
        self.next_msg_id += 1;
        self.next_msg_id
    }

    /// Subscribe `client` to `topic` at `qos`. Returns the retained message
    /// for `topic`, if any, for immediate delivery to the new subscriber.
    pub fn subscribe(&mut self, client: NodeId, topic: &str, qos: u8) -> Option<MqttMessage> {
        self.subscriptions.entry(topic.to_string()).or_default().insert(client, qos);
        self.retained.get(topic).cloned()
    }

    pub fn unsubscribe(&mut self, client: NodeId, topic: &str) {
        if let Some(subs) = self.subscriptions.get_mut(topic) {
            subs.remove(&client);
        }
    }

    /// Record `message` and compute the per-subscriber deliveries, one QoS-1
    /// pending ack per `(msg_id, subscriber)` pair not already tracked.
    pub fn publish(&mut self, message: MqttMessage) -> Vec<Delivery> {
        self.stats.messages_received += 1;

        if message.retained {
            self.retained.insert(message.topic.clone(), message.clone());
        }

        let Some(subs) = self.subscriptions.get(&message.topic) else {
            return Vec::new();
        };

        let mut deliveries = Vec::with_capacity(subs.len());
        for (&sub_id, &sub_qos) in subs {
            let effective_qos = message.qos.min(sub_qos);
            match effective_qos {
                0 => self.stats.qos0_messages += 1,
                _ => {
                    self.stats.qos1_messages += 1;
                    let key = (message.msg_id, sub_id);
                    self.pending_acks.entry(key).or_insert_with(|| PendingAck {
                        msg_id: message.msg_id,
                        subscriber_id: sub_id,
                        message: message.clone(),
                        retry_count: 0,
                        last_sent: message.timestamp,
                    });
                }
            }
            deliveries.push(Delivery { subscriber: sub_id, message: message.clone(), effective_qos });
        }
        deliveries
    }

    pub fn receive_ack(&mut self, msg_id: u64, subscriber_id: NodeId) {
        if self.pending_acks.remove(&(msg_id, subscriber_id)).is_some() {
            self.stats.acks_received += 1;
        }
    }

    /// Retransmit any pending ack that has timed out, dropping it silently
    /// once `max_retries` has been exhausted.
    pub fn check_retransmissions(&mut self, now_s: f64, config: &MqttConfig) -> Vec<Delivery> {
        let mut retransmissions = Vec::new();
        let timed_out: Vec<(u64, NodeId)> = self
            .pending_acks
            .iter()
            .filter(|(_, p)| now_s - p.last_sent > config.ack_timeout_s as f64)
            .map(|(&k, _)| k)
            .collect();

        for key in timed_out {
            let pending = self.pending_acks.get_mut(&key).expect("key just collected");
            if pending.retry_count < config.max_retries {
                let mut dup = pending.message.clone();
                dup.dup = true;
                pending.retry_count += 1;
                pending.last_sent = now_s;
                self.stats.duplicates_sent += 1;
                retransmissions.push(Delivery { subscriber: pending.subscriber_id, message: dup, effective_qos: 1 });
            } else {
                self.pending_acks.remove(&key);
            }
        }
        retransmissions
    }

    pub fn pending_ack_count(&self) -> usize {
        self.pending_acks.len()
    }
}
