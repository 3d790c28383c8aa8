//! Top-level MQTT orchestration: brokers, clients, deferred deliveries to
//! disconnected clients, and the periodic reachability/keep-alive/
//! retransmission sweep.

use std::collections::{HashMap, VecDeque};

use ns_core::{NodeId, RangeCheck};

use crate::broker::Broker;
use crate::client::ClientState;
use crate::stats::{BrokerStats, ClientStats};
use crate::{Delivery, MqttConfig, MqttError, MqttMessage, MqttResult};

pub struct Mqtt {
    config: MqttConfig,
    brokers: HashMap<NodeId, Broker>,
    clients: HashMap<NodeId, ClientState>,
    pending_deliveries: HashMap<NodeId, VecDeque<(MqttMessage, u8)>>,
    accum_s: f32,
}

impl Mqtt {
    pub fn new(config: MqttConfig) -> Self {
        Self {
            config,
            brokers: HashMap::new(),
            clients: HashMap::new(),
            pending_deliveries: HashMap::new(),
            accum_s: 0.0,
        }
    }

    pub fn add_broker(&mut self, id: NodeId) {
        self.brokers.entry(id).or_default();
    }

    pub fn remove_broker(&mut self, id: NodeId) {
        self.brokers.remove(&id);
    }

    pub fn add_client(&mut self, id: NodeId, now_s: f64) {
        self.clients.entry(id).or_insert_with(|| ClientState::new(now_s));
        self.pending_deliveries.entry(id).or_default();
    }

    pub fn remove_client(&mut self, id: NodeId) {
        self.clients.remove(&id);
        self.pending_deliveries.remove(&id);
    }

    pub fn subscribe(&mut self, broker_id: NodeId, client: NodeId, topic: &str, qos: u8) -> MqttResult<Option<MqttMessage>> {
        let broker = self.brokers.get_mut(&broker_id).ok_or(MqttError::UnknownBroker(broker_id))?;
        let retained = broker.subscribe(client, topic, qos);
        if let Some(state) = self.clients.get_mut(&client) {
            state.subscribed_topics.insert(topic.to_string());
        }
        Ok(retained)
    }

    pub fn unsubscribe(&mut self, broker_id: NodeId, client: NodeId, topic: &str) -> MqttResult<()> {
        let broker = self.brokers.get_mut(&broker_id).ok_or(MqttError::UnknownBroker(broker_id))?;
        broker.unsubscribe(client, topic);
        if let Some(state) = self.clients.get_mut(&client) {
            state.subscribed_topics.remove(topic);
        }
        Ok(())
    }

    /// Publish `payload` to `topic` through `broker_id`, dispatching to
    /// every currently-connected subscriber and deferring the rest.
    pub fn publish(
        &mut self,
        broker_id: NodeId,
        publisher: NodeId,
        topic: &str,
        payload: String,
        qos: u8,
        retained: bool,
        now_s: f64,
    ) -> MqttResult<u64> {
        let msg_id = {
            let broker = self.brokers.get_mut(&broker_id).ok_or(MqttError::UnknownBroker(broker_id))?;
            broker.next_msg_id()
        };
        if let Some(state) = self.clients.get_mut(&publisher) {
            state.record_publish();
        }
        let message = MqttMessage {
            topic: topic.to_string(),
            payload,
            qos,
            msg_id,
            publisher_id: publisher,
            timestamp: now_s,
            dup: false,
            retained,
        };
        let broker = self.brokers.get_mut(&broker_id).expect("checked above");
        let deliveries = broker.publish(message);
        self.dispatch(broker_id, deliveries, now_s);
        Ok(msg_id)
    }

    pub fn receive_ack(&mut self, broker_id: NodeId, msg_id: u64, subscriber: NodeId) {
        if let Some(broker) = self.brokers.get_mut(&broker_id) {
            broker.receive_ack(msg_id, subscriber);
        }
    }

    /// Accumulate elapsed simulated time and run the periodic processing
    /// step (reachability/reconnect, keep-alive, retransmission) every time
    /// `processing_interval_s` has elapsed.
    pub fn tick(&mut self, dt_s: f32, broker_id: Option<NodeId>, range: &dyn RangeCheck, now_s: f64) {
        self.accum_s += dt_s;
        while self.accum_s >= self.config.processing_interval_s {
            self.accum_s -= self.config.processing_interval_s;
            if let Some(broker_id) = broker_id {
                self.reevaluate_reachability(broker_id, range, now_s);
            }
            self.sweep_keep_alive(now_s);
            if let Some(broker_id) = broker_id {
                self.sweep_retransmissions(broker_id, now_s);
            }
        }
    }

    /// Cross-check physical reachability between every client and the
    /// single active broker, reconnecting or disconnecting as needed.
    /// Also called directly by `relocate_broker` to force an immediate
    /// re-evaluation instead of waiting for the next processing step.
    pub fn reevaluate_reachability(&mut self, broker_id: NodeId, range: &dyn RangeCheck, now_s: f64) {
        let config = self.config;
        let client_ids: Vec<NodeId> = self.clients.keys().copied().collect();
        for client_id in client_ids {
            let in_range = range.in_range(client_id, broker_id);
            let state = self.clients.get_mut(&client_id).expect("just listed");
            if !state.connected && in_range {
                if state.reconnect_attempts < config.max_reconnect_attempts {
                    state.reconnect_attempts += 1;
                    state.connected = true;
                    state.touch(now_s);
                    self.drain_pending(broker_id, client_id, now_s);
                }
            } else if state.connected && !in_range {
                state.connected = false;
            }
        }
    }

    /// Supplemented op: relocate (or switch) the active broker and force an
    /// immediate reachability re-evaluation for every client.
    pub fn relocate_broker(&mut self, new_broker_id: NodeId, range: &dyn RangeCheck, now_s: f64) {
        self.reevaluate_reachability(new_broker_id, range, now_s);
    }

    fn drain_pending(&mut self, broker_id: NodeId, client_id: NodeId, now_s: f64) {
        let queued = self.pending_deliveries.get_mut(&client_id).map(std::mem::take).unwrap_or_default();
        for (message, effective_qos) in queued {
            let ack = self
                .clients
                .get_mut(&client_id)
                .and_then(|client| client.receive(&message, effective_qos, now_s));
            if let Some(msg_id) = ack {
                self.receive_ack(broker_id, msg_id, client_id);
            }
        }
    }

    fn sweep_keep_alive(&mut self, now_s: f64) {
        let config = self.config;
        for state in self.clients.values_mut() {
            state.check_keep_alive(now_s, &config);
        }
    }

    fn sweep_retransmissions(&mut self, broker_id: NodeId, now_s: f64) {
        let config = self.config;
        let Some(broker) = self.brokers.get_mut(&broker_id) else { return };
        let retransmissions = broker.check_retransmissions(now_s, &config);
        self.dispatch(broker_id, retransmissions, now_s);
    }

    /// Deliver each `Delivery` to a connected subscriber, deferring it
    /// otherwise. There is no simulated MQTT-packet transit delay (the
    /// animation layer that would model one is out of scope), so a QoS-1
    /// ack generated by `ClientState::receive` is folded straight back into
    /// the broker's pending-ack bookkeeping in the same step.
    fn dispatch(&mut self, broker_id: NodeId, deliveries: Vec<Delivery>, now_s: f64) {
        for delivery in deliveries {
            let connected = self.clients.get(&delivery.subscriber).is_some_and(|c| c.connected);
            if connected {
                let ack = self
                    .clients
                    .get_mut(&delivery.subscriber)
                    .and_then(|client| client.receive(&delivery.message, delivery.effective_qos, now_s));
                if let Some(msg_id) = ack {
                    self.receive_ack(broker_id, msg_id, delivery.subscriber);
                }
            } else {
                self.pending_deliveries
                    .entry(delivery.subscriber)
                    .or_default()
                    .push_back((delivery.message, delivery.effective_qos));
            }
        }
    }

    pub fn broker_stats(&self, broker_id: NodeId) -> Option<BrokerStats> {
        self.brokers.get(&broker_id).map(Broker::stats)
    }

    pub fn client_stats(&self, client_id: NodeId) -> Option<ClientStats> {
        self.clients.get(&client_id).map(ClientState::stats)
    }

    pub fn is_connected(&self, client_id: NodeId) -> Option<bool> {
        self.clients.get(&client_id).map(|c| c.connected)
    }

    pub fn reset(&mut self) {
        self.brokers.clear();
        self.clients.clear();
        self.pending_deliveries.clear();
        self.accum_s = 0.0;
    }
}
