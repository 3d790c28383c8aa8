//! `Store` — the sole owner of node, MAC, network, and MQTT state.
//!
//! MAC and Network never hold their own copy of node geometry or neighbor
//! sets; they're driven through the narrow [`RangeCheck`] capability
//! implemented here, plus a handful of `pub(crate)` wrapper methods
//! (`run_mac_slot`, `maybe_emit_route_round`, `mqtt_tick`, `forward_packet`)
//! that `Scheduler::tick` calls in the order required. The "forward
//! callback" the design notes describe — re-enqueueing a multi-hop packet
//! at its next hop — is `forward_packet` here, since a real callback out of
//! `Mac::run_slot` straight into `Store` would need `&mut Mac` and
//! `&mut Store` alive at once.

use std::collections::HashMap;

use ns_core::{NodeId, Phy, Position, RangeCheck, Role, WorldBounds};
use ns_mac::{Mac, MacConfig, MacStats, Packet, SlotOutcome};
use ns_mobility::random_waypoint::BoundedArea;
use ns_mobility::{Mobility, MobilityStore, RandomWaypoint};
use ns_mqtt::{BrokerStats, ClientStats, Mqtt, MqttConfig, MqttMessage};
use ns_net::{Net, NetConfig, RouteEntry};
use ns_node::{Node, NodeRegistry};

use crate::error::{EngineError, EngineResult};

/// Mobile nodes stay within this radius of their spawn point, matching the
/// bounded Random Waypoint area the original engine wires up for every
/// mobile node so it wanders in and out of a typical PHY range.
const MOBILE_MAX_RADIUS_M: f32 = 70.0;
const MOBILE_PAUSE_S: f32 = 2.0;

/// `RangeCheck` over a bare node registry, with no other `Store` state
/// borrowed alongside it — lets `Store`'s own methods hold a `&mut` to one
/// subsystem (e.g. `self.mac`) and a range check derived from another (e.g.
/// `self.registry`) at the same time.
struct RegistryRange<'a> {
    registry: &'a NodeRegistry,
}

impl RangeCheck for RegistryRange<'_> {
    fn in_range(&self, a: NodeId, b: NodeId) -> bool {
        let (Some(na), Some(nb)) = (self.registry.get(a), self.registry.get(b)) else {
            return false;
        };
        ns_node::physical::in_range(na.pos, na.phy, nb.pos, nb.phy)
    }
}

/// Everything the simulation knows right now: nodes, their MAC/routing/MQTT
/// state, and which node (if any) is the active broker.
pub struct Store {
    bounds: WorldBounds,
    seed: u64,
    now_s: f64,
    mac_config: MacConfig,
    net_config: NetConfig,
    mqtt_config: MqttConfig,
    registry: NodeRegistry,
    mobility_store: MobilityStore,
    mobility_models: HashMap<NodeId, Box<dyn Mobility>>,
    mac: Mac,
    net: Net,
    mqtt: Mqtt,
    broker_id: Option<NodeId>,
    next_seq: u64,
}

impl Store {
    pub fn new(bounds: WorldBounds, seed: u64, mac_config: MacConfig, net_config: NetConfig, mqtt_config: MqttConfig) -> Self {
        Self {
            bounds,
            seed,
            now_s: 0.0,
            mac_config,
            net_config,
            mqtt_config,
            registry: NodeRegistry::new(),
            mobility_store: MobilityStore::new(bounds, seed),
            mobility_models: HashMap::new(),
            mac: Mac::new(mac_config, seed),
            net: Net::new(net_config),
            mqtt: Mqtt::new(mqtt_config),
            broker_id: None,
            next_seq: 1,
        }
    }

    pub fn now_s(&self) -> f64 {
        self.now_s
    }

    pub(crate) fn set_now(&mut self, now_s: f64) {
        self.now_s = now_s;
    }

    // ── Control ──────────────────────────────────────────────────────────

    /// Discard every node, packet, table, and subscription, and restart ID
    /// assignment from 1. The clock itself is the caller's (`Scheduler`'s)
    /// concern, not `Store`'s.
    pub fn reset(&mut self) {
        *self = Store::new(self.bounds, self.seed, self.mac_config, self.net_config, self.mqtt_config);
    }

    // ── Nodes ────────────────────────────────────────────────────────────

    /// Create a node and wire it into every subsystem. Returns the assigned
    /// `NodeId`.
    pub fn add_node(&mut self, role: Role, phy: Phy, x: f32, y: f32, mobile: bool, speed_mps: f32, sleep_ratio: f32) -> NodeId {
        let pos = Position::new(x, y);
        let id = self.registry.add_node(role, phy, pos);
        if let Some(node) = self.registry.get_mut(id) {
            node.sleep_ratio = sleep_ratio;
            if mobile && speed_mps > 0.0 {
                node.mobile = Some(ns_node::MobileParams { speed_mps });
            }
        }

        self.mac.add_node(id);
        self.net.add_node(id);

        if mobile && speed_mps > 0.0 {
            let model = RandomWaypoint::bounded(
                BoundedArea { center: pos, max_radius: MOBILE_MAX_RADIUS_M },
                MOBILE_PAUSE_S,
                MOBILE_PAUSE_S,
            );
            self.mobility_store.register(id, pos, &model);
            self.mobility_models.insert(id, Box::new(model));
        }

        // Every non-broker role may publish or subscribe; `Role`'s four
        // values mirror the original engine's role literal exactly (it has
        // no separate "publisher" tag — publishing is a behavior, not a
        // role, see DESIGN.md).
        match role {
            Role::Broker => {
                self.mqtt.add_broker(id);
                self.broker_id.get_or_insert(id);
            }
            _ => {
                self.mqtt.add_client(id, self.now_s);
            }
        }

        id
    }

    /// Remove `id` from every subsystem. Returns `true` if it existed.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if !self.registry.remove_node(id) {
            return false;
        }
        self.mac.remove_node(id);
        self.net.remove_node(id);
        self.mobility_store.unregister(id);
        self.mobility_models.remove(&id);
        self.mqtt.remove_broker(id);
        self.mqtt.remove_client(id);
        if self.broker_id == Some(id) {
            self.broker_id = None;
        }
        true
    }

    pub fn list_nodes(&self) -> Vec<Node> {
        self.registry.list_nodes().cloned().collect()
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.registry.get(id)
    }

    /// Supplemented op: PHY neighbors of `id` right now (geometry only, not
    /// gated by MQTT connectivity).
    pub fn get_neighbors(&self, id: NodeId) -> Vec<NodeId> {
        if !self.registry.contains(id) {
            return Vec::new();
        }
        let range = RegistryRange { registry: &self.registry };
        self.registry
            .list_nodes()
            .filter(|n| n.id != id && range.in_range(id, n.id))
            .map(|n| n.id)
            .collect()
    }

    // ── Traffic ──────────────────────────────────────────────────────────

    /// Inject `n` packets from `src` toward `dst`. Validates that both
    /// nodes exist, that `src`'s PHY matches `kind`, and that the first hop
    /// (routed if a route is already known, else direct) is currently
    /// reachable. Returns how many packets were actually enqueued — `0` on
    /// any validation failure or full-queue rejection.
    pub fn enqueue(&mut self, src: NodeId, dst: NodeId, n: u32, size_bytes: u32, kind: Phy) -> u32 {
        let Some(src_node) = self.registry.get(src) else { return 0 };
        if !self.registry.contains(dst) {
            return 0;
        }
        if src_node.phy != kind {
            return 0;
        }

        let next_hop = self.net.next_hop(src, dst).unwrap_or(dst);
        let range = RegistryRange { registry: &self.registry };
        if !range.in_range(src, next_hop) {
            return 0;
        }

        let kind_str = kind.as_str();
        let mut ok = 0;
        for _ in 0..n {
            let seq = self.next_seq;
            self.next_seq += 1;
            let mut pkt = Packet::new(src, dst, size_bytes, kind_str, seq, self.now_s);
            pkt.next_hop_id = next_hop;
            if self.mac.enqueue(pkt) {
                ok += 1;
            }
        }
        ok
    }

    // ── Routing ──────────────────────────────────────────────────────────

    pub fn get_routing_table(&self, id: NodeId) -> Vec<RouteEntry> {
        self.net.routes(id)
    }

    pub fn get_all_routing_tables(&self) -> HashMap<NodeId, Vec<RouteEntry>> {
        self.net.all_routes()
    }

    // ── MQTT ─────────────────────────────────────────────────────────────

    pub fn subscribe(&mut self, client_id: NodeId, topic: &str, qos: u8) -> EngineResult<Option<MqttMessage>> {
        let broker_id = self.broker_id.ok_or(EngineError::NoActiveBroker)?;
        self.mqtt.subscribe(broker_id, client_id, topic, qos).map_err(|_| EngineError::NodeNotFound(client_id))
    }

    pub fn unsubscribe(&mut self, client_id: NodeId, topic: &str) -> EngineResult<()> {
        let broker_id = self.broker_id.ok_or(EngineError::NoActiveBroker)?;
        self.mqtt.unsubscribe(broker_id, client_id, topic).map_err(|_| EngineError::NodeNotFound(client_id))
    }

    pub fn publish(&mut self, publisher: NodeId, topic: &str, payload: String, qos: u8, retained: bool) -> EngineResult<u64> {
        let broker_id = self.broker_id.ok_or(EngineError::NoActiveBroker)?;
        self.mqtt
            .publish(broker_id, publisher, topic, payload, qos, retained, self.now_s)
            .map_err(|_| EngineError::NodeNotFound(publisher))
    }

    pub fn mqtt_broker_stats(&self) -> Option<BrokerStats> {
        self.broker_id.and_then(|id| self.mqtt.broker_stats(id))
    }

    pub fn mqtt_client_stats(&self, client_id: NodeId) -> Option<ClientStats> {
        self.mqtt.client_stats(client_id)
    }

    /// Reset MQTT state only (subscriptions, retained messages, pending
    /// acks, client connectivity) without touching nodes, MAC, or routing.
    pub fn mqtt_reset(&mut self) {
        self.mqtt.reset();
        let wiring: Vec<(NodeId, Role)> = self.registry.list_nodes().map(|n| (n.id, n.role)).collect();
        self.broker_id = None;
        for (id, role) in wiring {
            match role {
                Role::Broker => {
                    self.mqtt.add_broker(id);
                    self.broker_id.get_or_insert(id);
                }
                _ => {
                    self.mqtt.add_client(id, self.now_s);
                }
            }
        }
    }

    /// Supplemented op: relocate the broker node (simulating a failover)
    /// and force every client to re-evaluate reachability immediately
    /// rather than waiting for the next MQTT processing step.
    pub fn relocate_broker(&mut self, broker_id: NodeId, x: f32, y: f32) -> EngineResult<()> {
        {
            let node = self.registry.get_mut(broker_id).ok_or(EngineError::NodeNotFound(broker_id))?;
            if !node.is_broker {
                return Err(EngineError::NotABroker(broker_id));
            }
            node.pos = Position::new(x, y);
        }
        self.broker_id = Some(broker_id);
        let range = RegistryRange { registry: &self.registry };
        self.mqtt.relocate_broker(broker_id, &range, self.now_s);
        Ok(())
    }

    // ── Metrics ──────────────────────────────────────────────────────────

    pub fn mac_stats(&self) -> MacStats {
        self.mac.stats()
    }

    /// The MAC slot length in seconds, for the scheduler's slot-drain
    /// accumulator.
    pub(crate) fn mac_slot_s(&self) -> f32 {
        self.mac_config.slot_s()
    }

    // ── Scheduler-facing tick steps ──────────────────────────────────────

    /// Advance every mobile node's position by `dt_s`.
    pub(crate) fn advance_mobility(&mut self, dt_s: f32) {
        let mobile_ids: Vec<NodeId> =
            self.registry.list_nodes().filter(|n| n.mobile.is_some()).map(|n| n.id).collect();
        for id in mobile_ids {
            let Some(model) = self.mobility_models.get(&id) else { continue };
            let (pos, speed) = {
                let node = self.registry.get(id).expect("just listed");
                (node.pos, node.mobile.expect("filtered above").speed_mps)
            };
            let new_pos = self.mobility_store.advance(id, model.as_ref(), pos, dt_s, speed);
            if let Some(node) = self.registry.get_mut(id) {
                node.pos = new_pos;
            }
        }
    }

    /// Advance every node's duty-cycle/energy state by `dt_s`.
    pub(crate) fn advance_physical(&mut self, dt_s: f32) {
        let ids: Vec<NodeId> = self.registry.list_nodes().map(|n| n.id).collect();
        let now_s = self.now_s;
        for id in ids {
            if let Some(node) = self.registry.get_mut(id) {
                ns_node::physical::tick(node, now_s, dt_s);
            }
        }
    }

    /// Run one route-advertisement round if the interval has elapsed.
    pub(crate) fn maybe_emit_route_round(&mut self, dt_s: f32) {
        let range = RegistryRange { registry: &self.registry };
        self.net.maybe_emit_round(dt_s, &range);
    }

    /// Resolve one MAC slot.
    pub(crate) fn run_mac_slot(&mut self) -> SlotOutcome {
        let range = RegistryRange { registry: &self.registry };
        self.mac.run_slot(&range)
    }

    /// Resolve the next hop for a packet that reached an intermediate stop
    /// and re-enqueue it, mirroring the original engine's forward callback.
    /// Drops the packet silently (no counter bump beyond what `enqueue`
    /// itself already does) if no route exists or the next hop is
    /// currently unreachable.
    pub(crate) fn forward_packet(&mut self, pkt: Packet) -> bool {
        let current_hop = pkt.next_hop_id;
        let final_dest = pkt.dst_id;
        let Some(next_hop) = self.net.next_hop(current_hop, final_dest) else {
            return false;
        };
        let range = RegistryRange { registry: &self.registry };
        if !range.in_range(current_hop, next_hop) {
            return false;
        }
        let mut forwarded = pkt;
        forwarded.src_id = current_hop;
        forwarded.next_hop_id = next_hop;
        self.mac.enqueue(forwarded)
    }

    /// Run one MQTT processing step (reachability/reconnect, keep-alive,
    /// retransmission sweep) if the interval has elapsed.
    pub(crate) fn mqtt_tick(&mut self, dt_s: f32) {
        let range = RegistryRange { registry: &self.registry };
        let broker_id = self.broker_id;
        let now_s = self.now_s;
        self.mqtt.tick(dt_s, broker_id, &range, now_s);
    }
}

impl RangeCheck for Store {
    fn in_range(&self, a: NodeId, b: NodeId) -> bool {
        RegistryRange { registry: &self.registry }.in_range(a, b)
    }
}
