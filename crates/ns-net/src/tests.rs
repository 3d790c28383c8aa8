use ns_core::{NodeId, RangeCheck};

use crate::{Net, NetConfig, RouteEntry, RoutingTable};

struct AllInRange;
impl RangeCheck for AllInRange {
    fn in_range(&self, _a: NodeId, _b: NodeId) -> bool {
        true
    }
}

/// 1 <-> 2 <-> 3 chain: 1 and 3 are not direct neighbors.
struct Chain;
impl RangeCheck for Chain {
    fn in_range(&self, a: NodeId, b: NodeId) -> bool {
        let (a, b) = (a.0.min(b.0), a.0.max(b.0));
        (a, b) == (1, 2) || (a, b) == (2, 3)
    }
}

mod table {
    use super::*;

    #[test]
    fn fresh_seq_overwrites_existing_entry() {
        let mut t = RoutingTable::default();
        t.try_install(RouteEntry { dest: NodeId(9), next_hop: NodeId(2), metric: 3, seq: 1 });
        t.try_install(RouteEntry { dest: NodeId(9), next_hop: NodeId(5), metric: 1, seq: 2 });
        assert_eq!(t.get(NodeId(9)).unwrap().next_hop, NodeId(5));
    }

    #[test]
    fn equal_seq_only_overwrites_on_lower_metric() {
        let mut t = RoutingTable::default();
        t.try_install(RouteEntry { dest: NodeId(9), next_hop: NodeId(2), metric: 2, seq: 5 });
        // same seq, worse metric: rejected
        t.try_install(RouteEntry { dest: NodeId(9), next_hop: NodeId(7), metric: 3, seq: 5 });
        assert_eq!(t.get(NodeId(9)).unwrap().next_hop, NodeId(2));
        // same seq, better metric: accepted
        t.try_install(RouteEntry { dest: NodeId(9), next_hop: NodeId(8), metric: 1, seq: 5 });
        assert_eq!(t.get(NodeId(9)).unwrap().next_hop, NodeId(8));
    }

    #[test]
    fn stale_seq_is_rejected() {
        let mut t = RoutingTable::default();
        t.try_install(RouteEntry { dest: NodeId(9), next_hop: NodeId(2), metric: 1, seq: 5 });
        t.try_install(RouteEntry { dest: NodeId(9), next_hop: NodeId(3), metric: 1, seq: 4 });
        assert_eq!(t.get(NodeId(9)).unwrap().next_hop, NodeId(2));
    }

    #[test]
    fn purge_next_hop_drops_only_matching_routes() {
        let mut t = RoutingTable::default();
        t.try_install(RouteEntry { dest: NodeId(2), next_hop: NodeId(2), metric: 1, seq: 1 });
        t.try_install(RouteEntry { dest: NodeId(3), next_hop: NodeId(5), metric: 1, seq: 1 });
        t.purge_next_hop(NodeId(2));
        assert!(t.get(NodeId(2)).is_none());
        assert!(t.get(NodeId(3)).is_some());
    }
}

mod net {
    use super::*;

    fn three_node_net() -> Net {
        let mut net = Net::new(NetConfig { advertisement_interval_s: 1.0 });
        net.add_node(NodeId(1));
        net.add_node(NodeId(2));
        net.add_node(NodeId(3));
        net
    }

    #[test]
    fn direct_neighbors_get_metric_one_routes() {
        let mut net = three_node_net();
        net.maybe_emit_round(1.0, &AllInRange);
        assert_eq!(net.next_hop(NodeId(1), NodeId(2)).unwrap(), NodeId(2));
        assert_eq!(net.routing_table(NodeId(1)).unwrap().get(NodeId(2)).unwrap().metric, 1);
    }

    #[test]
    fn multi_hop_route_propagates_after_two_rounds() {
        let mut net = three_node_net();
        net.maybe_emit_round(1.0, &Chain);
        // after one round node 1 doesn't know about node 3 yet
        assert!(net.next_hop(NodeId(1), NodeId(3)).is_none());
        net.maybe_emit_round(1.0, &Chain);
        let hop = net.next_hop(NodeId(1), NodeId(3));
        assert_eq!(hop, Some(NodeId(2)));
        assert_eq!(net.routing_table(NodeId(1)).unwrap().get(NodeId(3)).unwrap().metric, 2);
    }

    #[test]
    fn no_round_fires_before_interval_elapses() {
        let mut net = three_node_net();
        net.maybe_emit_round(0.5, &AllInRange);
        assert!(net.next_hop(NodeId(1), NodeId(2)).is_none());
    }

    #[test]
    fn remove_node_purges_routes_through_it() {
        let mut net = three_node_net();
        net.maybe_emit_round(1.0, &Chain);
        net.maybe_emit_round(1.0, &Chain);
        assert!(net.next_hop(NodeId(1), NodeId(3)).is_some());

        net.remove_node(NodeId(2));
        assert!(net.routing_table(NodeId(2)).is_none());
        assert!(net.next_hop(NodeId(1), NodeId(3)).is_none());
        assert!(net.next_hop(NodeId(1), NodeId(2)).is_none());
    }

    #[test]
    fn no_route_ever_targets_self() {
        let mut net = three_node_net();
        for _ in 0..5 {
            net.maybe_emit_round(1.0, &AllInRange);
        }
        for entry in net.routing_table(NodeId(1)).unwrap().iter() {
            assert_ne!(entry.dest, NodeId(1));
        }
    }
}
