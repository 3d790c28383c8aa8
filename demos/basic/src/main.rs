//! basic — smallest example for the ns-engine IoT network simulator.
//!
//! Five nodes on a 400×233 m field: a broker, a stationary sensor that
//! publishes readings, a stationary subscriber, and a mobile node that
//! wanders in and out of the broker's range, triggering a disconnect and
//! reconnect. Runs for 30 simulated seconds and prints a summary.

use anyhow::Result;

use ns_core::{Phy, Role, WorldBounds};
use ns_engine::observer::SchedulerObserver;
use ns_engine::{Metrics, Scheduler, Store};
use ns_mac::MacConfig;
use ns_mqtt::MqttConfig;
use ns_net::NetConfig;

const SEED: u64 = 123;
const TICK_DT_S: f32 = 0.020;
const SIM_SECONDS: f64 = 30.0;

struct CountingObserver {
    mac_slots: u64,
    mqtt_steps: u64,
    last_metrics: Metrics,
}

impl CountingObserver {
    fn new() -> Self {
        Self { mac_slots: 0, mqtt_steps: 0, last_metrics: Metrics::default() }
    }
}

impl SchedulerObserver for CountingObserver {
    fn on_mac_slot(&mut self, _tick: ns_core::Tick) {
        self.mac_slots += 1;
    }

    fn on_mqtt_step(&mut self, _tick: ns_core::Tick) {
        self.mqtt_steps += 1;
    }

    fn on_tick_end(&mut self, _tick: ns_core::Tick, metrics: &Metrics) {
        self.last_metrics = *metrics;
    }
}

fn main() -> Result<()> {
    println!("=== basic — ns-engine IoT network simulation ===");
    println!("Seed: {SEED}  |  Tick: {} ms  |  Duration: {SIM_SECONDS} s", TICK_DT_S * 1000.0);
    println!();

    let bounds = WorldBounds::new(400.0, 233.0);
    let mut store = Store::new(bounds, SEED, MacConfig::default(), NetConfig::default(), MqttConfig::default());

    let broker = store.add_node(Role::Broker, Phy::WiFi, 200.0, 116.0, false, 0.0, 0.0);
    let sensor = store.add_node(Role::Sensor, Phy::WiFi, 210.0, 116.0, false, 0.0, 0.1);
    let subscriber = store.add_node(Role::Subscriber, Phy::WiFi, 190.0, 116.0, false, 0.0, 0.1);
    let rover = store.add_node(Role::Mobile, Phy::WiFi, 220.0, 116.0, true, 8.0, 0.0);

    println!("Nodes: broker={broker} sensor={sensor} subscriber={subscriber} rover={rover}");

    store.subscribe(subscriber, "room/temperature", 1)?;

    let mut sched = Scheduler::new(store, TICK_DT_S);
    sched.start();

    let total_ticks = (SIM_SECONDS / TICK_DT_S as f64) as u64;
    let publish_every_ticks = (1.0 / TICK_DT_S) as u64; // once per simulated second

    let mut obs = CountingObserver::new();
    for i in 0..total_ticks {
        if i % publish_every_ticks == 0 {
            let reading = format!("{:.1}C", 20.0 + (i as f32 / publish_every_ticks as f32).sin());
            sched.store.publish(sensor, "room/temperature", reading, 1, false)?;
        }
        sched.tick(&mut obs);
    }

    println!();
    println!("Ran {total_ticks} ticks ({} MAC slots, {} MQTT steps)", obs.mac_slots, obs.mqtt_steps);
    println!();

    let metrics = obs.last_metrics;
    println!("Metrics @ t={:.3}s", metrics.now_s);
    println!("  pdr             : {:.3}", metrics.pdr);
    println!("  avg_latency_ms  : {:.3}", metrics.avg_latency_ms);
    println!("  delivered       : {}", metrics.delivered);
    println!("  duplicates      : {}", metrics.duplicates);
    println!("  offered         : {}", metrics.offered);
    println!("  dropped         : {}", metrics.dropped);

    if let Some(stats) = sched.store.mqtt_broker_stats() {
        println!();
        println!("Broker stats: {stats:?}");
    }
    if let Some(stats) = sched.store.mqtt_client_stats(subscriber) {
        println!("Subscriber stats: {stats:?}");
    }

    println!();
    println!("{:<12} {:<10} {:<20}", "Node", "Role", "Position");
    println!("{}", "-".repeat(44));
    for node in sched.store.list_nodes() {
        println!("{:<12} {:<10} {}", node.id.to_string(), node.role.to_string(), node.pos);
    }

    Ok(())
}
