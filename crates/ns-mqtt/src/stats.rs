//! Broker- and client-side MQTT counters.

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrokerStats {
    pub messages_received: u64,
    pub messages_delivered: u64,
    pub qos0_messages: u64,
    pub qos1_messages: u64,
    pub duplicates_sent: u64,
    pub acks_received: u64,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientStats {
    pub messages_published: u64,
    pub messages_received: u64,
    pub duplicates_received: u64,
    pub acks_sent: u64,
}
