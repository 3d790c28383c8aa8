//! Node role.

/// What a node's place in the simulated network is.
///
/// `Broker` is a role, not a separate type — any node can be designated the
/// broker, and only one node is the active broker at a time (see
/// `Store::broker_id`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Role {
    Sensor,
    Subscriber,
    Mobile,
    Broker,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Sensor => "sensor",
            Role::Subscriber => "subscriber",
            Role::Mobile => "mobile",
            Role::Broker => "broker",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
