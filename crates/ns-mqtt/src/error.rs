//! MQTT-layer errors.

use thiserror::Error;

use ns_core::NodeId;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MqttError {
    #[error("node {0} is not a registered broker")]
    UnknownBroker(NodeId),
    #[error("node {0} is not a registered MQTT client")]
    UnknownClient(NodeId),
}

pub type MqttResult<T> = Result<T, MqttError>;
