//! `ns-net` — distance-vector routing between simulated nodes.
//!
//! Every node keeps its own [`table::RoutingTable`]; periodically (default
//! every 2.0 simulated seconds) every node advertises its table to whichever
//! neighbors are currently in range, and receivers fold the advertisement
//! in using a freshness/metric tie-break. There is no separate "routing
//! daemon" task — advancing time via [`Net::maybe_emit_round`] is how a
//! round happens.
//!
//! | Module     | Contents                                   |
//! |------------|----------------------------------------------|
//! | [`route`]  | `RouteEntry`, `RouteAdvertisement`          |
//! | [`table`]  | `RoutingTable`                              |
//! | [`config`] | `NetConfig`                                 |
//! | [`net`]    | `Net` — the routing engine                  |
//! | [`error`]  | `NetError`, `NetResult`                     |

pub mod config;
pub mod error;
pub mod net;
pub mod route;
pub mod table;

#[cfg(test)]
mod tests;

pub use config::NetConfig;
pub use error::{NetError, NetResult};
pub use net::Net;
pub use route::{RouteAdvertisement, RouteEntry};
pub use table::RoutingTable;
