// Floodgate: Simulating Flooding Broadcasts with Reverse Path Forwarding
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

#![deny(missing_docs, missing_debug_implementations)]

//! # Sim
//!
//! This is a discrete event simulator for flooding broadcasts in a network of store-and-forward
//! routers. Every router periodically originates broadcast messages and floods them over all of
//! its links. Reverse path forwarding keeps the flood from circulating forever: a router only
//! accepts a frame arriving over the link its routing table prefers for the frame's source, and
//! sequence number watermarks drop everything it has already seen.
//!
//! Virtual time is integer. Each link carries one frame at a time and delays it by the link
//! weight; each router serves one frame at a time in zero virtual time. Simulations are
//! deterministic in the seed passed to [`Network::run`].
//!
//! ## Example usage
//!
//! The following example builds a line of three routers `A -- B -- C` with unit weight links,
//! lets `A` originate a single message, and checks that the message reaches every router two
//! time units after its origination.
//!
//! ```rust
//! use floodgate::sim::Network;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//!     let mut net = Network::new();
//!
//!     let a = net.add_router("A");
//!     let b = net.add_router("B");
//!     let c = net.add_router("C");
//!
//!     let ab = net.add_link(a, b, 1)?;
//!     let bc = net.add_link(b, c, 1)?;
//!
//!     net.set_route(a, b, ab)?;
//!     net.set_route(a, c, ab)?;
//!     net.set_route(b, a, ab)?;
//!     net.set_route(b, c, bc)?;
//!     net.set_route(c, a, bc)?;
//!     net.set_route(c, b, bc)?;
//!
//!     // only A originates anything: a single message
//!     net.set_traffic(4.0, 0)?;
//!     net.set_router_traffic(a, 4.0, 1)?;
//!
//!     net.run(42)?;
//!
//!     assert_eq!(net.completions(a).len(), 1);
//!     assert_eq!(net.completions(a)[0].latency, 2);
//!
//!     Ok(())
//! }
//! ```

pub(crate) mod event;
pub mod frame;
pub mod link;
pub mod router;
pub mod tracker;
pub(crate) mod types;

pub(crate) use event::{Event, EventQueue};

pub(crate) mod network;
pub mod printer;

pub use frame::Frame;
pub use network::Network;
pub use tracker::{Completion, CompletionTracker, Unfinished};
pub use types::{
    ConfigError, DeviceError, LinkId, LinkWeight, MessageId, NetworkError, RouterId, Time,
    Topology,
};
