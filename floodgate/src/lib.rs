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

#![deny(missing_docs)]

//! # Floodgate: Simulating Flooding Broadcasts with Reverse Path Forwarding
//! This is a library for simulating flooding broadcasts in a network of store-and-forward
//! routers. Every router periodically originates broadcast messages and floods them over all of
//! its links. Reverse path forwarding keeps the flood in check: a router only accepts a frame
//! arriving over the link its routing table prefers for the frame's source, and sequence number
//! watermarks drop everything it has already seen. The simulator measures, per message, how long
//! the flood takes to reach every router.
//!
//! ## Structure
//!
//! This library is structured in the following way:
//!
//! - **[`Sim`](sim)**: Discrete event simulator used in this project. See the main structure
//!   [`Network`](sim::Network).
//!
//! - **[`Report`](report)**: Performance measures of a finished simulation, collected into a
//!   printable [`Report`](report::Report).
//!
//! - **[`ExampleNetworks`](example_networks)**: Collection of prepared networks with populated
//!   routing tables, used for testing and as simulation scenarios.
//!
//! ## Usage
//!
//! Build a [`Network`](sim::Network) (or take one from [`example_networks`]), configure the
//! traffic, run the simulation and collect the report:
//!
//! ```
//! use floodgate::example_networks::{ExampleNetwork, ReferenceNet};
//! use floodgate::report::Report;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // prepare the network
//!     let mut net = ReferenceNet::net(0);
//!
//!     // every router originates 3 messages, with a mean inter-arrival time of 10
//!     net.set_traffic(10.0, 3)?;
//!
//!     // run the simulation
//!     net.run(42)?;
//!
//!     // collect the performance measures
//!     let report = Report::from_net(&net)?;
//!     assert_eq!(report.num_completed(), 30);
//!     println!("{}", report);
//!
//!     Ok(())
//! }
//! ```

// test modules
pub mod example_networks;
mod test;

pub mod report;
pub mod sim;
