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

//! Module containing all type definitions

use petgraph::prelude::*;
use thiserror::Error;

type IndexType = u32;
/// Router Identification (and index into the graph)
pub type RouterId = NodeIndex<IndexType>;
/// Link Identification (and index into the graph)
pub type LinkId = EdgeIndex<IndexType>;
/// Message Identification, allocated globally in origination order
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct MessageId(pub u64);
/// Link weight, the propagation delay of the link in virtual time units
pub type LinkWeight = u64;
/// Virtual time instant (or duration)
pub type Time = u64;
/// Physical network graph
pub type Topology = UnGraph<(), LinkWeight, IndexType>;

/// Configuration Error
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Link weights are propagation delays and must be at least one time unit
    #[error("Link weight must be a positive duration, but it is {0}!")]
    InvalidLinkWeight(LinkWeight),
    /// A link cannot connect a router with itself
    #[error("Cannot connect {0:?} with itself!")]
    SelfLoop(RouterId),
    /// A routing entry must point to a link which is attached to its owner
    #[error("Link {0:?} is not incident to router {1:?}!")]
    LinkNotIncident(LinkId, RouterId),
    /// A router never relays its own frames and needs no routing entry for itself
    #[error("Router {0:?} cannot have a route towards itself!")]
    RouteToSelf(RouterId),
    /// The routing table of `#0` has no entry for frames originating at `#1`
    #[error("Routing table of {0:?} is missing the entry for origin {1:?}!")]
    IncompleteRoutingTable(RouterId, RouterId),
    /// The mean of the inter-arrival gap must be positive and finite
    #[error("Invalid inter-arrival mean: {0}")]
    InvalidArrivalMean(f64),
}

/// Router Errors
#[derive(Error, Debug, PartialEq)]
pub enum DeviceError {
    /// The router has no routing entry for the origin of a relayed frame
    #[error("No route entry for frames originating at {0:?}")]
    MissingRoute(RouterId),
    /// The link is not attached to the router
    #[error("Link {0:?} is not attached to the router")]
    LinkNotAttached(LinkId),
}

/// Network Errors
#[derive(Error, Debug, PartialEq)]
pub enum NetworkError {
    /// Device Error which cannot be handled
    #[error("Device Error: {0}")]
    DeviceError(#[from] DeviceError),
    /// Configuration error
    #[error("Configuration Error: {0}")]
    ConfigError(#[from] ConfigError),
    /// Device is not present in the topology
    #[error("Network device was not found in topology: {0:?}")]
    DeviceNotFound(RouterId),
    /// Device name is not present in the topology
    #[error("Network device name was not found in topology: {0}")]
    DeviceNameNotFound(String),
    /// Link is not present in the topology
    #[error("Network link was not found in topology: {0:?}")]
    LinkNotFound(LinkId),
}
