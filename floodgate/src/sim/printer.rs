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

//! # Helper (printer) functions for the Network
//! Module containing helper functions to get formatted strings and print information about the
//! network.

use crate::sim::event::Event;
use crate::sim::frame::Frame;
use crate::sim::network::Network;
use crate::sim::{LinkId, NetworkError, RouterId};

/// Returns a formatted string for a given link, where both router names are inserted.
pub fn link(net: &Network, link: LinkId) -> Result<String, NetworkError> {
    let (a, b) = net.get_link(link)?.endpoints();
    Ok(format!("{} -- {}", net.get_router_name(a)?, net.get_router_name(b)?))
}

/// Returns a formatted string for a given frame, where the source name and the arrival link are
/// inserted.
pub fn frame(net: &Network, frame: &Frame) -> Result<String, NetworkError> {
    Ok(match frame.arrived_via {
        Some(via) => format!(
            "frame {} (seqno {} from {}) via {}",
            frame.message.0,
            frame.seqno,
            net.get_router_name(frame.source)?,
            link(net, via)?
        ),
        None => format!(
            "frame {} (seqno {} from {}) (originated)",
            frame.message.0,
            frame.seqno,
            net.get_router_name(frame.source)?
        ),
    })
}

/// Return a formatted string for a given event
pub fn event(net: &Network, event: &Event) -> Result<String, NetworkError> {
    Ok(match event {
        Event::Arrival(router) => {
            format!("{} originates its next message", net.get_router_name(*router)?)
        }
        Event::Service(router, f) => {
            format!("{} serves [{}]", net.get_router_name(*router)?, frame(net, f)?)
        }
        Event::Delivery(l, to, f) => format!(
            "[{}] over {} reaches {}",
            frame(net, f)?,
            link(net, *l)?,
            net.get_router_name(*to)?
        ),
    })
}

/// Print the routing table of a given router to stdout.
pub fn print_routing_table(net: &Network, router: RouterId) -> Result<(), NetworkError> {
    let r = net.get_router(router)?;
    println!("Routing table of {}", r.name());
    let mut sources = net.get_routers();
    sources.sort();
    for source in sources {
        if source == router {
            continue;
        }
        if let Some(via) = r.route(source) {
            println!("    {}: via {}", net.get_router_name(source)?, link(net, via)?);
        }
    }
    Ok(())
}
