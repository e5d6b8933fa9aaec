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

//! # LineNet Network

use super::ExampleNetwork;
use crate::sim::Network;

/// # LineNet
///
/// Smallest interesting topology: three routers on a line, with unit weight links.
///
/// ```text
/// A --1-- B --1-- C
/// ```
///
/// The routing tables are forced (there is only ever one path), so the variant is ignored.
pub struct LineNet {}

impl ExampleNetwork for LineNet {
    fn net(_variant: usize) -> Network {
        let mut net = Network::new();

        // add routers
        let a = net.add_router("A");
        let b = net.add_router("B");
        let c = net.add_router("C");

        // add links
        let ab = net.add_link(a, b, 1).unwrap();
        let bc = net.add_link(b, c, 1).unwrap();

        // routing tables
        net.set_route(a, b, ab).unwrap();
        net.set_route(a, c, ab).unwrap();
        net.set_route(b, a, ab).unwrap();
        net.set_route(b, c, bc).unwrap();
        net.set_route(c, a, bc).unwrap();
        net.set_route(c, b, bc).unwrap();

        net
    }
}
