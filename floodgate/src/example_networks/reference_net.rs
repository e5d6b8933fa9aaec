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

//! # ReferenceNet Network

use super::ExampleNetwork;
use crate::sim::Network;

/// # ReferenceNet
///
/// Ten router topology used as the reference scenario. The routers `r0` to `r9` are connected
/// by the following weighted links:
///
/// ```text
/// r0 -- r6: 4    r1 -- r3: 1    r2 -- r5: 3    r3 -- r7: 2    r6 -- r8: 6
/// r0 -- r8: 2    r1 -- r4: 2    r3 -- r4: 3    r5 -- r6: 5    r6 -- r9: 2
/// r0 -- r9: 3    r2 -- r3: 4    r6 -- r7: 3    r7 -- r8: 1
/// ```
///
/// Every routing table entry follows a shortest path over these weights. Two routers see a tie
/// between two equally short paths, and the variant number (0 to 3) selects how they break it:
///
/// ### Variant bit 0 (table of `r3`)
///
/// Frames from `r4` are equally close over `r1` and over the direct link. If the bit is set,
/// `r3` expects them over `r1 -- r3`; otherwise over `r3 -- r4`.
///
/// ### Variant bit 1 (table of `r4`)
///
/// Every source except `r1` is equally close over `r1` and over `r3`. If the bit is set, `r4`
/// expects all of them over `r1 -- r4`; otherwise over `r3 -- r4`.
pub struct ReferenceNet {}

impl ExampleNetwork for ReferenceNet {
    fn net(variant: usize) -> Network {
        if variant >= 4 {
            panic!("Invalid variant number");
        }

        let mut net = Network::new();

        // add routers
        let r0 = net.add_router("r0");
        let r1 = net.add_router("r1");
        let r2 = net.add_router("r2");
        let r3 = net.add_router("r3");
        let r4 = net.add_router("r4");
        let r5 = net.add_router("r5");
        let r6 = net.add_router("r6");
        let r7 = net.add_router("r7");
        let r8 = net.add_router("r8");
        let r9 = net.add_router("r9");

        // add links
        let l0_6 = net.add_link(r0, r6, 4).unwrap();
        let l0_8 = net.add_link(r0, r8, 2).unwrap();
        let l0_9 = net.add_link(r0, r9, 3).unwrap();
        let l1_3 = net.add_link(r1, r3, 1).unwrap();
        let l1_4 = net.add_link(r1, r4, 2).unwrap();
        let l2_3 = net.add_link(r2, r3, 4).unwrap();
        let l2_5 = net.add_link(r2, r5, 3).unwrap();
        let l3_4 = net.add_link(r3, r4, 3).unwrap();
        let l3_7 = net.add_link(r3, r7, 2).unwrap();
        let l5_6 = net.add_link(r5, r6, 5).unwrap();
        let l6_7 = net.add_link(r6, r7, 3).unwrap();
        let _l6_8 = net.add_link(r6, r8, 6).unwrap();
        let l6_9 = net.add_link(r6, r9, 2).unwrap();
        let l7_8 = net.add_link(r7, r8, 1).unwrap();

        // routing table of r0
        net.set_route(r0, r1, l0_8).unwrap();
        net.set_route(r0, r2, l0_8).unwrap();
        net.set_route(r0, r3, l0_8).unwrap();
        net.set_route(r0, r4, l0_8).unwrap();
        net.set_route(r0, r5, l0_6).unwrap();
        net.set_route(r0, r6, l0_6).unwrap();
        net.set_route(r0, r7, l0_8).unwrap();
        net.set_route(r0, r8, l0_8).unwrap();
        net.set_route(r0, r9, l0_9).unwrap();

        // routing table of r1
        net.set_route(r1, r0, l1_3).unwrap();
        net.set_route(r1, r2, l1_3).unwrap();
        net.set_route(r1, r3, l1_3).unwrap();
        net.set_route(r1, r4, l1_4).unwrap();
        net.set_route(r1, r5, l1_3).unwrap();
        net.set_route(r1, r6, l1_3).unwrap();
        net.set_route(r1, r7, l1_3).unwrap();
        net.set_route(r1, r8, l1_3).unwrap();
        net.set_route(r1, r9, l1_3).unwrap();

        // routing table of r2
        net.set_route(r2, r0, l2_3).unwrap();
        net.set_route(r2, r1, l2_3).unwrap();
        net.set_route(r2, r3, l2_3).unwrap();
        net.set_route(r2, r4, l2_3).unwrap();
        net.set_route(r2, r5, l2_5).unwrap();
        net.set_route(r2, r6, l2_5).unwrap();
        net.set_route(r2, r7, l2_3).unwrap();
        net.set_route(r2, r8, l2_3).unwrap();
        net.set_route(r2, r9, l2_5).unwrap();

        // routing table of r3, variant bit 0 breaks the tie towards r4
        net.set_route(r3, r0, l3_7).unwrap();
        net.set_route(r3, r1, l1_3).unwrap();
        net.set_route(r3, r2, l2_3).unwrap();
        if variant & 1 != 0 {
            net.set_route(r3, r4, l1_3).unwrap();
        } else {
            net.set_route(r3, r4, l3_4).unwrap();
        }
        net.set_route(r3, r5, l2_3).unwrap();
        net.set_route(r3, r6, l3_7).unwrap();
        net.set_route(r3, r7, l3_7).unwrap();
        net.set_route(r3, r8, l3_7).unwrap();
        net.set_route(r3, r9, l3_7).unwrap();

        // routing table of r4, variant bit 1 breaks the ties towards everyone except r1
        net.set_route(r4, r1, l1_4).unwrap();
        if variant & 2 != 0 {
            net.set_route(r4, r0, l1_4).unwrap();
            net.set_route(r4, r2, l1_4).unwrap();
            net.set_route(r4, r3, l1_4).unwrap();
            net.set_route(r4, r5, l1_4).unwrap();
            net.set_route(r4, r6, l1_4).unwrap();
            net.set_route(r4, r7, l1_4).unwrap();
            net.set_route(r4, r8, l1_4).unwrap();
            net.set_route(r4, r9, l1_4).unwrap();
        } else {
            net.set_route(r4, r0, l3_4).unwrap();
            net.set_route(r4, r2, l3_4).unwrap();
            net.set_route(r4, r3, l3_4).unwrap();
            net.set_route(r4, r5, l3_4).unwrap();
            net.set_route(r4, r6, l3_4).unwrap();
            net.set_route(r4, r7, l3_4).unwrap();
            net.set_route(r4, r8, l3_4).unwrap();
            net.set_route(r4, r9, l3_4).unwrap();
        }

        // routing table of r5
        net.set_route(r5, r0, l5_6).unwrap();
        net.set_route(r5, r1, l2_5).unwrap();
        net.set_route(r5, r2, l2_5).unwrap();
        net.set_route(r5, r3, l2_5).unwrap();
        net.set_route(r5, r4, l2_5).unwrap();
        net.set_route(r5, r6, l5_6).unwrap();
        net.set_route(r5, r7, l5_6).unwrap();
        net.set_route(r5, r8, l5_6).unwrap();
        net.set_route(r5, r9, l5_6).unwrap();

        // routing table of r6
        net.set_route(r6, r0, l0_6).unwrap();
        net.set_route(r6, r1, l6_7).unwrap();
        net.set_route(r6, r2, l5_6).unwrap();
        net.set_route(r6, r3, l6_7).unwrap();
        net.set_route(r6, r4, l6_7).unwrap();
        net.set_route(r6, r5, l5_6).unwrap();
        net.set_route(r6, r7, l6_7).unwrap();
        net.set_route(r6, r8, l6_7).unwrap();
        net.set_route(r6, r9, l6_9).unwrap();

        // routing table of r7
        net.set_route(r7, r0, l7_8).unwrap();
        net.set_route(r7, r1, l3_7).unwrap();
        net.set_route(r7, r2, l3_7).unwrap();
        net.set_route(r7, r3, l3_7).unwrap();
        net.set_route(r7, r4, l3_7).unwrap();
        net.set_route(r7, r5, l6_7).unwrap();
        net.set_route(r7, r6, l6_7).unwrap();
        net.set_route(r7, r8, l7_8).unwrap();
        net.set_route(r7, r9, l6_7).unwrap();

        // routing table of r8
        net.set_route(r8, r0, l0_8).unwrap();
        net.set_route(r8, r1, l7_8).unwrap();
        net.set_route(r8, r2, l7_8).unwrap();
        net.set_route(r8, r3, l7_8).unwrap();
        net.set_route(r8, r4, l7_8).unwrap();
        net.set_route(r8, r5, l7_8).unwrap();
        net.set_route(r8, r6, l7_8).unwrap();
        net.set_route(r8, r7, l7_8).unwrap();
        net.set_route(r8, r9, l0_8).unwrap();

        // routing table of r9
        net.set_route(r9, r0, l0_9).unwrap();
        net.set_route(r9, r1, l6_9).unwrap();
        net.set_route(r9, r2, l6_9).unwrap();
        net.set_route(r9, r3, l6_9).unwrap();
        net.set_route(r9, r4, l6_9).unwrap();
        net.set_route(r9, r5, l6_9).unwrap();
        net.set_route(r9, r6, l6_9).unwrap();
        net.set_route(r9, r7, l6_9).unwrap();
        net.set_route(r9, r8, l0_9).unwrap();

        net
    }
}
