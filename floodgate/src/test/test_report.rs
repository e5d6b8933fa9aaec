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

//! Test the report: per router means and the printed summary.

use crate::report::Report;
use crate::sim::network::Network;
use crate::sim::RouterId;
use assert_approx_eq::assert_approx_eq;
use lazy_static::lazy_static;
use rand::{rngs::StdRng, SeedableRng};

lazy_static! {
    static ref A: RouterId = 0.into();
    static ref B: RouterId = 1.into();
    static ref C: RouterId = 2.into();
}

/// Line of three routers with unit weight links, nobody originates anything by default.
fn get_test_net() -> Network {
    let mut net = Network::new();

    assert_eq!(*A, net.add_router("A"));
    assert_eq!(*B, net.add_router("B"));
    assert_eq!(*C, net.add_router("C"));

    let ab = net.add_link(*A, *B, 1).unwrap();
    let bc = net.add_link(*B, *C, 1).unwrap();

    net.set_route(*A, *B, ab).unwrap();
    net.set_route(*A, *C, ab).unwrap();
    net.set_route(*B, *A, ab).unwrap();
    net.set_route(*B, *C, bc).unwrap();
    net.set_route(*C, *A, bc).unwrap();
    net.set_route(*C, *B, bc).unwrap();

    net.set_traffic(4.0, 0).unwrap();
    net
}

#[test]
fn test_report() {
    let mut net = get_test_net();
    let mut rng = StdRng::seed_from_u64(0);

    // flood two messages from A, one after the other
    net.originate_from(*A).unwrap();
    while net.step(&mut rng).unwrap() {}
    net.originate_from(*A).unwrap();
    while net.step(&mut rng).unwrap() {}

    let report = Report::from_net(&net).unwrap();
    assert_eq!(report.num_completed(), 2);
    assert_eq!(report.routers().len(), 3);
    assert_eq!(report.routers()[0].name(), "A");
    assert_eq!(report.routers()[0].router(), *A);
    assert_eq!(report.routers()[0].completions().len(), 2);
    assert_approx_eq!(report.routers()[0].mean_latency().unwrap(), 2.0);
    assert_eq!(report.routers()[1].mean_latency(), None);
    assert_approx_eq!(report.overall_mean().unwrap(), 2.0);
    assert!(report.unfinished().is_empty());

    let text = format!("{}", report);
    assert!(text.starts_with("Performance measures:"));
    assert!(text.contains("A frames transmitted:"));
    assert!(text.contains("message 0 (seqno 1) transmit time=2"));
    assert!(text.contains("message 1 (seqno 2) transmit time=2"));
    assert!(text.contains("A mean transmit time=2.00"));
    assert!(text.contains("B mean transmit time=n/a"));
    assert!(text.contains("Overall system mean transmit time=2.00"));
    assert!(!text.contains("Unfinished messages:"));
}

#[test]
fn test_report_empty() {
    let net = get_test_net();
    let report = Report::from_net(&net).unwrap();

    assert_eq!(report.num_completed(), 0);
    assert_eq!(report.overall_mean(), None);

    let text = format!("{}", report);
    assert!(text.contains("Overall system mean transmit time=n/a"));
}

#[test]
fn test_report_unfinished() {
    let mut net = Network::new();
    let a = net.add_router("A");
    let b = net.add_router("B");
    let c = net.add_router("C");
    let ab = net.add_link(a, b, 1).unwrap();
    let bc = net.add_link(b, c, 1).unwrap();

    net.set_route(a, b, ab).unwrap();
    net.set_route(a, c, ab).unwrap();
    // B black-holes frames from A
    net.set_route(b, a, bc).unwrap();
    net.set_route(b, c, bc).unwrap();
    net.set_route(c, a, bc).unwrap();
    net.set_route(c, b, bc).unwrap();

    net.set_traffic(4.0, 0).unwrap();
    net.set_router_traffic(a, 4.0, 1).unwrap();
    net.run(42).unwrap();

    let report = Report::from_net(&net).unwrap();
    assert_eq!(report.num_completed(), 0);
    assert_eq!(report.unfinished().len(), 1);

    let text = format!("{}", report);
    assert!(text.contains("Overall system mean transmit time=n/a"));
    assert!(text.contains("Unfinished messages:"));
    assert!(text.contains("message 0 (seqno 1): covered 1 of 3 routers"));
}
