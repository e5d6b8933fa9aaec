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

//! Test the global event queue: virtual time and dispatch order.

use crate::sim::event::{Event, EventQueue};
use crate::sim::RouterId;

#[test]
fn test_time_order() {
    let mut queue = EventQueue::new();
    let a: RouterId = 0.into();
    let b: RouterId = 1.into();

    queue.enqueue(5, Event::Arrival(a));
    queue.enqueue(1, Event::Arrival(b));
    queue.enqueue(3, Event::Arrival(a));
    assert_eq!(queue.now(), 0);

    assert_eq!(queue.pop(), Some(Event::Arrival(b)));
    assert_eq!(queue.now(), 1);
    assert_eq!(queue.pop(), Some(Event::Arrival(a)));
    assert_eq!(queue.now(), 3);
    assert_eq!(queue.pop(), Some(Event::Arrival(a)));
    assert_eq!(queue.now(), 5);

    // popping an empty queue leaves the time untouched
    assert_eq!(queue.pop(), None);
    assert_eq!(queue.now(), 5);
}

#[test]
fn test_fifo_at_same_instant() {
    let mut queue = EventQueue::new();
    let routers: Vec<RouterId> = (0u32..4).map(|i| i.into()).collect();

    for r in routers.iter() {
        queue.enqueue(7, Event::Arrival(*r));
    }

    // events due at the same instant dispatch in insertion order
    for r in routers.iter() {
        assert_eq!(queue.pop(), Some(Event::Arrival(*r)));
        assert_eq!(queue.now(), 7);
    }
    assert!(queue.is_empty());
}

#[test]
fn test_relative_delays() {
    let mut queue = EventQueue::new();
    let a: RouterId = 0.into();
    let b: RouterId = 1.into();

    queue.enqueue(4, Event::Arrival(a));
    assert_eq!(queue.pop(), Some(Event::Arrival(a)));
    assert_eq!(queue.now(), 4);

    // delays are relative to the current time, and zero delays are legal
    queue.enqueue(2, Event::Arrival(b));
    queue.enqueue(0, Event::Arrival(a));
    assert_eq!(queue.pop(), Some(Event::Arrival(a)));
    assert_eq!(queue.now(), 4);
    assert_eq!(queue.pop(), Some(Event::Arrival(b)));
    assert_eq!(queue.now(), 6);
}

#[test]
fn test_len() {
    let mut queue = EventQueue::new();
    let a: RouterId = 0.into();

    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    queue.enqueue(1, Event::Arrival(a));
    queue.enqueue(1, Event::Arrival(a));
    assert_eq!(queue.len(), 2);
    assert!(!queue.is_empty());
    queue.pop();
    assert_eq!(queue.len(), 1);
}
