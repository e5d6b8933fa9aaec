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

//! Test the link: slot seizure, FIFO waiting and delivery after the propagation delay.

use crate::sim::event::{Event, EventQueue};
use crate::sim::frame::Frame;
use crate::sim::link::Link;
use crate::sim::{MessageId, RouterId};

fn frame(message: u64, source: RouterId) -> Frame {
    Frame::originate(MessageId(message), 1, source, 0)
}

#[test]
fn test_seize_and_deliver() {
    let mut queue = EventQueue::new();
    let a: RouterId = 0.into();
    let b: RouterId = 1.into();
    let mut link = Link::new(0.into(), (a, b), 3);

    assert!(!link.is_busy());
    link.transmit(b, frame(0, a), &mut queue);
    assert!(link.is_busy());
    assert_eq!(link.num_waiting(), 0);
    assert_eq!(link.transmissions(), 1);

    // the delivery fires one propagation delay later
    assert_eq!(queue.pop(), Some(Event::Delivery(0.into(), b, frame(0, a))));
    assert_eq!(queue.now(), 3);

    link.release(&mut queue);
    assert!(!link.is_busy());
    assert!(queue.is_empty());
}

#[test]
fn test_fifo_waiting() {
    let mut queue = EventQueue::new();
    let a: RouterId = 0.into();
    let b: RouterId = 1.into();
    let mut link = Link::new(0.into(), (a, b), 2);

    link.transmit(b, frame(0, a), &mut queue);
    link.transmit(b, frame(1, a), &mut queue);
    link.transmit(a, frame(2, b), &mut queue);
    assert_eq!(link.num_waiting(), 2);
    assert_eq!(link.transmissions(), 3);

    // only the first frame got the slot
    assert_eq!(queue.pop(), Some(Event::Delivery(0.into(), b, frame(0, a))));
    assert_eq!(queue.now(), 2);
    assert_eq!(queue.pop(), None);

    // releasing grants the slot to the waiting frames, in FIFO order
    link.release(&mut queue);
    assert_eq!(link.num_waiting(), 1);
    assert_eq!(queue.pop(), Some(Event::Delivery(0.into(), b, frame(1, a))));
    assert_eq!(queue.now(), 4);

    link.release(&mut queue);
    assert_eq!(link.num_waiting(), 0);
    assert!(link.is_busy());
    assert_eq!(queue.pop(), Some(Event::Delivery(0.into(), a, frame(2, b))));
    assert_eq!(queue.now(), 6);

    link.release(&mut queue);
    assert!(!link.is_busy());
}

#[test]
fn test_opposite() {
    let a: RouterId = 0.into();
    let b: RouterId = 1.into();
    let c: RouterId = 2.into();
    let link = Link::new(0.into(), (a, b), 1);

    assert_eq!(link.opposite(a), Some(b));
    assert_eq!(link.opposite(b), Some(a));
    assert_eq!(link.opposite(c), None);
    assert_eq!(link.endpoints(), (a, b));
    assert_eq!(link.weight(), 1);
}
