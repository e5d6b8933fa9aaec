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

//! Module defining events and the virtual clock driving them

use crate::sim::frame::Frame;
use crate::sim::{LinkId, RouterId, Time};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Event to handle
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The generator of `#0` wakes up and originates its next message.
    Arrival(RouterId),
    /// The frame has won the service slot of `#0` and is processed now.
    Service(RouterId, Frame),
    /// The frame finished the propagation delay of link `#0` and reaches `#1`.
    Delivery(LinkId, RouterId, Frame),
}

/// Queue of scheduled events, keyed by virtual due time. Events scheduled for the same instant
/// fire in the order they were enqueued, which makes every run fully deterministic.
#[derive(Debug, Default)]
pub struct EventQueue {
    now: Time,
    next_seq: u64,
    heap: BinaryHeap<Reverse<QueuedEvent>>,
}

#[derive(Debug)]
struct QueuedEvent {
    due: Time,
    seq: u64,
    event: Event,
}

impl PartialEq for QueuedEvent {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for QueuedEvent {}

impl PartialOrd for QueuedEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

impl EventQueue {
    /// Create an empty queue at virtual time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Time {
        self.now
    }

    /// Schedule `event` to fire `delay` time units from now.
    pub fn enqueue(&mut self, delay: Time, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(QueuedEvent { due: self.now + delay, seq, event }));
    }

    /// Pop the earliest scheduled event and advance the clock to its due time.
    pub fn pop(&mut self) -> Option<Event> {
        let Reverse(next) = self.heap.pop()?;
        self.now = next.due;
        Some(next.event)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no events are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
