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

//! Module defining a physical link with a single transmission slot.

use crate::sim::event::{Event, EventQueue};
use crate::sim::frame::Frame;
use crate::sim::{LinkId, LinkWeight, RouterId};
use log::*;
use std::collections::VecDeque;

/// Point-to-point channel between two routers. The link carries one frame at a time; while it is
/// busy, further frames wait in FIFO order. A frame occupies the slot for exactly `weight` time
/// units before it is delivered to the far end.
#[derive(Debug)]
pub struct Link {
    /// Id of the link
    link_id: LinkId,
    /// The two routers the link connects
    endpoints: (RouterId, RouterId),
    /// Propagation delay of the link
    weight: LinkWeight,
    /// Whether a frame currently occupies the transmission slot
    busy: bool,
    /// Frames waiting for the slot, along with their destination
    waiting: VecDeque<(RouterId, Frame)>,
    /// Number of frames handed to the link so far
    transmissions: u64,
}

impl Link {
    pub(crate) fn new(
        link_id: LinkId,
        endpoints: (RouterId, RouterId),
        weight: LinkWeight,
    ) -> Self {
        Self { link_id, endpoints, weight, busy: false, waiting: VecDeque::new(), transmissions: 0 }
    }

    /// Return the id of the link.
    pub fn link_id(&self) -> LinkId {
        self.link_id
    }

    /// Return both endpoints of the link.
    pub fn endpoints(&self) -> (RouterId, RouterId) {
        self.endpoints
    }

    /// Return the propagation delay of the link.
    pub fn weight(&self) -> LinkWeight {
        self.weight
    }

    /// Return the endpoint opposite to `router`, or `None` if `router` is not an endpoint.
    pub fn opposite(&self, router: RouterId) -> Option<RouterId> {
        if router == self.endpoints.0 {
            Some(self.endpoints.1)
        } else if router == self.endpoints.1 {
            Some(self.endpoints.0)
        } else {
            None
        }
    }

    /// Returns true while a frame occupies the transmission slot.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Number of frames waiting for the slot.
    pub fn num_waiting(&self) -> usize {
        self.waiting.len()
    }

    /// Number of frames handed to the link so far.
    pub fn transmissions(&self) -> u64 {
        self.transmissions
    }

    /// Send `frame` towards `to`. If the slot is free, it is seized immediately and the delivery
    /// fires `weight` time units from now; otherwise the frame joins the FIFO wait queue.
    pub(crate) fn transmit(&mut self, to: RouterId, frame: Frame, queue: &mut EventQueue) {
        self.transmissions += 1;
        if self.busy {
            trace!(
                "link {:?}: frame {:?} waiting for the slot at {}",
                self.link_id,
                frame.message,
                queue.now()
            );
            self.waiting.push_back((to, frame));
        } else {
            self.busy = true;
            trace!(
                "link {:?}: frame {:?} seized the slot at {}",
                self.link_id,
                frame.message,
                queue.now()
            );
            queue.enqueue(self.weight, Event::Delivery(self.link_id, to, frame));
        }
    }

    /// Release the slot after a delivery. The next waiting frame (if any) seizes the slot in the
    /// same instant, and its delivery fires after the propagation delay.
    pub(crate) fn release(&mut self, queue: &mut EventQueue) {
        match self.waiting.pop_front() {
            Some((to, frame)) => {
                trace!(
                    "link {:?}: frame {:?} seized the slot at {}",
                    self.link_id,
                    frame.message,
                    queue.now()
                );
                queue.enqueue(self.weight, Event::Delivery(self.link_id, to, frame));
            }
            None => self.busy = false,
        }
    }
}
