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

//! Module defining a router which floods broadcast messages using reverse path forwarding.

use crate::sim::frame::Frame;
use crate::sim::link::Link;
use crate::sim::tracker::CompletionTracker;
use crate::sim::types::{ConfigError, DeviceError, LinkId, MessageId, RouterId, Time};
use crate::sim::{Event, EventQueue};
use log::*;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Poisson};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Default mean of the inter-arrival time between two messages originated by the same router.
pub const DEFAULT_ARRIVAL_MEAN: f64 = 20.0;

/// Default number of messages every router originates.
pub const DEFAULT_NUM_MESSAGES: u64 = 10;

/// Class of a frame waiting for the service slot of a router. Frames received from the network
/// outrank locally originated ones, so that relaying is never starved by a busy source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum ServicePriority {
    /// The frame was received over a link.
    Network,
    /// The frame was originated by this router; the tag orders local frames by origination.
    Local(u64),
}

/// A frame waiting for the service slot, ordered by priority class first and arrival order second.
#[derive(Debug)]
struct Waiter {
    priority: ServicePriority,
    joined: u64,
    frame: Frame,
}

impl PartialEq for Waiter {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.joined == other.joined
    }
}

impl Eq for Waiter {}

impl PartialOrd for Waiter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Waiter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority).then(self.joined.cmp(&other.joined))
    }
}

/// Single router in the network. The router originates its own broadcast messages and floods
/// every accepted frame on all incident links except the one it arrived on. Frames are accepted
/// at most once per message; a frame is valid only if it arrived over the link the routing table
/// points to for its source (reverse path forwarding).
#[derive(Debug)]
pub struct Router {
    /// Human readable name of the router
    name: String,
    /// Id of the router
    router_id: RouterId,
    /// All links incident to the router, in attach order
    links: Vec<LinkId>,
    /// Routing table: source router to the preferred link towards it
    routes: HashMap<RouterId, LinkId>,
    /// Highest sequence number accepted so far, per source
    watermarks: HashMap<RouterId, u64>,
    /// Distribution of the inter-arrival time of locally originated messages
    arrivals: Poisson<f64>,
    /// Mean of the inter-arrival distribution
    arrival_mean: f64,
    /// Number of messages the router has yet to originate
    remaining: u64,
    /// Number of messages the router has originated so far
    originated: u64,
    /// Whether a frame currently occupies the service slot
    slot_busy: bool,
    /// Frames waiting for the service slot
    backlog: BinaryHeap<Reverse<Waiter>>,
    /// Monotonic counter ordering the backlog within a priority class
    joined: u64,
}

impl Router {
    pub(crate) fn new(name: String, router_id: RouterId) -> Router {
        Router {
            name,
            router_id,
            links: Vec::new(),
            routes: HashMap::new(),
            watermarks: HashMap::new(),
            arrivals: Poisson::new(DEFAULT_ARRIVAL_MEAN).unwrap(),
            arrival_mean: DEFAULT_ARRIVAL_MEAN,
            remaining: DEFAULT_NUM_MESSAGES,
            originated: 0,
            slot_busy: false,
            backlog: BinaryHeap::new(),
            joined: 0,
        }
    }

    /// Return the id of the router.
    pub fn router_id(&self) -> RouterId {
        self.router_id
    }

    /// Return the name of the router.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return all links incident to the router, in the order they were attached.
    pub fn incident_links(&self) -> &[LinkId] {
        &self.links
    }

    /// Return the preferred link towards `source`, if the routing table contains one.
    pub fn route(&self, source: RouterId) -> Option<LinkId> {
        self.routes.get(&source).copied()
    }

    /// Return the full routing table of the router.
    pub fn routing_table(&self) -> &HashMap<RouterId, LinkId> {
        &self.routes
    }

    /// Return the highest sequence number accepted from `source` so far (zero if none yet).
    pub fn watermark(&self, source: RouterId) -> u64 {
        self.watermarks.get(&source).copied().unwrap_or(0)
    }

    /// Return the mean of the inter-arrival time between locally originated messages.
    pub fn arrival_mean(&self) -> f64 {
        self.arrival_mean
    }

    /// Return the number of messages the router has yet to originate.
    pub fn remaining_messages(&self) -> u64 {
        self.remaining
    }

    /// Attach a link to the router. Links keep their attach order.
    pub(crate) fn attach_link(&mut self, link: LinkId) {
        self.links.push(link);
    }

    /// Set the preferred link towards `source`, overwriting any earlier choice.
    pub(crate) fn set_route(&mut self, source: RouterId, via: LinkId) {
        self.routes.insert(source, via);
    }

    /// Configure the traffic this router generates: `mean` inter-arrival time and the number of
    /// messages to originate.
    pub(crate) fn set_traffic(&mut self, mean: f64, count: u64) -> Result<(), ConfigError> {
        if !mean.is_finite() || mean <= 0.0 {
            return Err(ConfigError::InvalidArrivalMean(mean));
        }
        self.arrivals = Poisson::new(mean).map_err(|_| ConfigError::InvalidArrivalMean(mean))?;
        self.arrival_mean = mean;
        self.remaining = count;
        Ok(())
    }

    /// Sample the delay until the next local origination, or `None` if the router has originated
    /// all of its messages.
    pub(crate) fn next_arrival(&self, rng: &mut StdRng) -> Option<Time> {
        if self.remaining == 0 {
            None
        } else {
            Some(self.arrivals.sample(rng) as Time)
        }
    }

    /// Originate the next local message at time `now`. Returns the fresh frame along with its
    /// service priority. Sequence numbers start at one and increase by one per message.
    pub(crate) fn originate(&mut self, message: MessageId, now: Time) -> (Frame, ServicePriority) {
        let tag = self.originated;
        self.originated += 1;
        self.remaining = self.remaining.saturating_sub(1);
        let frame = Frame::originate(message, self.originated, self.router_id, now);
        (frame, ServicePriority::Local(tag))
    }

    /// Hand a frame to the router for service. If the service slot is free, the frame seizes it
    /// and a service event fires in the same instant; otherwise the frame joins the backlog and
    /// is served by priority class, FIFO within a class.
    pub(crate) fn submit(
        &mut self,
        frame: Frame,
        priority: ServicePriority,
        queue: &mut EventQueue,
    ) {
        if self.slot_busy {
            trace!(
                "{}: frame {:?} waiting for service at {}",
                self.name,
                frame.message,
                queue.now()
            );
            let joined = self.joined;
            self.joined += 1;
            self.backlog.push(Reverse(Waiter { priority, joined, frame }));
        } else {
            self.slot_busy = true;
            trace!("{}: frame {:?} entered service at {}", self.name, frame.message, queue.now());
            queue.enqueue(0, Event::Service(self.router_id, frame));
        }
    }

    /// Release the service slot after a frame was handled. The highest ranking waiter (if any)
    /// seizes the slot in the same instant.
    pub(crate) fn release_slot(&mut self, queue: &mut EventQueue) {
        match self.backlog.pop() {
            Some(Reverse(waiter)) => {
                trace!(
                    "{}: frame {:?} entered service at {}",
                    self.name,
                    waiter.frame.message,
                    queue.now()
                );
                queue.enqueue(0, Event::Service(self.router_id, waiter.frame));
            }
            None => self.slot_busy = false,
        }
    }

    /// Serve a single frame. Duplicates and frames arriving off the preferred path are dropped
    /// silently. An accepted frame raises the watermark and the coverage of its message, and is
    /// re-broadcast on all incident links except the one it arrived on. Returns `Ok(true)` iff
    /// the frame was accepted.
    pub(crate) fn handle_frame(
        &mut self,
        frame: Frame,
        links: &mut HashMap<LinkId, Link>,
        queue: &mut EventQueue,
        tracker: &mut CompletionTracker,
    ) -> Result<bool, DeviceError> {
        let now = queue.now();
        if frame.seqno <= self.watermark(frame.source) {
            debug!(
                "{}: dropped duplicate frame {:?} (seqno {} <= watermark {}) at {}",
                self.name,
                frame.message,
                frame.seqno,
                self.watermark(frame.source),
                now
            );
            return Ok(false);
        }
        if frame.source != self.router_id {
            let preferred =
                self.route(frame.source).ok_or(DeviceError::MissingRoute(frame.source))?;
            if frame.arrived_via != Some(preferred) {
                debug!(
                    "{}: dropped frame {:?} arriving off the preferred path at {}",
                    self.name, frame.message, now
                );
                return Ok(false);
            }
        }
        self.watermarks.insert(frame.source, frame.seqno);
        if tracker.accept(self.router_id, &frame, now) {
            debug!(
                "frame {:?} reached every router at {} (latency {})",
                frame.message,
                now,
                now - frame.created_at
            );
        }
        for link_id in &self.links {
            if Some(*link_id) == frame.arrived_via {
                continue;
            }
            let link = links.get_mut(link_id).ok_or(DeviceError::LinkNotAttached(*link_id))?;
            let to = link.opposite(self.router_id).ok_or(DeviceError::LinkNotAttached(*link_id))?;
            trace!(
                "{}: forwarding frame {:?} on link {:?} at {}",
                self.name,
                frame.message,
                link_id,
                now
            );
            link.transmit(to, frame.relay(*link_id), queue);
        }
        Ok(true)
    }
}
