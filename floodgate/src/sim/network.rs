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

//! Module defining the network, which glues routers and links together and drives the event
//! queue until every message has run its course.

use crate::sim::event::{Event, EventQueue};
use crate::sim::link::Link;
use crate::sim::printer;
use crate::sim::router::{Router, ServicePriority};
use crate::sim::tracker::{Completion, CompletionTracker, Unfinished};
use crate::sim::types::{
    ConfigError, LinkId, LinkWeight, MessageId, NetworkError, RouterId, Time, Topology,
};
use log::*;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;

/// The network. It contains all routers and links, the global event queue and the coverage
/// tracker. Build the topology with [`Network::add_router`] and [`Network::add_link`], fill in
/// the routing tables with [`Network::set_route`], configure the traffic and call
/// [`Network::run`] to simulate until no event remains.
///
/// Simulations are deterministic: running the same network with the same seed twice yields the
/// same completions, in the same order.
#[derive(Debug)]
pub struct Network {
    /// Underlying topology
    net: Topology,
    /// All routers, indexed by their id
    routers: HashMap<RouterId, Router>,
    /// All links, indexed by their id
    links: HashMap<LinkId, Link>,
    /// Global event queue
    queue: EventQueue,
    /// Coverage bookkeeping for all originated messages
    tracker: CompletionTracker,
    /// Id of the next originated message
    next_message: u64,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    /// Generate an empty network.
    pub fn new() -> Self {
        Self {
            net: Topology::new_undirected(),
            routers: HashMap::new(),
            links: HashMap::new(),
            queue: EventQueue::new(),
            tracker: CompletionTracker::new(0),
            next_message: 0,
        }
    }

    /// Add a new router to the network. The name only exists for printing.
    pub fn add_router<S: Into<String>>(&mut self, name: S) -> RouterId {
        let router_id = self.net.add_node(());
        self.routers.insert(router_id, Router::new(name.into(), router_id));
        self.tracker.set_num_routers(self.routers.len());
        router_id
    }

    /// Add a new link between two existing routers. The weight is the propagation delay of the
    /// link; it must be non-zero. Self loops are rejected.
    pub fn add_link(
        &mut self,
        source: RouterId,
        target: RouterId,
        weight: LinkWeight,
    ) -> Result<LinkId, NetworkError> {
        if !self.routers.contains_key(&source) {
            return Err(NetworkError::DeviceNotFound(source));
        }
        if !self.routers.contains_key(&target) {
            return Err(NetworkError::DeviceNotFound(target));
        }
        if source == target {
            return Err(ConfigError::SelfLoop(source).into());
        }
        if weight == 0 {
            return Err(ConfigError::InvalidLinkWeight(weight).into());
        }
        let link_id = self.net.add_edge(source, target, weight);
        self.links.insert(link_id, Link::new(link_id, (source, target), weight));
        for r in &[source, target] {
            if let Some(router) = self.routers.get_mut(r) {
                router.attach_link(link_id);
            }
        }
        Ok(link_id)
    }

    /// Tell `router` that frames originated by `source` are expected to arrive over the link
    /// `via`. The link must be incident to `router`. Setting a route twice silently overwrites
    /// the earlier choice.
    pub fn set_route(
        &mut self,
        router: RouterId,
        source: RouterId,
        via: LinkId,
    ) -> Result<(), NetworkError> {
        if router == source {
            return Err(ConfigError::RouteToSelf(router).into());
        }
        if !self.routers.contains_key(&source) {
            return Err(NetworkError::DeviceNotFound(source));
        }
        let link = self.links.get(&via).ok_or(NetworkError::LinkNotFound(via))?;
        if link.opposite(router).is_none() {
            return Err(ConfigError::LinkNotIncident(via, router).into());
        }
        self.routers
            .get_mut(&router)
            .ok_or(NetworkError::DeviceNotFound(router))?
            .set_route(source, via);
        Ok(())
    }

    /// Configure the traffic of every router in the network: mean inter-arrival time and number
    /// of messages to originate.
    pub fn set_traffic(&mut self, mean: f64, count: u64) -> Result<(), NetworkError> {
        for router in self.routers.values_mut() {
            router.set_traffic(mean, count)?;
        }
        Ok(())
    }

    /// Configure the traffic of a single router, leaving all others untouched.
    pub fn set_router_traffic(
        &mut self,
        router: RouterId,
        mean: f64,
        count: u64,
    ) -> Result<(), NetworkError> {
        self.routers
            .get_mut(&router)
            .ok_or(NetworkError::DeviceNotFound(router))?
            .set_traffic(mean, count)?;
        Ok(())
    }

    /// Run the simulation to completion. Every router originates its configured number of
    /// messages, with inter-arrival times sampled from its Poisson distribution, and the event
    /// queue is processed until it is empty. The seed makes the run reproducible.
    pub fn run(&mut self, seed: u64) -> Result<(), NetworkError> {
        self.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        debug!("starting the simulation with seed {}", seed);
        let mut ids = self.get_routers();
        ids.sort();
        for id in ids {
            let router = self.routers.get(&id).ok_or(NetworkError::DeviceNotFound(id))?;
            if let Some(delay) = router.next_arrival(&mut rng) {
                self.queue.enqueue(delay, Event::Arrival(id));
            }
        }
        self.process(&mut rng)?;
        if self.tracker.num_pending() > 0 {
            warn!("{} message(s) never reached full coverage", self.tracker.num_pending());
        }
        Ok(())
    }

    /// Get the id of a router by its name.
    pub fn get_router_id(&self, name: impl AsRef<str>) -> Result<RouterId, NetworkError> {
        if let Some(id) = self
            .routers
            .values()
            .filter(|r| r.name() == name.as_ref())
            .map(|r| r.router_id())
            .next()
        {
            Ok(id)
        } else {
            Err(NetworkError::DeviceNameNotFound(name.as_ref().to_string()))
        }
    }

    /// Get the name of a router by its id.
    pub fn get_router_name(&self, router_id: RouterId) -> Result<&str, NetworkError> {
        self.routers
            .get(&router_id)
            .map(|r| r.name())
            .ok_or(NetworkError::DeviceNotFound(router_id))
    }

    /// Get a reference to a router.
    pub fn get_router(&self, router_id: RouterId) -> Result<&Router, NetworkError> {
        self.routers.get(&router_id).ok_or(NetworkError::DeviceNotFound(router_id))
    }

    /// Get the ids of all routers, in arbitrary order.
    pub fn get_routers(&self) -> Vec<RouterId> {
        self.routers.keys().cloned().collect()
    }

    /// Get a reference to a link.
    pub fn get_link(&self, link: LinkId) -> Result<&Link, NetworkError> {
        self.links.get(&link).ok_or(NetworkError::LinkNotFound(link))
    }

    /// Find the link connecting two routers, if one exists.
    pub fn find_link(&self, a: RouterId, b: RouterId) -> Option<LinkId> {
        self.net.find_edge(a, b)
    }

    /// Number of routers in the network.
    pub fn num_routers(&self) -> usize {
        self.routers.len()
    }

    /// Number of links in the network.
    pub fn num_links(&self) -> usize {
        self.links.len()
    }

    /// Get a reference to the underlying topology.
    pub fn get_topology(&self) -> &Topology {
        &self.net
    }

    /// Current virtual time of the simulation.
    pub fn current_time(&self) -> Time {
        self.queue.now()
    }

    /// All completions of messages originated by `source`, in completion order.
    pub fn completions(&self, source: RouterId) -> &[Completion] {
        self.tracker.completions(source)
    }

    /// All messages which never reached every router, sorted by message id.
    pub fn unfinished(&self) -> Vec<Unfinished> {
        self.tracker.unfinished()
    }

    /// Total number of messages that reached every router.
    pub fn num_completed(&self) -> usize {
        self.tracker.num_completed()
    }

    /// Number of frames handed to the given link over the entire simulation.
    pub fn link_transmissions(&self, link: LinkId) -> Result<u64, NetworkError> {
        self.links.get(&link).map(|l| l.transmissions()).ok_or(NetworkError::LinkNotFound(link))
    }

    /// Check that the routing table of every router contains an entry for every other router.
    fn validate(&self) -> Result<(), NetworkError> {
        let mut ids = self.get_routers();
        ids.sort();
        for router_id in ids.iter() {
            let router =
                self.routers.get(router_id).ok_or(NetworkError::DeviceNotFound(*router_id))?;
            for source in ids.iter() {
                if source == router_id {
                    continue;
                }
                if router.route(*source).is_none() {
                    return Err(ConfigError::IncompleteRoutingTable(*router_id, *source).into());
                }
            }
        }
        Ok(())
    }

    /// Process the event queue until it is empty.
    fn process(&mut self, rng: &mut StdRng) -> Result<(), NetworkError> {
        while self.step(rng)? {}
        Ok(())
    }

    /// Pop and dispatch a single event. Returns `Ok(false)` once the queue is empty.
    pub(crate) fn step(&mut self, rng: &mut StdRng) -> Result<bool, NetworkError> {
        let event = match self.queue.pop() {
            Some(e) => e,
            None => return Ok(false),
        };
        trace!("dispatch: {}", printer::event(self, &event)?);
        match event {
            Event::Arrival(router) => {
                self.originate_from(router)?;
                let r = self.routers.get(&router).ok_or(NetworkError::DeviceNotFound(router))?;
                if let Some(delay) = r.next_arrival(rng) {
                    self.queue.enqueue(delay, Event::Arrival(router));
                }
            }
            Event::Service(router, frame) => {
                let r =
                    self.routers.get_mut(&router).ok_or(NetworkError::DeviceNotFound(router))?;
                let handled =
                    r.handle_frame(frame, &mut self.links, &mut self.queue, &mut self.tracker);
                r.release_slot(&mut self.queue);
                handled?;
            }
            Event::Delivery(link, to, frame) => {
                let r = self.routers.get_mut(&to).ok_or(NetworkError::DeviceNotFound(to))?;
                r.submit(frame, ServicePriority::Network, &mut self.queue);
                let l = self.links.get_mut(&link).ok_or(NetworkError::LinkNotFound(link))?;
                l.release(&mut self.queue);
            }
        }
        Ok(true)
    }

    /// Originate the next message of the given router at the current time and hand the fresh
    /// frame to its service slot.
    pub(crate) fn originate_from(
        &mut self,
        router_id: RouterId,
    ) -> Result<MessageId, NetworkError> {
        let now = self.queue.now();
        let router =
            self.routers.get_mut(&router_id).ok_or(NetworkError::DeviceNotFound(router_id))?;
        let message = MessageId(self.next_message);
        self.next_message += 1;
        let (frame, priority) = router.originate(message, now);
        debug!(
            "{}: originating message {:?} (seqno {}) at {}",
            router.name(),
            message,
            frame.seqno,
            now
        );
        self.tracker.originate(&frame);
        router.submit(frame, priority, &mut self.queue);
        Ok(message)
    }
}
