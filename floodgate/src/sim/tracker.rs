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

//! Module tracking which routers every broadcast message has reached, and recording the
//! completion latency once a message covers the entire network.

use crate::sim::frame::Frame;
use crate::sim::{MessageId, RouterId, Time};
use std::collections::{HashMap, HashSet};

/// Record of a message that reached every router in the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Id of the completed message
    pub message: MessageId,
    /// Sequence number the message carried
    pub seqno: u64,
    /// Time from origination until the last router accepted the message
    pub latency: Time,
}

/// Record of a message that never reached full coverage before the simulation ran out of events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unfinished {
    /// Id of the message
    pub message: MessageId,
    /// Router which originated the message
    pub source: RouterId,
    /// Sequence number the message carried
    pub seqno: u64,
    /// Number of routers the message did reach
    pub covered: usize,
}

/// Coverage bookkeeping for a single in-flight message.
#[derive(Debug)]
struct PendingMessage {
    source: RouterId,
    seqno: u64,
    created_at: Time,
    covered: HashSet<RouterId>,
}

/// Tracks the coverage of every originated message and records a [`Completion`] exactly once per
/// message, in the instant its coverage set grows to include all routers.
#[derive(Debug, Default)]
pub struct CompletionTracker {
    num_routers: usize,
    pending: HashMap<MessageId, PendingMessage>,
    records: HashMap<RouterId, Vec<Completion>>,
}

impl CompletionTracker {
    pub(crate) fn new(num_routers: usize) -> Self {
        Self { num_routers, pending: HashMap::new(), records: HashMap::new() }
    }

    /// Update the number of routers a message must reach to complete.
    pub(crate) fn set_num_routers(&mut self, num_routers: usize) {
        self.num_routers = num_routers;
    }

    /// Register a freshly originated frame. Coverage starts empty; the source itself is inserted
    /// when it accepts its own frame.
    pub(crate) fn originate(&mut self, frame: &Frame) {
        self.pending.insert(
            frame.message,
            PendingMessage {
                source: frame.source,
                seqno: frame.seqno,
                created_at: frame.created_at,
                covered: HashSet::new(),
            },
        );
    }

    /// Record that `router` accepted `frame` at time `now`. Returns true iff this acceptance
    /// completed the message, i.e. its coverage now spans every router in the network.
    pub(crate) fn accept(&mut self, router: RouterId, frame: &Frame, now: Time) -> bool {
        let pending = match self.pending.get_mut(&frame.message) {
            Some(p) => p,
            None => return false,
        };
        pending.covered.insert(router);
        if pending.covered.len() < self.num_routers {
            return false;
        }
        let latency = now - pending.created_at;
        let source = pending.source;
        let completion = Completion { message: frame.message, seqno: pending.seqno, latency };
        self.pending.remove(&frame.message);
        self.records.entry(source).or_insert_with(Vec::new).push(completion);
        true
    }

    /// All completions of messages originated by `source`, in completion order.
    pub fn completions(&self, source: RouterId) -> &[Completion] {
        self.records.get(&source).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All messages which never reached full coverage, sorted by message id.
    pub fn unfinished(&self) -> Vec<Unfinished> {
        let mut result: Vec<Unfinished> = self
            .pending
            .iter()
            .map(|(message, p)| Unfinished {
                message: *message,
                source: p.source,
                seqno: p.seqno,
                covered: p.covered.len(),
            })
            .collect();
        result.sort_by_key(|u| u.message);
        result
    }

    /// Total number of completed messages, over all sources.
    pub fn num_completed(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    /// Number of messages still short of full coverage.
    pub fn num_pending(&self) -> usize {
        self.pending.len()
    }

    /// Whether `router` has already accepted the (still pending) message.
    pub fn has_accepted(&self, message: MessageId, router: RouterId) -> bool {
        self.pending.get(&message).map(|p| p.covered.contains(&router)).unwrap_or(false)
    }
}
