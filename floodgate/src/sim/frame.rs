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

//! Module defining the frame, one in-flight copy of a message at a specific hop.

use crate::sim::{LinkId, MessageId, RouterId, Time};

/// One hop's view of a message in flight. Every forwarding step produces a fresh `Frame` carrying
/// the same message identity, but stamped with the link it was sent over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Identity of the message this frame carries a copy of
    pub message: MessageId,
    /// Sequence number, strictly increasing per origin (the first message has seqno 1)
    pub seqno: u64,
    /// The router which originated the message
    pub source: RouterId,
    /// The link over which this copy arrived, or `None` if it was locally originated
    pub arrived_via: Option<LinkId>,
    /// Virtual time at which the message was originated
    pub created_at: Time,
}

impl Frame {
    /// Create the very first frame of a message at its origin.
    pub(crate) fn originate(message: MessageId, seqno: u64, source: RouterId, now: Time) -> Self {
        Self { message, seqno, source, arrived_via: None, created_at: now }
    }

    /// Create the copy of this frame which is sent out over `via`.
    pub(crate) fn relay(&self, via: LinkId) -> Self {
        Self { arrived_via: Some(via), ..self.clone() }
    }
}
