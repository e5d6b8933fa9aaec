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

//! Test the completion tracker: coverage bookkeeping and exactly-once completion.

use crate::sim::frame::Frame;
use crate::sim::tracker::{Completion, CompletionTracker, Unfinished};
use crate::sim::{MessageId, RouterId};

#[test]
fn test_exactly_once() {
    let a: RouterId = 0.into();
    let b: RouterId = 1.into();
    let c: RouterId = 2.into();
    let mut tracker = CompletionTracker::new(3);

    let frame = Frame::originate(MessageId(0), 1, a, 10);
    tracker.originate(&frame);
    assert_eq!(tracker.num_pending(), 1);
    assert_eq!(tracker.num_completed(), 0);

    assert!(!tracker.accept(a, &frame, 10));
    assert!(tracker.has_accepted(MessageId(0), a));
    assert!(!tracker.has_accepted(MessageId(0), b));
    assert!(!tracker.accept(b, &frame, 12));
    // the same router accepting twice does not complete the message
    assert!(!tracker.accept(b, &frame, 13));
    assert!(tracker.accept(c, &frame, 15));

    assert_eq!(tracker.num_pending(), 0);
    assert_eq!(tracker.num_completed(), 1);
    assert_eq!(
        tracker.completions(a),
        &[Completion { message: MessageId(0), seqno: 1, latency: 5 }]
    );
    assert!(tracker.completions(b).is_empty());

    // a completed message is no longer tracked
    assert!(!tracker.accept(a, &frame, 20));
    assert!(!tracker.has_accepted(MessageId(0), a));
    assert_eq!(tracker.num_completed(), 1);
}

#[test]
fn test_unfinished() {
    let a: RouterId = 0.into();
    let b: RouterId = 1.into();
    let mut tracker = CompletionTracker::new(3);

    let first = Frame::originate(MessageId(0), 1, a, 0);
    let second = Frame::originate(MessageId(1), 1, b, 4);
    tracker.originate(&first);
    tracker.originate(&second);

    tracker.accept(a, &first, 0);
    tracker.accept(b, &first, 3);
    tracker.accept(b, &second, 4);

    assert_eq!(tracker.num_pending(), 2);
    assert_eq!(
        tracker.unfinished(),
        vec![
            Unfinished { message: MessageId(0), source: a, seqno: 1, covered: 2 },
            Unfinished { message: MessageId(1), source: b, seqno: 1, covered: 1 },
        ]
    );
}

#[test]
fn test_completion_order() {
    let a: RouterId = 0.into();
    let b: RouterId = 1.into();
    let mut tracker = CompletionTracker::new(2);

    let first = Frame::originate(MessageId(0), 1, a, 0);
    let second = Frame::originate(MessageId(1), 2, a, 5);
    tracker.originate(&first);
    tracker.originate(&second);

    tracker.accept(a, &first, 0);
    tracker.accept(a, &second, 5);
    assert!(tracker.accept(b, &second, 7));
    assert!(tracker.accept(b, &first, 9));

    // completions are recorded in the order the messages completed
    assert_eq!(
        tracker.completions(a),
        &[
            Completion { message: MessageId(1), seqno: 2, latency: 2 },
            Completion { message: MessageId(0), seqno: 1, latency: 9 },
        ]
    );
}
