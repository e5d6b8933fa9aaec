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

//! Module collecting the performance measures of a finished simulation into a printable report.

use crate::sim::{Completion, Network, NetworkError, RouterId, Time, Unfinished};
use std::fmt;

/// Performance measures of a single router: every completion of a message it originated, along
/// with the mean transmit time over those completions.
#[derive(Debug, Clone)]
pub struct RouterReport {
    router: RouterId,
    name: String,
    completions: Vec<Completion>,
    mean_latency: Option<f64>,
}

impl RouterReport {
    /// Id of the router.
    pub fn router(&self) -> RouterId {
        self.router
    }

    /// Name of the router.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All completions of messages this router originated, in completion order.
    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    /// Mean transmit time of this router's messages, or `None` if none of them completed.
    pub fn mean_latency(&self) -> Option<f64> {
        self.mean_latency
    }
}

/// Performance measures of an entire simulation run. Printing the report with `{}` produces a
/// human readable summary, one section per router (sorted by router id) followed by the overall
/// mean and the messages which never reached full coverage.
#[derive(Debug, Clone)]
pub struct Report {
    routers: Vec<RouterReport>,
    overall_mean: Option<f64>,
    unfinished: Vec<Unfinished>,
    num_routers: usize,
}

impl Report {
    /// Collect the performance measures of the given (finished) network.
    pub fn from_net(net: &Network) -> Result<Self, NetworkError> {
        let mut ids = net.get_routers();
        ids.sort();
        let mut routers = Vec::with_capacity(ids.len());
        let mut all_latencies: Vec<Time> = Vec::new();
        for id in ids {
            let completions = net.completions(id).to_vec();
            all_latencies.extend(completions.iter().map(|c| c.latency));
            let mean_latency = mean(completions.iter().map(|c| c.latency));
            routers.push(RouterReport {
                router: id,
                name: net.get_router_name(id)?.to_string(),
                completions,
                mean_latency,
            });
        }
        let overall_mean = mean(all_latencies);
        Ok(Self {
            routers,
            overall_mean,
            unfinished: net.unfinished(),
            num_routers: net.num_routers(),
        })
    }

    /// Per-router measures, sorted by router id.
    pub fn routers(&self) -> &[RouterReport] {
        &self.routers
    }

    /// Mean transmit time over all completed messages, or `None` if nothing completed.
    pub fn overall_mean(&self) -> Option<f64> {
        self.overall_mean
    }

    /// All messages which never reached every router, sorted by message id.
    pub fn unfinished(&self) -> &[Unfinished] {
        &self.unfinished
    }

    /// Total number of completed messages, over all routers.
    pub fn num_completed(&self) -> usize {
        self.routers.iter().map(|r| r.completions.len()).sum()
    }
}

fn mean<I: IntoIterator<Item = Time>>(latencies: I) -> Option<f64> {
    let mut sum: Time = 0;
    let mut count: usize = 0;
    for latency in latencies {
        sum += latency;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Performance measures:")?;
        for router in &self.routers {
            writeln!(f, "-----------------------------")?;
            writeln!(f, "{} frames transmitted:", router.name)?;
            for c in &router.completions {
                writeln!(
                    f,
                    "message {} (seqno {}) transmit time={}",
                    c.message.0, c.seqno, c.latency
                )?;
            }
            match router.mean_latency {
                Some(mean) => writeln!(f, "{} mean transmit time={:.2}", router.name, mean)?,
                None => writeln!(f, "{} mean transmit time=n/a", router.name)?,
            }
        }
        writeln!(f, "-----------------------------")?;
        match self.overall_mean {
            Some(mean) => write!(f, "Overall system mean transmit time={:.2}", mean)?,
            None => write!(f, "Overall system mean transmit time=n/a")?,
        }
        if !self.unfinished.is_empty() {
            write!(f, "\n-----------------------------")?;
            write!(f, "\nUnfinished messages:")?;
            for u in &self.unfinished {
                write!(
                    f,
                    "\nmessage {} (seqno {}): covered {} of {} routers",
                    u.message.0, u.seqno, u.covered, self.num_routers
                )?;
            }
        }
        Ok(())
    }
}
