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

use floodgate::example_networks::{ExampleNetwork, LineNet, ReferenceNet};
use floodgate::report::Report;
use floodgate::sim::{printer, Network};

use clap::{Parser, ValueEnum};
use log::*;
use rand::prelude::*;
use std::error::Error;

/// This binary simulates flooding broadcasts with reverse path forwarding on one of the prepared
/// networks. Every router originates the configured number of messages, and the program prints
/// the performance measures of the run: per message, how long the flood took to reach every
/// router in the network.
#[derive(Parser, Debug)]
#[command(name = "Floodgate", author = "Tibor Schneider")]
struct CommandLineArguments {
    /// Network scenario to simulate
    #[arg(value_enum, default_value = "reference")]
    network: NetworkChoice,
    /// Variant of the network scenario (chosen from the seed if omitted)
    #[arg(short = 'v', long)]
    variant: Option<usize>,
    /// Random seed, to get reproducible simulations
    #[arg(short = 's', long, default_value = "42")]
    seed: u64,
    /// Mean inter-arrival time between two messages of the same router
    #[arg(short = 'm', long, default_value = "20")]
    mean: f64,
    /// Number of messages every router originates
    #[arg(short = 'n', long, default_value = "10")]
    messages: u64,
    /// Print the routing table of every router before the simulation
    #[arg(long)]
    show_tables: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum NetworkChoice {
    /// Ten router reference topology
    Reference,
    /// Three routers on a line
    Line,
}

fn main() -> Result<(), Box<dyn Error>> {
    // run clap
    let args = CommandLineArguments::parse();

    // initialize the env logger
    pretty_env_logger::init();

    // pick the variant from the seed if none was given
    let variant =
        args.variant.unwrap_or_else(|| StdRng::seed_from_u64(args.seed).gen_range(0..4));

    // build the network
    let mut net: Network = match args.network {
        NetworkChoice::Reference => ReferenceNet::net(variant),
        NetworkChoice::Line => LineNet::net(variant),
    };
    net.set_traffic(args.mean, args.messages)?;

    if args.show_tables {
        let mut routers = net.get_routers();
        routers.sort();
        for router in routers {
            printer::print_routing_table(&net, router)?;
        }
    }

    info!(
        "Simulating {} routers, {} messages each (mean inter-arrival time {})",
        net.num_routers(),
        args.messages,
        args.mean
    );
    net.run(args.seed)?;

    println!("{}", Report::from_net(&net)?);

    Ok(())
}
