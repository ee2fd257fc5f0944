mod cuts;
mod graph;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cuts::Cut;

/// Compute the global minimum edge cut of a graph given as adjacency lists.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Input file, one `<node>: <neighbor> ...` definition per line
    input: PathBuf,

    /// Also print the two vertex sets achieving the cut
    #[arg(long)]
    partition: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // clap's own exit() would use status 2; every failure here exits 1
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let graph = graph::parse_graph(&input)?;
    let cut = cuts::global_min_cut(&graph)?;

    println!("{}", cut.size);
    if args.partition {
        print_partition(&graph, &cut);
    }
    Ok(())
}

fn print_partition(graph: &UnGraph<String, ()>, cut: &Cut) {
    println!("{}", side_labels(graph, &cut.source_set));
    println!("{}", side_labels(graph, &cut.destination_set));
}

fn side_labels(graph: &UnGraph<String, ()>, side: &[usize]) -> String {
    side.iter()
        .map(|&index| graph[NodeIndex::new(index)].as_str())
        .sorted_unstable()
        .join(" ")
}
