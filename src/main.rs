use std::io;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use graphscope::config::TraversalConfig;
use graphscope::graph::{Edge, Graph, Node};
use graphscope::report::{self, ReportFormat};

#[derive(Parser)]
#[command(name = "graphscope")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version = "0.1.0")]
#[command(about = "Structural queries over directed graphs: roots, leaves, cycles and depth", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sample graph and print its structure
    Demo {
        /// Add the edge 7 -> 6, closing a loop below root 4
        #[arg(long)]
        with_cycle: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Build a graph from command-line edges and print its structure
    Inspect {
        /// Edge as FROM:TO (repeatable)
        #[arg(short, long = "edge", value_name = "FROM:TO", value_parser = parse_edge, required = true)]
        edges: Vec<(u64, u64)>,

        /// Node identifier (repeatable); defaults to every identifier named by an edge
        #[arg(short, long = "node", value_name = "ID")]
        nodes: Vec<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show version information
    Version,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: ReportFormat,

    /// Deepest level a depth walk may reach
    #[arg(long, default_value_t = graphscope::config::DEFAULT_MAX_WALK_DEPTH)]
    max_walk_depth: usize,

    /// Fail instead of reporting when max depth cannot be determined
    #[arg(long)]
    strict: bool,
}

fn parse_edge(value: &str) -> Result<(u64, u64), String> {
    let (from, to) = value
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{}'", value))?;
    let from = from
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid source id '{}': {}", from, e))?;
    let to = to
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid target id '{}': {}", to, e))?;
    Ok((from, to))
}

/// Nodes 1..=7 with two roots (1 and 4) sharing child 2.
fn sample_graph(with_cycle: bool) -> Result<Graph<u64>> {
    let mut graph = Graph::new();
    for id in 1..=7 {
        graph.add_node(Node::new(id));
    }

    let mut edges = vec![(1, 2), (2, 3), (4, 2), (4, 5), (5, 6), (6, 7)];
    if with_cycle {
        edges.push((7, 6));
    }
    for (from, to) in edges {
        graph.add_edge(Edge::new(from, to)?);
    }

    Ok(graph)
}

fn graph_from_args(pairs: &[(u64, u64)], node_ids: &[u64]) -> Result<Graph<u64>> {
    let mut graph = Graph::new();

    if node_ids.is_empty() {
        for &(from, to) in pairs {
            for id in [from, to] {
                if !graph.contains(&id) {
                    graph.add_node(Node::new(id));
                }
            }
        }
    } else {
        for &id in node_ids {
            graph.add_node(Node::new(id));
        }
    }

    for &(from, to) in pairs {
        let edge =
            Edge::new(from, to).with_context(|| format!("invalid edge {}:{}", from, to))?;
        graph.add_edge(edge);
    }

    Ok(graph)
}

fn print_report(graph: Graph<u64>, output: &OutputArgs) -> Result<()> {
    let graph = graph.with_config(TraversalConfig::with_max_walk_depth(output.max_walk_depth));
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built"
    );

    if output.strict {
        let depth = graph.max_depth().context("cannot determine max depth")?;
        info!(depth, "max depth determined");
    }

    let summary = graph.report();
    let mut stdout = io::stdout().lock();
    report::render(output.format, &summary, &mut stdout).context("failed to write report")?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { with_cycle, output }) => {
            print_report(sample_graph(with_cycle)?, &output)?;
        }
        Some(Commands::Inspect {
            edges,
            nodes,
            output,
        }) => {
            print_report(graph_from_args(&edges, &nodes)?, &output)?;
        }
        Some(Commands::Version) => {
            println!("graphscope v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            println!("GraphScope - directed graph structure queries");
            println!("Run 'graphscope demo' to inspect the sample graph");
            println!("Run 'graphscope --help' for more information");
        }
    }

    Ok(())
}
