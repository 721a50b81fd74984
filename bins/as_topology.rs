use as_sssp::menu::parse_node_count;
use as_sssp::render::topology_dot;
use as_sssp::shell::Shell;
use as_sssp::{Session, SessionConfig, Strategy};
use clap::Parser;
use log::info;
use std::io::{self, Write};

/// Generate random AS-like network graphs and explore their shortest paths.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Seed for reproducible graphs
    #[arg(long)]
    seed: Option<u64>,

    /// How Dijkstra selects the next node to settle
    #[arg(long, value_enum, default_value_t = Strategy::Scan)]
    strategy: Strategy,

    /// Compute the all-pairs summary on one thread
    #[arg(long)]
    sequential: bool,

    /// Generate a graph with this many nodes before the menu starts
    #[arg(long, value_parser = parse_nodes)]
    nodes: Option<usize>,

    /// Print the generated graph as Graphviz DOT and exit (requires --nodes)
    #[arg(long, requires = "nodes")]
    dot: bool,
}

fn parse_nodes(s: &str) -> Result<usize, String> {
    parse_node_count(s).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = SessionConfig {
        seed: cli.seed,
        strategy: cli.strategy,
        parallel: !cli.sequential && SessionConfig::default().parallel,
    };
    info!("starting session with {config:?}");
    let mut session = Session::new(config);

    if let Some(nodes) = cli.nodes {
        let graph = session.generate(nodes)?;
        if cli.dot {
            io::stdout().write_all(topology_dot(graph).as_bytes())?;
            return Ok(());
        }
    }

    let stdin = io::stdin();
    Shell::new(&mut session, stdin.lock(), io::stdout()).run()?;
    Ok(())
}
