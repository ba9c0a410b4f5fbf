use anyhow::{Context, Result};
use dsi_progress_logger::prelude::*;
use shallow_tree::prelude::*;

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;
    let path = std::env::args().nth(1).expect("No graph file provided");
    let graph = AdjacencyGraph::from_path(&path)
        .with_context(|| format!("Cannot load graph from {}", path))?;
    let mut pl = progress_logger![display_memory = true];
    let tree = shallowest_tree::run(&graph, &mut pl).context("The graph has no vertices")?;
    println!("{} {}", tree.root, tree.depth);
    Ok(())
}
