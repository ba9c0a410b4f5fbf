use anyhow::Result;
use dsi_progress_logger::no_logging;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shallow_tree::algo::shallowest_tree;
use shallow_tree::graph::AdjacencyGraph;

/// A random tree keeps the graph connected; extra edges add cycles.
fn random_graph(num_nodes: usize, extra_edges: usize, rng: &mut StdRng) -> AdjacencyGraph {
    let mut edges = Vec::new();
    for v in 1..num_nodes {
        edges.push((rng.random_range(0..v), v, rng.random_range(1..100)));
    }
    for _ in 0..extra_edges {
        edges.push((
            rng.random_range(0..num_nodes),
            rng.random_range(0..num_nodes),
            rng.random_range(1..100),
        ));
    }
    AdjacencyGraph::from_edges(num_nodes, edges).unwrap()
}

fn naive_eccentricity(graph: &AdjacencyGraph, root: usize) -> usize {
    let mut dist = vec![None; graph.num_nodes()];
    let mut queue = std::collections::VecDeque::new();
    dist[root] = Some(0usize);
    queue.push_back(root);
    let mut max_depth = 0;
    while let Some(u) = queue.pop_front() {
        for &(v, _) in graph.neighbors(u) {
            if dist[v].is_none() {
                let depth = dist[u].unwrap() + 1;
                dist[v] = Some(depth);
                max_depth = max_depth.max(depth);
                queue.push_back(v);
            }
        }
    }
    max_depth
}

#[test]
fn test_single_vertex() -> Result<()> {
    let graph = AdjacencyGraph::from_edges(1, [])?;
    let tree = shallowest_tree::run(&graph, no_logging![]).unwrap();

    assert_eq!((tree.root, tree.depth), (0, 0));

    Ok(())
}

#[test]
fn test_empty_graph() -> Result<()> {
    let graph = AdjacencyGraph::from_edges(0, [])?;

    assert!(shallowest_tree::run(&graph, no_logging![]).is_none());
    assert!(shallowest_tree::par_run(&graph, no_logging![]).is_none());

    Ok(())
}

#[test]
fn test_path() -> Result<()> {
    let graph = AdjacencyGraph::from_edges(5, [(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1)])?;
    let tree = shallowest_tree::run(&graph, no_logging![]).unwrap();

    assert_eq!(tree.root, 2);
    assert_eq!(tree.depth, 2);
    assert_eq!(&*tree.eccentricities, [4, 3, 2, 3, 4]);
    assert_eq!(shallowest_tree::eccentricity(&graph, 0, no_logging![]), 4);
    assert_eq!(shallowest_tree::eccentricity(&graph, 4, no_logging![]), 4);

    Ok(())
}

#[test]
fn test_star() -> Result<()> {
    let graph = AdjacencyGraph::from_edges(5, [(0, 1, 1), (0, 2, 1), (0, 3, 1), (0, 4, 1)])?;
    let tree = shallowest_tree::run(&graph, no_logging![]).unwrap();

    assert_eq!((tree.root, tree.depth), (0, 1));
    for leaf in 1..5 {
        assert_eq!(
            shallowest_tree::eccentricity(&graph, leaf, no_logging![]),
            2
        );
    }

    Ok(())
}

#[test]
fn test_tie_break() -> Result<()> {
    // Every vertex of a cycle has the same eccentricity; the first one wins.
    let graph = AdjacencyGraph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)])?;
    let tree = shallowest_tree::run(&graph, no_logging![]).unwrap();

    assert_eq!((tree.root, tree.depth), (0, 2));
    assert_eq!(&*tree.eccentricities, [2, 2, 2, 2]);

    Ok(())
}

#[test]
fn test_idempotence() -> Result<()> {
    let graph = AdjacencyGraph::from_edges(
        6,
        [(0, 1, 1), (1, 2, 1), (2, 3, 1), (2, 4, 1), (4, 5, 1)],
    )?;

    let first = shallowest_tree::run(&graph, no_logging![]).unwrap();
    let second = shallowest_tree::run(&graph, no_logging![]).unwrap();

    assert_eq!((first.root, first.depth), (second.root, second.depth));
    assert_eq!(first.eccentricities, second.eccentricities);

    Ok(())
}

#[test]
fn test_weights_are_ignored() -> Result<()> {
    let light = AdjacencyGraph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1)])?;
    let heavy = AdjacencyGraph::from_edges(4, [(0, 1, 1000), (1, 2, -5), (2, 3, 7)])?;

    let a = shallowest_tree::run(&light, no_logging![]).unwrap();
    let b = shallowest_tree::run(&heavy, no_logging![]).unwrap();

    assert_eq!((a.root, a.depth), (b.root, b.depth));

    Ok(())
}

#[test]
fn test_isolated_vertices() -> Result<()> {
    // Each root only measures its own component, so appending an isolated
    // vertex leaves the other eccentricities untouched and wins with depth 0.
    let path = AdjacencyGraph::from_edges(3, [(0, 1, 1), (1, 2, 1)])?;
    let with_isolated = AdjacencyGraph::from_edges(4, [(0, 1, 1), (1, 2, 1)])?;

    let tree = shallowest_tree::run(&path, no_logging![]).unwrap();
    let extended = shallowest_tree::run(&with_isolated, no_logging![]).unwrap();

    for root in 0..3 {
        assert_eq!(tree.eccentricities[root], extended.eccentricities[root]);
    }
    assert_eq!((tree.root, tree.depth), (1, 1));
    assert_eq!((extended.root, extended.depth), (3, 0));

    Ok(())
}

#[test]
fn test_no_edges() -> Result<()> {
    let graph = AdjacencyGraph::from_edges(100, [])?;
    let tree = shallowest_tree::run(&graph, no_logging![]).unwrap();

    assert_eq!((tree.root, tree.depth), (0, 0));
    assert!(tree.eccentricities.iter().all(|&e| e == 0));

    Ok(())
}

#[test]
fn test_eccentricity_matches_reference() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let graph = random_graph(80, 60, &mut rng);

    for root in 0..graph.num_nodes() {
        assert_eq!(
            shallowest_tree::eccentricity(&graph, root, no_logging![]),
            naive_eccentricity(&graph, root)
        );
    }

    Ok(())
}

#[test]
fn test_par_agrees_with_seq() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..10 {
        let graph = random_graph(60, 40, &mut rng);
        let seq = shallowest_tree::run(&graph, no_logging![]).unwrap();
        let par = shallowest_tree::par_run(&graph, no_logging![]).unwrap();

        assert_eq!(seq.root, par.root);
        assert_eq!(seq.depth, par.depth);
        assert_eq!(seq.eccentricities, par.eccentricities);
    }

    Ok(())
}
