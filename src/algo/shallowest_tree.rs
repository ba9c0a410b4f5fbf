//! Shallowest breadth-first spanning trees.
//!
//! The spanning tree rooted at a vertex is shallowest when the vertex has
//! minimum eccentricity, so the search tries every vertex as a root, measures
//! the depth of its breadth-first tree, and keeps the first minimum.

use crate::algo::visits::{
    breadth_first::{self, Args, Event},
    Sequential,
};
use crate::graph::Adjacencies;
use crate::utils::math::argmin;
use dsi_progress_logger::{no_logging, ProgressLog};
use rayon::prelude::*;

/// The result of [`run`]: the root whose breadth-first spanning tree is the
/// shallowest, together with its depth and all per-root eccentricities.
pub struct ShallowestTree {
    /// The first vertex, in ascending order, of minimum eccentricity.
    pub root: usize,
    /// The eccentricity of [`root`](Self::root), that is, the depth of the
    /// deepest leaf of its breadth-first spanning tree.
    pub depth: usize,
    /// The eccentricity of every vertex.
    pub eccentricities: Box<[usize]>,
}

fn tree_depth<G: Adjacencies>(
    visit: &mut breadth_first::Seq<G>,
    root: usize,
    pl: &mut impl ProgressLog,
) -> usize {
    let mut depth = 0;
    visit.visit(
        root,
        |&Args { distance, event, .. }| {
            if event == Event::Unknown && distance > depth {
                depth = distance;
            }
        },
        pl,
    );
    depth
}

/// Returns the eccentricity of `root`: the maximum number of hops from `root`
/// to any vertex reachable from it. Edge weights are ignored.
///
/// On a disconnected graph this measures depth within the component of
/// `root` only; unreachable vertices contribute nothing.
///
/// # Panics
/// Panics if `root` is not a vertex of the graph.
pub fn eccentricity(graph: impl Adjacencies, root: usize, pl: &mut impl ProgressLog) -> usize {
    tree_depth(&mut breadth_first::Seq::new(&graph), root, pl)
}

/// Computes the vertex whose breadth-first spanning tree has minimum depth,
/// trying every vertex as a root in ascending order.
///
/// Ties go to the smallest-indexed root: a later root with equal eccentricity
/// never replaces an earlier one, so the result is deterministic and repeated
/// calls on the same graph return identical values. On a disconnected graph
/// each root measures depth within its own component, so an isolated vertex
/// is a legitimate answer with depth 0.
///
/// Returns [`None`] on a graph with no vertices.
pub fn run(graph: impl Adjacencies, pl: &mut impl ProgressLog) -> Option<ShallowestTree> {
    let num_nodes = graph.num_nodes();
    pl.item_name("root");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing the shallowest spanning tree...");

    let mut visit = breadth_first::Seq::new(&graph);
    let mut eccentricities = Vec::with_capacity(num_nodes);
    for root in 0..num_nodes {
        eccentricities.push(tree_depth(&mut visit, root, no_logging![]));
        visit.reset();
        pl.update();
    }
    pl.done();

    let root = argmin(&eccentricities)?;
    let depth = eccentricities[root];
    pl.info(format_args!(
        "Shallowest spanning tree rooted at {} with depth {}",
        root, depth
    ));
    Some(ShallowestTree {
        root,
        depth,
        eccentricities: eccentricities.into(),
    })
}

/// Same as [`run`], but evaluates candidate roots in parallel.
///
/// Each root traverses the shared immutable graph with a private visit, so
/// the traversals are independent; the minimum is selected after all
/// candidates complete, in ascending root order, which makes the result
/// identical to [`run`]'s.
pub fn par_run(
    graph: impl Adjacencies + Sync,
    pl: &mut impl ProgressLog,
) -> Option<ShallowestTree> {
    let num_nodes = graph.num_nodes();
    pl.item_name("root");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing the shallowest spanning tree in parallel...");

    let eccentricities: Vec<usize> = (0..num_nodes)
        .into_par_iter()
        .map(|root| tree_depth(&mut breadth_first::Seq::new(&graph), root, no_logging![]))
        .collect();
    pl.done();

    let root = argmin(&eccentricities)?;
    let depth = eccentricities[root];
    pl.info(format_args!(
        "Shallowest spanning tree rooted at {} with depth {}",
        root, depth
    ));
    Some(ShallowestTree {
        root,
        depth,
        eccentricities: eccentricities.into(),
    })
}
