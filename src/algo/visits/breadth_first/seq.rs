use crate::algo::visits::{
    breadth_first::{Args, Event},
    Sequential,
};
use crate::graph::Adjacencies;
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use std::collections::VecDeque;
use sux::bits::BitVec;

/// A sequential breadth-first visit.
///
/// This implementation does not store distances of the nodes from the root:
/// distances are computed on the fly and passed to the callback by visiting
/// nodes when they are discovered, rather than when they are extracted from
/// the queue.
///
/// This approach requires inserting a level separator between nodes at
/// different distances: to obtain this result in a compact way, nodes are
/// represented using [`NonMaxUsize`], so the `None` variant of
/// `Option<NonMaxUsize>` can be used as a separator.
///
/// # Examples
///
/// ```
/// use shallow_tree::graph::AdjacencyGraph;
/// use shallow_tree::algo::visits::{breadth_first, Sequential};
/// use dsi_progress_logger::no_logging;
///
/// // Let's compute the distances from 0
///
/// let graph = AdjacencyGraph::from_edges(4, [(0, 1, 1), (1, 2, 1), (1, 3, 1)]).unwrap();
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut d = [0; 4];
/// visit.visit(
///     0,
///     |&breadth_first::Args { curr, distance, event, .. }| {
///         // Set distance from 0
///         if event == breadth_first::Event::Unknown {
///             d[curr] = distance;
///         }
///     },
///     no_logging![],
/// );
/// assert_eq!(d, [0, 1, 2, 2]);
/// ```
pub struct Seq<G: Adjacencies> {
    graph: G,
    visited: BitVec,
    /// The visit queue; to avoid storing distances, we use `None` as a
    /// separator between levels. [`NonMaxUsize`] is used to avoid storage for
    /// the option variant tag.
    queue: VecDeque<Option<NonMaxUsize>>,
}

impl<G: Adjacencies> Seq<G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            queue: VecDeque::new(),
        }
    }
}

impl<G: Adjacencies> Sequential<Args> for Seq<G> {
    fn visit<C: FnMut(&Args)>(&mut self, root: usize, mut callback: C, pl: &mut impl ProgressLog) {
        if self.visited[root] {
            return;
        }

        callback(&Args {
            curr: root,
            parent: root,
            root,
            distance: 0,
            event: Event::Unknown,
        });
        self.visited.set(root, true);
        self.queue.push_back(Some(
            NonMaxUsize::new(root).expect("node index should never be usize::MAX"),
        ));
        self.queue.push_back(None);

        let mut distance = 1;

        while let Some(current_node) = self.queue.pop_front() {
            match current_node {
                Some(node) => {
                    let node: usize = node.into();
                    for succ in self.graph.successors(node) {
                        if !self.visited[succ] {
                            callback(&Args {
                                curr: succ,
                                parent: node,
                                root,
                                distance,
                                event: Event::Unknown,
                            });
                            self.visited.set(succ, true);
                            self.queue.push_back(Some(
                                NonMaxUsize::new(succ)
                                    .expect("node index should never be usize::MAX"),
                            ));
                        } else {
                            callback(&Args {
                                curr: succ,
                                parent: node,
                                root,
                                distance,
                                event: Event::Known,
                            });
                        }
                    }
                    pl.light_update();
                }
                None => {
                    // We are at the end of the current level, so
                    // we increment the distance and add a separator.
                    if !self.queue.is_empty() {
                        distance += 1;
                        self.queue.push_back(None);
                    }
                }
            }
        }
    }

    fn visit_all<C: FnMut(&Args)>(&mut self, mut callback: C, pl: &mut impl ProgressLog) {
        for node in 0..self.graph.num_nodes() {
            self.visit(node, &mut callback, pl);
        }
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.visited.fill(false);
    }
}
