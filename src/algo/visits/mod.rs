//! Graph visits.
//!
//! Visits are generic over the [`Adjacencies`](crate::graph::Adjacencies)
//! trait and report what they find through a callback invoked with borrowed
//! event arguments.

pub mod breadth_first;

use dsi_progress_logger::ProgressLog;

/// A sequential visit.
///
/// Implementations must provide [`visit`](Sequential::visit), which visits
/// the graph from a single root, [`visit_all`](Sequential::visit_all), which
/// visits the whole graph one root at a time, and
/// [`reset`](Sequential::reset), which makes the visit reusable.
///
/// The callback argument type `A` carries at least the current node and the
/// event that triggered the callback; see the implementations for details.
pub trait Sequential<A> {
    /// Visits the graph from `root`, invoking `callback` on every event.
    ///
    /// A root already seen since the last [`reset`](Sequential::reset) is
    /// skipped entirely, without any callback invocation.
    ///
    /// # Arguments
    /// * `root`: the node to start the visit from.
    /// * `callback`: the callback function.
    /// * `pl`: a progress logger that implements
    ///   [`dsi_progress_logger::ProgressLog`]; pass
    ///   [`no_logging![]`](dsi_progress_logger::no_logging) for silence.
    fn visit<C: FnMut(&A)>(&mut self, root: usize, callback: C, pl: &mut impl ProgressLog);

    /// Visits the whole graph, taking every node in ascending order as a
    /// root of [`visit`](Sequential::visit).
    fn visit_all<C: FnMut(&A)>(&mut self, callback: C, pl: &mut impl ProgressLog);

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
