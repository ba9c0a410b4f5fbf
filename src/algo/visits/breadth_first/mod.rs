//! Breadth-first visits.
//!
//! Implementations must accept a callback function with argument [`Args`]
//! that will be called when visiting a node.

mod seq;
pub use seq::*;

/// Types of callback events generated during a breadth-first visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Event {
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless all fields of [`Args`] are equal to the root.
    Unknown,
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Known,
}

/// Convenience struct to pass arguments to the callback of a breadth-first
/// visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Args {
    /// The node.
    pub curr: usize,
    /// The parent of [`curr`](Self::curr) in the visit tree.
    pub parent: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The number of arcs on the visit path from [`root`](Self::root) to
    /// [`curr`](Self::curr). For [`Known`](Event::Known) events this is the
    /// length of the path through the current arc, not the distance at which
    /// [`curr`](Self::curr) was first discovered.
    pub distance: usize,
    /// The event that triggered the callback.
    pub event: Event,
}
