//! Explicit-stack walks over a [`Topology`].
//!
//! Both walks start at a single vertex and follow outgoing edges only. The
//! cycle walk tracks the identifiers on the current path (not a global
//! visited set), so a node reachable by two different routes is not a cycle.
//!
//! Each search keeps what it learned about a vertex for the rest of the
//! query, so several starts over the same topology visit every vertex once.

use std::collections::{HashMap, HashSet};

use petgraph::graph::NodeIndex;

use super::node::NodeId;
use super::topology::Topology;
use crate::error::{GraphError, GraphResult};

/// A vertex on the current path and how many of its children were tried.
struct Frame {
    children: Vec<NodeIndex>,
    cursor: usize,
}

/// Revisit-based cycle search shared across several starting vertices.
///
/// A vertex is cleared once every child below it was explored without a
/// revisit. No cycle is reachable from a cleared vertex, and it cannot reach
/// any vertex on a later path (that would close a loop through it), so later
/// walks skip it without changing which cycle they report.
pub(crate) struct CycleSearch<'t, 'g, Id> {
    topology: &'t Topology<'g, Id>,
    cleared: HashSet<NodeIndex>,
}

impl<'t, 'g, Id: NodeId> CycleSearch<'t, 'g, Id> {
    pub(crate) fn new(topology: &'t Topology<'g, Id>) -> Self {
        Self {
            topology,
            cleared: HashSet::new(),
        }
    }

    /// Walks from `start` until some path revisits one of its own vertices.
    ///
    /// Returns the identifiers on that path followed by the revisited one, so
    /// the repeated identifier appears twice. Leaves end a branch. Children
    /// are tried in edge insertion order and the first cycle found wins.
    /// Returns an empty vector when no path from `start` loops.
    pub(crate) fn find_from(&mut self, start: NodeIndex) -> Vec<Id> {
        let mut path: Vec<NodeIndex> = Vec::new();
        let mut on_path: HashSet<NodeIndex> = HashSet::new();
        let mut stack: Vec<Frame> = Vec::new();
        let mut next = Some(start);

        loop {
            if let Some(current) = next.take() {
                if on_path.contains(&current) {
                    let mut cycle: Vec<Id> = path
                        .iter()
                        .map(|&idx| self.topology.id_at(idx).clone())
                        .collect();
                    cycle.push(self.topology.id_at(current).clone());
                    return cycle;
                }

                if !self.cleared.contains(&current) && !self.topology.is_leaf_at(current) {
                    path.push(current);
                    on_path.insert(current);
                    stack.push(Frame {
                        children: self.topology.children_at(current),
                        cursor: 0,
                    });
                }
            }

            let Some(frame) = stack.last_mut() else {
                return Vec::new();
            };

            match frame.children.get(frame.cursor).copied() {
                Some(child) => {
                    frame.cursor += 1;
                    next = Some(child);
                }
                None => {
                    stack.pop();
                    if let Some(done) = path.pop() {
                        on_path.remove(&done);
                        self.cleared.insert(done);
                    }
                }
            }
        }
    }
}

/// What a depth search knows about a vertex.
#[derive(Debug, Clone, Copy)]
struct Reach {
    /// Edges to the farthest leaf below, if any leaf is reachable
    height: Option<usize>,
    /// Edges to the farthest non-leaf vertex below; `None` for leaves
    span: Option<usize>,
}

/// Longest-path search shared across several roots.
///
/// Callers must rule out cycles reachable from each start first. Results are
/// memoised per vertex, so each vertex is expanded once per query.
pub(crate) struct DepthSearch<'t, 'g, Id> {
    topology: &'t Topology<'g, Id>,
    max_walk_depth: usize,
    reach: HashMap<NodeIndex, Reach>,
}

impl<'t, 'g, Id: NodeId> DepthSearch<'t, 'g, Id> {
    pub(crate) fn new(topology: &'t Topology<'g, Id>, max_walk_depth: usize) -> Self {
        Self {
            topology,
            max_walk_depth,
            reach: HashMap::new(),
        }
    }

    /// Length in edges of the longest path from `start` that ends at a leaf.
    ///
    /// Branches that run into an identifier with no outgoing edges that is
    /// not a registered node contribute nothing.
    ///
    /// # Errors
    ///
    /// [`GraphError::WalkDepthExceeded`] if some non-leaf vertex lies
    /// `max_walk_depth` or more edges below `start`.
    pub(crate) fn longest_from(&mut self, start: NodeIndex) -> GraphResult<usize> {
        let reach = self.resolve(start);

        if reach.span.is_some_and(|span| span >= self.max_walk_depth) {
            return Err(GraphError::WalkDepthExceeded {
                limit: self.max_walk_depth,
            });
        }

        Ok(reach.height.unwrap_or(0))
    }

    /// Post-order fill of `reach` for everything below `start`.
    fn resolve(&mut self, start: NodeIndex) -> Reach {
        let mut stack = vec![(start, false)];

        while let Some((current, expanded)) = stack.pop() {
            if self.reach.contains_key(&current) {
                continue;
            }

            if self.topology.is_leaf_at(current) {
                self.reach.insert(
                    current,
                    Reach {
                        height: Some(0),
                        span: None,
                    },
                );
                continue;
            }

            let children = self.topology.children_at(current);

            if !expanded {
                stack.push((current, true));
                stack.extend(
                    children
                        .into_iter()
                        .filter(|child| !self.reach.contains_key(child))
                        .map(|child| (child, false)),
                );
                continue;
            }

            let below: Vec<Reach> = children
                .iter()
                .filter_map(|child| self.reach.get(child).copied())
                .collect();
            let height = below
                .iter()
                .filter_map(|reach| reach.height)
                .map(|height| height + 1)
                .max();
            let span = below
                .iter()
                .filter_map(|reach| reach.span)
                .map(|span| span + 1)
                .max()
                .unwrap_or(0);

            self.reach.insert(
                current,
                Reach {
                    height,
                    span: Some(span),
                },
            );
        }

        self.reach.get(&start).copied().unwrap_or(Reach {
            height: None,
            span: None,
        })
    }
}
