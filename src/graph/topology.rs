//! Per-query adjacency snapshot.
//!
//! Every public query on [`Graph`](super::Graph) builds one of these from the
//! current node and edge lists, uses it for the duration of the call, and
//! drops it. Nothing is cached between calls, so appends are always visible
//! to the next query.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::node::{Edge, Node, NodeId};

/// A distinct identifier seen in the node list or as an edge endpoint.
#[derive(Debug)]
struct Vertex<'g, Id> {
    id: &'g Id,
    /// Whether the identifier was added as a node, not only named by an edge
    registered: bool,
}

/// Borrowed adjacency view over a graph's nodes and edges.
///
/// Edge weights hold the edge's position in insertion order so that child
/// lists come back in the order the edges were added.
#[derive(Debug)]
pub(crate) struct Topology<'g, Id> {
    graph: DiGraph<Vertex<'g, Id>, usize>,
    indices: HashMap<&'g Id, NodeIndex>,
}

impl<'g, Id: NodeId> Topology<'g, Id> {
    pub(crate) fn build(nodes: &'g [Node<Id>], edges: &'g [Edge<Id>]) -> Self {
        let mut topology = Self {
            graph: DiGraph::with_capacity(nodes.len(), edges.len()),
            indices: HashMap::with_capacity(nodes.len()),
        };

        for node in nodes {
            let idx = topology.vertex(node.id());
            topology.graph[idx].registered = true;
        }

        for (position, edge) in edges.iter().enumerate() {
            let from = topology.vertex(edge.from());
            let to = topology.vertex(edge.to());
            topology.graph.add_edge(from, to, position);
        }

        topology
    }

    fn vertex(&mut self, id: &'g Id) -> NodeIndex {
        if let Some(&idx) = self.indices.get(id) {
            return idx;
        }

        let idx = self.graph.add_node(Vertex {
            id,
            registered: false,
        });
        self.indices.insert(id, idx);
        idx
    }

    pub(crate) fn index_of(&self, id: &Id) -> Option<NodeIndex> {
        self.indices.get(id).copied()
    }

    pub(crate) fn id_at(&self, idx: NodeIndex) -> &'g Id {
        self.graph[idx].id
    }

    /// Returns `(is_parent, is_child)` for an identifier.
    pub(crate) fn participation(&self, id: &Id) -> (bool, bool) {
        match self.index_of(id) {
            Some(idx) => self.participation_at(idx),
            None => (false, false),
        }
    }

    fn participation_at(&self, idx: NodeIndex) -> (bool, bool) {
        let is_parent = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .next()
            .is_some();
        let is_child = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .next()
            .is_some();
        (is_parent, is_child)
    }

    /// A leaf is a registered node with a parent and no children.
    pub(crate) fn is_leaf_at(&self, idx: NodeIndex) -> bool {
        let (is_parent, is_child) = self.participation_at(idx);
        self.graph[idx].registered && is_child && !is_parent
    }

    /// Targets of the outgoing edges of `idx`, in edge insertion order.
    pub(crate) fn children_at(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut outgoing: Vec<(usize, NodeIndex)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| (*edge.weight(), edge.target()))
            .collect();
        outgoing.sort_unstable_by_key(|&(position, _)| position);
        outgoing.into_iter().map(|(_, target)| target).collect()
    }
}
