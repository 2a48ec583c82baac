//! Directed graph engine.
//!
//! Holds insertion-ordered node and edge lists and answers structural
//! queries: root/leaf/orphan classification, circular path detection and
//! longest root-to-leaf depth.

use petgraph::graph::NodeIndex;
use tracing::{debug, warn};

use super::node::{Edge, Node, NodeId};
use super::topology::Topology;
use super::walk::{CycleSearch, DepthSearch};
use crate::config::TraversalConfig;
use crate::error::{GraphError, GraphResult};

/// A directed graph over caller-chosen identifiers.
///
/// Nodes and edges are append-only and keep their insertion order, which is
/// the order query results come back in. Edges may name identifiers that
/// were never added as nodes; such identifiers take part in walks but are
/// never returned by node queries.
///
/// Node identifiers are expected to be unique. Adding the same identifier
/// twice is not rejected, and identifier lookups then see only the first.
///
/// # Example
///
/// ```rust
/// use graphscope::graph::{Edge, Graph, Node};
///
/// let mut graph = Graph::new();
/// for id in 1..=4 {
///     graph.add_node(Node::new(id));
/// }
/// graph.add_edge(Edge::new(1, 2).unwrap());
/// graph.add_edge(Edge::new(1, 3).unwrap());
/// graph.add_edge(Edge::new(3, 4).unwrap());
///
/// let roots: Vec<i32> = graph.root_nodes().iter().map(|n| *n.id()).collect();
/// assert_eq!(roots, vec![1]);
/// assert_eq!(graph.max_depth().unwrap(), 2);
/// assert!(!graph.has_circular_paths());
/// ```
#[derive(Debug, Clone)]
pub struct Graph<Id> {
    nodes: Vec<Node<Id>>,
    edges: Vec<Edge<Id>>,
    config: TraversalConfig,
}

impl<Id: NodeId> Default for Graph<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: NodeId> Graph<Id> {
    /// Creates a new empty graph.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::Graph;
    ///
    /// let graph: Graph<u32> = Graph::new();
    /// assert!(graph.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }

    /// Creates a graph from initial node and edge lists.
    pub fn from_parts(nodes: Vec<Node<Id>>, edges: Vec<Edge<Id>>) -> Self {
        Self {
            nodes,
            edges,
            config: TraversalConfig::default(),
        }
    }

    /// Replaces the traversal limits used by depth queries.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::config::TraversalConfig;
    /// use graphscope::graph::Graph;
    ///
    /// let graph: Graph<u32> = Graph::new().with_config(TraversalConfig::with_max_walk_depth(8));
    /// assert_eq!(graph.config().max_walk_depth, 8);
    /// ```
    pub fn with_config(mut self, config: TraversalConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the traversal limits.
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Appends a node. No uniqueness check is made.
    pub fn add_node(&mut self, node: Node<Id>) {
        self.nodes.push(node);
    }

    /// Appends an edge. Its endpoints need not be nodes of the graph.
    pub fn add_edge(&mut self, edge: Edge<Id>) {
        self.edges.push(edge);
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node<Id>] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge<Id>] {
        &self.edges
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Returns true if a node with this identifier was added.
    pub fn contains(&self, id: &Id) -> bool {
        self.get_node(id).is_some()
    }

    /// Nodes with at least one outgoing edge and no incoming edge.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{Edge, Graph, Node};
    ///
    /// // 1   2
    /// //  \ /
    /// //   3
    /// let graph = Graph::from_parts(
    ///     vec![Node::new(1), Node::new(2), Node::new(3)],
    ///     vec![Edge::new(1, 3).unwrap(), Edge::new(2, 3).unwrap()],
    /// );
    /// assert_eq!(graph.root_nodes(), vec![&Node::new(1), &Node::new(2)]);
    /// ```
    pub fn root_nodes(&self) -> Vec<&Node<Id>> {
        let topology = self.topology();
        self.nodes_where(&topology, |is_parent, is_child| is_parent && !is_child)
    }

    /// Nodes with at least one incoming edge and no outgoing edge.
    pub fn leaf_nodes(&self) -> Vec<&Node<Id>> {
        let topology = self.topology();
        self.nodes_where(&topology, |is_parent, is_child| is_child && !is_parent)
    }

    /// Nodes with no edges at all.
    pub fn find_orphans(&self) -> Vec<&Node<Id>> {
        let topology = self.topology();
        self.nodes_where(&topology, |is_parent, is_child| !is_child && !is_parent)
    }

    /// Returns true if `id` is one of [`leaf_nodes`](Self::leaf_nodes).
    ///
    /// An orphan has no parent, so it is not a leaf.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{Edge, Graph, Node};
    ///
    /// let graph = Graph::from_parts(
    ///     vec![Node::new(1), Node::new(2), Node::new(3)],
    ///     vec![Edge::new(1, 3).unwrap()],
    /// );
    /// assert!(!graph.is_leaf(&1));
    /// assert!(!graph.is_leaf(&2));
    /// assert!(graph.is_leaf(&3));
    /// ```
    pub fn is_leaf(&self, id: &Id) -> bool {
        self.leaf_nodes().iter().any(|leaf| leaf.id() == id)
    }

    /// Direct children of `id` that were added as nodes, in edge order.
    ///
    /// Edge targets with no matching node are skipped.
    pub fn find_children_nodes(&self, id: &Id) -> Vec<&Node<Id>> {
        self.find_children_edges(id)
            .into_iter()
            .filter_map(|edge| self.get_node(edge.to()))
            .collect()
    }

    /// Returns true if a walk from some root node revisits a node on its path.
    ///
    /// Only roots are used as starting points. A cycle that no root leads
    /// into (for example a graph that is a single loop) is not reported
    /// here; [`find_all_circular_paths`](Self::find_all_circular_paths)
    /// walks from every node and does report it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::{Edge, Graph, Node};
    ///
    /// let looped = Graph::from_parts(
    ///     vec![Node::new(1), Node::new(2)],
    ///     vec![Edge::new(1, 2).unwrap(), Edge::new(2, 1).unwrap()],
    /// );
    /// assert!(!looped.has_circular_paths());
    /// assert_eq!(looped.find_all_circular_paths().len(), 2);
    /// ```
    pub fn has_circular_paths(&self) -> bool {
        let topology = self.topology();
        let mut search = CycleSearch::new(&topology);
        let found = self
            .root_indices(&topology)
            .into_iter()
            .any(|root| !search.find_from(root).is_empty());

        debug!(found, "checked root walks for circular paths");
        found
    }

    /// Walks from every node and collects each circular path found.
    ///
    /// Each entry lists the identifiers on the walk up to and including the
    /// revisited one, so it ends with an identifier that already appears
    /// earlier in the same entry. Entries follow node insertion order; nodes
    /// whose walk finds no cycle contribute nothing.
    pub fn find_all_circular_paths(&self) -> Vec<Vec<Id>> {
        let topology = self.topology();
        let mut search = CycleSearch::new(&topology);
        let paths: Vec<Vec<Id>> = self
            .nodes
            .iter()
            .filter_map(|node| topology.index_of(node.id()))
            .map(|start| search.find_from(start))
            .filter(|path| !path.is_empty())
            .collect();

        debug!(count = paths.len(), "collected circular paths");
        paths
    }

    /// Length in edges of the longest root-to-leaf path.
    ///
    /// Returns 0 when the graph has no root nodes.
    ///
    /// # Errors
    ///
    /// - [`GraphError::CircularPath`] if a walk from any root finds a cycle.
    /// - [`GraphError::WalkDepthExceeded`] if a walk goes deeper than
    ///   [`TraversalConfig::max_walk_depth`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::error::GraphError;
    /// use graphscope::graph::{Edge, Graph, Node};
    ///
    /// let mut graph = Graph::from_parts(
    ///     vec![Node::new(1), Node::new(2), Node::new(3)],
    ///     vec![Edge::new(1, 2).unwrap(), Edge::new(2, 3).unwrap()],
    /// );
    /// assert_eq!(graph.max_depth(), Ok(2));
    ///
    /// graph.add_edge(Edge::new(3, 2).unwrap());
    /// assert_eq!(graph.max_depth(), Err(GraphError::CircularPath));
    /// ```
    pub fn max_depth(&self) -> GraphResult<usize> {
        let topology = self.topology();
        let mut cycles = CycleSearch::new(&topology);
        let mut depths = DepthSearch::new(&topology, self.config.max_walk_depth);
        let mut max_depth = 0;

        for root in self.root_indices(&topology) {
            let cycle = cycles.find_from(root);
            if !cycle.is_empty() {
                warn!(?cycle, "circular path blocks max depth computation");
                return Err(GraphError::CircularPath);
            }

            let depth = depths.longest_from(root)?;
            max_depth = max_depth.max(depth);
        }

        debug!(max_depth, "computed max depth");
        Ok(max_depth)
    }

    /// Outgoing edges of `id`, in edge insertion order.
    fn find_children_edges(&self, id: &Id) -> Vec<&Edge<Id>> {
        self.edges.iter().filter(|edge| edge.from() == id).collect()
    }

    /// First node carrying `id`.
    fn get_node(&self, id: &Id) -> Option<&Node<Id>> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    fn topology(&self) -> Topology<'_, Id> {
        Topology::build(&self.nodes, &self.edges)
    }

    fn nodes_where<F>(&self, topology: &Topology<'_, Id>, keep: F) -> Vec<&Node<Id>>
    where
        F: Fn(bool, bool) -> bool,
    {
        self.nodes
            .iter()
            .filter(|node| {
                let (is_parent, is_child) = topology.participation(node.id());
                keep(is_parent, is_child)
            })
            .collect()
    }

    fn root_indices(&self, topology: &Topology<'_, Id>) -> Vec<NodeIndex> {
        self.nodes_where(topology, |is_parent, is_child| is_parent && !is_child)
            .into_iter()
            .filter_map(|node| topology.index_of(node.id()))
            .collect()
    }
}
