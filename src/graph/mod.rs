//! Graph module for directed node/edge modeling.
//!
//! This module provides the [`Graph`] engine along with its [`Node`] and
//! [`Edge`] value types. Identifiers are generic over [`NodeId`].
//!
//! # Example
//!
//! ```rust
//! use graphscope::graph::{Edge, Graph, Node};
//!
//! let mut graph = Graph::new();
//! graph.add_node(Node::new(1));
//! graph.add_node(Node::new(2));
//! graph.add_edge(Edge::new(1, 2).unwrap());
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! assert!(graph.is_leaf(&2));
//! ```

mod directed_graph;
mod node;
mod topology;
mod walk;

pub use directed_graph::Graph;
pub use node::{Edge, Node, NodeId};
