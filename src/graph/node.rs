//! Node and edge value types.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{GraphError, GraphResult};

/// Identifier carried by nodes and edge endpoints.
///
/// Any hashable, equality-comparable type can serve as an identifier as long
/// as it can say whether it is the "unset" value an edge must never point at.
pub trait NodeId: Clone + Eq + Hash + Debug {
    /// Returns true for the zero/empty value that is not a valid endpoint.
    fn is_unset(&self) -> bool;
}

macro_rules! impl_integer_node_id {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NodeId for $ty {
                fn is_unset(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_integer_node_id!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl NodeId for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl NodeId for &str {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

/// A vertex of the graph.
///
/// Identifiers are expected to be unique within a graph. Duplicates are not
/// rejected; lookups by identifier then resolve to the first one inserted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node<Id> {
    id: Id,
}

impl<Id: NodeId> Node<Id> {
    /// Creates a new node.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::Node;
    ///
    /// let node = Node::new(7);
    /// assert_eq!(*node.id(), 7);
    /// ```
    pub fn new(id: Id) -> Self {
        Self { id }
    }

    /// Returns the node identifier.
    pub fn id(&self) -> &Id {
        &self.id
    }
}

/// A directed connection from one node identifier to another.
///
/// Self-loops are allowed and show up as circular paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<Id> {
    from: Id,
    to: Id,
}

impl<Id: NodeId> Edge<Id> {
    /// Creates a new edge from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidEdge`] if either endpoint is unset
    /// (`0` for integers, empty for strings).
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphscope::graph::Edge;
    ///
    /// let edge = Edge::new(1, 2).unwrap();
    /// assert_eq!((*edge.from(), *edge.to()), (1, 2));
    ///
    /// assert!(Edge::new(0, 2).is_err());
    /// ```
    pub fn new(from: Id, to: Id) -> GraphResult<Self> {
        if from.is_unset() || to.is_unset() {
            return Err(GraphError::InvalidEdge {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
            });
        }

        Ok(Self { from, to })
    }

    /// Identifier of the outgoing (parent) side.
    pub fn from(&self) -> &Id {
        &self.from
    }

    /// Identifier of the incoming (child) side.
    pub fn to(&self) -> &Id {
        &self.to
    }
}
