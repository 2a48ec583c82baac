//! Error types for graph construction and traversal.

/// Errors raised while building edges or walking the graph.
///
/// Classification queries (roots, leaves, orphans, circular paths) never
/// fail; only edge construction and depth computation return these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint was the zero/empty identifier.
    #[error("The IDs of both nodes must not be 0 (got {from} -> {to})")]
    InvalidEdge {
        /// Debug rendering of the source identifier
        from: String,
        /// Debug rendering of the target identifier
        to: String,
    },

    /// A walk from a root revisited a node, so no longest path exists.
    #[error("Graph has at least one circular path. Cannot determine max depth.")]
    CircularPath,

    /// A depth walk went deeper than the configured cap.
    #[error("Potentially found a circular path. Infinite recursion (walk exceeded depth {limit}).")]
    WalkDepthExceeded {
        /// The configured `max_walk_depth`
        limit: usize,
    },
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
