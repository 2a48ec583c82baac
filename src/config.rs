//! Traversal configuration.

use serde::{Deserialize, Serialize};

/// Default cap on how deep a single depth walk may go.
pub const DEFAULT_MAX_WALK_DEPTH: usize = 500;

/// Limits applied to graph walks.
///
/// The cycle walk carries its own path and stops on the first revisit, so
/// only depth computation consults `max_walk_depth`.
///
/// # Example
///
/// ```rust
/// use graphscope::config::TraversalConfig;
///
/// let config: TraversalConfig = serde_json::from_str(r#"{"max_walk_depth": 64}"#).unwrap();
/// assert_eq!(config.max_walk_depth, 64);
///
/// let defaults: TraversalConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(defaults, TraversalConfig::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Deepest level a depth walk may reach before giving up (default: 500)
    pub max_walk_depth: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_walk_depth: DEFAULT_MAX_WALK_DEPTH,
        }
    }
}

impl TraversalConfig {
    /// Creates a config with the given depth cap.
    pub fn with_max_walk_depth(max_walk_depth: usize) -> Self {
        Self { max_walk_depth }
    }
}
