//! Query summaries for a graph.
//!
//! [`GraphReport`] runs every structural query once and keeps the results,
//! and the [`Reporter`] implementations render it as plain text or JSON.

pub mod json;
pub mod text;

use std::fmt::Display;
use std::io::{self, Write};

use serde::Serialize;

use crate::graph::{Graph, Node, NodeId};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown report format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Results of every structural query on one graph.
///
/// # Example
///
/// ```rust
/// use graphscope::graph::{Edge, Graph, Node};
///
/// let graph = Graph::from_parts(
///     vec![Node::new(1), Node::new(2), Node::new(3)],
///     vec![Edge::new(1, 2).unwrap()],
/// );
/// let report = graph.report();
/// assert_eq!(report.roots, vec![1]);
/// assert_eq!(report.leaves, vec![2]);
/// assert_eq!(report.orphans, vec![3]);
/// assert_eq!(report.max_depth, Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphReport<Id> {
    /// Number of nodes in the graph
    pub node_count: usize,
    /// Number of edges in the graph
    pub edge_count: usize,
    /// Root node identifiers, in node order
    pub roots: Vec<Id>,
    /// Leaf node identifiers, in node order
    pub leaves: Vec<Id>,
    /// Orphan node identifiers, in node order
    pub orphans: Vec<Id>,
    /// Longest root-to-leaf path, if it could be determined
    pub max_depth: Option<usize>,
    /// Why the max depth could not be determined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth_error: Option<String>,
    /// Whether a walk from a root revisits a node
    pub has_circular_paths: bool,
    /// Circular paths found by walking from every node
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub circular_paths: Vec<Vec<Id>>,
}

impl<Id: NodeId> GraphReport<Id> {
    /// Runs all queries against `graph`.
    ///
    /// A failed depth computation is recorded in `max_depth_error` rather
    /// than aborting the report.
    pub fn from_graph(graph: &Graph<Id>) -> Self {
        let (max_depth, max_depth_error) = match graph.max_depth() {
            Ok(depth) => (Some(depth), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            roots: ids(graph.root_nodes()),
            leaves: ids(graph.leaf_nodes()),
            orphans: ids(graph.find_orphans()),
            max_depth,
            max_depth_error,
            has_circular_paths: graph.has_circular_paths(),
            circular_paths: graph.find_all_circular_paths(),
        }
    }
}

impl<Id: NodeId> Graph<Id> {
    /// Summarises every structural query in one [`GraphReport`].
    pub fn report(&self) -> GraphReport<Id> {
        GraphReport::from_graph(self)
    }
}

fn ids<Id: NodeId>(nodes: Vec<&Node<Id>>) -> Vec<Id> {
    nodes.into_iter().map(|node| node.id().clone()).collect()
}

/// Trait for report renderers.
pub trait Reporter {
    /// Render the report to the given writer.
    fn render<Id, W>(&self, report: &GraphReport<Id>, writer: &mut W) -> io::Result<()>
    where
        Id: Display + Serialize,
        W: Write;
}

/// Render a report in the specified format.
pub fn render<Id, W>(
    format: ReportFormat,
    report: &GraphReport<Id>,
    writer: &mut W,
) -> io::Result<()>
where
    Id: Display + Serialize,
    W: Write,
{
    match format {
        ReportFormat::Text => text::TextReporter.render(report, writer),
        ReportFormat::Json => json::JsonReporter.render(report, writer),
    }
}

/// Render a report to a string.
pub fn render_to_string<Id>(format: ReportFormat, report: &GraphReport<Id>) -> io::Result<String>
where
    Id: Display + Serialize,
{
    let mut buffer = Vec::new();
    render(format, report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn cyclic_graph() -> Graph<u32> {
        Graph::from_parts(
            vec![Node::new(1), Node::new(2), Node::new(3)],
            vec![
                Edge::new(1, 2).unwrap(),
                Edge::new(2, 3).unwrap(),
                Edge::new(3, 2).unwrap(),
            ],
        )
    }

    #[test]
    fn test_report_format_from_str() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_report_format_display() {
        assert_eq!(format!("{}", ReportFormat::Text), "text");
        assert_eq!(format!("{}", ReportFormat::Json), "json");
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
    }

    #[test]
    fn test_report_records_depth_failure() {
        let report = cyclic_graph().report();

        assert_eq!(report.roots, vec![1]);
        assert!(report.leaves.is_empty());
        assert_eq!(report.max_depth, None);
        assert_eq!(
            report.max_depth_error.as_deref(),
            Some("Graph has at least one circular path. Cannot determine max depth.")
        );
        assert!(report.has_circular_paths);
        assert_eq!(report.circular_paths.len(), 3);
    }

    #[test]
    fn test_render_to_string_both_formats() {
        let report = cyclic_graph().report();

        let text = render_to_string(ReportFormat::Text, &report).unwrap();
        assert!(text.contains("Root nodes: 1"));

        let json = render_to_string(ReportFormat::Json, &report).unwrap();
        assert!(json.contains("\"has_circular_paths\": true"));
    }
}
