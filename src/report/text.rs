//! Plain-text report rendering.

use super::{GraphReport, Reporter};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

/// Text reporter implementation.
pub struct TextReporter;

impl Reporter for TextReporter {
    fn render<Id, W>(&self, report: &GraphReport<Id>, writer: &mut W) -> io::Result<()>
    where
        Id: Display + Serialize,
        W: Write,
    {
        writeln!(
            writer,
            "Graph: {} nodes, {} edges",
            report.node_count, report.edge_count
        )?;
        writeln!(writer, "Root nodes: {}", join(&report.roots, ", "))?;
        writeln!(writer, "Leaf nodes: {}", join(&report.leaves, ", "))?;
        writeln!(writer, "Orphan nodes: {}", join(&report.orphans, ", "))?;

        match (&report.max_depth, &report.max_depth_error) {
            (Some(depth), _) => writeln!(writer, "Max depth: {}", depth)?,
            (None, Some(reason)) => writeln!(writer, "Max depth: unavailable ({})", reason)?,
            (None, None) => writeln!(writer, "Max depth: unavailable")?,
        }

        writeln!(
            writer,
            "Has circular paths: {}",
            if report.has_circular_paths { "yes" } else { "no" }
        )?;

        if !report.circular_paths.is_empty() {
            writeln!(writer, "Circular paths:")?;
            for path in &report.circular_paths {
                writeln!(writer, "  {}", join(path, " -> "))?;
            }
        }

        Ok(())
    }
}

fn join<Id: Display>(ids: &[Id], separator: &str) -> String {
    if ids.is_empty() {
        return "(none)".to_string();
    }

    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
