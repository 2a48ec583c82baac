//! JSON report rendering.
//!
//! Serializes a [`GraphReport`] as pretty-printed JSON for machine-readable output.

use super::{GraphReport, Reporter};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

/// JSON reporter implementation.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn render<Id, W>(&self, report: &GraphReport<Id>, writer: &mut W) -> io::Result<()>
    where
        Id: Display + Serialize,
        W: Write,
    {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)?;
        Ok(())
    }
}
