//! GraphScope - structural queries over directed graphs
//!
//! This crate provides an in-memory directed graph of identifier-bearing
//! nodes and answers root/leaf/orphan classification, circular path
//! detection and max depth queries over it.

pub mod config;
pub mod error;
pub mod graph;
pub mod report;
