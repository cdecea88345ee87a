//! Random integer partitions with bounded values and an exact sum.
//!
//! This crate provides:
//! - A recursive generator splitting a target sum over a fixed number of slots
//! - Feasibility checks that reject impossible requests up front
//! - Optional, pluggable tracing of every split
//!
//! The typical entry point is [`model::partition_generator::generate`].

/// Partition requests, generation and tracing.
///
/// Everything a caller needs is exposed from here.
pub mod model;
