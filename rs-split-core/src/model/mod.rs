//! Top-level module for the partition generator.
//!
//! This module provides:
//! - The request arguments and their feasibility checks (`PartitionRequest`)
//! - The single failure outcome (`Infeasible`)
//! - The recursive generator (`PartitionGenerator`)
//! - Trace sinks for diagnostic output (`TraceSink`)

/// Recursive divide-and-conquer generator.
///
/// Exposes the configurable `PartitionGenerator` and a `generate`
/// shortcut using the thread RNG.
pub mod partition_generator;

/// Request arguments (`sum`, `count`, `floor`, `ceiling`) and feasibility checks.
pub mod partition_request;

/// Outcome returned when no sequence satisfies a request.
pub mod infeasible;

/// Diagnostic trace sinks.
///
/// Observational only; never affects generated values.
pub mod trace;
