//! Dependency graph edges
//!
//! This module turns the trigger declarations of a job into directed edges
//! to the jobs it starts.

pub mod discoverer;
pub mod edge;

pub use discoverer::*;
pub use edge::*;

use crate::core::Job;
use std::collections::HashSet;

/// Source of outgoing edges for a job - allows for different trigger mechanisms
pub trait EdgeProvider {
    /// Edges from `job` to every job it triggers
    fn edges_incident_with(&self, job: &Job) -> HashSet<Edge>;
}
