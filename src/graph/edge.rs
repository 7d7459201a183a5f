//! Dependency edge

use crate::core::job::{Job, JobId};
use serde::Serialize;
use std::fmt;

/// A discovered "source triggers target" relationship
///
/// Equality and hashing cover the ordered pair only, so edge sets dedupe
/// repeated references to the same downstream job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    pub source: JobId,
    pub target: JobId,
}

impl Edge {
    pub fn new(source: &Job, target: &Job) -> Self {
        Self {
            source: source.id.clone(),
            target: target.id.clone(),
        }
    }

    /// Whether the edge points back at its own source
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
