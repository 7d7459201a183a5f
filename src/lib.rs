//! trigger-graph - discovers which CI jobs trigger which

pub mod cli;
pub mod core;
pub mod graph;

// Re-export commonly used types
pub use core::{BuildStep, InMemoryRegistry, Job, JobId, JobKind, JobRegistry, StepModel};
pub use core::config::InstanceConfig;
pub use graph::{Capabilities, Edge, EdgeDiscoverer, EdgeProvider};
