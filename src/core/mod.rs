//! Core domain models
//!
//! This module defines the jobs, build steps and configuration that edge
//! discovery reads, plus the registry that resolves job names.

pub mod config;
pub mod job;
pub mod registry;
pub mod step;

pub use job::*;
pub use registry::*;
pub use step::*;
