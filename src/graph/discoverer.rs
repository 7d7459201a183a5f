//! Edge discovery from trigger steps

use crate::core::config::InstanceConfig;
use crate::core::registry::JobRegistry;
use crate::core::step::{BuildStep, TriggerStep};
use crate::core::Job;
use crate::graph::{Edge, EdgeProvider};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Plugin that provides conditional publish wrappers
pub const CONDITIONAL_PUBLISH_PLUGIN: &str = "flexible-publish";

/// Optional features of the CI instance that affect discovery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether conditional publish wrappers exist on this instance
    pub conditional_publish: bool,
}

impl Capabilities {
    /// Probe the installed plugin list once
    pub fn detect(config: &InstanceConfig) -> Self {
        Self {
            conditional_publish: config.has_plugin(CONDITIONAL_PUBLISH_PLUGIN),
        }
    }
}

/// Discovers edges to the jobs a job triggers
pub struct EdgeDiscoverer<'r, R: JobRegistry + ?Sized> {
    registry: &'r R,
    capabilities: Capabilities,
}

impl<'r, R: JobRegistry + ?Sized> EdgeDiscoverer<'r, R> {
    pub fn new(registry: &'r R, capabilities: Capabilities) -> Self {
        Self {
            registry,
            capabilities,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Trigger steps of `job`, in declaration order
    ///
    /// Build steps come first. With conditional publish available, trigger
    /// steps directly inside each conditional publish entry follow.
    fn trigger_steps<'j>(&self, job: &'j Job) -> Vec<&'j TriggerStep> {
        let Some(model) = job.step_model() else {
            trace!(job = %job.id, kind = ?job.kind, "job kind has no build steps");
            return Vec::new();
        };

        let mut steps: Vec<&TriggerStep> = model
            .builders()
            .iter()
            .filter_map(BuildStep::as_trigger)
            .collect();

        if self.capabilities.conditional_publish {
            for publisher in model.publishers() {
                if let BuildStep::ConditionalPublish(wrapper) = publisher {
                    steps.extend(
                        wrapper
                            .entries
                            .iter()
                            .flat_map(|entry| entry.steps.iter())
                            .filter_map(BuildStep::as_trigger),
                    );
                }
            }
        }

        steps
    }

    /// Downstream job names declared by `job`, trimmed, duplicates kept
    pub fn trigger_targets<'j>(&self, job: &'j Job) -> Vec<&'j str> {
        self.trigger_steps(job)
            .into_iter()
            .flat_map(|step| step.configs.iter())
            .flat_map(|config| config.project_names())
            .collect()
    }

    /// Declared names the registry cannot resolve from `job`'s folder
    pub fn unresolved_targets<'j>(&self, job: &'j Job) -> Vec<&'j str> {
        self.trigger_targets(job)
            .into_iter()
            .filter(|name| self.registry.resolve(name, &job.parent).is_none())
            .collect()
    }
}

impl<R: JobRegistry + ?Sized> EdgeProvider for EdgeDiscoverer<'_, R> {
    fn edges_incident_with(&self, job: &Job) -> HashSet<Edge> {
        let mut edges = HashSet::new();

        for name in self.trigger_targets(job) {
            match self.registry.resolve(name, &job.parent) {
                Some(target) => {
                    edges.insert(Edge::new(job, target));
                }
                None => debug!(job = %job.id, downstream = name, "skipping unresolved trigger target"),
            }
        }

        edges
    }
}
