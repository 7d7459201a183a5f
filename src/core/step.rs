//! Build step domain model

use serde::{Deserialize, Serialize};

/// A single build or publish step of a job
///
/// Only the step kinds that can declare downstream jobs are modelled in
/// detail; every other step type decodes to [`BuildStep::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BuildStep {
    /// Run a shell command
    Shell {
        command: String,
    },

    /// Trigger other jobs
    Trigger(TriggerStep),

    /// Publishers gated behind run conditions
    ConditionalPublish(ConditionalPublishWrapper),

    /// Any step type this crate does not inspect
    #[serde(other)]
    Other,
}

impl BuildStep {
    /// The trigger step, if this is one
    pub fn as_trigger(&self) -> Option<&TriggerStep> {
        match self {
            BuildStep::Trigger(trigger) => Some(trigger),
            _ => None,
        }
    }
}

/// A step that starts one or more downstream jobs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerStep {
    /// Trigger declarations, in declaration order
    #[serde(default)]
    pub configs: Vec<TriggerConfig>,
}

/// One trigger declaration inside a [`TriggerStep`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Comma-separated downstream job names, as typed by the user
    pub projects: String,

    /// Whether the triggering build waits for the downstream builds
    #[serde(default)]
    pub block: bool,
}

impl TriggerConfig {
    pub fn new(projects: impl Into<String>) -> Self {
        Self {
            projects: projects.into(),
            block: false,
        }
    }

    /// Trimmed, non-empty job names from the `projects` field
    pub fn project_names(&self) -> impl Iterator<Item = &str> {
        self.projects
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Publish step wrapping condition-gated lists of steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionalPublishWrapper {
    #[serde(default)]
    pub entries: Vec<ConditionalPublishEntry>,
}

/// One condition-gated entry of a [`ConditionalPublishWrapper`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionalPublishEntry {
    /// Run condition label (informational)
    #[serde(default)]
    pub condition: Option<String>,

    /// Steps run when the condition holds
    #[serde(default)]
    pub steps: Vec<BuildStep>,
}

/// The declared steps of a step-based job
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepModel {
    builders: Vec<BuildStep>,
    publishers: Vec<BuildStep>,
}

impl StepModel {
    pub fn new(builders: Vec<BuildStep>, publishers: Vec<BuildStep>) -> Self {
        Self {
            builders,
            publishers,
        }
    }

    /// Build-phase steps, in order
    pub fn builders(&self) -> &[BuildStep] {
        &self.builders
    }

    /// Publish-phase steps, in order
    pub fn publishers(&self) -> &[BuildStep] {
        &self.publishers
    }
}
