//! Job domain model

use crate::core::config::JobConfig;
use crate::core::step::StepModel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a job: its full slash-separated path (`team/api/build`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(full_name: impl Into<String>) -> Self {
        JobId(full_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of job, as far as dependency discovery cares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    /// Buildable job with a flat list of build steps and publishers
    #[default]
    Freestyle,
    /// Multi-configuration job
    Matrix,
    /// Maven module job
    Maven,
}

/// A configured job
#[derive(Debug, Clone)]
pub struct Job {
    /// Full path identity
    pub id: JobId,

    /// Short name within the parent folder
    pub name: String,

    /// Full path of the containing folder (empty for the root)
    pub parent: String,

    /// Job kind
    pub kind: JobKind,

    steps: StepModel,
}

impl Job {
    /// Create a job inside the folder at `parent`
    pub fn new(name: impl Into<String>, parent: impl Into<String>, kind: JobKind, steps: StepModel) -> Self {
        let name = name.into();
        let parent = parent.into();
        let id = JobId::new(join_path(&parent, &name));
        Job {
            id,
            name,
            parent,
            kind,
            steps,
        }
    }

    /// Create a job from its configuration
    pub fn from_config(config: &JobConfig, parent: &str) -> Self {
        Job::new(
            config.name.clone(),
            parent,
            config.kind,
            StepModel::new(config.builders.clone(), config.publishers.clone()),
        )
    }

    /// Full slash-separated name
    pub fn full_name(&self) -> &str {
        self.id.as_str()
    }

    /// Build steps and publishers, only for step-based job kinds
    pub fn step_model(&self) -> Option<&StepModel> {
        match self.kind {
            JobKind::Freestyle => Some(&self.steps),
            JobKind::Matrix | JobKind::Maven => None,
        }
    }
}

/// Join a folder path and a child name
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
