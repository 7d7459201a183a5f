//! Job registry - resolves job names to jobs

use crate::core::config::{FolderConfig, InstanceConfig, JobConfig};
use crate::core::job::{join_path, Job};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::trace;

/// Error types for registry construction
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate job: {0}")]
    DuplicateJob(String),

    #[error("Job and folder share the path: {0}")]
    PathConflict(String),
}

/// Lookup service for jobs - allows for different implementations
pub trait JobRegistry: Send + Sync {
    /// Resolve `name` relative to the folder at `scope` (empty for the root)
    fn resolve(&self, name: &str, scope: &str) -> Option<&Job>;

    /// All jobs, sorted by full name
    fn jobs(&self) -> Vec<&Job>;
}

/// Registry holding all jobs of one instance in memory
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    jobs: HashMap<String, Job>,
    folders: HashSet<String>,
}

/// Where a path walk currently stands
enum Cursor<'a> {
    Folder(String),
    Job(&'a Job),
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from an instance configuration
    pub fn from_config(config: &InstanceConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.add_group("", &config.jobs, &config.folders)?;
        Ok(registry)
    }

    fn add_group(
        &mut self,
        path: &str,
        jobs: &[JobConfig],
        folders: &[FolderConfig],
    ) -> Result<(), RegistryError> {
        for job in jobs {
            self.add_job(Job::from_config(job, path))?;
        }
        for folder in folders {
            let folder_path = join_path(path, &folder.name);
            self.add_folder(&folder_path)?;
            self.add_group(&folder_path, &folder.jobs, &folder.folders)?;
        }
        Ok(())
    }

    /// Register a folder (and its ancestors) by full path
    pub fn add_folder(&mut self, path: &str) -> Result<(), RegistryError> {
        let mut current = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = join_path(&current, segment);
            if self.jobs.contains_key(&current) {
                return Err(RegistryError::PathConflict(current));
            }
            self.folders.insert(current.clone());
        }
        Ok(())
    }

    /// Register a job; its parent folders are created as needed
    pub fn add_job(&mut self, job: Job) -> Result<(), RegistryError> {
        let full_name = job.full_name().to_string();
        if self.folders.contains(&full_name) {
            return Err(RegistryError::PathConflict(full_name));
        }
        if self.jobs.contains_key(&full_name) {
            return Err(RegistryError::DuplicateJob(full_name));
        }
        self.add_folder(&job.parent)?;
        self.jobs.insert(full_name, job);
        Ok(())
    }

    /// Look up a job by its full name
    pub fn get(&self, full_name: &str) -> Option<&Job> {
        self.jobs.get(full_name.trim_matches('/'))
    }

    /// Number of registered jobs
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    fn is_folder(&self, path: &str) -> bool {
        path.is_empty() || self.folders.contains(path)
    }

    /// Walk `name` segment by segment from the `scope` folder
    ///
    /// Returns `Err(())` when the walk hits a job that would need to contain
    /// children; that case skips the absolute-name fallback.
    fn walk(&self, name: &str, scope: &str) -> Result<Option<&Job>, ()> {
        let mut cursor = if self.is_folder(scope) {
            Some(Cursor::Folder(scope.to_string()))
        } else {
            None
        };

        for segment in name.split('/').filter(|s| !s.is_empty()) {
            let Some(current) = cursor.take() else { break };
            cursor = match segment {
                "." => Some(current),
                ".." => match current {
                    // The root is not an item and has no parent
                    Cursor::Folder(path) if path.is_empty() => None,
                    Cursor::Folder(path) => Some(Cursor::Folder(parent_of(&path).to_string())),
                    Cursor::Job(job) => Some(Cursor::Folder(job.parent.clone())),
                },
                child => match current {
                    Cursor::Folder(path) => {
                        let child_path = join_path(&path, child);
                        if let Some(job) = self.jobs.get(&child_path) {
                            Some(Cursor::Job(job))
                        } else if self.folders.contains(&child_path) {
                            Some(Cursor::Folder(child_path))
                        } else {
                            None
                        }
                    }
                    Cursor::Job(_) => return Err(()),
                },
            };
        }

        Ok(match cursor {
            Some(Cursor::Job(job)) => Some(job),
            _ => None,
        })
    }
}

impl JobRegistry for InMemoryRegistry {
    fn resolve(&self, name: &str, scope: &str) -> Option<&Job> {
        if name.is_empty() {
            return None;
        }
        if let Some(absolute) = name.strip_prefix('/') {
            return self.get(absolute);
        }

        match self.walk(name, scope) {
            Ok(Some(job)) => Some(job),
            Ok(None) => {
                trace!(name, scope, "relative lookup failed, trying full name");
                self.get(name)
            }
            Err(()) => None,
        }
    }

    fn jobs(&self) -> Vec<&Job> {
        let mut jobs: Vec<&Job> = self.jobs.values().collect();
        jobs.sort_by(|a, b| a.id.cmp(&b.id));
        jobs
    }
}

fn parent_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}
