//! CI instance configuration from YAML

use crate::core::job::JobKind;
use crate::core::step::BuildStep;
use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

/// Top-level instance configuration loaded from YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstanceConfig {
    /// Installed plugin short names
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Jobs at the root of the instance
    #[serde(default)]
    pub jobs: Vec<JobConfig>,

    /// Folders at the root of the instance
    #[serde(default)]
    pub folders: Vec<FolderConfig>,
}

/// Folder configuration as defined in YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderConfig {
    /// Folder name
    pub name: String,

    /// Jobs directly inside this folder
    #[serde(default)]
    pub jobs: Vec<JobConfig>,

    /// Nested folders
    #[serde(default)]
    pub folders: Vec<FolderConfig>,
}

/// Job configuration as defined in YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Job name, unique within its folder
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Job kind
    #[serde(default)]
    pub kind: JobKind,

    /// Build-phase steps
    #[serde(default)]
    pub builders: Vec<BuildStep>,

    /// Publish-phase steps
    #[serde(default)]
    pub publishers: Vec<BuildStep>,
}

/// Characters the CI host refuses in item names
fn unsafe_name_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[/\\:?#\[\]!@$%^&*'"<>|]"#).expect("valid regex"))
}

impl InstanceConfig {
    /// Load instance configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse instance configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: InstanceConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the instance configuration
    ///
    /// Trigger targets are not checked here: dangling references are
    /// tolerated and simply produce no edge.
    pub fn validate(&self) -> Result<()> {
        validate_group("", &self.jobs, &self.folders)
    }

    /// Whether a plugin is installed
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p == name)
    }

    /// Total number of jobs, including nested folders
    pub fn job_count(&self) -> usize {
        self.jobs.len() + self.folders.iter().map(FolderConfig::job_count).sum::<usize>()
    }

    /// Total number of folders, including nested folders
    pub fn folder_count(&self) -> usize {
        self.folders.iter().map(FolderConfig::folder_count).sum()
    }
}

impl FolderConfig {
    fn job_count(&self) -> usize {
        self.jobs.len() + self.folders.iter().map(FolderConfig::job_count).sum::<usize>()
    }

    fn folder_count(&self) -> usize {
        1 + self.folders.iter().map(FolderConfig::folder_count).sum::<usize>()
    }
}

fn validate_group(path: &str, jobs: &[JobConfig], folders: &[FolderConfig]) -> Result<()> {
    let location = if path.is_empty() { "<root>" } else { path };

    // Jobs and folders share one namespace per folder
    let mut seen_names = HashSet::new();
    for name in jobs.iter().map(|j| &j.name).chain(folders.iter().map(|f| &f.name)) {
        validate_name(name, location)?;
        if !seen_names.insert(name) {
            anyhow::bail!("Duplicate item name '{}' in folder {}", name, location);
        }
    }

    for folder in folders {
        let folder_path = crate::core::job::join_path(path, &folder.name);
        validate_group(&folder_path, &folder.jobs, &folder.folders)?;
    }

    Ok(())
}

fn validate_name(name: &str, location: &str) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("Empty item name in folder {}", location);
    }
    if name.trim() != name {
        anyhow::bail!("Item name '{}' in folder {} has surrounding whitespace", name, location);
    }
    if name == "." || name == ".." {
        anyhow::bail!("Reserved item name '{}' in folder {}", name, location);
    }
    if let Some(m) = unsafe_name_chars().find(name) {
        anyhow::bail!(
            "Item name '{}' in folder {} contains unsafe character '{}'",
            name,
            location,
            m.as_str()
        );
    }
    Ok(())
}
