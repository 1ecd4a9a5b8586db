//! Loading of commitizen style project configuration.
//!
//! Settings live in a `[tool.commitizen]` table of `pyproject.toml`,
//! `.cz.toml` or `cz.toml`, or under a `commitizen` key of `.cz.json` or
//! `cz.json`. Files are searched from the working directory up to the
//! repository root.
use log::*;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{CzError, Result};

/// Configuration files in the order they are looked up.
pub const CONFIG_FILES: [&str; 5] =
    ["pyproject.toml", ".cz.toml", ".cz.json", "cz.json", "cz.toml"];

/// Project settings read by the convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct Settings {
    /// Name of the convention selected for the project.
    pub name: Option<String>,
    /// Current version of the project.
    pub version: Option<String>,
    /// Keep breaking changes from bumping the major version while it is 0.
    pub major_version_zero: bool,
    /// Base url of the Azure DevOps project, used to link work items in the
    /// changelog (e.g. https://dev.azure.com/org/project).
    pub azure_devops_project_base_url: Option<String>,
    /// Custom changelog section titles. Not supported yet.
    pub change_type_map: Option<serde_json::Value>,
}

impl Settings {
    /// Parse the configured current version, if any.
    pub fn current_version(&self) -> Result<Option<Version>> {
        match &self.version {
            Some(version) => Ok(Some(Version::parse(version)?)),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlConfig {
    tool: Option<TomlTool>,
}

#[derive(Debug, Deserialize)]
struct TomlTool {
    commitizen: Option<Settings>,
}

#[derive(Debug, Deserialize)]
struct JsonConfig {
    commitizen: Option<Settings>,
}

/// Parse settings out of a configuration file's content.
///
/// Returns `None` when the file has no commitizen section.
pub fn parse_settings(path: &Path, content: &str) -> Result<Option<Settings>> {
    let is_json = path.extension().is_some_and(|ext| ext == "json");

    if is_json {
        let config: JsonConfig = serde_json::from_str(content)?;
        return Ok(config.commitizen);
    }

    let config: TomlConfig = toml::from_str(content)?;
    Ok(config.tool.and_then(|tool| tool.commitizen))
}

/// Load settings from an explicit configuration file.
pub fn load(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;

    parse_settings(path, &content)?.ok_or_else(|| {
        CzError::invalid_config(format!(
            "no commitizen section found in {}",
            path.display()
        ))
    })
}

/// Find the nearest configuration file with a commitizen section, starting
/// at `start` and stopping at the repository root.
pub fn discover(start: &Path) -> Result<Option<(PathBuf, Settings)>> {
    for dir in start.ancestors() {
        for name in CONFIG_FILES {
            let path = dir.join(name);

            if !path.is_file() {
                continue;
            }

            let content = fs::read_to_string(&path)?;

            if let Some(settings) = parse_settings(&path, &content)? {
                info!("using configuration from {}", path.display());
                return Ok(Some((path, settings)));
            }

            debug!("skipping {}: no commitizen section", path.display());
        }

        if dir.join(".git").exists() {
            break;
        }
    }

    Ok(None)
}

/// Settings from `path` when given, otherwise from the nearest
/// configuration file, otherwise defaults.
pub fn resolve(path: Option<&Path>, start: &Path) -> Result<Settings> {
    if let Some(path) = path {
        return load(path);
    }

    match discover(start)? {
        Some((_, settings)) => Ok(settings),
        None => {
            warn!("no commitizen configuration found, using defaults");
            Ok(Settings::default())
        }
    }
}
