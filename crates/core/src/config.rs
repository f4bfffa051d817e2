// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service configuration.
//!
//! Everything the original automation hard-coded as process-wide constants
//! (credentials, workspace id, attribute ids) lives here and is injected
//! into the engine and adapters at construction time.

use crate::id::{AttributeId, ObjectTypeId, SchemaId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Asset directory connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Service origin, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Workspace scoping the object graph.
    pub workspace_id: String,
    /// Basic-auth user (account email).
    pub email: String,
    /// Basic-auth token.
    pub api_token: String,
}

impl DirectoryConfig {
    /// Versioned API root for this workspace.
    pub fn api_root(&self) -> String {
        format!(
            "{}/jsm/assets/workspace/{}/v1",
            self.base_url.trim_end_matches('/'),
            self.workspace_id
        )
    }
}

/// Wiki (document store) connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiConfig {
    /// REST root, e.g. `https://wiki.example.com/wiki/rest/api`.
    pub base_url: String,
    pub space_key: String,
    /// Title of the single roster page the export maintains in place.
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

fn default_page_title() -> String {
    "Asset Roster".to_string()
}

/// Object schema layout: which types and attributes the workflows touch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaConfig {
    pub schema_id: SchemaId,
    pub employee_type_id: ObjectTypeId,
    pub asset_type_id: ObjectTypeId,
    /// Object type name used in AQL employee lookups.
    #[serde(default = "default_employee_type_name")]
    pub employee_type_name: String,
    /// Attribute holding the employee display name.
    pub username_attr: AttributeId,
    /// Attribute holding the employee business key.
    pub employee_id_attr: AttributeId,
    /// Display name of the business-key attribute, used in AQL lookups.
    #[serde(default = "default_employee_id_attr_name")]
    pub employee_id_attr_name: String,
    /// Attribute on asset objects recording the current owner.
    pub ownership_attr: AttributeId,
}

fn default_employee_type_name() -> String {
    "Employee".to_string()
}

fn default_employee_id_attr_name() -> String {
    "Employee ID".to_string()
}

/// Which employee resolver backs the assignment workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverMode {
    /// Query the directory per lookup.
    Live,
    /// Read a local JSON roster mirror.
    Cache,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_resolver_mode")]
    pub mode: ResolverMode,
    /// Roster mirror path; required when `mode = "cache"`.
    #[serde(default)]
    pub cache_path: Option<PathBuf>,
}

fn default_resolver_mode() -> ResolverMode {
    ResolverMode::Live
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mode: ResolverMode::Live,
            cache_path: None,
        }
    }
}

/// Wiki export extras.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// When set, the export also writes the JSON snapshot to this file.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

/// Top-level service configuration, loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub directory: DirectoryConfig,
    pub wiki: WikiConfig,
    pub schema: SchemaConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.mode == ResolverMode::Cache && self.resolver.cache_path.is_none() {
            return Err(ConfigError::Invalid(
                "resolver.mode = \"cache\" requires resolver.cache_path".to_string(),
            ));
        }
        if self.directory.base_url.is_empty() {
            return Err(ConfigError::Invalid(
                "directory.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
