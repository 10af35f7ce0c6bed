// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Command-line configuration

use crate::report::ReportLevel;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "matassign.toml";

/// Settings for the `matassign` tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignerConfig {
    /// JSON records file used when `--records` is not given
    pub records_file: PathBuf,
    /// Scene used when `--scene` is not given
    pub scene_file: Option<PathBuf>,
    /// Reports below this level are not printed
    pub min_level: ReportLevel,
    /// Colored terminal output
    pub color: bool,
}

impl Default for AssignerConfig {
    fn default() -> Self {
        Self {
            records_file: PathBuf::from("material_slots.json"),
            scene_file: None,
            min_level: ReportLevel::Info,
            color: true,
        }
    }
}

impl AssignerConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: AssignerConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `path` if given, else `matassign.toml` if present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}
