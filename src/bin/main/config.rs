//! TOML configuration file and CLI overrides.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use glimpse_core::{FocusMode, ReaderConfig, render::FocusColor};
use serde::{Deserialize, Serialize};

use super::cli::Cli;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub reader: ReaderSection,
    pub style: StyleSection,
    pub storage: StorageSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReaderSection {
    pub wpm: u32,
    pub min_wpm: u32,
    pub max_wpm: u32,
    pub seek_step: usize,
    pub checkpoint_every: u32,
    pub focus_mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleSection {
    pub focus_color: String,
    pub font_size: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct StorageSection {
    pub progress_file: Option<PathBuf>,
}

impl Default for ReaderSection {
    fn default() -> Self {
        let defaults = ReaderConfig::default();
        Self {
            wpm: defaults.wpm,
            min_wpm: defaults.min_wpm,
            max_wpm: defaults.max_wpm,
            seek_step: defaults.seek_step,
            checkpoint_every: defaults.checkpoint_every,
            focus_mode: defaults.focus_mode.to_string(),
        }
    }
}

impl Default for StyleSection {
    fn default() -> Self {
        let defaults = ReaderConfig::default().style;
        Self {
            focus_color: defaults.focus_color.to_string(),
            font_size: defaults.font_size,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Defaults when the file does not exist; errors for anything else.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e)
                if e
                    .downcast_ref::<std::io::Error>()
                    .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound) =>
            {
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("glimpse").join("config.toml"))
    }

    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(wpm) = cli.wpm {
            self.reader.wpm = wpm;
        }
        if let Some(step) = cli.seek_step {
            self.reader.seek_step = step;
        }
        if let Some(focus) = &cli.focus {
            self.reader.focus_mode = focus.clone();
        }
        if let Some(color) = &cli.color {
            self.style.focus_color = color.clone();
        }
        if let Some(size) = cli.font_size {
            self.style.font_size = size;
        }
        if let Some(path) = &cli.progress_file {
            self.storage.progress_file = Some(path.clone());
        }
        self
    }

    /// Convert to the engine configuration, validating every field.
    pub fn reader_config(&self) -> glimpse_core::Result<ReaderConfig> {
        let mut config = ReaderConfig {
            wpm: self.reader.wpm,
            min_wpm: self.reader.min_wpm,
            max_wpm: self.reader.max_wpm,
            seek_step: self.reader.seek_step,
            checkpoint_every: self.reader.checkpoint_every,
            focus_mode: self.reader.focus_mode.parse::<FocusMode>()?,
            ..ReaderConfig::default()
        };
        config.style.focus_color = self.style.focus_color.parse::<FocusColor>()?;
        config.style.font_size = self.style.font_size;
        config.validated()
    }

    pub fn progress_path(&self) -> Option<PathBuf> {
        self.storage
            .progress_file
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("glimpse").join("progress.json")))
    }
}
