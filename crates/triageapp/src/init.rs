//! # Initialization
//!
//! Wires the production [`TriageApi`]: resolves the OS directories, loads the layered
//! configuration and picks the trash directory.
//!
//! ## Directories
//!
//! Resolved with `directories::ProjectDirs` for the application name `triage`:
//!
//! | Purpose | Linux | macOS |
//! |---------|-------|-------|
//! | config (`triage.toml`) | `~/.config/triage` | `~/Library/Application Support/triage` |
//! | data (default trash) | `~/.local/share/triage` | `~/Library/Application Support/triage` |
//!
//! Task files themselves live wherever the user puts them; they are addressed by path.

use crate::api::TriageApi;
use crate::config::TriageConfig;
use crate::error::{Result, TriageError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl AppDirs {
    pub fn discover() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "triage").ok_or_else(|| {
            TriageError::Config("Could not determine a home directory".to_string())
        })?;
        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }
}

pub struct TriageContext {
    pub api: TriageApi<FileStore>,
    pub dirs: AppDirs,
}

/// Builds the production context. `config_file` is an explicit `--config` path.
pub fn initialize(config_file: Option<&Path>) -> Result<TriageContext> {
    initialize_with(AppDirs::discover()?, config_file)
}

pub fn initialize_with(dirs: AppDirs, config_file: Option<&Path>) -> Result<TriageContext> {
    let config = TriageConfig::load(config_file, Some(&dirs.config_dir))?;
    let trash_dir = config.trash_dir(&dirs.data_dir);
    tracing::debug!(
        config_dir = %dirs.config_dir.display(),
        trash_dir = %trash_dir.display(),
        "initialized"
    );

    Ok(TriageContext {
        api: TriageApi::new(FileStore::new(), config, trash_dir),
        dirs,
    })
}
