// src/kubeconfig/loader.rs
use std::fs;
use std::path::{Path, PathBuf};

use super::KubeConfig;
use crate::utils::{Error, LoadError};

pub const DEFAULT_CONFIG_PATH: &str = "./config";

/// Expands a leading `~` to the home directory.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

impl KubeConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let load = || -> Result<Self, LoadError> {
            let text = fs::read_to_string(path)?;
            KubeConfig::from_yaml_str(&text)
        };

        load().map_err(|source| Error::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })
    }
}
