// src/kubeconfig/mod.rs
mod encoding;
mod loader;
mod splitter;
mod types;
mod writer;

pub use loader::{expand_path, DEFAULT_CONFIG_PATH};
pub use splitter::{KubeConfigSplitter, DEFAULT_PREFIX};
pub use types::{Cluster, Context, Credential, KubeConfig};
