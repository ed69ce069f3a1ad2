// src/kubeconfig/types.rs
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::encoding::{base64_bytes, null_as_default};
use crate::utils::LoadError;

pub const API_VERSION: &str = "v1";
pub const KIND: &str = "Config";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    #[serde(
        rename = "certificate-authority-data",
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "base64_bytes"
    )]
    pub certificate_authority_data: Vec<u8>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub server: String,
}

/// A client identity, stored under `users` on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(
        rename = "client-certificate-data",
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "base64_bytes"
    )]
    pub client_certificate_data: Vec<u8>,
    #[serde(
        rename = "client-key-data",
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "base64_bytes"
    )]
    pub client_key_data: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cluster: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,
}

/// In-memory kubeconfig: every section keyed by entry name.
///
/// `BTreeMap` keeps iteration in lexicographic name order, which is what
/// assigns output file indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KubeConfig {
    pub clusters: BTreeMap<String, Cluster>,
    pub credentials: BTreeMap<String, Credential>,
    pub contexts: BTreeMap<String, Context>,
    pub current_context: String,
}

// On-disk layout. Field order matches kubectl's output.

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct NamedCluster {
    #[serde(default)]
    pub cluster: Cluster,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct NamedContext {
    #[serde(default)]
    pub context: Context,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct NamedUser {
    pub name: String,
    #[serde(default)]
    pub user: Credential,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct KubeConfigFile {
    #[serde(rename = "apiVersion", default, deserialize_with = "null_as_default")]
    pub api_version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clusters: Vec<NamedCluster>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contexts: Vec<NamedContext>,
    #[serde(
        rename = "current-context",
        default,
        deserialize_with = "null_as_default"
    )]
    pub current_context: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferences: serde_yaml::Mapping,
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<NamedUser>,
}

fn insert_unique<T>(
    map: &mut BTreeMap<String, T>,
    section: &'static str,
    name: String,
    value: T,
) -> Result<(), LoadError> {
    match map.entry(name) {
        Entry::Occupied(existing) => Err(LoadError::DuplicateEntry {
            section,
            name: existing.key().clone(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
    }
}

impl TryFrom<KubeConfigFile> for KubeConfig {
    type Error = LoadError;

    fn try_from(file: KubeConfigFile) -> Result<Self, Self::Error> {
        let mut config = KubeConfig {
            current_context: file.current_context,
            ..KubeConfig::default()
        };

        for entry in file.clusters {
            insert_unique(&mut config.clusters, "clusters", entry.name, entry.cluster)?;
        }
        for entry in file.users {
            insert_unique(&mut config.credentials, "users", entry.name, entry.user)?;
        }
        for entry in file.contexts {
            insert_unique(&mut config.contexts, "contexts", entry.name, entry.context)?;
        }

        Ok(config)
    }
}

impl From<&KubeConfig> for KubeConfigFile {
    fn from(config: &KubeConfig) -> Self {
        KubeConfigFile {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            current_context: config.current_context.clone(),
            preferences: serde_yaml::Mapping::new(),
            clusters: config
                .clusters
                .iter()
                .map(|(name, cluster)| NamedCluster {
                    name: name.clone(),
                    cluster: cluster.clone(),
                })
                .collect(),
            contexts: config
                .contexts
                .iter()
                .map(|(name, context)| NamedContext {
                    name: name.clone(),
                    context: context.clone(),
                })
                .collect(),
            users: config
                .credentials
                .iter()
                .map(|(name, user)| NamedUser {
                    name: name.clone(),
                    user: user.clone(),
                })
                .collect(),
        }
    }
}

impl KubeConfig {
    /// Parses kubeconfig YAML (or JSON) text.
    pub fn from_yaml_str(text: &str) -> Result<Self, LoadError> {
        // An empty document is an empty kubeconfig rather than a parse error.
        if text.trim().is_empty() {
            return Ok(KubeConfig::default());
        }
        let file: KubeConfigFile = serde_yaml::from_str(text)?;
        KubeConfig::try_from(file)
    }

    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&KubeConfigFile::from(self))
    }
}
