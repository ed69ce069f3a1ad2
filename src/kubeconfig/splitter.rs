// src/kubeconfig/splitter.rs
use std::path::PathBuf;

use super::KubeConfig;
use crate::utils::logging::Logger;
use crate::utils::{Error, ReferenceKind};

pub const DEFAULT_PREFIX: &str = "kubeconfig";

/// A single-context kubeconfig together with the context it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    pub context_name: String,
    pub config: KubeConfig,
}

impl KubeConfig {
    /// Builds a config holding only `context_name`, its cluster and its user,
    /// all under their original names.
    fn project(
        &self,
        context_name: &str,
        context: &super::Context,
    ) -> Result<KubeConfig, Error> {
        let dangling = |kind, name: &str| Error::DanglingReference {
            context: context_name.to_string(),
            kind,
            name: name.to_string(),
        };

        let cluster = self
            .clusters
            .get(&context.cluster)
            .ok_or_else(|| dangling(ReferenceKind::Cluster, &context.cluster))?;
        let credential = self
            .credentials
            .get(&context.user)
            .ok_or_else(|| dangling(ReferenceKind::User, &context.user))?;

        let mut single = KubeConfig::default();
        single
            .clusters
            .insert(context.cluster.clone(), cluster.clone());
        single
            .credentials
            .insert(context.user.clone(), credential.clone());
        single
            .contexts
            .insert(context_name.to_string(), context.clone());
        Ok(single)
    }

    /// Resolves every context, in name order, into its own config.
    ///
    /// Fails on the first context with a dangling reference, so nothing has
    /// been written yet when a reference problem is reported.
    pub fn split(&self) -> Result<Vec<SplitConfig>, Error> {
        self.contexts
            .iter()
            .map(|(name, context)| {
                Ok(SplitConfig {
                    context_name: name.clone(),
                    config: self.project(name, context)?,
                })
            })
            .collect()
    }
}

pub struct KubeConfigSplitter<'a> {
    logger: &'a mut dyn Logger,
    output_dir: PathBuf,
    prefix: String,
    set_current_context: bool,
}

impl<'a> KubeConfigSplitter<'a> {
    pub fn new(logger: &'a mut dyn Logger, output_dir: PathBuf) -> Self {
        Self {
            logger,
            output_dir,
            prefix: DEFAULT_PREFIX.to_string(),
            set_current_context: false,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Marks each output's own context as its `current-context`.
    pub fn with_current_context(mut self, enabled: bool) -> Self {
        self.set_current_context = enabled;
        self
    }

    pub fn output_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("{}{}", self.prefix, index))
    }

    /// Splits `config` and writes one file per context. Returns the written
    /// paths in index order.
    pub fn split_all(&mut self, config: &KubeConfig) -> Result<Vec<PathBuf>, Error> {
        let parts = config.split()?;
        self.logger.debug_log(&format!(
            "Resolved {} context(s) for {}",
            parts.len(),
            self.output_dir.display()
        ));
        self.write_all(parts)
    }

    pub fn write_all(&mut self, parts: Vec<SplitConfig>) -> Result<Vec<PathBuf>, Error> {
        let mut written = Vec::with_capacity(parts.len());

        for (file_idx, part) in parts.into_iter().enumerate() {
            let SplitConfig {
                context_name,
                mut config,
            } = part;
            if self.set_current_context {
                config.current_context = context_name.clone();
            }

            let path = self.output_path(file_idx);
            config
                .save_to_file(&path)
                .map_err(|source| Error::OutputWrite {
                    path: path.clone(),
                    source,
                })?;

            self.logger
                .log(&format!("Wrote context {} to {}", context_name, path.display()));
            written.push(path);
        }

        Ok(written)
    }
}
