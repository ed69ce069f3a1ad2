// src/kubeconfig/writer.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::KubeConfig;
use crate::utils::WriteError;

impl KubeConfig {
    /// Writes the config as YAML, creating parent directories as needed.
    ///
    /// New files are created with mode 0600. An existing file is truncated and
    /// keeps its mode.
    pub fn save_to_file(&self, path: &Path) -> Result<(), WriteError> {
        let yaml = self.to_yaml_string()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(path)?;
        file.write_all(yaml.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kubeconfig::Cluster;
    use tempfile::tempdir;

    fn sample() -> KubeConfig {
        let mut config = KubeConfig::default();
        config.clusters.insert(
            "c1".to_string(),
            Cluster {
                server: "https://c1".to_string(),
                certificate_authority_data: vec![0, 1, 2, 255],
            },
        );
        config
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("kubeconfig0");

        sample().save_to_file(&path).unwrap();

        let reloaded = KubeConfig::load_from_file(&path).unwrap();
        assert_eq!(reloaded, sample());
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kubeconfig0");
        fs::write(&path, "stale contents that are much longer than the new file ".repeat(20))
            .unwrap();

        sample().save_to_file(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert_eq!(contents, sample().to_yaml_string().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn new_files_are_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("kubeconfig0");
        sample().save_to_file(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn unwritable_target_is_an_io_error() {
        let dir = tempdir().unwrap();
        // A directory cannot be opened for writing as a file.
        let result = sample().save_to_file(dir.path());

        assert!(matches!(result, Err(WriteError::Io { .. })));
    }
}
