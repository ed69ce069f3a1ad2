// types.rs
use clap::Parser;
use std::path::PathBuf;

use crate::kubeconfig::{DEFAULT_CONFIG_PATH, DEFAULT_PREFIX};

/// Split a multi-context kubeconfig into one kubeconfig per context.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Kubeconfig to split
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Directory for the generated files [default: system temp directory]
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// File name prefix; files are named <prefix>0, <prefix>1, ...
    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Set each output's current-context to the context it holds
    #[arg(long)]
    pub set_current_context: bool,

    // Enable debug mode
    #[arg(short, long)]
    pub debug: bool,

    /// Also append log lines to this file
    #[arg(long)]
    pub log_file: Option<String>,
}

impl Args {
    pub fn config_path(&self) -> PathBuf {
        crate::kubeconfig::expand_path(&self.config)
    }

    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => crate::kubeconfig::expand_path(dir),
            None => std::env::temp_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plain_invocation() {
        let args = Args::try_parse_from(["kubesplit"]).unwrap();

        assert_eq!(args.config_path(), PathBuf::from("./config"));
        assert_eq!(args.output_dir(), std::env::temp_dir());
        assert_eq!(args.prefix, "kubeconfig");
        assert!(!args.set_current_context);
        assert!(!args.debug);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "kubesplit",
            "--config",
            "/etc/kube/admin.conf",
            "-o",
            "/tmp/split",
            "-p",
            "ctx-",
            "--set-current-context",
            "-d",
            "--log-file",
            "/tmp/kubesplit.log",
        ])
        .unwrap();

        assert_eq!(args.config_path(), PathBuf::from("/etc/kube/admin.conf"));
        assert_eq!(args.output_dir(), PathBuf::from("/tmp/split"));
        assert_eq!(args.prefix, "ctx-");
        assert!(args.set_current_context);
        assert!(args.debug);
        assert_eq!(args.log_file.as_deref(), Some("/tmp/kubesplit.log"));
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Args::try_parse_from(["kubesplit", "extra"]).is_err());
    }
}
