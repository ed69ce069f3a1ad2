use std::fmt;
use std::path::PathBuf;

/// Errors surfaced by a split run. Every variant is fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input kubeconfig could not be read or parsed.
    #[error("failed to load kubeconfig {}: {source}", .path.display())]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// A context names a cluster or user that is not defined in the input.
    #[error("context \"{context}\" references {kind} \"{name}\" which is not defined")]
    DanglingReference {
        context: String,
        kind: ReferenceKind,
        name: String,
    },

    /// One output file could not be serialized or written.
    #[error("failed to write kubeconfig {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: WriteError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("parse error: {source}")]
    Parse {
        #[from]
        source: serde_yaml::Error,
    },

    #[error("{section} entry \"{name}\" is defined more than once")]
    DuplicateEntry { section: &'static str, name: String },
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("serialize error: {source}")]
    Serialize {
        #[from]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Cluster,
    User,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cluster => write!(f, "cluster"),
            Self::User => write!(f, "user"),
        }
    }
}
