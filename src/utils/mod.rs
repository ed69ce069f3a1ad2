// src/utils/mod.rs
pub mod error;
pub mod logging;

pub use error::{Error, LoadError, ReferenceKind, WriteError};
