use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// the project name can't be used as a directory name
    #[error("invalid project name: {0:?}")]
    InvalidName(String),

    #[error("failed to create project directory {}: {source}", .path.display())]
    CreateRoot { path: PathBuf, source: io::Error },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write file {}: {source}", .path.display())]
    WriteFile { path: PathBuf, source: io::Error },

    /// the git executable couldn't be started at all
    #[error("failed to initialize git: {0}")]
    GitSpawn(#[source] io::Error),

    #[error("failed to initialize git: {status}: {}", .stderr.trim())]
    GitFailed { status: ExitStatus, stderr: String },
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
