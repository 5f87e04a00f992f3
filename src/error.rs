use std::path::PathBuf;

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during file I/O operations
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Error when user input fails.
    #[error("inquire error: {0}")]
    Inquire(#[from] inquire::InquireError),
    /// Error when a required field is empty or blank.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Error when the requested profile key does not exist in the store.
    #[error("profile not found: '{0}'")]
    ProfileNotFound(String),
    /// Error when the backing profiles file does not exist.
    #[error("profiles file not found: {}", .0.display())]
    StoreNotFound(PathBuf),
    /// Error when `generate` would overwrite an existing profiles file.
    #[error("profiles file already exists: {}", .0.display())]
    StoreExists(PathBuf),
    /// Error when the git executable cannot be spawned at all.
    #[error("git is not available: {0}")]
    GitUnavailable(String),
    /// Error when executing Git commands
    #[error("git command failed: {0}")]
    GitCommand(String),
}
