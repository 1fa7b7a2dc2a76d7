//! Local directory cache with XDG path support.
//!
//! The last successfully fetched directory is kept as JSON at
//! `~/.cache/pantry/locations.json` so the CLI keeps working when the
//! feed is unreachable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::Directory;

/// Default cache filename.
const STORE_FILENAME: &str = "locations.json";

/// Application name (for XDG paths).
const APPLICATION: &str = "pantry";

/// Errors that can occur during directory storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to determine XDG cache directory.
    #[error("failed to determine cache directory: no valid home directory found")]
    NoCacheDir,

    /// I/O error during file read.
    #[error("failed to read cache file '{path}': {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write cache file '{path}': {source}")]
    Write {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during directory creation.
    #[error("failed to create cache directory '{path}': {source}")]
    CreateDir {
        /// The directory path that failed to create.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistent storage for the location directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    /// Path to the cache file.
    path: PathBuf,
}

impl DirectoryStore {
    /// Creates a store at the default XDG cache path
    /// (`~/.cache/pantry/locations.json` on Unix).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoCacheDir` if the home directory cannot be
    /// determined.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: Self::default_path()?,
        })
    }

    /// Creates a store at a specific path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the cache file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the cached directory.
    ///
    /// A missing cache file yields an empty directory rather than an
    /// error; a corrupt one yields `StoreError::Json`.
    pub fn load(&self) -> Result<Directory> {
        if !self.path.exists() {
            return Ok(Directory::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        Ok(serde_json::from_str(&contents)?)
    }

    /// Saves the directory, creating parent directories as needed.
    pub fn save(&self, directory: &Directory) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = serde_json::to_string_pretty(directory)?;
        fs::write(&self.path, contents).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Resolves the default XDG cache path.
    fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", APPLICATION).ok_or(StoreError::NoCacheDir)?;
        Ok(dirs.cache_dir().join(STORE_FILENAME))
    }
}
