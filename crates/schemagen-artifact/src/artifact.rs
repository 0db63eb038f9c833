//! Generated file records
//!
//! Defines [`FileArtifact`], the output unit of every transform, and
//! [`ArtifactKey`], its `(path, file name)` identity.

use crate::hash::ContentHash;
use crate::path::{ArtifactPath, PathError};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Errors related to artifact construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArtifactError {
    /// File name is empty
    #[error("artifact file name is empty")]
    EmptyFileName,

    /// File name contains a path separator or is `.`/`..`
    #[error("artifact file name '{0}' must be a single path component")]
    InvalidFileName(String),

    /// File type is empty
    #[error("artifact file type is empty")]
    EmptyFileType,

    /// Target directory is invalid
    #[error("invalid artifact path: {0}")]
    Path(#[from] PathError),
}

/// Identity of an artifact within one run
///
/// Two artifacts with the same key target the same file; a sink decides
/// which one wins.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArtifactKey {
    pub path: ArtifactPath,
    pub file_name: String,
}

impl Display for ArtifactKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path.join_file(&self.file_name))
    }
}

/// A generated file prior to persistence
///
/// # Invariants
/// - `file_name` is non-empty, not `.`/`..` and contains no separator
/// - Immutable once emitted by a transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawFileArtifact")]
pub struct FileArtifact {
    file_type: String,
    file_name: String,
    path: ArtifactPath,
    file_content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFileArtifact {
    file_type: String,
    file_name: String,
    path: ArtifactPath,
    file_content: String,
}

impl TryFrom<RawFileArtifact> for FileArtifact {
    type Error = ArtifactError;

    fn try_from(raw: RawFileArtifact) -> Result<Self, Self::Error> {
        Self::new(raw.file_type, raw.file_name, raw.path, raw.file_content)
    }
}

impl FileArtifact {
    /// Create a new artifact
    ///
    /// # Errors
    /// Returns error if the file type or file name is empty, or the file name
    /// is `.`/`..` or contains a separator or control character
    pub fn new(
        file_type: impl Into<String>,
        file_name: impl Into<String>,
        path: ArtifactPath,
        file_content: impl Into<String>,
    ) -> Result<Self, ArtifactError> {
        let file_type = file_type.into();
        let file_name = file_name.into();

        if file_type.is_empty() {
            return Err(ArtifactError::EmptyFileType);
        }
        if file_name.is_empty() {
            return Err(ArtifactError::EmptyFileName);
        }
        if file_name == "."
            || file_name == ".."
            || file_name.contains(['/', '\\'])
            || file_name.chars().any(char::is_control)
        {
            return Err(ArtifactError::InvalidFileName(file_name));
        }

        Ok(Self {
            file_type,
            file_name,
            path,
            file_content: file_content.into(),
        })
    }

    /// Create a new artifact, parsing the directory path from a string
    ///
    /// # Errors
    /// Returns error if the path does not parse or [`FileArtifact::new`] fails
    pub fn at(
        file_type: impl Into<String>,
        file_name: impl Into<String>,
        path: &str,
        file_content: impl Into<String>,
    ) -> Result<Self, ArtifactError> {
        let path: ArtifactPath = path.parse()?;
        Self::new(file_type, file_name, path, file_content)
    }

    /// File type tag (e.g. `svg`)
    #[inline]
    #[must_use]
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    /// File name including extension
    #[inline]
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Target directory
    #[inline]
    #[must_use]
    pub fn path(&self) -> &ArtifactPath {
        &self.path
    }

    /// Materialized content
    #[inline]
    #[must_use]
    pub fn file_content(&self) -> &str {
        &self.file_content
    }

    /// Logical path of the file
    #[inline]
    #[must_use]
    pub fn full_path(&self) -> String {
        self.path.join_file(&self.file_name)
    }

    /// `(path, file name)` identity
    #[must_use]
    pub fn key(&self) -> ArtifactKey {
        ArtifactKey {
            path: self.path.clone(),
            file_name: self.file_name.clone(),
        }
    }

    /// Stable fingerprint over every field
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        let path = self.path.to_string();
        ContentHash::compute_parts([
            self.file_type.as_bytes(),
            path.as_bytes(),
            self.file_name.as_bytes(),
            self.file_content.as_bytes(),
        ])
    }
}

/// Combined fingerprint of an ordered artifact sequence
#[must_use]
pub fn fingerprint_all(artifacts: &[FileArtifact]) -> ContentHash {
    let prints: Vec<ContentHash> = artifacts.iter().map(FileArtifact::fingerprint).collect();
    ContentHash::compute_parts(prints.iter().map(|h| h.as_bytes().as_slice()))
}
