//! Artifact sinks
//!
//! An [`ArtifactSink`] persists artifacts keyed by `(path, file name)`.
//! [`MemorySink`] keeps them in memory; [`FsSink`] writes them below a root
//! directory and is the only code in the workspace that touches the
//! filesystem for output.

use crate::error::SinkError;
use indexmap::IndexMap;
use schemagen_artifact::{fingerprint_all, ArtifactKey, ContentHash, FileArtifact};
use std::path::{Component, Path, PathBuf};

/// What a single write did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Key was new
    Created,
    /// Key existed with different content
    Updated,
    /// Key existed with identical content
    Unchanged,
}

/// Counts of a batch write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkSummary {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl SinkSummary {
    fn record(&mut self, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Created => self.created += 1,
            WriteOutcome::Updated => self.updated += 1,
            WriteOutcome::Unchanged => self.unchanged += 1,
        }
    }

    /// Artifacts processed
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.created + self.updated + self.unchanged
    }

    /// Artifacts whose target actually changed
    #[inline]
    #[must_use]
    pub fn written(&self) -> usize {
        self.created + self.updated
    }
}

/// Destination for generated artifacts
pub trait ArtifactSink {
    /// Persist one artifact; a later write to the same key replaces it
    ///
    /// # Errors
    /// Returns error if the artifact cannot be stored
    fn write(&mut self, artifact: &FileArtifact) -> Result<WriteOutcome, SinkError>;

    /// Persist artifacts in order, stopping at the first error
    ///
    /// # Errors
    /// Returns the first write error
    fn write_all(&mut self, artifacts: &[FileArtifact]) -> Result<SinkSummary, SinkError> {
        let mut summary = SinkSummary::default();
        for artifact in artifacts {
            summary.record(self.write(artifact)?);
        }
        Ok(summary)
    }
}

/// In-memory sink; last write per key wins, first-insertion key order kept
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: IndexMap<ArtifactKey, FileArtifact>,
}

impl MemorySink {
    /// Create empty sink
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored artifact for a key
    #[inline]
    #[must_use]
    pub fn get(&self, key: &ArtifactKey) -> Option<&FileArtifact> {
        self.files.get(key)
    }

    /// Number of stored files
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if sink is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Stored artifacts in key order
    pub fn artifacts(&self) -> impl Iterator<Item = &FileArtifact> {
        self.files.values()
    }

    /// Fingerprint of the stored state
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        let files: Vec<FileArtifact> = self.files.values().cloned().collect();
        fingerprint_all(&files)
    }
}

impl ArtifactSink for MemorySink {
    fn write(&mut self, artifact: &FileArtifact) -> Result<WriteOutcome, SinkError> {
        let outcome = match self.files.get(&artifact.key()) {
            None => WriteOutcome::Created,
            Some(existing) if existing == artifact => WriteOutcome::Unchanged,
            Some(_) => WriteOutcome::Updated,
        };
        self.files.insert(artifact.key(), artifact.clone());
        Ok(outcome)
    }
}

/// Filesystem sink rooted at a directory
///
/// Logical paths are resolved below the root regardless of their anchor:
/// `./src/a`, `/src/a` and `src/a` all map to `<root>/src/a`.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// Create sink writing below `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Host path an artifact is written to
    ///
    /// # Errors
    /// Returns [`SinkError::Rejected`] if the target would not lie below the root
    pub fn target_path(&self, artifact: &FileArtifact) -> Result<PathBuf, SinkError> {
        let relative: PathBuf = artifact
            .path()
            .iter()
            .chain(std::iter::once(artifact.file_name()))
            .collect();
        if !stays_below_root(&relative) {
            return Err(SinkError::rejected(
                artifact.full_path(),
                "target escapes the sink root",
            ));
        }
        Ok(self.root.join(relative))
    }
}

/// Only plain names: no `..`, root, drive prefix or `.`
fn stays_below_root(relative: &Path) -> bool {
    let mut components = relative.components().peekable();
    components.peek().is_some() && components.all(|c| matches!(c, Component::Normal(_)))
}

impl ArtifactSink for FsSink {
    fn write(&mut self, artifact: &FileArtifact) -> Result<WriteOutcome, SinkError> {
        let target = self.target_path(artifact)?;
        let content = artifact.file_content().as_bytes();

        let outcome = match std::fs::read(&target) {
            Ok(existing) if existing == content => {
                tracing::trace!(path = %target.display(), "unchanged");
                return Ok(WriteOutcome::Unchanged);
            }
            Ok(_) => WriteOutcome::Updated,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => WriteOutcome::Created,
            Err(err) => return Err(SinkError::io(target, err)),
        };

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|err| SinkError::io(parent, err))?;
        }
        std::fs::write(&target, content).map_err(|err| SinkError::io(&target, err))?;
        tracing::debug!(path = %target.display(), ?outcome, "wrote artifact");
        Ok(outcome)
    }
}
