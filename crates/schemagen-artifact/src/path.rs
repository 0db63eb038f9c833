//! Logical artifact paths
//!
//! Provides [`ArtifactPath`], the slash-separated target directory of a
//! generated file. Paths are logical: they never use the host separator and
//! are only resolved against a real directory by a sink.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// How a path is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Anchor {
    /// `./src/assets`
    #[default]
    Dot,
    /// `/src/assets`
    Root,
    /// `src/assets`
    Bare,
}

/// Slash-separated directory path of an artifact
///
/// # Examples
/// - `./src/assets/icons/mdi` → anchor `Dot`, segments `[src, assets, icons, mdi]`
/// - `src` → anchor `Bare`, segments `[src]`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtifactPath {
    anchor: Anchor,
    segments: Vec<String>,
}

impl ArtifactPath {
    /// `./`
    #[inline]
    #[must_use]
    pub fn dot() -> Self {
        Self {
            anchor: Anchor::Dot,
            segments: Vec::new(),
        }
    }

    /// Anchor of this path
    #[inline]
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment (if any)
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Append a segment, returning a new path
    ///
    /// # Errors
    /// Returns error if the segment is empty, `.`/`..`, or contains a separator
    pub fn child(&self, segment: impl Into<String>) -> Result<Self, PathError> {
        let segment = segment.into();
        validate_segment(&segment)?;
        let mut new = self.clone();
        new.segments.push(segment);
        Ok(new)
    }

    /// Full logical path of a file inside this directory
    #[must_use]
    pub fn join_file(&self, file_name: &str) -> String {
        if self.segments.is_empty() {
            return match self.anchor {
                Anchor::Dot => format!("./{file_name}"),
                Anchor::Root => format!("/{file_name}"),
                Anchor::Bare => file_name.to_string(),
            };
        }
        format!("{self}/{file_name}")
    }

    /// Iterator over segments from root to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }
}

fn validate_segment(segment: &str) -> Result<(), PathError> {
    if segment.is_empty() {
        return Err(PathError::EmptySegment);
    }
    if segment == "." || segment == ".." {
        return Err(PathError::RelativeSegment(segment.to_string()));
    }
    if segment.contains(['/', '\\']) || segment.chars().any(char::is_control) {
        return Err(PathError::InvalidSegment(segment.to_string()));
    }
    Ok(())
}

impl Display for ArtifactPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let joined = self.segments.join("/");
        match self.anchor {
            Anchor::Dot if joined.is_empty() => f.write_str("."),
            Anchor::Dot => write!(f, "./{joined}"),
            Anchor::Root => write!(f, "/{joined}"),
            Anchor::Bare => f.write_str(&joined),
        }
    }
}

impl FromStr for ArtifactPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('\\') {
            return Err(PathError::BackslashSeparator(s.to_string()));
        }

        let (anchor, rest) = if s == "." {
            (Anchor::Dot, "")
        } else if let Some(rest) = s.strip_prefix("./") {
            (Anchor::Dot, rest)
        } else if let Some(rest) = s.strip_prefix('/') {
            (Anchor::Root, rest)
        } else {
            (Anchor::Bare, s)
        };

        let rest = rest.strip_suffix('/').unwrap_or(rest);
        if rest.is_empty() {
            return Ok(Self {
                anchor,
                segments: Vec::new(),
            });
        }

        let segments = rest
            .split('/')
            .map(|seg| validate_segment(seg).map(|()| seg.to_string()))
            .collect::<Result<_, _>>()?;

        Ok(Self { anchor, segments })
    }
}

impl TryFrom<String> for ArtifactPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ArtifactPath> for String {
    fn from(path: ArtifactPath) -> Self {
        path.to_string()
    }
}

/// Errors related to artifact paths
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Empty segment in path
    #[error("path contains empty segment")]
    EmptySegment,

    /// `.` or `..` inside a path
    #[error("path segment '{0}' escapes or aliases its parent")]
    RelativeSegment(String),

    /// Invalid characters in a segment
    #[error("invalid segment: {0}")]
    InvalidSegment(String),

    /// Host-specific separator
    #[error("path '{0}' uses a backslash separator")]
    BackslashSeparator(String),
}
