//! Run reports
//!
//! [`PipelineReport`] is the result of a completed run: every artifact in
//! declared transform order, plus one [`TransformOutcome`] per transform and
//! a [`TransformFailure`] for each one that did not succeed.

use schemagen_artifact::{fingerprint_all, ArtifactKey, ContentHash, FileArtifact};
use schemagen_schema::DocumentStats;
use schemagen_transform::TransformError;
use serde::Serialize;

/// Final state of one transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformStatus {
    /// Returned artifacts
    Succeeded,
    /// Returned an error or panicked
    Failed,
}

/// Per-transform summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOutcome {
    pub name: String,
    pub artifact_count: usize,
    pub status: TransformStatus,
}

/// A recorded transform failure
#[derive(Debug)]
pub struct TransformFailure {
    pub transform_name: String,
    pub error: TransformError,
}

/// Result of [`Pipeline::run`](crate::Pipeline::run)
#[derive(Debug, Default)]
pub struct PipelineReport {
    /// Concatenated output of the successful transforms
    pub artifacts: Vec<FileArtifact>,
    /// Failures in declared order
    pub failures: Vec<TransformFailure>,
    /// One entry per transform in declared order
    pub outcomes: Vec<TransformOutcome>,
    /// Shape of the validated document
    pub document: DocumentStats,
}

impl PipelineReport {
    pub(crate) fn new(document: DocumentStats) -> Self {
        Self {
            document,
            ..Self::default()
        }
    }

    pub(crate) fn record_success(&mut self, name: String, artifacts: Vec<FileArtifact>) {
        self.outcomes.push(TransformOutcome {
            name,
            artifact_count: artifacts.len(),
            status: TransformStatus::Succeeded,
        });
        self.artifacts.extend(artifacts);
    }

    pub(crate) fn record_failure(&mut self, name: String, error: TransformError) {
        self.outcomes.push(TransformOutcome {
            name: name.clone(),
            artifact_count: 0,
            status: TransformStatus::Failed,
        });
        self.failures.push(TransformFailure {
            transform_name: name,
            error,
        });
    }

    /// Whether every transform succeeded
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Names of failed transforms in declared order
    #[must_use]
    pub fn failed_names(&self) -> Vec<&str> {
        self.failures
            .iter()
            .map(|f| f.transform_name.as_str())
            .collect()
    }

    /// Identities of all artifacts in output order
    #[must_use]
    pub fn artifact_keys(&self) -> Vec<ArtifactKey> {
        self.artifacts.iter().map(FileArtifact::key).collect()
    }

    /// Fingerprint of the full artifact sequence
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        fingerprint_all(&self.artifacts)
    }

    /// Serializable overview without artifact contents
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            success: self.is_success(),
            artifact_count: self.artifacts.len(),
            fingerprint: self.fingerprint(),
            document: self.document,
            outcomes: self.outcomes.clone(),
            failures: self
                .failures
                .iter()
                .map(|f| FailureSummary {
                    transform_name: f.transform_name.clone(),
                    error: f.error.to_string(),
                })
                .collect(),
        }
    }
}

/// JSON-friendly view of a report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub success: bool,
    pub artifact_count: usize,
    pub fingerprint: ContentHash,
    pub document: DocumentStats,
    pub outcomes: Vec<TransformOutcome>,
    pub failures: Vec<FailureSummary>,
}

/// Failure with its error rendered as text
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureSummary {
    pub transform_name: String,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemagen_test_utils::create_svg_artifact;

    #[test]
    fn records_in_order() {
        let mut report = PipelineReport::default();
        report.record_success("a".into(), vec![create_svg_artifact("mdi", "home")]);
        report.record_failure("b".into(), TransformError::failed("boom"));
        report.record_success("c".into(), vec![create_svg_artifact("ep", "edit")]);

        assert!(!report.is_success());
        assert_eq!(report.failed_names(), ["b"]);
        assert_eq!(report.artifacts.len(), 2);
        let statuses: Vec<TransformStatus> = report.outcomes.iter().map(|o| o.status).collect();
        assert_eq!(
            statuses,
            [
                TransformStatus::Succeeded,
                TransformStatus::Failed,
                TransformStatus::Succeeded
            ]
        );
        assert_eq!(
            report.artifact_keys()[1].to_string(),
            "./src/assets/icons/ep/edit.svg"
        );
    }

    #[test]
    fn summary_serializes() {
        let mut report = PipelineReport::default();
        report.record_failure("b".into(), TransformError::failed("boom"));
        let json = serde_json::to_value(report.summary()).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["outcomes"][0]["status"], "failed");
        assert_eq!(json["failures"][0]["transformName"], "b");
        assert_eq!(json["failures"][0]["error"], "transform failed: boom");
    }
}
