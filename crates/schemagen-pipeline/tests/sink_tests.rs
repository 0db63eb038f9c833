//! Sink behaviour against the filesystem and a mocked sink.

use mockall::mock;
use mockall::predicate::function;
use schemagen_artifact::FileArtifact;
use schemagen_pipeline::{
    ArtifactSink, FsSink, Pipeline, SinkError, SinkSummary, WriteOutcome,
};
use schemagen_test_utils::{create_svg_artifact, sample_document, sample_resource_map};
use schemagen_transform::TransformContext;

mock! {
    pub Sink {}

    impl ArtifactSink for Sink {
        fn write(&mut self, artifact: &FileArtifact) -> Result<WriteOutcome, SinkError>;
    }
}

#[test]
fn fs_sink_materializes_report() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = TransformContext::new().with_icons(sample_resource_map());
    let report = Pipeline::default().run(&sample_document(), &ctx).unwrap();

    let mut sink = FsSink::new(dir.path());
    let summary = sink.write_all(&report.artifacts).unwrap();
    assert_eq!(summary, SinkSummary { created: 2, updated: 0, unchanged: 0 });

    let home = dir.path().join("src/assets/icons/mdi/home.svg");
    let written = std::fs::read_to_string(home).unwrap();
    assert!(written.starts_with("<svg  xmlns="));
    assert!(written.ends_with("</svg>"));
    assert!(dir.path().join("src/assets/icons/ep/edit.svg").is_file());
}

#[test]
fn fs_sink_skips_identical_content() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = FsSink::new(dir.path());
    let artifact = create_svg_artifact("mdi", "home");

    assert_eq!(sink.write(&artifact).unwrap(), WriteOutcome::Created);
    assert_eq!(sink.write(&artifact).unwrap(), WriteOutcome::Unchanged);

    let changed =
        FileArtifact::at("svg", "home.svg", "./src/assets/icons/mdi", "<svg>v2</svg>").unwrap();
    assert_eq!(sink.write(&changed).unwrap(), WriteOutcome::Updated);
    let on_disk = std::fs::read_to_string(sink.target_path(&changed).unwrap()).unwrap();
    assert_eq!(on_disk, "<svg>v2</svg>");
}

#[test]
fn fs_sink_reports_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    // A file where a directory is needed
    std::fs::write(dir.path().join("src"), "not a dir").unwrap();
    let mut sink = FsSink::new(dir.path());

    let err = sink.write(&create_svg_artifact("mdi", "home")).unwrap_err();
    assert!(matches!(err, SinkError::Io { .. }));
}

#[test]
fn fs_sink_never_writes_outside_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("out");
    let escaping =
        r#"{"fileType":"svg","fileName":"../escaped.svg","path":".","fileContent":"x"}"#;
    assert!(serde_json::from_str::<FileArtifact>(escaping).is_err());

    let mut sink = FsSink::new(&root);
    let artifact: FileArtifact = serde_json::from_str(
        r#"{"fileType":"svg","fileName":"home.svg","path":"/icons","fileContent":"x"}"#,
    )
    .unwrap();
    assert_eq!(sink.write(&artifact).unwrap(), WriteOutcome::Created);
    assert!(root.join("icons/home.svg").is_file());
    assert!(!dir.path().join("escaped.svg").exists());
    assert!(!dir.path().join("icons").exists());
}

#[test]
fn write_all_visits_in_order() {
    let mut sink = MockSink::new();
    let mut seq = mockall::Sequence::new();
    for name in ["b.svg", "a.svg"] {
        sink.expect_write()
            .with(function(move |a: &FileArtifact| a.file_name() == name))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(WriteOutcome::Created));
    }

    let summary = sink
        .write_all(&[create_svg_artifact("x", "b"), create_svg_artifact("x", "a")])
        .unwrap();
    assert_eq!(summary.created, 2);
}

#[test]
fn write_all_stops_at_first_error() {
    let mut sink = MockSink::new();
    sink.expect_write()
        .times(1)
        .returning(|a| Err(SinkError::rejected(a.full_path(), "read-only")));

    let err = sink
        .write_all(&[create_svg_artifact("x", "a"), create_svg_artifact("x", "b")])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "artifact './src/assets/icons/x/a.svg' rejected: read-only"
    );
}
