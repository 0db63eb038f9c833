//! `schemagen generate`

use anyhow::{Context, Result};
use schemagen_assets::{parse_iconify, ResourceMap};
use schemagen_pipeline::{ArtifactSink, FsSink, Pipeline, PipelineConfig, PipelineReport, SinkSummary};
use schemagen_schema::SchemaDocument;
use schemagen_transform::ComponentMap;
use std::path::{Path, PathBuf};

/// Key of icon resources embedded in a `pageSchema` envelope
const EMBEDDED_ICONS_KEY: &str = "iconsMap";

/// Inputs of one generate run
#[derive(Debug, Clone, Default)]
pub(crate) struct GenerateArgs {
    pub(crate) schema: PathBuf,
    pub(crate) icons: Vec<PathBuf>,
    pub(crate) iconify: Vec<PathBuf>,
    pub(crate) components: Option<PathBuf>,
    pub(crate) config: Option<PathBuf>,
    pub(crate) out: PathBuf,
    pub(crate) dry_run: bool,
}

/// What a run produced
#[derive(Debug)]
pub(crate) struct GenerateOutcome {
    pub(crate) report: PipelineReport,
    pub(crate) sink: Option<SinkSummary>,
}

pub(crate) fn run(args: &GenerateArgs) -> Result<GenerateOutcome> {
    let config = match &args.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    let pipeline = Pipeline::from_config(&config).context("invalid pipeline configuration")?;

    let document = load_document(&args.schema)?;
    let icons = load_icons(&document, args)?;
    let components = match &args.components {
        Some(path) => {
            let input = read(path)?;
            ComponentMap::from_json_str(&input)
                .with_context(|| format!("invalid component map {}", path.display()))?
        }
        None => ComponentMap::new(),
    };
    tracing::info!(
        pages = document.pages().len(),
        icons = icons.len(),
        components = components.len(),
        transforms = ?pipeline.transform_names(),
        "inputs loaded"
    );

    let context = pipeline
        .context()
        .with_icons(icons)
        .with_components(components);
    let report = pipeline.run(&document, &context)?;

    let sink = if args.dry_run {
        None
    } else {
        let mut sink = FsSink::new(&args.out);
        let summary = sink
            .write_all(&report.artifacts)
            .with_context(|| format!("failed to write artifacts under {}", args.out.display()))?;
        tracing::info!(
            created = summary.created,
            updated = summary.updated,
            unchanged = summary.unchanged,
            "artifacts written"
        );
        Some(summary)
    };

    Ok(GenerateOutcome { report, sink })
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_document(path: &Path) -> Result<SchemaDocument> {
    let input = read(path)?;
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    let document = if is_yaml {
        SchemaDocument::from_yaml_str(&input)
    } else {
        SchemaDocument::from_json_str(&input)
    };
    document.with_context(|| format!("invalid schema document {}", path.display()))
}

/// Embedded icons first, then `--icons` files, then iconify collections;
/// later sources override earlier ones per key
fn load_icons(document: &SchemaDocument, args: &GenerateArgs) -> Result<ResourceMap> {
    let mut icons = ResourceMap::new();
    if let Some(embedded) = document.embedded(EMBEDDED_ICONS_KEY) {
        icons = ResourceMap::from_value(embedded.clone())
            .context("invalid iconsMap embedded in schema document")?;
    }
    for path in &args.icons {
        let map = ResourceMap::from_json_str(&read(path)?)
            .with_context(|| format!("invalid icon resource map {}", path.display()))?;
        icons.extend(map);
    }
    for path in &args.iconify {
        let map = parse_iconify(&read(path)?)
            .with_context(|| format!("invalid iconify collection {}", path.display()))?;
        icons.extend(map);
    }
    Ok(icons)
}
