//! Load, derive, synthesize, write.

use crate::config::{DerivedDataset, JobConfig};
use crate::fetch::load_all;
use anyhow::{Context, Result};
use globe_mesh::{synthesize_morph_set, GeometryDocument, MorphSet, SynthesisConfig};
use grid_common::NamedDataset;
use grid_processor::DatasetSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub datasets: Vec<String>,
    pub boxes: usize,
    pub vertices: usize,
    pub output: PathBuf,
}

/// Combine loaded datasets with the derived ones and synthesize them.
///
/// Datasets keep configuration order: sources first, then derived. The
/// first source is the morph base.
pub fn build_morph_set(
    loaded: Vec<NamedDataset>,
    derived: &[DerivedDataset],
    synthesis: &SynthesisConfig,
) -> Result<MorphSet> {
    let mut set = DatasetSet::new();
    for dataset in loaded {
        set.insert(dataset)?;
    }
    for spec in derived {
        set.derive(&spec.name, spec.hue_range, &spec.left, &spec.right, spec.op)
            .with_context(|| format!("Failed to derive '{}'", spec.name))?;
    }

    Ok(synthesize_morph_set(set.as_slice(), synthesis)?)
}

/// Run a whole job and write the geometry document to `output`.
pub async fn run_job(config: &JobConfig, output: &Path) -> Result<BuildSummary> {
    let synthesis = config.synthesis();
    synthesis.validate()?;

    let loaded = load_all(&config.datasets).await?;
    let morph_set = build_morph_set(loaded, &config.derived, &synthesis)?;

    let json = GeometryDocument::from_morph_set(&morph_set).to_json()?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(output, json)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let summary = BuildSummary {
        datasets: morph_set.names().into_iter().map(String::from).collect(),
        boxes: morph_set.box_count(),
        vertices: morph_set.base.vertex_count(),
        output: output.to_path_buf(),
    };

    info!(
        datasets = ?summary.datasets,
        boxes = summary.boxes,
        vertices = summary.vertices,
        output = %summary.output.display(),
        "Globe geometry written"
    );

    Ok(summary)
}
