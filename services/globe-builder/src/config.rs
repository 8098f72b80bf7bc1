//! Job configuration loaded from YAML.
//!
//! Supports environment variable substitution using ${VAR} syntax.
//!
//! ```yaml
//! datasets:
//!   - name: men
//!     hue_range: [0.7, 0.3]
//!     source: ${DATA_DIR}/men.asc
//!   - name: women
//!     hue_range: [0.9, 1.1]
//!     source: https://example.org/grids/women.asc
//! derived:
//!   - name: ">50% men"
//!     hue_range: [0.6, 1.1]
//!     op: excess
//!     left: men
//!     right: women
//! synthesis:
//!   max_height: 0.4
//! output: out/globe.json
//! ```

use anyhow::{bail, Context, Result};
use globe_mesh::SynthesisConfig;
use grid_common::HueRange;
use grid_processor::CombineOp;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Output path used when neither the CLI nor the config names one.
pub const DEFAULT_OUTPUT: &str = "globe.json";

/// A dataset read from a grid file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDataset {
    pub name: String,
    pub hue_range: HueRange,
    /// Local path or `http(s)://` URL.
    pub source: String,
}

/// A dataset computed from two others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedDataset {
    pub name: String,
    pub hue_range: HueRange,
    pub op: CombineOp,
    pub left: String,
    pub right: String,
}

/// Full description of one build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    pub datasets: Vec<SourceDataset>,

    #[serde(default)]
    pub derived: Vec<DerivedDataset>,

    /// Falls back to [`SynthesisConfig::from_env`] when absent.
    #[serde(default)]
    pub synthesis: Option<SynthesisConfig>,

    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl JobConfig {
    /// Load, expand and validate a job file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid job config: {}", path.display()))
    }

    /// Parse job YAML after environment expansion.
    pub fn parse(content: &str) -> Result<Self> {
        let expanded = expand_env_vars(content)?;
        let config: JobConfig = serde_yaml::from_str(&expanded)?;
        config.validate()?;
        Ok(config)
    }

    /// Check dataset names and references.
    ///
    /// Derived datasets may only refer to datasets listed before them.
    pub fn validate(&self) -> Result<()> {
        if self.datasets.is_empty() {
            bail!("At least one source dataset is required");
        }

        let mut known = HashSet::new();
        for dataset in &self.datasets {
            if dataset.source.trim().is_empty() {
                bail!("Dataset '{}' has an empty source", dataset.name);
            }
            if !known.insert(dataset.name.as_str()) {
                bail!("Duplicate dataset name '{}'", dataset.name);
            }
        }

        for derived in &self.derived {
            for input in [&derived.left, &derived.right] {
                if !known.contains(input.as_str()) {
                    bail!(
                        "Derived dataset '{}' refers to unknown dataset '{}'",
                        derived.name,
                        input
                    );
                }
            }
            if !known.insert(derived.name.as_str()) {
                bail!("Duplicate dataset name '{}'", derived.name);
            }
        }

        if let Some(synthesis) = &self.synthesis {
            synthesis.validate()?;
        }

        Ok(())
    }

    /// Synthesis settings for this job.
    pub fn synthesis(&self) -> SynthesisConfig {
        self.synthesis.clone().unwrap_or_else(SynthesisConfig::from_env)
    }

    /// Output path, preferring an explicit override.
    pub fn output_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

// ============================================================================
// Environment Variable Expansion
// ============================================================================

/// Expand `${VAR}` and `${VAR:-default}` references.
fn expand_env_vars(content: &str) -> Result<String> {
    let mut result = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            bail!("Unclosed variable substitution: ${{{}", after);
        };
        result.push_str(&resolve_var_expr(&after[..end])?);
        rest = &after[end + 1..];
    }
    result.push_str(rest);

    Ok(result)
}

fn resolve_var_expr(expr: &str) -> Result<String> {
    if let Some((var_name, default)) = expr.split_once(":-") {
        match std::env::var(var_name.trim()) {
            Ok(val) if !val.is_empty() => Ok(val),
            _ => Ok(default.to_string()),
        }
    } else {
        std::env::var(expr.trim())
            .with_context(|| format!("Environment variable {} not set", expr))
    }
}
