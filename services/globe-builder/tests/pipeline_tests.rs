//! Job-level tests: YAML + ASC files on disk -> geometry document.

use globe_builder::{build_morph_set, run_job, JobConfig};
use globe_mesh::{SynthesisConfig, VERTICES_PER_BOX};
use grid_common::{HueRange, NamedDataset};
use std::path::Path;
use tempfile::TempDir;
use test_utils::{asc_text, grid_from_rows, population_rows, SMALL_ASC};

fn write_grid(dir: &Path, name: &str, text: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path.display().to_string()
}

fn job_yaml(men: &str, women: &str) -> String {
    format!(
        r#"
datasets:
  - name: men
    hue_range: [0.7, 0.3]
    source: {men}
  - name: women
    hue_range: [0.9, 1.1]
    source: {women}
derived:
  - name: ">50% men"
    hue_range: [0.6, 1.1]
    op: excess
    left: men
    right: women
  - name: ">50% women"
    hue_range: [0.0, 0.4]
    op: excess
    left: women
    right: men
"#
    )
}

// ============================================================================
// Full job
// ============================================================================

#[tokio::test]
async fn test_job_writes_morph_document() {
    let dir = TempDir::new().unwrap();
    let men = write_grid(
        dir.path(),
        "men.asc",
        &asc_text(&population_rows(12, 6, 4), -180.0, -60.0),
    );
    let women = write_grid(
        dir.path(),
        "women.asc",
        &asc_text(&population_rows(12, 6, 5), -180.0, -60.0),
    );
    let config = JobConfig::parse(&job_yaml(&men, &women)).unwrap();
    let output = dir.path().join("out").join("globe.json");

    let summary = run_job(&config, &output).await.unwrap();

    assert_eq!(
        summary.datasets,
        vec!["men", "women", ">50% men", ">50% women"]
    );
    assert_eq!(summary.vertices, summary.boxes * VERTICES_PER_BOX);
    assert!(summary.boxes > 0);

    let json = std::fs::read_to_string(&output).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["type"], "BufferGeometry");
    assert_eq!(
        doc["userData"]["morphTargetNames"],
        serde_json::json!(["women", ">50% men", ">50% women"])
    );
    let base_len = doc["data"]["attributes"]["position"]["array"]
        .as_array()
        .unwrap()
        .len();
    assert_eq!(base_len, summary.vertices * 3);
    for target in doc["data"]["morphAttributes"]["position"].as_array().unwrap() {
        assert_eq!(target["array"].as_array().unwrap().len(), base_len);
    }
}

#[tokio::test]
async fn test_single_dataset_job() {
    let dir = TempDir::new().unwrap();
    let small = write_grid(dir.path(), "small.asc", SMALL_ASC);
    let yaml = format!(
        "datasets:\n  - name: small\n    hue_range: [0.7, 0.3]\n    source: {}\n",
        small
    );
    let config = JobConfig::parse(&yaml).unwrap();
    let output = dir.path().join("small.json");

    let summary = run_job(&config, &output).await.unwrap();

    assert_eq!(summary.boxes, 5);
    assert_eq!(summary.vertices, 120);
    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert!(doc["data"].get("morphAttributes").is_none());
}

#[tokio::test]
async fn test_missing_source_aborts_job() {
    let dir = TempDir::new().unwrap();
    let men = write_grid(dir.path(), "men.asc", SMALL_ASC);
    let missing = dir.path().join("women.asc").display().to_string();
    let config = JobConfig::parse(&job_yaml(&men, &missing)).unwrap();
    let output = dir.path().join("globe.json");

    assert!(run_job(&config, &output).await.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_malformed_grid_aborts_job() {
    let dir = TempDir::new().unwrap();
    let men = write_grid(dir.path(), "men.asc", SMALL_ASC);
    let women = write_grid(dir.path(), "women.asc", "1 2 3\n4 x 6\n");
    let config = JobConfig::parse(&job_yaml(&men, &women)).unwrap();

    let err = run_job(&config, &dir.path().join("globe.json"))
        .await
        .unwrap_err();
    assert!(format!("{:#}", err).contains("women"));
}

#[test]
fn test_load_job_file_with_env() {
    let dir = TempDir::new().unwrap();
    std::env::set_var("GLOBE_BUILDER_PIPELINE_DIR", dir.path());
    let path = dir.path().join("job.yaml");
    std::fs::write(
        &path,
        "datasets:\n  - name: men\n    hue_range: [0.7, 0.3]\n    source: ${GLOBE_BUILDER_PIPELINE_DIR}/men.asc\n",
    )
    .unwrap();

    let config = JobConfig::load(&path).unwrap();
    assert_eq!(
        config.datasets[0].source,
        format!("{}/men.asc", dir.path().display())
    );
}

// ============================================================================
// In-memory builds
// ============================================================================

#[test]
fn test_build_rejects_mismatched_shapes() {
    let men = NamedDataset::new(
        "men",
        HueRange::new(0.7, 0.3),
        grid_from_rows(&population_rows(4, 3, 10)),
    );
    let women = NamedDataset::new(
        "women",
        HueRange::new(0.9, 1.1),
        grid_from_rows(&population_rows(5, 3, 10)),
    );

    let result = build_morph_set(vec![men, women], &[], &SynthesisConfig::default());
    assert!(result.is_err());
}
