//! Grid source retrieval.
//!
//! Every source is fetched and parsed concurrently. The first failure
//! aborts the whole batch.

use crate::config::SourceDataset;
use anyhow::{anyhow, Context, Result};
use asc_parser::parse_asc;
use futures::future::try_join_all;
use grid_common::NamedDataset;
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Where a grid's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSource<'a> {
    Url(&'a str),
    Path(&'a str),
}

impl<'a> GridSource<'a> {
    pub fn parse(source: &'a str) -> Self {
        let source = source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            GridSource::Url(source)
        } else {
            GridSource::Path(source)
        }
    }
}

/// Retrieve the raw text of one source.
pub async fn fetch_text(client: &Client, source: &str) -> Result<String> {
    match GridSource::parse(source) {
        GridSource::Url(url) => {
            debug!(url = %url, "Downloading grid");
            let response = client.get(url).send().await?;
            if !response.status().is_success() {
                return Err(anyhow!("Download of {} failed: {}", url, response.status()));
            }
            Ok(response.text().await?)
        }
        GridSource::Path(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read grid file: {}", path)),
    }
}

#[instrument(skip(client, dataset), fields(dataset = %dataset.name))]
async fn load_one(client: &Client, dataset: &SourceDataset) -> Result<NamedDataset> {
    let text = fetch_text(client, &dataset.source).await?;
    let grid = parse_asc(&text)
        .with_context(|| format!("Failed to parse grid for '{}'", dataset.name))?;

    info!(
        source = %dataset.source,
        nrows = grid.nrows(),
        ncols = grid.ncols(),
        present = grid.present_count(),
        "Loaded grid"
    );
    Ok(NamedDataset::new(dataset.name.clone(), dataset.hue_range, grid))
}

/// Load every source dataset, preserving the configured order.
pub async fn load_all(datasets: &[SourceDataset]) -> Result<Vec<NamedDataset>> {
    let client = Client::new();
    try_join_all(datasets.iter().map(|d| load_one(&client, d))).await
}
