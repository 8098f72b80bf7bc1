//! Named dataset bookkeeping and derivation.

use crate::algebra::{combine, CombineOp};
use crate::error::{GridProcessorError, Result};
use grid_common::{HueRange, NamedDataset};
use tracing::info;

/// Build a derived dataset from two loaded ones.
pub fn derive_dataset(
    name: impl Into<String>,
    hue_range: HueRange,
    left: &NamedDataset,
    right: &NamedDataset,
    op: CombineOp,
) -> Result<NamedDataset> {
    let grid = combine(&left.grid, &right.grid, op)?;
    let name = name.into();
    info!(
        dataset = %name,
        left = %left.name,
        right = %right.name,
        op = ?op,
        "Derived dataset"
    );
    Ok(NamedDataset::new(name, hue_range, grid))
}

/// Datasets kept in insertion order and addressable by name.
///
/// The first dataset inserted becomes the morph base during synthesis.
#[derive(Debug, Clone, Default)]
pub struct DatasetSet {
    datasets: Vec<NamedDataset>,
}

impl DatasetSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, dataset: NamedDataset) -> Result<()> {
        if self.get(&dataset.name).is_some() {
            return Err(GridProcessorError::DuplicateDataset(dataset.name));
        }
        self.datasets.push(dataset);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&NamedDataset> {
        self.datasets.iter().find(|d| d.name == name)
    }

    fn require(&self, name: &str) -> Result<&NamedDataset> {
        self.get(name)
            .ok_or_else(|| GridProcessorError::UnknownDataset(name.to_string()))
    }

    /// Derive a dataset from two members by name and add it to the set.
    pub fn derive(
        &mut self,
        name: &str,
        hue_range: HueRange,
        left: &str,
        right: &str,
        op: CombineOp,
    ) -> Result<&NamedDataset> {
        let derived = derive_dataset(name, hue_range, self.require(left)?, self.require(right)?, op)?;
        self.insert(derived)?;
        self.require(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.datasets.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn as_slice(&self) -> &[NamedDataset] {
        &self.datasets
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
