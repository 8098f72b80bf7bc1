//! Dataset-to-geometry synthesis.

use crate::box_template::BoxTemplate;
use crate::cell::CellBox;
use crate::config::{DegeneratePolicy, SynthesisConfig};
use crate::error::{MeshError, MeshResult};
use crate::geometry::MergedGeometry;
use grid_common::{Grid, NamedDataset};
use tracing::{debug, info, warn};

/// Cells present in every one of `grids`, in row-major order.
///
/// All grids must share one shape. Synthesizing each grid over this list
/// gives every variant the same box count and box order.
pub fn surviving_cells(grids: &[&Grid]) -> MeshResult<Vec<(usize, usize)>> {
    let Some(first) = grids.first() else {
        return Ok(Vec::new());
    };

    for grid in &grids[1..] {
        if !grid.same_shape(first) {
            return Err(MeshError::misaligned(
                "grid",
                format!("shape {:?} differs from {:?}", grid.shape(), first.shape()),
            ));
        }
    }

    let (nrows, ncols) = first.shape();
    let mut cells = Vec::new();
    for row in 0..nrows {
        for col in 0..ncols {
            if grids.iter().all(|g| g.get(row, col).is_some()) {
                cells.push((row, col));
            }
        }
    }
    Ok(cells)
}

/// Synthesize one dataset on its own, skipping its missing cells.
pub fn synthesize(dataset: &NamedDataset, config: &SynthesisConfig) -> MeshResult<MergedGeometry> {
    let cells = surviving_cells(&[&dataset.grid])?;
    synthesize_cells(dataset, &cells, config)
}

/// Synthesize the boxes for `cells` of a dataset, in the given order.
///
/// Every listed cell must be present in the dataset.
pub fn synthesize_cells(
    dataset: &NamedDataset,
    cells: &[(usize, usize)],
    config: &SynthesisConfig,
) -> MeshResult<MergedGeometry> {
    config.validate()?;

    let grid = &dataset.grid;
    let normalize = magnitude_fn(dataset, config)?;
    let template = BoxTemplate::extruded();
    let mut geometry = MergedGeometry::with_capacity(cells.len());

    for &(row, col) in cells {
        let value = grid.get(row, col).ok_or_else(|| {
            MeshError::misaligned(
                dataset.name.clone(),
                format!("cell ({}, {}) is missing", row, col),
            )
        })?;
        let cell = CellBox::place(
            row,
            col,
            normalize(value),
            &grid.header,
            &dataset.hue_range,
            config,
        );
        geometry.push_box(&template, &cell)?;
    }

    debug!(
        dataset = %dataset.name,
        boxes = geometry.box_count(),
        vertices = geometry.vertex_count(),
        "Synthesized geometry"
    );
    Ok(geometry)
}

/// Build the value-to-amount mapping for a dataset, applying the
/// degenerate range policy.
fn magnitude_fn(
    dataset: &NamedDataset,
    config: &SynthesisConfig,
) -> MeshResult<impl Fn(f32) -> f32> {
    let range = dataset.grid.range();
    let degenerate = match range {
        Some(r) if r.is_degenerate() => Some(r.min),
        _ => None,
    };

    if let Some(value) = degenerate {
        match config.degenerate_policy {
            DegeneratePolicy::Reject => {
                return Err(MeshError::DegenerateRange {
                    name: dataset.name.clone(),
                    value,
                });
            }
            DegeneratePolicy::Floor => {
                warn!(
                    dataset = %dataset.name,
                    value,
                    "All values equal, drawing every cell at magnitude 0"
                );
            }
        }
    }

    Ok(move |value: f32| range.and_then(|r| r.normalize(value)).unwrap_or(0.0))
}

/// Alternate position/colour buffers aligned with a base geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphOverlay {
    pub name: String,
    pub positions: Vec<f32>,
    pub colors: Vec<u8>,
}

/// A base geometry plus one overlay per additional dataset.
///
/// Overlays share the base's vertex count and order, so a renderer can
/// blend between them vertex by vertex. Blend weights are the renderer's
/// business.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphSet {
    pub base_name: String,
    pub base: MergedGeometry,
    pub overlays: Vec<MorphOverlay>,
}

impl MorphSet {
    /// Look up an overlay by dataset name.
    pub fn overlay(&self, name: &str) -> Option<&MorphOverlay> {
        self.overlays.iter().find(|o| o.name == name)
    }

    /// Names of the base followed by every overlay.
    pub fn names(&self) -> Vec<&str> {
        std::iter::once(self.base_name.as_str())
            .chain(self.overlays.iter().map(|o| o.name.as_str()))
            .collect()
    }

    pub fn box_count(&self) -> usize {
        self.base.box_count()
    }
}

/// Synthesize several datasets over their shared surviving cells.
///
/// A cell is skipped if it is missing in any dataset. The first dataset
/// becomes the base geometry; the rest become overlays.
pub fn synthesize_morph_set(
    datasets: &[NamedDataset],
    config: &SynthesisConfig,
) -> MeshResult<MorphSet> {
    let (first, rest) = datasets.split_first().ok_or(MeshError::NoDatasets)?;

    let grids: Vec<&Grid> = datasets.iter().map(|d| &d.grid).collect();
    let cells = surviving_cells(&grids)?;

    let base = synthesize_cells(first, &cells, config)?;

    let mut overlays = Vec::with_capacity(rest.len());
    for dataset in rest {
        let variant = synthesize_cells(dataset, &cells, config)?;
        if variant.positions.len() != base.positions.len()
            || variant.colors.len() != base.colors.len()
        {
            return Err(MeshError::misaligned(
                dataset.name.clone(),
                format!(
                    "{} vertices vs {} in base",
                    variant.vertex_count(),
                    base.vertex_count()
                ),
            ));
        }
        overlays.push(MorphOverlay {
            name: dataset.name.clone(),
            positions: variant.positions,
            colors: variant.colors,
        });
    }

    info!(
        base = %first.name,
        overlays = overlays.len(),
        boxes = base.box_count(),
        "Built morph set"
    );

    Ok(MorphSet {
        base_name: first.name.clone(),
        base,
        overlays,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_common::{GridHeader, HueRange};

    fn dataset(name: &str, ncols: usize, cells: Vec<Option<f32>>) -> NamedDataset {
        let nrows = cells.len() / ncols;
        let grid = Grid::new(GridHeader::default(), nrows, ncols, cells).unwrap();
        NamedDataset::new(name, HueRange::new(0.7, 0.3), grid)
    }

    #[test]
    fn test_surviving_cells_intersection() {
        let a = dataset("a", 2, vec![Some(1.0), None, Some(3.0), Some(4.0)]);
        let b = dataset("b", 2, vec![Some(1.0), Some(2.0), None, Some(4.0)]);
        let cells = surviving_cells(&[&a.grid, &b.grid]).unwrap();
        assert_eq!(cells, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_surviving_cells_shape_mismatch() {
        let a = dataset("a", 2, vec![Some(1.0); 4]);
        let b = dataset("b", 4, vec![Some(1.0); 4]);
        assert!(matches!(
            surviving_cells(&[&a.grid, &b.grid]),
            Err(MeshError::MisalignedVariants { .. })
        ));
    }

    #[test]
    fn test_degenerate_floor() {
        let d = dataset("flat", 3, vec![Some(2.0), Some(2.0), None]);
        let geometry = synthesize(&d, &SynthesisConfig::default()).unwrap();
        assert_eq!(geometry.box_count(), 2);
        assert!(geometry.positions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_degenerate_reject() {
        let d = dataset("flat", 2, vec![Some(2.0), Some(2.0)]);
        let config = SynthesisConfig {
            degenerate_policy: DegeneratePolicy::Reject,
            ..Default::default()
        };
        match synthesize(&d, &config) {
            Err(MeshError::DegenerateRange { name, value }) => {
                assert_eq!(name, "flat");
                assert_eq!(value, 2.0);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_listed_cell_is_error() {
        let d = dataset("a", 2, vec![Some(1.0), None]);
        let err = synthesize_cells(&d, &[(0, 1)], &SynthesisConfig::default()).unwrap_err();
        assert!(matches!(err, MeshError::MisalignedVariants { .. }));
    }

    #[test]
    fn test_empty_morph_set_input() {
        assert!(matches!(
            synthesize_morph_set(&[], &SynthesisConfig::default()),
            Err(MeshError::NoDatasets)
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let d = dataset("a", 2, vec![Some(1.0), Some(2.0)]);
        let config = SynthesisConfig {
            footprint: 0.0,
            ..Default::default()
        };
        assert!(matches!(synthesize(&d, &config), Err(MeshError::InvalidConfig(_))));
    }
}
