//! Merged vertex buffers for many boxes.

use crate::box_template::{BoxTemplate, BOX_INDICES, BOX_VERTICES};
use crate::cell::CellBox;
use crate::error::{MeshError, MeshResult};

/// Vertices contributed by each box.
pub const VERTICES_PER_BOX: usize = BOX_VERTICES;

/// Indices contributed by each box.
pub const INDICES_PER_BOX: usize = BOX_INDICES;

/// Flat, GPU-ready buffers for a batch of boxes.
///
/// Layout per vertex: position (3 x f32), normal (3 x f32), uv (2 x f32),
/// colour (3 x u8, normalized). Box `k` owns vertices `24k..24k+24` and
/// indices `36k..36k+36`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedGeometry {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
    pub colors: Vec<u8>,
    pub indices: Vec<u32>,
}

impl MergedGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty geometry with room for `boxes` boxes.
    pub fn with_capacity(boxes: usize) -> Self {
        let vertices = boxes * VERTICES_PER_BOX;
        Self {
            positions: Vec::with_capacity(vertices * 3),
            normals: Vec::with_capacity(vertices * 3),
            uvs: Vec::with_capacity(vertices * 2),
            colors: Vec::with_capacity(vertices * 3),
            indices: Vec::with_capacity(boxes * INDICES_PER_BOX),
        }
    }

    /// Append one transformed copy of `template`.
    ///
    /// Fails once the box's last vertex would not fit a `u32` index.
    pub fn push_box(&mut self, template: &BoxTemplate, cell: &CellBox) -> MeshResult<()> {
        let base = base_index(self.vertex_count())?;

        for i in 0..BOX_VERTICES {
            self.positions
                .extend_from_slice(&cell.transform_position(template.positions[i]));
            self.normals
                .extend_from_slice(&cell.transform_normal(template.normals[i]));
            self.uvs.extend_from_slice(&template.uvs[i]);
            self.colors.extend_from_slice(&cell.color);
        }

        self.indices
            .extend(template.indices.iter().map(|&i| i + base));
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn box_count(&self) -> usize {
        self.vertex_count() / VERTICES_PER_BOX
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Position buffer as raw bytes.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normal buffer as raw bytes.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// UV buffer as raw bytes.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Index buffer as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Index of the first vertex of a box appended after `vertices` vertices.
fn base_index(vertices: usize) -> MeshResult<u32> {
    let last = vertices
        .checked_add(BOX_VERTICES - 1)
        .and_then(|last| u32::try_from(last).ok());
    match last {
        Some(_) => Ok(vertices as u32),
        None => Err(MeshError::IndexOverflow { vertices }),
    }
}
