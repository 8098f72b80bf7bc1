//! JSON export in the BufferGeometry document layout.
//!
//! The document mirrors what WebGL scene loaders expect for an indexed
//! buffer geometry with morph attributes:
//!
//! ```json
//! {
//!   "metadata": { "version": 4.5, "type": "BufferGeometry", "generator": "globe-mesh" },
//!   "type": "BufferGeometry",
//!   "data": {
//!     "attributes": { "position": {...}, "normal": {...}, "uv": {...}, "color": {...} },
//!     "index": { "type": "Uint32Array", "array": [...] },
//!     "morphAttributes": { "position": [...], "color": [...] },
//!     "morphTargetsRelative": false
//!   },
//!   "userData": { "morphTargetNames": [...] }
//! }
//! ```

use crate::error::MeshResult;
use crate::geometry::MergedGeometry;
use crate::synth::MorphSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub version: f32,
    #[serde(rename = "type")]
    pub kind: String,
    pub generator: String,
}

/// A typed attribute array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "array")]
pub enum AttributeArray {
    Float32Array(Vec<f32>),
    Uint8Array(Vec<u8>),
    Uint32Array(Vec<u32>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub item_size: usize,
    #[serde(flatten)]
    pub array: AttributeArray,
    pub normalized: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Attribute {
    fn floats(item_size: usize, values: &[f32]) -> Self {
        Self {
            item_size,
            array: AttributeArray::Float32Array(values.to_vec()),
            normalized: false,
            name: None,
        }
    }

    fn colors(values: &[u8]) -> Self {
        Self {
            item_size: 3,
            array: AttributeArray::Uint8Array(values.to_vec()),
            normalized: true,
            name: None,
        }
    }

    fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryData {
    pub attributes: BTreeMap<String, Attribute>,
    pub index: AttributeArray,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub morph_attributes: BTreeMap<String, Vec<Attribute>>,
    pub morph_targets_relative: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub morph_target_names: Vec<String>,
}

/// Serializable geometry document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryDocument {
    pub metadata: Metadata,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: GeometryData,
    pub user_data: UserData,
}

impl GeometryDocument {
    /// Document for a single geometry without morph targets.
    pub fn from_geometry(geometry: &MergedGeometry) -> Self {
        Self {
            metadata: Metadata {
                version: 4.5,
                kind: "BufferGeometry".to_string(),
                generator: "globe-mesh".to_string(),
            },
            kind: "BufferGeometry".to_string(),
            data: GeometryData {
                attributes: base_attributes(geometry),
                index: AttributeArray::Uint32Array(geometry.indices.clone()),
                morph_attributes: BTreeMap::new(),
                morph_targets_relative: false,
            },
            user_data: UserData {
                morph_target_names: Vec::new(),
            },
        }
    }

    /// Document for a morph set: base attributes plus one morph target
    /// per overlay, in overlay order.
    pub fn from_morph_set(set: &MorphSet) -> Self {
        let mut doc = Self::from_geometry(&set.base);

        let positions = set
            .overlays
            .iter()
            .map(|o| Attribute::floats(3, &o.positions).named(&o.name))
            .collect();
        let colors = set
            .overlays
            .iter()
            .map(|o| Attribute::colors(&o.colors).named(&o.name))
            .collect();

        if !set.overlays.is_empty() {
            doc.data.morph_attributes.insert("position".to_string(), positions);
            doc.data.morph_attributes.insert("color".to_string(), colors);
        }
        doc.user_data.morph_target_names = set.overlays.iter().map(|o| o.name.clone()).collect();
        doc
    }

    pub fn to_json(&self) -> MeshResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn base_attributes(geometry: &MergedGeometry) -> BTreeMap<String, Attribute> {
    let mut attributes = BTreeMap::new();
    attributes.insert("position".to_string(), Attribute::floats(3, &geometry.positions));
    attributes.insert("normal".to_string(), Attribute::floats(3, &geometry.normals));
    attributes.insert("uv".to_string(), Attribute::floats(2, &geometry.uvs));
    attributes.insert("color".to_string(), Attribute::colors(&geometry.colors));
    attributes
}
