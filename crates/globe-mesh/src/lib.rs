//! Box geometry synthesis for gridded datasets on a globe.
//!
//! Every present cell of a grid becomes a thin box standing on the unit
//! sphere. Its height and colour follow the cell's magnitude relative to
//! the grid's value range. All boxes of a dataset are merged into one set
//! of flat vertex buffers ([`MergedGeometry`]).
//!
//! Several datasets over the same grid can be synthesized together into a
//! [`MorphSet`]: one base geometry plus position/colour overlays that share
//! its vertex order, ready to be blended as morph targets.
//!
//! ```text
//! NamedDataset ──► surviving cells ──► CellBox per cell ──► MergedGeometry
//!                       ▲                                        │
//!      other variants ──┘                          MorphSet ◄────┘
//! ```

pub mod box_template;
pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod synth;

pub use cell::CellBox;
pub use color::{hsl_to_rgb, Hsl};
pub use config::{DegeneratePolicy, SynthesisConfig};
pub use error::{MeshError, MeshResult};
pub use export::GeometryDocument;
pub use geometry::{MergedGeometry, INDICES_PER_BOX, VERTICES_PER_BOX};
pub use synth::{
    surviving_cells, synthesize, synthesize_cells, synthesize_morph_set, MorphOverlay, MorphSet,
};
