//! # kerf
//!
//! Parametric lattice-hinge cut patterns for laser-cut bend joints.
//!
//! A motif (straight link, diamond, honeycomb cell, or wavy cut) is tiled
//! across a rectangular area on a staggered grid, producing one continuous
//! SVG path that a host document inserts as a single red cut line.

pub mod host;
pub mod motifs;
pub mod path;
pub mod svg;
pub mod tiler;

// Re-export common types at crate root for convenience.
pub use host::{EffectError, HostError, HostSink, LATTICE_LABEL, PathStyle, apply_lattice};
pub use motifs::{Motif, Style, StyleMetadata, Tile};
pub use path::{CompositePath, PathCommand, Subpath};
pub use svg::{SvgDocument, SvgError};
pub use tiler::{GridError, LatticeSpec, anchors, generate_lattice};
