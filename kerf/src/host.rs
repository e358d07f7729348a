//! Host sink boundary - how generated paths reach a drawing document.
//!
//! The core never touches host document types directly. Anything that can
//! report a selection size and accept one path element can host a lattice,
//! which keeps the generation logic testable against a recording fake.

use crate::motifs::Motif;
use crate::path::CompositePath;
use crate::tiler::{GridError, LatticeSpec, generate_lattice};

/// Label attached to every inserted lattice path.
pub const LATTICE_LABEL: &str = "lattice";

/// Visual style for an inserted path element.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
}

impl PathStyle {
    /// The fixed lattice cut style: red stroke, no fill.
    pub fn cut_line(stroke_width: f64) -> Self {
        Self {
            stroke: "#ff0000".to_string(),
            stroke_width,
            fill: "none".to_string(),
        }
    }

    /// Render as a CSS style attribute value.
    pub fn to_css(&self) -> String {
        format!(
            "stroke:{};stroke-width:{};fill:{}",
            self.stroke, self.stroke_width, self.fill
        )
    }
}

/// Host-side failures.
#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    /// More than one object selected where at most one size override is
    /// expected.
    MultipleSelection(usize),
    /// The host could not resolve the selection or accept the path.
    Backend(String),
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::MultipleSelection(n) => {
                write!(f, "Select at most one object ({} selected)", n)
            }
            HostError::Backend(msg) => write!(f, "host error: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

/// Minimal interface to the hosting drawing document.
pub trait HostSink {
    /// Size of the single selected object, if any. Errors when more than
    /// one object is selected.
    fn selection_size(&self) -> Result<Option<(f64, f64)>, HostError>;

    /// Append one path element to the editing surface.
    fn insert_path(&mut self, d: &str, style: &PathStyle, label: &str) -> Result<(), HostError>;
}

/// Failure of one lattice application, from either side of the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectError {
    Grid(GridError),
    Host(HostError),
}

impl std::fmt::Display for EffectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectError::Grid(e) => e.fmt(f),
            EffectError::Host(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EffectError {}

impl From<GridError> for EffectError {
    fn from(e: GridError) -> Self {
        EffectError::Grid(e)
    }
}

impl From<HostError> for EffectError {
    fn from(e: HostError) -> Self {
        EffectError::Host(e)
    }
}

/// Generate a lattice and insert it into the host as one path element.
///
/// A single selected object overrides the spec's width and height. All
/// validation happens before the insert, so a failing run leaves the host
/// untouched. Returns the effective spec alongside the generated path.
/// Pass [`LATTICE_LABEL`] unless the caller wants a custom element label.
pub fn apply_lattice(
    sink: &mut dyn HostSink,
    spec: &LatticeSpec,
    motif: &Motif,
    style: &PathStyle,
    label: &str,
) -> Result<(LatticeSpec, CompositePath), EffectError> {
    let mut spec = *spec;
    if let Some((width, height)) = sink.selection_size()? {
        spec.width = width;
        spec.height = height;
    }

    let path = generate_lattice(&spec, motif)?;
    sink.insert_path(&path.to_svg(), style, label)?;
    Ok((spec, path))
}

/// A path element recorded by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct InsertedPath {
    pub d: String,
    pub style: String,
    pub label: String,
}

/// In-memory host for tests: reports a configured selection and records
/// every inserted path.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub selection: Vec<(f64, f64)>,
    pub inserted: Vec<InsertedPath>,
}

impl HostSink for RecordingSink {
    fn selection_size(&self) -> Result<Option<(f64, f64)>, HostError> {
        match self.selection.as_slice() {
            [] => Ok(None),
            [size] => Ok(Some(*size)),
            more => Err(HostError::MultipleSelection(more.len())),
        }
    }

    fn insert_path(&mut self, d: &str, style: &PathStyle, label: &str) -> Result<(), HostError> {
        self.inserted.push(InsertedPath {
            d: d.to_string(),
            style: style.to_css(),
            label: label.to_string(),
        });
        Ok(())
    }
}
