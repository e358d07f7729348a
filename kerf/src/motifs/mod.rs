//! Motif primitives for lattice hinge patterns.
//!
//! Each motif is a pure, translation-invariant shape generator: its relative
//! commands depend only on the style parameters, never on position. The
//! tiler replays the same precomputed commands at every grid anchor.

mod diamond;
mod honeycomb;
mod straight;
mod wavy;

pub use diamond::diamond_commands;
pub use honeycomb::honeycomb_commands;
pub use straight::straight_commands;
pub use wavy::wavy_commands;

use crate::path::{PathCommand, Subpath};

/// Metadata describing a lattice style for UI display.
#[derive(Debug, Clone, Copy)]
pub struct StyleMetadata {
    /// Label for the style-specific parameter(s)
    pub extra_label: &'static str,
    /// Brief description of the cut shape
    pub description: &'static str,
}

impl StyleMetadata {
    pub const fn new(extra_label: &'static str, description: &'static str) -> Self {
        Self { extra_label, description }
    }
}

/// Available lattice styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Straight,
    Diamond,
    Honeycomb,
    Wavy,
}

impl Style {
    /// Get all available styles.
    pub fn all() -> &'static [Style] {
        &[Style::Straight, Style::Diamond, Style::Honeycomb, Style::Wavy]
    }

    /// Get style name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Style::Straight => "straight_lattice",
            Style::Diamond => "diamond_lattice",
            Style::Honeycomb => "honeycomb_lattice",
            Style::Wavy => "wavy_lattice",
        }
    }

    /// Parse style from string. Accepts both the full tab token and the
    /// bare style name.
    pub fn from_name(name: &str) -> Option<Style> {
        match name.to_lowercase().as_str() {
            "straight_lattice" | "straight" => Some(Style::Straight),
            "diamond_lattice" | "diamond" => Some(Style::Diamond),
            "honeycomb_lattice" | "honeycomb" => Some(Style::Honeycomb),
            "wavy_lattice" | "wavy" => Some(Style::Wavy),
            _ => None,
        }
    }

    /// Get UI metadata for this style.
    pub fn metadata(&self) -> StyleMetadata {
        match self {
            Style::Straight => StyleMetadata::new("Link Gap", "Offset double-line links"),
            Style::Diamond => StyleMetadata::new("Diamond Height", "Rhombus outlines"),
            Style::Honeycomb => {
                StyleMetadata::new("Comb Height / Ratio", "Arrowed honeycomb cells")
            }
            Style::Wavy => StyleMetadata::new("Wave Height", "Smooth wavy cuts"),
        }
    }

    /// Per-row anchor shift for the staggered brick tiling.
    ///
    /// Half an interval for most styles. The wavy style advances by a full
    /// interval, which wraps to zero: wavy rows stay aligned.
    pub fn default_offset_step(&self, interval: f64) -> f64 {
        match self {
            Style::Wavy => interval,
            _ => interval / 2.0,
        }
    }
}

/// One lattice motif with its style parameters.
///
/// A tagged union rather than a trait hierarchy: each variant carries its
/// own parameter record and `fixed_commands` dispatches by tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motif {
    Straight { length: f64, gap: f64 },
    Diamond { length: f64, height: f64 },
    Honeycomb { length: f64, height: f64, ratio: f64 },
    Wavy { length: f64, height: f64 },
}

impl Motif {
    pub fn style(&self) -> Style {
        match self {
            Motif::Straight { .. } => Style::Straight,
            Motif::Diamond { .. } => Style::Diamond,
            Motif::Honeycomb { .. } => Style::Honeycomb,
            Motif::Wavy { .. } => Style::Wavy,
        }
    }

    /// The motif's relative command sequence.
    pub fn fixed_commands(&self) -> Vec<PathCommand> {
        match *self {
            Motif::Straight { length, gap } => straight_commands(length, gap),
            Motif::Diamond { length, height } => diamond_commands(length, height),
            Motif::Honeycomb { length, height, ratio } => {
                honeycomb_commands(length, height, ratio)
            }
            Motif::Wavy { length, height } => wavy_commands(length, height),
        }
    }

    /// Vertical shift applied to the anchor before the fixed commands.
    ///
    /// Diamonds start at their left vertex, so the anchor drops by half the
    /// diamond height to center the outline on the grid row.
    pub fn anchor_shift(&self) -> f64 {
        match *self {
            Motif::Diamond { height, .. } => height / 2.0,
            _ => 0.0,
        }
    }
}

/// A motif compiled for repeated drawing.
///
/// Builds the fixed command list once; `draw_one` only prefixes the move.
#[derive(Debug, Clone)]
pub struct Tile {
    commands: Vec<PathCommand>,
    anchor_shift: f64,
}

impl Tile {
    pub fn new(motif: &Motif) -> Self {
        Self {
            commands: motif.fixed_commands(),
            anchor_shift: motif.anchor_shift(),
        }
    }

    /// Draw one motif instance anchored at `(x, y)`.
    pub fn draw_one(&self, x: f64, y: f64) -> Subpath {
        let mut commands = Vec::with_capacity(self.commands.len() + 1);
        commands.push(PathCommand::MoveTo {
            x,
            y: y + self.anchor_shift,
        });
        commands.extend_from_slice(&self.commands);
        Subpath::new(commands)
    }
}
