//! Lattice tiler - staggered grid of motif anchors.

use crate::motifs::{Motif, Tile};
use crate::path::CompositePath;

/// Parameters for one tiling run.
///
/// `width`/`height` bound the anchor grid (half-open on both axes), while
/// `interval`/`spacing` step the columns and rows. `offset_step` advances
/// the row start and wraps modulo `interval`, producing the brick-like
/// stagger. `origin` translates every anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeSpec {
    pub width: f64,
    pub height: f64,
    pub interval: f64,
    pub spacing: f64,
    pub offset_step: f64,
    pub origin: (f64, f64),
}

impl LatticeSpec {
    pub fn new(width: f64, height: f64, interval: f64, spacing: f64, offset_step: f64) -> Self {
        Self {
            width,
            height,
            interval,
            spacing,
            offset_step,
            origin: (0.0, 0.0),
        }
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = (x, y);
        self
    }

    /// Reject parameters that would make the tiling loops non-terminating.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.interval <= 0.0 {
            return Err(GridError::NonPositiveInterval(self.interval));
        }
        if self.spacing <= 0.0 {
            return Err(GridError::NonPositiveSpacing(self.spacing));
        }
        Ok(())
    }
}

/// Invalid tiling parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    NonPositiveInterval(f64),
    NonPositiveSpacing(f64),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::NonPositiveInterval(v) => {
                write!(f, "interval must be positive, got {}", v)
            }
            GridError::NonPositiveSpacing(v) => {
                write!(f, "spacing must be positive, got {}", v)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Anchor points of the staggered grid, in row-major order.
///
/// Row `i` starts at `(i * offset_step) mod interval`. Both loops are
/// right-open: an anchor landing exactly on `width` or `height` is
/// excluded, but motifs drawn at included anchors may still extend past
/// the bounds (no clipping).
pub fn anchors(spec: &LatticeSpec) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    let mut offs = 0.0;
    let mut y = 0.0;
    while y < spec.height {
        let mut x = offs;
        while x < spec.width {
            points.push((spec.origin.0 + x, spec.origin.1 + y));
            x += spec.interval;
        }
        offs = (offs + spec.offset_step).rem_euclid(spec.interval);
        y += spec.spacing;
    }
    points
}

/// Generate the composite cut path for one lattice.
///
/// Validates the spec, compiles the motif once, and emits one subpath per
/// grid anchor. Deterministic: identical inputs produce byte-identical
/// `to_svg()` output.
pub fn generate_lattice(spec: &LatticeSpec, motif: &Motif) -> Result<CompositePath, GridError> {
    spec.validate()?;

    let tile = Tile::new(motif);
    let mut path = CompositePath::default();
    for (x, y) in anchors(spec) {
        path.push(tile.draw_one(x, y));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motifs::Style;
    use crate::path::PathCommand;

    #[test]
    fn rejects_non_positive_interval_and_spacing() {
        let spec = LatticeSpec::new(100.0, 50.0, 0.0, 20.0, 0.0);
        assert_eq!(spec.validate(), Err(GridError::NonPositiveInterval(0.0)));

        let spec = LatticeSpec::new(100.0, 50.0, 30.0, -1.0, 15.0);
        assert_eq!(spec.validate(), Err(GridError::NonPositiveSpacing(-1.0)));

        let motif = Motif::Straight { length: 20.0, gap: 0.5 };
        assert!(generate_lattice(&spec, &motif).is_err());
    }

    #[test]
    fn straight_reference_layout() {
        // width 100, height 50, interval 30, spacing 20, half-interval step:
        // three rows (y = 0, 20, 40), staggered 0 / 15 / 0.
        let spec = LatticeSpec::new(100.0, 50.0, 30.0, 20.0, 15.0);
        assert_eq!(
            anchors(&spec),
            vec![
                (0.0, 0.0),
                (30.0, 0.0),
                (60.0, 0.0),
                (90.0, 0.0),
                (15.0, 20.0),
                (45.0, 20.0),
                (75.0, 20.0),
                (0.0, 40.0),
                (30.0, 40.0),
                (60.0, 40.0),
                (90.0, 40.0),
            ]
        );
    }

    #[test]
    fn row_offsets_alternate_with_half_interval_step() {
        // Period-2 brick stagger: row starts 0, i/2, 0, i/2, ...
        let spec = LatticeSpec::new(10.0, 100.0, 10.0, 10.0, 5.0);
        // One anchor per row at this width, so the x values are the row starts.
        let starts: Vec<f64> = anchors(&spec).iter().map(|p| p.0).collect();
        assert_eq!(starts, vec![0.0, 5.0, 0.0, 5.0, 0.0, 5.0, 0.0, 5.0, 0.0, 5.0]);
    }

    #[test]
    fn full_interval_step_wraps_to_zero() {
        // The wavy style's row offset advances by a whole interval, which
        // the modulo collapses: every row starts at zero.
        let step = Style::Wavy.default_offset_step(30.0);
        let spec = LatticeSpec::new(100.0, 60.0, 30.0, 20.0, step);
        for (x, _) in anchors(&spec) {
            assert_eq!(x.rem_euclid(30.0), 0.0);
        }
    }

    #[test]
    fn row_count_is_ceil_of_height_over_spacing() {
        for (height, spacing, expected) in [(50.0, 20.0, 3), (40.0, 20.0, 2), (1.0, 4.0, 1)] {
            let spec = LatticeSpec::new(10.0, height, 10.0, spacing, 5.0);
            let rows = anchors(&spec)
                .iter()
                .map(|(_, y)| *y as i64)
                .collect::<std::collections::BTreeSet<_>>()
                .len();
            assert_eq!(rows, expected, "height {} spacing {}", height, spacing);
        }
    }

    #[test]
    fn diamond_reference_layout() {
        // width 50, height 1: a single row with anchors at x = 0 and 28,
        // each diamond centered 2 units below the row.
        let spec = LatticeSpec::new(50.0, 1.0, 28.0, 4.0, 14.0);
        let motif = Motif::Diamond { length: 24.0, height: 4.0 };
        let path = generate_lattice(&spec, &motif).unwrap();

        assert_eq!(path.len(), 2);
        for subpath in path.subpaths() {
            assert_eq!(subpath.commands().len(), 5);
            assert_eq!(subpath.net_displacement(), (0.0, 0.0));
        }
        assert_eq!(
            path.subpaths()[1].commands()[0],
            PathCommand::MoveTo { x: 28.0, y: 2.0 }
        );
    }

    #[test]
    fn tiles_bleed_past_the_width_bound() {
        // Anchor at x = 90 is inside the half-open bound; its 20-long link
        // still extends to x = 110. Accepted behavior, not clipped.
        let spec = LatticeSpec::new(100.0, 10.0, 30.0, 20.0, 15.0);
        let motif = Motif::Straight { length: 20.0, gap: 0.5 };
        let path = generate_lattice(&spec, &motif).unwrap();
        let (_, _, max_x, _) = path.bounding_box().unwrap();
        assert_eq!(max_x, 110.0);
    }

    #[test]
    fn origin_translates_every_anchor() {
        let base = LatticeSpec::new(60.0, 20.0, 30.0, 20.0, 15.0);
        let moved = base.with_origin(100.0, -5.0);
        let shifted: Vec<(f64, f64)> = anchors(&base)
            .into_iter()
            .map(|(x, y)| (x + 100.0, y - 5.0))
            .collect();
        assert_eq!(anchors(&moved), shifted);
    }

    #[test]
    fn generation_is_idempotent() {
        let spec = LatticeSpec::new(100.0, 50.0, 30.0, 20.0, 15.0);
        let motif = Motif::Honeycomb { length: 24.0, height: 4.0, ratio: 0.5 };
        let a = generate_lattice(&spec, &motif).unwrap().to_svg();
        let b = generate_lattice(&spec, &motif).unwrap().to_svg();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_area_emits_nothing() {
        let spec = LatticeSpec::new(0.0, 0.0, 30.0, 20.0, 15.0);
        let motif = Motif::Straight { length: 20.0, gap: 0.0 };
        let path = generate_lattice(&spec, &motif).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.to_svg(), "");
    }
}
