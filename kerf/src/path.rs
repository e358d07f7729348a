//! Path command model for generated cut patterns.
//!
//! Motifs emit relative commands that never depend on position; the tiler
//! prefixes each copy with an absolute move. Commands are kept as immutable
//! records and joined into the output string once, rather than accumulating
//! a growing string during generation.

use lyon_geom::{CubicBezierSegment, point};

/// A single command in the SVG path mini-language.
///
/// `MoveTo` carries absolute coordinates; every other variant is a delta
/// from the current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineBy { dx: f64, dy: f64 },
    HorizBy { dx: f64 },
    /// Relative cubic bezier: both control points and the endpoint are
    /// deltas from the current position.
    CurveBy {
        c1: (f64, f64),
        c2: (f64, f64),
        end: (f64, f64),
    },
}

impl PathCommand {
    /// Net displacement contributed by this command. Zero for `MoveTo`,
    /// which repositions rather than draws.
    pub fn displacement(&self) -> (f64, f64) {
        match *self {
            PathCommand::MoveTo { .. } => (0.0, 0.0),
            PathCommand::LineBy { dx, dy } => (dx, dy),
            PathCommand::HorizBy { dx } => (dx, 0.0),
            PathCommand::CurveBy { end, .. } => end,
        }
    }

    fn write_svg(&self, out: &mut String) {
        match *self {
            PathCommand::MoveTo { x, y } => {
                out.push_str(&format!("M {:.4},{:.4}", x, y));
            }
            PathCommand::LineBy { dx, dy } => {
                out.push_str(&format!("l {:.4},{:.4}", dx, dy));
            }
            PathCommand::HorizBy { dx } => {
                out.push_str(&format!("h {:.4}", dx));
            }
            PathCommand::CurveBy { c1, c2, end } => {
                out.push_str(&format!(
                    "c {:.4},{:.4} {:.4},{:.4} {:.4},{:.4}",
                    c1.0, c1.1, c2.0, c2.1, end.0, end.1
                ));
            }
        }
    }
}

/// One motif instance: an absolute move followed by the motif's fixed
/// relative commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Subpath {
    commands: Vec<PathCommand>,
}

impl Subpath {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Sum of the relative displacements. A closed motif outline returns
    /// `(0, 0)` here even though the path is never explicitly closed.
    pub fn net_displacement(&self) -> (f64, f64) {
        self.commands.iter().fold((0.0, 0.0), |(x, y), cmd| {
            let (dx, dy) = cmd.displacement();
            (x + dx, y + dy)
        })
    }

    pub fn to_svg(&self) -> String {
        let parts: Vec<String> = self
            .commands
            .iter()
            .map(|cmd| {
                let mut s = String::new();
                cmd.write_svg(&mut s);
                s
            })
            .collect();
        parts.join(" ")
    }
}

/// All subpaths of one generation run, in row-major emission order.
///
/// The order is not semantically significant (the subpaths are disjoint)
/// but it is deterministic, so identical parameters produce byte-identical
/// output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositePath {
    subpaths: Vec<Subpath>,
}

impl CompositePath {
    pub fn push(&mut self, subpath: Subpath) {
        self.subpaths.push(subpath);
    }

    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    /// Number of motif instances (one subpath per tile).
    pub fn len(&self) -> usize {
        self.subpaths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Render the whole path as one `d` attribute string.
    pub fn to_svg(&self) -> String {
        let parts: Vec<String> = self.subpaths.iter().map(Subpath::to_svg).collect();
        parts.join(" ")
    }

    /// Geometric extent as `(min_x, min_y, max_x, max_y)`, or `None` for an
    /// empty path. Curve commands contribute their true bezier bounds, so
    /// this shows how far tiles bleed past the nominal tiling rectangle.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        let include = |x: f64, y: f64, b: &mut Option<(f64, f64, f64, f64)>| {
            *b = Some(match *b {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        };

        let mut cx = 0.0;
        let mut cy = 0.0;
        for subpath in &self.subpaths {
            for cmd in subpath.commands() {
                match *cmd {
                    PathCommand::MoveTo { x, y } => {
                        cx = x;
                        cy = y;
                        include(cx, cy, &mut bounds);
                    }
                    PathCommand::LineBy { dx, dy } => {
                        cx += dx;
                        cy += dy;
                        include(cx, cy, &mut bounds);
                    }
                    PathCommand::HorizBy { dx } => {
                        cx += dx;
                        include(cx, cy, &mut bounds);
                    }
                    PathCommand::CurveBy { c1, c2, end } => {
                        let curve = CubicBezierSegment {
                            from: point(cx, cy),
                            ctrl1: point(cx + c1.0, cy + c1.1),
                            ctrl2: point(cx + c2.0, cy + c2.1),
                            to: point(cx + end.0, cy + end.1),
                        };
                        let bb = curve.bounding_box();
                        include(bb.min.x, bb.min.y, &mut bounds);
                        include(bb.max.x, bb.max.y, &mut bounds);
                        cx += end.0;
                        cy += end.1;
                    }
                }
            }
        }

        bounds
    }
}
