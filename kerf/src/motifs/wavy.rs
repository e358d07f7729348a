//! Wavy lattice motif - straight runs joined by smooth bulges.

use crate::path::PathCommand;

/// Build the fixed relative commands for one wavy cut.
///
/// Three straight runs with two cubic bulges between them: up by `height`,
/// back down by `height / 2`. The control point offsets are fixed
/// constants; only the run lengths (fractions of `length`) and the bulge
/// endpoints scale with the parameters. This is the only motif that emits
/// curve commands.
pub fn wavy_commands(length: f64, height: f64) -> Vec<PathCommand> {
    vec![
        PathCommand::HorizBy { dx: length * 0.2 },
        PathCommand::CurveBy {
            c1: (4.0, 0.0),
            c2: (3.0, 4.0),
            end: (length * 0.25, height),
        },
        PathCommand::HorizBy { dx: length * 0.2 },
        PathCommand::CurveBy {
            c1: (2.0, 0.0),
            c2: (1.5, -2.0),
            end: (length * 0.2, -height / 2.0),
        },
        PathCommand::HorizBy { dx: length * 0.175 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Subpath;

    #[test]
    fn wavy_has_five_commands_with_two_curves() {
        let commands = wavy_commands(20.0, 0.5);
        assert_eq!(commands.len(), 5);
        let curves = commands
            .iter()
            .filter(|c| matches!(c, PathCommand::CurveBy { .. }))
            .count();
        assert_eq!(curves, 2);
    }

    #[test]
    fn wavy_ends_half_a_height_up() {
        // Bulge up by height, return by height / 2.
        let (dx, dy) = Subpath::new(wavy_commands(20.0, 0.5)).net_displacement();
        assert!((dx - 20.0 * 1.025).abs() < 1e-12);
        assert!((dy - 0.25).abs() < 1e-12);
    }

    #[test]
    fn control_offsets_do_not_scale_with_length() {
        let small = wavy_commands(10.0, 0.5);
        let large = wavy_commands(100.0, 0.5);
        let (small_c1, large_c1) = match (&small[1], &large[1]) {
            (PathCommand::CurveBy { c1: a, .. }, PathCommand::CurveBy { c1: b, .. }) => (*a, *b),
            _ => panic!("expected curve commands"),
        };
        assert_eq!(small_c1, large_c1);
        assert_eq!(small_c1, (4.0, 0.0));
    }
}
