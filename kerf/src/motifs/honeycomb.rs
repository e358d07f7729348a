//! Honeycomb lattice motif - angled arrows around a straight run.

use crate::path::PathCommand;

/// Build the fixed relative commands for one honeycomb cell.
///
/// Seven line segments: an angled arrow in, a straight run of
/// `length * ratio`, and a mirrored arrow out. `ratio` in `[0, 1]` splits
/// the motif between the straight run and the two arrow sections; `height`
/// is the vertical amplitude of the arrows. The mirrored return keeps the
/// motif's net vertical displacement at zero.
pub fn honeycomb_commands(length: f64, height: f64, ratio: f64) -> Vec<PathCommand> {
    let line = length * ratio;
    let arrow = length * (1.0 - ratio) * 0.5;
    let half_h = height / 2.0;
    vec![
        PathCommand::LineBy { dx: arrow, dy: half_h },
        PathCommand::LineBy { dx: -arrow, dy: half_h },
        PathCommand::LineBy { dx: arrow, dy: -half_h },
        PathCommand::LineBy { dx: line, dy: 0.0 },
        PathCommand::LineBy { dx: arrow, dy: -half_h },
        PathCommand::LineBy { dx: -arrow, dy: -half_h },
        PathCommand::LineBy { dx: arrow, dy: half_h },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Subpath;

    #[test]
    fn honeycomb_has_seven_segments() {
        assert_eq!(honeycomb_commands(24.0, 4.0, 0.5).len(), 7);
    }

    #[test]
    fn reference_ratio_splits_run_and_arrows() {
        // length 24, ratio 0.5: straight run 12, each arrow section 6.
        let commands = honeycomb_commands(24.0, 4.0, 0.5);
        assert_eq!(commands[3], PathCommand::LineBy { dx: 12.0, dy: 0.0 });
        assert_eq!(commands[0], PathCommand::LineBy { dx: 6.0, dy: 2.0 });
    }

    #[test]
    fn net_displacement_is_length_forward_and_level() {
        for ratio in [0.0, 0.25, 0.5, 1.0] {
            let (dx, dy) = Subpath::new(honeycomb_commands(24.0, 4.0, ratio)).net_displacement();
            assert!((dx - 24.0).abs() < 1e-12, "ratio {}: dx {}", ratio, dx);
            assert_eq!(dy, 0.0, "ratio {}", ratio);
        }
    }

    #[test]
    fn ratio_one_degenerates_to_straight_run() {
        let commands = honeycomb_commands(24.0, 4.0, 1.0);
        // Arrow sections collapse to zero width; the run carries everything.
        assert_eq!(commands[3], PathCommand::LineBy { dx: 24.0, dy: 0.0 });
        assert_eq!(commands[0], PathCommand::LineBy { dx: 0.0, dy: 2.0 });
    }
}
