//! Diamond lattice motif - rhombus outlines.

use crate::path::PathCommand;

/// Build the fixed relative commands for one diamond outline.
///
/// Four diagonal half-length segments: right-up, right-down, left-down,
/// left-up. Start and end coincide by construction; the path is not
/// explicitly closed. The anchor is shifted down by `height / 2` before
/// these commands run (see [`super::Motif::anchor_shift`]), which centers
/// the diamond on the grid row.
pub fn diamond_commands(length: f64, height: f64) -> Vec<PathCommand> {
    let half_l = length / 2.0;
    let half_h = height / 2.0;
    vec![
        PathCommand::LineBy { dx: half_l, dy: -half_h },
        PathCommand::LineBy { dx: half_l, dy: half_h },
        PathCommand::LineBy { dx: -half_l, dy: half_h },
        PathCommand::LineBy { dx: -half_l, dy: -half_h },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Subpath;

    #[test]
    fn diamond_is_closed_for_any_size() {
        for (length, height) in [(24.0, 4.0), (10.0, 10.0), (3.5, 0.25)] {
            let (dx, dy) = Subpath::new(diamond_commands(length, height)).net_displacement();
            assert_eq!(dx, 0.0, "length {} height {}", length, height);
            assert_eq!(dy, 0.0, "length {} height {}", length, height);
        }
    }

    #[test]
    fn diamond_spans_length_and_height() {
        let commands = diamond_commands(24.0, 4.0);
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], PathCommand::LineBy { dx: 12.0, dy: -2.0 });
        assert_eq!(commands[1], PathCommand::LineBy { dx: 12.0, dy: 2.0 });
    }
}
