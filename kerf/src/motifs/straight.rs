//! Straight lattice motif - offset double-line links.
//!
//! The standard flex-hinge cut: a forward line, a perpendicular gap, and a
//! return line. With a zero gap the motif degenerates to a single bar.

use crate::path::PathCommand;

/// Build the fixed relative commands for one straight link.
pub fn straight_commands(length: f64, gap: f64) -> Vec<PathCommand> {
    if gap == 0.0 {
        // Single line for a zero-height gap.
        return vec![PathCommand::HorizBy { dx: length }];
    }

    vec![
        PathCommand::LineBy { dx: length, dy: 0.0 },
        PathCommand::LineBy { dx: 0.0, dy: gap },
        PathCommand::LineBy { dx: -length, dy: 0.0 },
        PathCommand::LineBy { dx: 0.0, dy: -gap },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Subpath;

    #[test]
    fn zero_gap_is_a_single_line() {
        let commands = straight_commands(20.0, 0.0);
        assert_eq!(commands, vec![PathCommand::HorizBy { dx: 20.0 }]);
    }

    #[test]
    fn nonzero_gap_is_a_four_segment_rectangle() {
        let commands = straight_commands(20.0, 0.5);
        assert_eq!(commands.len(), 4);
        assert!(commands
            .iter()
            .all(|c| matches!(c, PathCommand::LineBy { .. })));

        // The rectangle returns to its starting point.
        let (dx, dy) = Subpath::new(commands).net_displacement();
        assert_eq!(dx, 0.0);
        assert_eq!(dy, 0.0);
    }
}
