//! Styles listing command.

use kerf::Style;

/// Execute the styles command.
pub fn cmd_styles() {
    println!("Available lattice styles:");
    println!();
    for style in Style::all() {
        let meta = style.metadata();
        println!("  {:<20} {:<24} {}", style.name(), meta.extra_label, meta.description);
    }
}
