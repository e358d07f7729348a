//! Common utilities shared across CLI commands.

use std::fs;

use kerf::PathStyle;

/// Output format for generated lattices.
#[derive(Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Svg,
    Json,
}

/// Wrap a generated path in a minimal standalone SVG document.
pub fn standalone_svg(d: &str, style: &PathStyle, label: &str, width: f64, height: f64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" viewBox="0 0 {} {}">
  <path style="{}" inkscape:label="{}" d="{}"/>
</svg>
"#,
        width,
        height,
        style.to_css(),
        label,
        d
    )
}

/// Write content to a file or stdout.
pub fn write_output(output_path: Option<&str>, content: &str) {
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, content) {
                eprintln!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            }
        }
        None => print!("{}", content),
    }
}
