//! Generate command implementation.

use std::fs;

use serde::Serialize;

use kerf::{
    LatticeSpec, Motif, PathStyle, Style, SvgDocument, apply_lattice, generate_lattice,
    LATTICE_LABEL,
};

use super::common::{OutputFormat, standalone_svg, write_output};

/// Geometric extent of the generated path in JSON output.
#[derive(Serialize)]
struct JsonBounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

/// JSON report for one generation run.
#[derive(Serialize)]
struct JsonLattice {
    style: String,
    width: f64,
    height: f64,
    interval: f64,
    spacing: f64,
    rows: usize,
    tiles: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<JsonBounds>,
    d: String,
}

fn print_generate_help() {
    println!("kerf generate [input.svg] --tab <style> [options]");
    println!();
    println!("Common options:");
    println!("  --tab <style>         straight_lattice | diamond_lattice |");
    println!("                        honeycomb_lattice | wavy_lattice (required)");
    println!("  --width <n>           Width of pattern (default 300)");
    println!("  --height <n>          Height of pattern (default 100)");
    println!("  --stroke-width <n>    Cut line stroke width (default 2)");
    println!("  --select <id>         Selected element; its size overrides width/height.");
    println!("                        Repeatable, but selecting more than one aborts.");
    println!("  -o, --output <file>   Write output to file instead of stdout");
    println!("  --json                Emit a JSON report instead of SVG");
    println!();
    println!("Straight:  --sl-length 20  --sl-gap 0.5  --sl-interval 30  --sl-spacing 20");
    println!("Diamond:   --dl-length 24  --dl-height 4  --dl-interval 28  --dl-spacing 4");
    println!("Honeycomb: --hl-length 24  --hl-height 4  --hl-interval 28  --hl-spacing 4");
    println!("           --hl-ratio 0.5");
    println!("Wavy:      --wl-length 20  --wl-interval 30  --wl-spacing 20  --wl-height 0.5");
}

fn take_value<'a>(args: &'a [String], i: &mut usize) -> Option<&'a str> {
    *i += 1;
    args.get(*i).map(String::as_str)
}

fn parse_f64(value: Option<&str>, default: f64) -> f64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Execute the generate command.
pub fn cmd_generate(args: &[String]) {
    let mut input_path: Option<&str> = None;
    let mut output_path: Option<&str> = None;
    let mut tab: Option<&str> = None;
    let mut selects: Vec<&str> = Vec::new();
    let mut format = OutputFormat::Svg;

    let mut width = 300.0;
    let mut height = 100.0;
    let mut stroke_width = 2.0;

    // Per-style defaults, matching the original extension.
    let mut sl_length = 20.0;
    let mut sl_gap = 0.5;
    let mut sl_interval = 30.0;
    let mut sl_spacing = 20.0;

    let mut dl_length = 24.0;
    let mut dl_height = 4.0;
    let mut dl_interval = 28.0;
    let mut dl_spacing = 4.0;

    let mut hl_length = 24.0;
    let mut hl_height = 4.0;
    let mut hl_interval = 28.0;
    let mut hl_spacing = 4.0;
    let mut hl_ratio = 0.5;

    let mut wl_length = 20.0;
    let mut wl_interval = 30.0;
    let mut wl_spacing = 20.0;
    let mut wl_height = 0.5;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_generate_help();
                return;
            }
            "--tab" => tab = take_value(args, &mut i),
            "--select" => match take_value(args, &mut i) {
                Some(id) => selects.push(id),
                None => {
                    eprintln!("--select requires a value");
                    std::process::exit(1);
                }
            },
            "-o" | "--output" => output_path = take_value(args, &mut i),
            "--json" => format = OutputFormat::Json,
            "--width" => width = parse_f64(take_value(args, &mut i), width),
            "--height" => height = parse_f64(take_value(args, &mut i), height),
            "--stroke-width" => stroke_width = parse_f64(take_value(args, &mut i), stroke_width),

            "--sl-length" => sl_length = parse_f64(take_value(args, &mut i), sl_length),
            "--sl-gap" => sl_gap = parse_f64(take_value(args, &mut i), sl_gap),
            "--sl-interval" => sl_interval = parse_f64(take_value(args, &mut i), sl_interval),
            "--sl-spacing" => sl_spacing = parse_f64(take_value(args, &mut i), sl_spacing),

            "--dl-length" => dl_length = parse_f64(take_value(args, &mut i), dl_length),
            "--dl-height" => dl_height = parse_f64(take_value(args, &mut i), dl_height),
            "--dl-interval" => dl_interval = parse_f64(take_value(args, &mut i), dl_interval),
            "--dl-spacing" => dl_spacing = parse_f64(take_value(args, &mut i), dl_spacing),

            "--hl-length" => hl_length = parse_f64(take_value(args, &mut i), hl_length),
            "--hl-height" => hl_height = parse_f64(take_value(args, &mut i), hl_height),
            "--hl-interval" => hl_interval = parse_f64(take_value(args, &mut i), hl_interval),
            "--hl-spacing" => hl_spacing = parse_f64(take_value(args, &mut i), hl_spacing),
            "--hl-ratio" => hl_ratio = parse_f64(take_value(args, &mut i), hl_ratio),

            "--wl-length" => wl_length = parse_f64(take_value(args, &mut i), wl_length),
            "--wl-interval" => wl_interval = parse_f64(take_value(args, &mut i), wl_interval),
            "--wl-spacing" => wl_spacing = parse_f64(take_value(args, &mut i), wl_spacing),
            "--wl-height" => wl_height = parse_f64(take_value(args, &mut i), wl_height),

            other => {
                if other.starts_with('-') {
                    eprintln!("Unknown option: {}", other);
                    std::process::exit(1);
                } else if input_path.is_none() {
                    input_path = Some(other);
                } else {
                    eprintln!("Unexpected argument: {}", other);
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let style = match tab.and_then(Style::from_name) {
        Some(style) => style,
        None => {
            eprintln!("Select a valid pattern tab before rendering.");
            eprintln!(
                "Valid tabs: {}",
                Style::all()
                    .iter()
                    .map(|s| s.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            std::process::exit(1);
        }
    };

    let (motif, interval, spacing) = match style {
        Style::Straight => (
            Motif::Straight { length: sl_length, gap: sl_gap },
            sl_interval,
            sl_spacing,
        ),
        Style::Diamond => (
            Motif::Diamond { length: dl_length, height: dl_height },
            dl_interval,
            dl_spacing,
        ),
        Style::Honeycomb => (
            Motif::Honeycomb { length: hl_length, height: hl_height, ratio: hl_ratio },
            hl_interval,
            hl_spacing,
        ),
        Style::Wavy => (
            Motif::Wavy { length: wl_length, height: wl_height },
            wl_interval,
            wl_spacing,
        ),
    };

    let offset_step = style.default_offset_step(interval);
    let spec = LatticeSpec::new(width, height, interval, spacing, offset_step);
    let path_style = PathStyle::cut_line(stroke_width);

    let (effective, path, document) = match input_path {
        Some(input) => {
            let content = match fs::read_to_string(input) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Failed to read {}: {}", input, e);
                    std::process::exit(1);
                }
            };
            let mut doc = match SvgDocument::parse(&content) {
                Ok(doc) => doc,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };
            for id in &selects {
                doc.select(id);
            }
            match apply_lattice(&mut doc, &spec, &motif, &path_style, LATTICE_LABEL) {
                Ok((effective, path)) => (effective, path, Some(doc.into_string())),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            if !selects.is_empty() {
                eprintln!("--select requires an input SVG");
                std::process::exit(1);
            }
            match generate_lattice(&spec, &motif) {
                Ok(path) => (spec, path, None),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match format {
        OutputFormat::Json => {
            let rows = (effective.height / effective.spacing).max(0.0).ceil() as usize;
            let report = JsonLattice {
                style: style.name().to_string(),
                width: effective.width,
                height: effective.height,
                interval: effective.interval,
                spacing: effective.spacing,
                rows,
                tiles: path.len(),
                bounds: path.bounding_box().map(|(min_x, min_y, max_x, max_y)| JsonBounds {
                    min_x,
                    min_y,
                    max_x,
                    max_y,
                }),
                d: path.to_svg(),
            };
            match serde_json::to_string_pretty(&report) {
                Ok(json) => {
                    let mut json = json;
                    json.push('\n');
                    write_output(output_path, &json);
                }
                Err(e) => {
                    eprintln!("Failed to serialize JSON: {}", e);
                    std::process::exit(1);
                }
            }
        }
        OutputFormat::Svg => {
            let out = match document {
                Some(doc) => doc,
                None => standalone_svg(
                    &path.to_svg(),
                    &path_style,
                    LATTICE_LABEL,
                    effective.width,
                    effective.height,
                ),
            };
            write_output(output_path, &out);
        }
    }
}
