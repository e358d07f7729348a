//! kerf - lattice hinge cut pattern generator
//!
//! Usage:
//!   kerf generate [input.svg] --tab <style> [options]   Generate a lattice
//!   kerf styles                                         List lattice styles

use std::env;

mod cli;

fn print_usage() {
    println!("kerf - lattice hinge cut pattern generator");
    println!();
    println!("Usage:");
    println!("  kerf generate [input.svg] --tab <style> [options]");
    println!("      Generate a lattice cut path. With an input SVG the path is");
    println!("      inserted into the document; without one a standalone SVG is");
    println!("      emitted. See 'kerf generate --help' for options.");
    println!("  kerf styles");
    println!("      List available lattice styles.");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("generate") => cli::generate::cmd_generate(&args[2..]),
        Some("styles") => cli::styles::cmd_styles(),
        Some("-h") | Some("--help") | None => print_usage(),
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }
}
