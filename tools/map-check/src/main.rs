//! map-check: validates arena map files and rewrites them in canonical form.
//!
//! Usage:
//!   map-check check resources/map.txt other.txt
//!   map-check normalize resources/map.txt --output clean.txt

use std::path::{Path, PathBuf};
use std::process;

use tankarena_core::types::Aabb;
use tankarena_grid::{format_map, load_map, TileGrid};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "check" => cmd_check(&args[2..]),
        "normalize" => cmd_normalize(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "map-check: tank arena map validator\n\
         \n\
         Commands:\n\
         \n\
         check <path>...     Load each map and report its size and start markers\n\
         \n\
         normalize <path>    Re-emit a map using '#', 'P', 'E' and '.' only\n\
         \n\
           --output <path>   Write to a file instead of stdout\n"
    );
}

fn parse_output(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--output" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

/// Positional arguments, skipping `--output` and its value.
fn parse_paths(args: &[String]) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--output" {
            i += 2;
            continue;
        }
        paths.push(PathBuf::from(&args[i]));
        i += 1;
    }
    paths
}

fn load_or_exit(path: &Path) -> TileGrid {
    match load_map(path) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}: {e}", path.display());
            process::exit(1);
        }
    }
}

// --- Check command ---

fn cmd_check(args: &[String]) {
    let paths = parse_paths(args);
    if paths.is_empty() {
        eprintln!("Error: at least one map path is required");
        process::exit(1);
    }

    let mut failed = false;
    for path in &paths {
        match load_map(path) {
            Ok(grid) => report(path, &grid),
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

fn report(path: &Path, grid: &TileGrid) {
    let start = grid.player_start();
    println!(
        "{}: {}x{} tiles, player start ({}, {}), {} enemy start(s)",
        path.display(),
        grid.width(),
        grid.height(),
        start.x,
        start.y,
        grid.enemy_starts().len()
    );

    if grid.is_blocking_rect(&Aabb::tank(start.origin())) {
        println!("  warning: player tank does not fit at its start");
    }
    for site in grid.enemy_starts() {
        if grid.is_blocking_rect(&Aabb::tank(site.centered_tank_origin())) {
            println!("  warning: enemy start ({}, {}) is blocked", site.x, site.y);
        }
    }
}

// --- Normalize command ---

fn cmd_normalize(args: &[String]) {
    let paths = parse_paths(args);
    let [path] = paths.as_slice() else {
        eprintln!("Error: exactly one map path is required");
        process::exit(1);
    };

    let text = format_map(&load_or_exit(path));
    match parse_output(args) {
        Some(output) => {
            if let Err(e) = std::fs::write(&output, text) {
                eprintln!("Error: failed to write {}: {e}", output.display());
                process::exit(1);
            }
            eprintln!("Wrote {}", output.display());
        }
        None => print!("{text}"),
    }
}
