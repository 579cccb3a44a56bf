//! Terminal output formatting.

use std::path::Path;

use colored::Colorize;
use storesmith_core::icons::{variants_for, Platform};

/// Print a summary of a written icon set archive.
pub fn print_archive_written(path: &Path, bytes: usize, selection: &[String]) {
    println!();
    println!(
        "{} {}",
        "Icon set written to".green().bold(),
        path.display()
    );
    println!("  {} {}", "Size:".bold(), format_bytes(bytes));

    let platforms: Vec<Platform> = selection
        .iter()
        .filter_map(|s| Platform::parse(s))
        .collect();
    for platform in platforms {
        println!(
            "  {} {} ({} variants)",
            "Platform:".bold(),
            platform.display_name(),
            variants_for(platform).len()
        );
    }
    println!();
}

fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
