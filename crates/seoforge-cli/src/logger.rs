//! Terminal output helpers

use colored::Colorize;
use seoforge::pipeline::{ArtifactRecord, Outcome};

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message.green());
}

pub fn error(message: &str) {
    println!("{} {}", "✗".red(), message.red());
}

pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message.yellow());
}

pub fn info(message: &str) {
    println!("{} {}", "ℹ".cyan(), message.cyan());
}

pub fn step(step: usize, total: usize, message: &str) {
    println!("{} {}", format!("[{step}/{total}]").cyan(), message);
}

pub fn complete(message: &str) {
    println!("{} {}", "✓".green(), message.green().bold());
}

pub fn feature(name: &str, enabled: bool) {
    let status = if enabled {
        "✓ Enabled".green()
    } else {
        "✗ Disabled".dimmed()
    };
    println!("   {name}: {status}");
}

/// Per-artifact result list, one line per record
pub fn summary(title: &str, records: &[ArtifactRecord]) {
    println!("\n{}", title.blue().bold());
    for record in records {
        let icon = match record.outcome {
            Outcome::Success => "✓".green(),
            Outcome::Error => "✗".red(),
        };
        println!("   {} {} - {}", icon, record.name, record.detail.dimmed());
    }
    println!();
}
