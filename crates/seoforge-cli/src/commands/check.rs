use anyhow::{bail, Context, Result};
use std::env;

use seoforge::config::{SeoConfig, CONFIG_FILE};
use seoforge::preflight;

use crate::logger;

pub fn execute() -> Result<()> {
    let project_root = env::current_dir().context("Failed to determine working directory")?;

    let config_path = project_root.join(CONFIG_FILE);
    if !config_path.is_file() {
        bail!("No {CONFIG_FILE} found. Run 'seoforge init' first.");
    }
    let config = SeoConfig::from_file(&config_path)?;

    let report = preflight::run_preflight(&config, &project_root);

    for recommendation in &report.recommendations {
        logger::info(recommendation);
    }
    for warning in &report.warnings {
        logger::warn(warning);
    }
    for error in &report.errors {
        logger::error(error);
    }

    if !report.success() {
        bail!(
            "Pre-flight checks failed with {} error(s)",
            report.errors.len()
        );
    }

    if report.warnings.is_empty() {
        logger::success("All pre-flight checks passed!");
    } else {
        logger::warn(&format!(
            "Pre-flight checks passed with {} warning(s)",
            report.warnings.len()
        ));
    }

    Ok(())
}
