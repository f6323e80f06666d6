use anyhow::{bail, Context, Result};
use inquire::Confirm;
use std::env;

use seoforge::config::{SeoConfig, CONFIG_FILE};
use seoforge::{pipeline, preflight};

use crate::logger;

pub fn execute(force: bool) -> Result<()> {
    let project_root = env::current_dir().context("Failed to determine working directory")?;

    logger::step(1, 4, "Reading configuration...");
    let config_path = project_root.join(CONFIG_FILE);
    if !config_path.is_file() {
        bail!("No {CONFIG_FILE} found. Run 'seoforge init' first.");
    }
    let config = SeoConfig::from_file(&config_path)?;

    logger::step(2, 4, "Running pre-flight checks...");
    let checks = preflight::run_preflight(&config, &project_root);
    for warning in &checks.warnings {
        logger::warn(warning);
    }
    for recommendation in &checks.recommendations {
        logger::info(recommendation);
    }
    if !checks.success() {
        for error in &checks.errors {
            logger::error(error);
        }
        if !force {
            bail!("Pre-flight checks failed. Use --force to override.");
        }
        logger::warn("Continuing despite pre-flight errors (--force)");
    }

    logger::step(3, 4, "Planning generation...");
    show_plan(&config);

    if !force {
        let proceed = Confirm::new("Continue with generation?")
            .with_default(true)
            .prompt()?;
        if !proceed {
            logger::info("Generation cancelled by user");
            return Ok(());
        }
    }

    logger::step(4, 4, "Generating SEO assets...");
    let report = pipeline::run(&config, &project_root, None);
    for warning in &report.warnings {
        logger::warn(warning);
    }

    if report.all_succeeded() {
        logger::complete(&format!(
            "Successfully generated {} SEO feature(s)!",
            report.success_count()
        ));
    } else {
        logger::warn(&format!(
            "Generated {} features with {} errors",
            report.success_count(),
            report.error_count()
        ));
    }

    logger::summary("Generation Results:", &report.records);

    if report.success_count() > 0 {
        show_next_steps(&config);
    }

    if !report.all_succeeded() {
        bail!("{} artifact(s) failed to generate", report.error_count());
    }

    Ok(())
}

fn show_plan(config: &SeoConfig) {
    logger::info("Generation Plan:");

    if config.features.sitemap {
        logger::feature("Sitemap Generation", true);
        println!("      Output: {}", config.paths.sitemap);
        let changefreq = config
            .sitemap
            .as_ref()
            .map(|s| s.changefreq)
            .unwrap_or_default();
        println!("      Changefreq: {changefreq}");
    }

    if config.features.robots {
        logger::feature("Robots.txt Generation", true);
        println!("      Output: {}", config.paths.robots);
    }

    if config.features.meta {
        logger::feature("Metadata Injection", true);
        println!("      Target: App/Pages Router layouts");
    }

    if let Some(gsc) = config.google_search_console.as_ref().filter(|g| g.enabled) {
        logger::feature("Search Console Verification", true);
        println!("      Method: {} tag", gsc.method.as_str());
    }

    println!();
}

fn show_next_steps(config: &SeoConfig) {
    logger::info("Next Steps:");
    println!("   1. Review the generated files");
    println!("   2. Deploy your site");

    if config
        .google_search_console
        .as_ref()
        .is_some_and(|g| g.enabled)
    {
        println!("   3. Complete verification in Google Search Console");
    }

    if config.features.sitemap {
        println!(
            "   4. Submit your sitemap: {}/sitemap.xml",
            config.base_url()
        );
    }

    println!();
}
