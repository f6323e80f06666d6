//! Pre-flight checks: is the project in a state where generation can run?
//!
//! Nothing here is fatal by itself; the caller decides whether errors
//! block generation.

use serde_json::Value;
use std::fs;
use std::path::Path;
use url::Url;

use crate::config::SeoConfig;

/// Probe file used for the write-permission check
const PROBE_FILE: &str = ".seoforge-test";

#[derive(Debug, Default)]
pub struct PreflightReport {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub recommendations: Vec<String>,
}

impl PreflightReport {
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Runs every check and collects the outcome. Never fails itself.
pub fn run_preflight(config: &SeoConfig, project_root: &Path) -> PreflightReport {
    let mut report = PreflightReport::default();

    check_project_structure(project_root, &mut report);
    check_config(config, &mut report);
    check_file_permissions(config, project_root, &mut report);
    check_next_version(project_root, &mut report);

    report
}

fn check_project_structure(project_root: &Path, report: &mut PreflightReport) {
    let has_package_json = project_root.join("package.json").is_file();
    let has_next_config = ["next.config.js", "next.config.ts", "next.config.mjs"]
        .iter()
        .any(|name| project_root.join(name).is_file());
    let has_app_dir = project_root.join("app").is_dir();
    let has_pages_dir = project_root.join("pages").is_dir();

    if !has_package_json {
        report
            .errors
            .push("No package.json found. Are you in a Node.js project?".to_string());
    }

    if !has_next_config && !has_app_dir && !has_pages_dir {
        report.warnings.push(
            "No Next.js indicators found. This might not be a Next.js project.".to_string(),
        );
    }

    if has_app_dir {
        report
            .recommendations
            .push("App Router detected - using modern Next.js 13+ features".to_string());
    } else if has_pages_dir {
        report
            .recommendations
            .push("Pages Router detected - using traditional Next.js structure".to_string());
    }
}

fn check_config(config: &SeoConfig, report: &mut PreflightReport) {
    if Url::parse(&config.site_url).is_err() {
        report
            .errors
            .push(format!("Invalid site URL: {}", config.site_url));
    }

    if let Some(meta) = &config.metadata {
        if meta.title.as_deref() == Some("Your Title") {
            report.warnings.push(
                "Using default placeholder title. Consider customizing your metadata.".to_string(),
            );
        }
        if meta.description.as_deref() == Some("Your Description") {
            report.warnings.push(
                "Using default placeholder description. Consider customizing your metadata."
                    .to_string(),
            );
        }
    }

    if let Some(gsc) = &config.google_search_console {
        if gsc.enabled && gsc.value.is_empty() {
            report.errors.push(
                "Search console verification enabled but no verification value provided"
                    .to_string(),
            );
        }
    }
}

fn check_file_permissions(config: &SeoConfig, project_root: &Path, report: &mut PreflightReport) {
    let sitemap_path = project_root.join(&config.paths.sitemap);
    let Some(output_dir) = sitemap_path.parent() else {
        return;
    };

    if !output_dir.exists() {
        match fs::create_dir_all(output_dir) {
            Ok(()) => report
                .recommendations
                .push(format!("Created {} directory", output_dir.display())),
            Err(_) => {
                report.errors.push(format!(
                    "Cannot write to {}. Check permissions.",
                    output_dir.display()
                ));
                return;
            }
        }
    }

    let probe = output_dir.join(PROBE_FILE);
    let writable = fs::write(&probe, "test").is_ok();
    let _ = fs::remove_file(&probe);

    if !writable {
        report.errors.push(format!(
            "Cannot write to {}. Check permissions.",
            output_dir.display()
        ));
    }
}

fn check_next_version(project_root: &Path, report: &mut PreflightReport) {
    let package_json = project_root.join("package.json");
    let parsed: Option<Value> = fs::read_to_string(&package_json)
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok());

    let Some(parsed) = parsed else {
        report
            .warnings
            .push("Could not read package.json to check Next.js version".to_string());
        return;
    };

    let next_version = ["dependencies", "devDependencies"]
        .iter()
        .find_map(|section| parsed.get(section)?.get("next")?.as_str());

    if let Some(version) = next_version {
        report
            .recommendations
            .push(format!("Next.js version detected: {version}"));

        if ["^13.", "^14.", "^15."].iter().any(|v| version.contains(v)) {
            report
                .recommendations
                .push("App Router metadata API supported".to_string());
        }
    }
}
