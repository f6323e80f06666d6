//! Pipeline orchestrator: runs each enabled generator and collects one
//! record per attempted artifact.
//!
//! A failing artifact never aborts its siblings; the caller inspects the
//! report to decide whether the run as a whole succeeded.

use anyhow::Result;
use std::path::Path;

use crate::config::SeoConfig;
use crate::routes::{self, ScanRules};
use crate::{metadata, robots, sitemap, verification};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

/// One attempted artifact, recorded exactly once per run
#[derive(Debug, Clone)]
pub struct ArtifactRecord {
    pub name: &'static str,
    pub outcome: Outcome,
    pub detail: String,
}

#[derive(Debug, Default)]
pub struct PipelineReport {
    pub records: Vec<ArtifactRecord>,
    pub warnings: Vec<String>,
}

impl PipelineReport {
    pub fn success_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == Outcome::Success)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == Outcome::Error)
            .count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.error_count() == 0
    }

    fn record(&mut self, name: &'static str, result: Result<String>) {
        let record = match result {
            Ok(detail) => ArtifactRecord {
                name,
                outcome: Outcome::Success,
                detail,
            },
            Err(err) => ArtifactRecord {
                name,
                outcome: Outcome::Error,
                detail: format!("{err:#}"),
            },
        };
        self.records.push(record);
    }
}

/// Optional caller-supplied source of extra literal routes (for routes
/// only the application knows about, e.g. CMS-backed pages). Failure is
/// non-fatal: the pipeline proceeds with whatever was collected so far.
pub type ExtraPathSource<'a> = &'a dyn Fn() -> Result<Vec<String>>;

/// Runs every enabled generator against the project root
pub fn run(
    config: &SeoConfig,
    project_root: &Path,
    extra_paths: Option<ExtraPathSource<'_>>,
) -> PipelineReport {
    let mut report = PipelineReport::default();

    if config.features.sitemap {
        let result = generate_sitemap(config, project_root, extra_paths, &mut report.warnings);
        report.record("Sitemap", result);
    }

    if config.features.robots {
        report.record("Robots.txt", generate_robots(config, project_root));
    }

    if config.features.meta {
        report.record(
            "Metadata",
            metadata::generate_metadata(config, project_root),
        );
    }

    if config
        .google_search_console
        .as_ref()
        .is_some_and(|gsc| gsc.enabled)
    {
        report.record(
            "Search Console",
            verification::generate_verification(config, project_root),
        );
    }

    report
}

/// classifier -> filter -> normalizer -> serializer
fn generate_sitemap(
    config: &SeoConfig,
    project_root: &Path,
    extra_paths: Option<ExtraPathSource<'_>>,
    warnings: &mut Vec<String>,
) -> Result<String> {
    let sitemap_config = config.sitemap.clone().unwrap_or_default();

    let raw_routes = match routes::resolve_route_root(project_root) {
        Some(route_root) => routes::discover_routes(&route_root, &ScanRules::default())?,
        None => {
            warnings.push(
                "No pages/, src/pages/, app/ or src/app/ directory found, falling back to default routes"
                    .to_string(),
            );
            vec!["/".to_string()]
        }
    };

    let include = routes::compile_rules(&sitemap_config.include)?;
    let exclude = routes::compile_rules(&sitemap_config.exclude)?;
    let mut merged = routes::apply_filters(raw_routes, &include, &exclude);

    merged.extend(sitemap_config.additional_paths.iter().cloned());

    if let Some(source) = extra_paths {
        match source() {
            Ok(extra) => merged.extend(extra),
            Err(err) => warnings.push(format!("Additional path source failed: {err:#}")),
        }
    }

    let final_routes = routes::normalize_routes(merged);
    let document = sitemap::render_sitemap(
        &final_routes,
        &config.site_url,
        sitemap_config.changefreq,
        sitemap_config.priority,
    );

    sitemap::write_sitemap(&project_root.join(&config.paths.sitemap), &document)?;
    Ok(format!(
        "{} ({} routes)",
        config.paths.sitemap,
        final_routes.len()
    ))
}

fn generate_robots(config: &SeoConfig, project_root: &Path) -> Result<String> {
    let robots_config = config.robots.clone().unwrap_or_default();
    let content = robots::render_robots(&config.site_url, &robots_config);
    robots::write_robots(&project_root.join(&config.paths.robots), &content)?;
    Ok(config.paths.robots.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Features, OutputPaths, SitemapConfig};
    use anyhow::anyhow;
    use std::fs;
    use tempfile::TempDir;

    fn config() -> SeoConfig {
        SeoConfig {
            site_url: "https://example.com/".to_string(),
            features: Features {
                sitemap: true,
                robots: true,
                meta: false,
            },
            paths: OutputPaths {
                sitemap: "public/sitemap.xml".to_string(),
                robots: "public/robots.txt".to_string(),
            },
            sitemap: None,
            robots: None,
            metadata: None,
            google_search_console: None,
        }
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_full_run_writes_both_artifacts() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("app/page.tsx"));
        touch(&dir.path().join("app/about/page.tsx"));

        let report = run(&config(), dir.path(), None);
        assert!(report.all_succeeded());
        assert_eq!(report.records.len(), 2);
        assert!(report.warnings.is_empty());

        let sitemap = fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://example.com/about</loc>"));

        let robots = fs::read_to_string(dir.path().join("public/robots.txt")).unwrap();
        assert!(robots.ends_with("Sitemap: https://example.com/sitemap.xml\n"));
    }

    #[test]
    fn test_missing_route_root_falls_back_with_warning() {
        let dir = TempDir::new().unwrap();

        let report = run(&config(), dir.path(), None);
        assert!(report.all_succeeded());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("falling back"));

        let sitemap = fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://example.com/</loc>"));
    }

    #[test]
    fn test_artifact_failure_does_not_abort_siblings() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("pages/index.tsx"));
        // A plain file where the sitemap wants a directory
        fs::write(dir.path().join("blocked"), "").unwrap();

        let mut config = config();
        config.paths.sitemap = "blocked/sitemap.xml".to_string();

        let report = run(&config, dir.path(), None);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.success_count(), 1);

        let sitemap_record = report.records.iter().find(|r| r.name == "Sitemap").unwrap();
        assert_eq!(sitemap_record.outcome, Outcome::Error);
        assert!(dir.path().join("public/robots.txt").exists());
    }

    #[test]
    fn test_extra_path_source_failure_is_non_fatal() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("pages/index.tsx"));

        let mut config = config();
        config.sitemap = Some(SitemapConfig {
            additional_paths: vec!["/from-config".to_string()],
            ..Default::default()
        });

        let failing: &dyn Fn() -> Result<Vec<String>> = &|| Err(anyhow!("backend down"));
        let report = run(&config, dir.path(), Some(failing));

        assert!(report.all_succeeded());
        assert!(report.warnings.iter().any(|w| w.contains("backend down")));

        let sitemap = fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://example.com/</loc>"));
        assert!(sitemap.contains("<loc>https://example.com/from-config</loc>"));
    }

    #[test]
    fn test_extra_path_source_merged() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("pages/index.tsx"));

        let supplier: &dyn Fn() -> Result<Vec<String>> =
            &|| Ok(vec!["/cms/article-1".to_string()]);
        let report = run(&config(), dir.path(), Some(supplier));

        assert!(report.all_succeeded());
        let sitemap = fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://example.com/cms/article-1</loc>"));
    }

    #[test]
    fn test_disabled_features_produce_no_records() {
        let dir = TempDir::new().unwrap();
        let mut config = config();
        config.features.sitemap = false;
        config.features.robots = false;

        let report = run(&config, dir.path(), None);
        assert!(report.records.is_empty());
    }
}
