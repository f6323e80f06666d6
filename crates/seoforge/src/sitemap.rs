//! Sitemap serializer: normalized routes -> sitemap.xml.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::Changefreq;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Renders the sitemap document for the given routes, in input order.
///
/// The root route `/` always gets priority `1.0`; every other route gets
/// the configured default. Output is deterministic for identical input.
pub fn render_sitemap(
    routes: &[String],
    site_url: &str,
    changefreq: Changefreq,
    priority: f64,
) -> String {
    let base = site_url.trim_end_matches('/');

    let entries = routes
        .iter()
        .map(|route| {
            let route_priority = if route == "/" {
                "1.0".to_string()
            } else {
                priority.to_string()
            };
            format!(
                "  <url>\n    <loc>{base}{route}</loc>\n    <changefreq>{changefreq}</changefreq>\n    <priority>{route_priority}</priority>\n  </url>"
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"{SITEMAP_NAMESPACE}\">\n{entries}\n</urlset>"
    )
}

/// Writes a fully rendered document, creating parent directories as
/// needed. Overwrite semantics: the previous file is replaced whole.
pub fn write_sitemap(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, document)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))
}
