//! Crawler policy serializer: RobotsConfig -> robots.txt.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::RobotsConfig;

/// Renders robots.txt: user-agent, allow lines, disallow lines, optional
/// crawl-delay and host, then a blank line and the sitemap reference.
pub fn render_robots(site_url: &str, robots: &RobotsConfig) -> String {
    let mut content = format!("User-agent: {}\n", robots.user_agent);

    for allow in &robots.allow {
        content.push_str(&format!("Allow: {allow}\n"));
    }

    for disallow in &robots.disallow {
        content.push_str(&format!("Disallow: {disallow}\n"));
    }

    if let Some(delay) = robots.crawl_delay {
        content.push_str(&format!("Crawl-Delay: {delay}\n"));
    }

    if let Some(host) = &robots.host {
        content.push_str(&format!("Host: {host}\n"));
    }

    content.push('\n');
    content.push_str(&format!(
        "Sitemap: {}/sitemap.xml\n",
        site_url.trim_end_matches('/')
    ));

    content
}

/// Writes the rendered policy, creating parent directories as needed
pub fn write_robots(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write robots.txt to {}", path.display()))
}
