use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Config file name, relative to the project root
pub const CONFIG_FILE: &str = ".seo-config.json";

/// Resolved SEO configuration (.seo-config.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoConfig {
    /// Site URL, e.g. "https://example.com/". Stripped of its trailing
    /// slash before being concatenated with routes.
    pub site_url: String,
    pub features: Features,
    pub paths: OutputPaths,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<SitemapConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<RobotsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_search_console: Option<SearchConsoleConfig>,
}

impl SeoConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Write configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Site URL without its trailing slash
    pub fn base_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}

/// Per-feature enable flags
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Features {
    pub sitemap: bool,
    pub robots: bool,
    pub meta: bool,
}

/// Output paths, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputPaths {
    pub sitemap: String,
    pub robots: String,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            sitemap: "./public/sitemap.xml".to_string(),
            robots: "./public/robots.txt".to_string(),
        }
    }
}

/// Sitemap sub-configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapConfig {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub additional_paths: Vec<String>,
    #[serde(default)]
    pub changefreq: Changefreq,
    #[serde(default = "default_priority")]
    pub priority: f64,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            additional_paths: Vec::new(),
            changefreq: Changefreq::default(),
            priority: default_priority(),
        }
    }
}

fn default_priority() -> f64 {
    0.7
}

/// Sitemap change-frequency hint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Changefreq {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl Changefreq {
    pub fn as_str(self) -> &'static str {
        match self {
            Changefreq::Always => "always",
            Changefreq::Hourly => "hourly",
            Changefreq::Daily => "daily",
            Changefreq::Weekly => "weekly",
            Changefreq::Monthly => "monthly",
            Changefreq::Yearly => "yearly",
            Changefreq::Never => "never",
        }
    }
}

impl fmt::Display for Changefreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crawler-policy sub-configuration (robots.txt)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_disallow")]
    pub disallow: Vec<String>,
    #[serde(default = "default_allow")]
    pub allow: Vec<String>,
    #[serde(default)]
    pub crawl_delay: Option<u32>,
    #[serde(default)]
    pub host: Option<String>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            disallow: default_disallow(),
            allow: default_allow(),
            crawl_delay: None,
            host: None,
        }
    }
}

fn default_user_agent() -> String {
    "*".to_string()
}

fn default_disallow() -> Vec<String> {
    vec!["/admin".to_string(), "/api".to_string()]
}

fn default_allow() -> Vec<String> {
    vec!["/".to_string()]
}

/// Site metadata used for layout injection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraphConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "type")]
    pub og_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub card: Option<TwitterCard>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    Summary,
    #[default]
    SummaryLargeImage,
}

/// Google Search Console verification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConsoleConfig {
    pub enabled: bool,
    pub method: VerificationMethod,
    /// Bare verification token (extracted from whatever the user pasted)
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMethod {
    Meta,
    Html,
}

impl VerificationMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            VerificationMethod::Meta => "meta",
            VerificationMethod::Html => "html",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let json = r#"{
            "siteUrl": "https://example.com/",
            "features": { "sitemap": true, "robots": true, "meta": false },
            "paths": { "sitemap": "./public/sitemap.xml", "robots": "./public/robots.txt" }
        }"#;

        let config: SeoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.site_url, "https://example.com/");
        assert_eq!(config.base_url(), "https://example.com");
        assert!(config.features.sitemap);
        assert!(!config.features.meta);
        assert!(config.sitemap.is_none());
        assert!(config.robots.is_none());
    }

    #[test]
    fn test_sitemap_defaults() {
        let sitemap: SitemapConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(sitemap.changefreq, Changefreq::Weekly);
        assert_eq!(sitemap.priority, 0.7);
        assert!(sitemap.include.is_empty());
        assert!(sitemap.additional_paths.is_empty());
    }

    #[test]
    fn test_robots_defaults() {
        let robots = RobotsConfig::default();
        assert_eq!(robots.user_agent, "*");
        assert_eq!(robots.disallow, vec!["/admin", "/api"]);
        assert_eq!(robots.allow, vec!["/"]);
        assert!(robots.crawl_delay.is_none());
        assert!(robots.host.is_none());
    }

    #[test]
    fn test_robots_explicit_empty_allow_is_kept() {
        let robots: RobotsConfig =
            serde_json::from_str(r#"{ "allow": [], "userAgent": "Bot" }"#).unwrap();
        assert_eq!(robots.user_agent, "Bot");
        assert!(robots.allow.is_empty());
        // Missing keys still fall back
        assert_eq!(robots.disallow, vec!["/admin", "/api"]);
    }

    #[test]
    fn test_changefreq_serde_round_trip() {
        let changefreq: Changefreq = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(changefreq, Changefreq::Monthly);
        assert_eq!(changefreq.to_string(), "monthly");
        assert_eq!(serde_json::to_string(&changefreq).unwrap(), "\"monthly\"");
    }

    #[test]
    fn test_search_console_camel_case_keys() {
        let gsc: SearchConsoleConfig = serde_json::from_str(
            r#"{ "enabled": true, "method": "html", "value": "abc123", "fileName": "google123.html" }"#,
        )
        .unwrap();
        assert!(gsc.enabled);
        assert_eq!(gsc.method, VerificationMethod::Html);
        assert_eq!(gsc.file_name.as_deref(), Some("google123.html"));
    }
}
