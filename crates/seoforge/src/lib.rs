//! # Seoforge
//!
//! Route discovery and SEO asset generation for file-system-routed
//! Next.js projects:
//! - Walks `pages`/`app` trees and classifies directories into literal
//!   routes, skipping dynamic segments (`[id]`), route groups
//!   (`(marketing)`) and private folders (`_internal`)
//! - Applies include/exclude filter rules and merges configured or
//!   caller-supplied extra paths
//! - Serializes deterministic `sitemap.xml` and `robots.txt` artifacts
//! - Injects metadata exports and search-console verification into
//!   project layouts
//!
//! The pipeline stages are pure functions over their inputs; only the
//! serializers and injectors touch the file system for writing.
//!
//! ## Example
//!
//! ```no_run
//! use seoforge::config::SeoConfig;
//! use std::path::Path;
//!
//! let config = SeoConfig::from_file(Path::new(".seo-config.json"))?;
//! let report = seoforge::pipeline::run(&config, Path::new("."), None);
//! assert!(report.all_succeeded());
//! # anyhow::Ok(())
//! ```

pub mod config;
pub mod metadata;
pub mod pipeline;
pub mod preflight;
pub mod robots;
pub mod routes;
pub mod sitemap;
pub mod verification;

pub use config::{Changefreq, RobotsConfig, SeoConfig, SitemapConfig, VerificationMethod};
pub use pipeline::{ArtifactRecord, Outcome, PipelineReport};
pub use preflight::{run_preflight, PreflightReport};
pub use routes::{discover_routes, normalize_routes, resolve_route_root, ScanRules};
