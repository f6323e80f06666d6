//! Metadata injection into Next.js layout files.
//!
//! App Router projects get a `metadata` export spliced into `layout.tsx`
//! (or a fresh layout when none exists) plus title-only layouts for each
//! static subdirectory. Pages Router injection is not implemented yet.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::{MetadataConfig, SeoConfig};

/// Entry point for the metadata feature. Returns a human-readable detail
/// string for the artifact record.
pub fn generate_metadata(config: &SeoConfig, project_root: &Path) -> Result<String> {
    let meta = config.metadata.clone().unwrap_or_default();

    if let Some(layout_path) = find_app_layout(project_root) {
        let app_dir = layout_path.parent().map(Path::to_path_buf).ok_or_else(|| {
            anyhow!("Layout file {} has no parent directory", layout_path.display())
        })?;
        let injected = inject_app_layout(&layout_path, config, &meta)?;
        let created = generate_directory_layouts(&app_dir)?;
        let detail = if injected {
            format!("Updated {} ({} directory layouts)", layout_path.display(), created)
        } else {
            format!("Metadata already present in {}", layout_path.display())
        };
        return Ok(detail);
    }

    if find_pages_app(project_root).is_some() {
        // TODO: splice a <Head> block into pages/_app once the Pages
        // Router template settles
        return Ok("Pages Router metadata injection not yet implemented".to_string());
    }

    // No layout anywhere: create a fresh App Router layout
    let target_dir = if project_root.join("src").is_dir() {
        project_root.join("src/app")
    } else {
        project_root.join("app")
    };
    let layout_path = create_app_layout(&target_dir, config, &meta)?;
    let created = generate_directory_layouts(&target_dir)?;
    Ok(format!(
        "Created {} ({} directory layouts)",
        layout_path.display(),
        created
    ))
}

/// First existing App Router layout under src/app or app
pub fn find_app_layout(project_root: &Path) -> Option<PathBuf> {
    for dir in ["src/app", "app"] {
        for file in ["layout.tsx", "layout.js"] {
            let candidate = project_root.join(dir).join(file);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// First existing Pages Router app wrapper under src/pages or pages
pub fn find_pages_app(project_root: &Path) -> Option<PathBuf> {
    for dir in ["src/pages", "pages"] {
        for file in ["_app.tsx", "_app.js"] {
            let candidate = project_root.join(dir).join(file);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// Splices a metadata export into an existing layout, after the last
/// import (or `'use client'`) line. Skipped when one is already present.
/// Returns whether anything was written.
fn inject_app_layout(layout_path: &Path, config: &SeoConfig, meta: &MetadataConfig) -> Result<bool> {
    let content = fs::read_to_string(layout_path)
        .with_context(|| format!("Failed to read {}", layout_path.display()))?;

    if content.contains("export const metadata") {
        return Ok(false);
    }

    let block = render_metadata_export(config, meta);

    let mut lines: Vec<String> = content.lines().map(String::from).collect();
    let mut insert_index = 0;
    for (i, line) in lines.iter().enumerate() {
        if line.starts_with("import ")
            || line.starts_with("'use client'")
            || line.starts_with("\"use client\"")
        {
            insert_index = i + 1;
        }
    }
    lines.splice(insert_index..insert_index, [String::new(), block, String::new()]);

    fs::write(layout_path, lines.join("\n"))
        .with_context(|| format!("Failed to write {}", layout_path.display()))?;
    Ok(true)
}

/// The `export const metadata = { ... }` block built from configuration
fn render_metadata_export(config: &SeoConfig, meta: &MetadataConfig) -> String {
    let title = text(&meta.title);
    let description = text(&meta.description);
    let author = text(&meta.author);
    let keywords = meta
        .keywords
        .iter()
        .map(|k| format!("\"{k}\""))
        .collect::<Vec<_>>()
        .join(", ");

    let og = meta.open_graph.clone().unwrap_or_default();
    let twitter = meta.twitter.clone().unwrap_or_default();
    let twitter_card = twitter.card.map(twitter_card_value).unwrap_or("");

    format!(
        r#"export const metadata = {{
  title: {{
    template: '%s | {title}',
    default: '{title}',
  }},
  description: "{description}",
  keywords: [{keywords}],
  authors: [{{ name: "{author}" }}],
  openGraph: {{
    title: "{og_title}",
    description: "{og_description}",
    url: "{site_url}",
    siteName: "{title}",
    images: [{{
      url: "{og_image}",
    }}],
    type: "{og_type}",
  }},
  twitter: {{
    card: "{twitter_card}",
    title: "{twitter_title}",
    description: "{twitter_description}",
    images: ["{twitter_image}"],
  }},
}}"#,
        og_title = text(&og.title),
        og_description = text(&og.description),
        og_image = text(&og.image),
        og_type = text(&og.og_type),
        site_url = config.site_url,
        twitter_title = text(&twitter.title),
        twitter_description = text(&twitter.description),
        twitter_image = text(&twitter.image),
    )
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn twitter_card_value(card: crate::config::TwitterCard) -> &'static str {
    match card {
        crate::config::TwitterCard::Summary => "summary",
        crate::config::TwitterCard::SummaryLargeImage => "summary_large_image",
    }
}

/// Creates a fresh App Router root layout carrying the metadata export
fn create_app_layout(app_dir: &Path, config: &SeoConfig, meta: &MetadataConfig) -> Result<PathBuf> {
    fs::create_dir_all(app_dir)
        .with_context(|| format!("Failed to create {}", app_dir.display()))?;

    let layout_path = app_dir.join("layout.tsx");
    let metadata_export = render_metadata_export(config, meta);

    let content = format!(
        r#"import type {{ Metadata }} from 'next'
import {{ Inter }} from 'next/font/google'
import './globals.css'

const inter = Inter({{ subsets: ['latin'] }})

{metadata_export}

export default function RootLayout({{
  children,
}}: {{
  children: React.ReactNode
}}) {{
  return (
    <html lang="en">
      <body className={{inter.className}}>{{children}}</body>
    </html>
  )
}}"#
    );

    fs::write(&layout_path, content)
        .with_context(|| format!("Failed to write {}", layout_path.display()))?;
    Ok(layout_path)
}

/// Creates a title-only `layout.tsx` in each static subdirectory of the
/// app dir that has none. Dynamic segments and route groups are skipped.
/// Returns the number of layouts created.
fn generate_directory_layouts(app_dir: &Path) -> Result<usize> {
    if !app_dir.is_dir() {
        return Ok(0);
    }

    let mut created = 0;
    let walker = WalkDir::new(app_dir).min_depth(1).into_iter().filter_entry(|entry| {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| !name.starts_with('[') && !name.starts_with('('))
    });

    for entry in walker {
        let entry = entry.context("Failed to walk app directory")?;
        let layout_path = entry.path().join("layout.tsx");
        if layout_path.exists() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        fs::write(&layout_path, render_directory_layout(name))
            .with_context(|| format!("Failed to write {}", layout_path.display()))?;
        created += 1;
    }

    Ok(created)
}

fn render_directory_layout(dir_name: &str) -> String {
    let mut chars = dir_name.chars();
    let title = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };

    format!(
        r#"import type {{ Metadata }} from 'next'

export const metadata: Metadata = {{
  title: '{title}',
}}

export default function {title}Layout({{
  children,
}}: {{
  children: React.ReactNode
}}) {{
  return <>{{children}}</>
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Features, OutputPaths};
    use tempfile::TempDir;

    fn config_with_metadata() -> SeoConfig {
        SeoConfig {
            site_url: "https://example.com/".to_string(),
            features: Features {
                sitemap: false,
                robots: false,
                meta: true,
            },
            paths: OutputPaths::default(),
            sitemap: None,
            robots: None,
            metadata: Some(MetadataConfig {
                title: Some("Example".to_string()),
                description: Some("An example site".to_string()),
                keywords: vec!["rust".to_string(), "seo".to_string()],
                author: Some("Jane".to_string()),
                open_graph: None,
                twitter: None,
            }),
            google_search_console: None,
        }
    }

    #[test]
    fn test_inject_into_existing_layout() {
        let dir = TempDir::new().unwrap();
        let app_dir = dir.path().join("app");
        fs::create_dir_all(&app_dir).unwrap();
        fs::write(
            app_dir.join("layout.tsx"),
            "import React from 'react'\n\nexport default function RootLayout() {}\n",
        )
        .unwrap();

        let config = config_with_metadata();
        let detail = generate_metadata(&config, dir.path()).unwrap();
        assert!(detail.starts_with("Updated"));

        let content = fs::read_to_string(app_dir.join("layout.tsx")).unwrap();
        assert!(content.contains("export const metadata"));
        assert!(content.contains("template: '%s | Example'"));
        assert!(content.contains("keywords: [\"rust\", \"seo\"]"));
        // Metadata lands after the import line
        assert!(content.find("import React").unwrap() < content.find("export const metadata").unwrap());
    }

    #[test]
    fn test_injection_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let app_dir = dir.path().join("app");
        fs::create_dir_all(&app_dir).unwrap();
        fs::write(app_dir.join("layout.tsx"), "export const metadata = {}\n").unwrap();

        let config = config_with_metadata();
        let detail = generate_metadata(&config, dir.path()).unwrap();
        assert!(detail.contains("already present"));

        let content = fs::read_to_string(app_dir.join("layout.tsx")).unwrap();
        assert_eq!(content.matches("export const metadata").count(), 1);
    }

    #[test]
    fn test_creates_layout_when_none_exists() {
        let dir = TempDir::new().unwrap();
        let config = config_with_metadata();

        let detail = generate_metadata(&config, dir.path()).unwrap();
        assert!(detail.starts_with("Created"));

        let content = fs::read_to_string(dir.path().join("app/layout.tsx")).unwrap();
        assert!(content.contains("export const metadata"));
        assert!(content.contains("RootLayout"));
    }

    #[test]
    fn test_directory_layouts_skip_dynamic_segments() {
        let dir = TempDir::new().unwrap();
        let app_dir = dir.path().join("app");
        fs::create_dir_all(app_dir.join("blog")).unwrap();
        fs::create_dir_all(app_dir.join("[id]")).unwrap();
        fs::create_dir_all(app_dir.join("(group)")).unwrap();

        let created = generate_directory_layouts(&app_dir).unwrap();
        assert_eq!(created, 1);
        assert!(app_dir.join("blog/layout.tsx").exists());
        assert!(!app_dir.join("[id]/layout.tsx").exists());
        assert!(!app_dir.join("(group)/layout.tsx").exists());

        let content = fs::read_to_string(app_dir.join("blog/layout.tsx")).unwrap();
        assert!(content.contains("title: 'Blog'"));
        assert!(content.contains("BlogLayout"));
    }

    #[test]
    fn test_pages_router_not_implemented_detail() {
        let dir = TempDir::new().unwrap();
        let pages_dir = dir.path().join("pages");
        fs::create_dir_all(&pages_dir).unwrap();
        fs::write(pages_dir.join("_app.tsx"), "export default function App() {}\n").unwrap();

        let config = config_with_metadata();
        let detail = generate_metadata(&config, dir.path()).unwrap();
        assert!(detail.contains("not yet implemented"));
    }
}
