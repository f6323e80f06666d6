//! Search-console ownership verification artifacts.
//!
//! Two methods: a `verification` entry spliced into the App Router
//! metadata export, or a standalone HTML token file under `public/`.

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::config::{SeoConfig, VerificationMethod};
use crate::metadata::find_app_layout;

/// Entry point for the verification feature. Returns a detail string for
/// the artifact record. No-op when the feature is disabled.
pub fn generate_verification(config: &SeoConfig, project_root: &Path) -> Result<String> {
    let Some(gsc) = config.google_search_console.as_ref().filter(|gsc| gsc.enabled) else {
        return Ok("Verification disabled".to_string());
    };

    match gsc.method {
        VerificationMethod::Meta => inject_meta_verification(project_root, &gsc.value),
        VerificationMethod::Html => {
            let file_name = gsc
                .file_name
                .as_deref()
                .context("HTML verification requires a file name")?;
            create_html_verification_file(project_root, &gsc.value, file_name)
        }
    }
}

/// Adds `verification: { google: '<token>' }` to the layout's metadata
/// export. Skipped when a verification entry already exists.
fn inject_meta_verification(project_root: &Path, token: &str) -> Result<String> {
    let layout_path = find_app_layout(project_root)
        .context("No app layout found. Run metadata generation first")?;

    let content = fs::read_to_string(&layout_path)
        .with_context(|| format!("Failed to read {}", layout_path.display()))?;

    if content.contains("google-site-verification") || content.contains("verification:") {
        return Ok("Verification already present - skipped".to_string());
    }

    let metadata_export = Regex::new(r"(?ms)(export const metadata[^=]*=\s*\{)(.*?)(\}\s*;?\s*$)")
        .context("Invalid metadata export pattern")?;

    if !metadata_export.is_match(&content) {
        bail!(
            "Could not find metadata object in {}",
            layout_path.display()
        );
    }

    let verification = format!("\n  verification: {{\n    google: '{token}',\n  }},");
    let updated = metadata_export.replace(&content, |caps: &regex::Captures<'_>| {
        format!("{}{}{}\n{}", &caps[1], &caps[2], verification, &caps[3])
    });

    fs::write(&layout_path, updated.as_ref())
        .with_context(|| format!("Failed to write {}", layout_path.display()))?;
    Ok(format!("Verification added to {}", layout_path.display()))
}

/// Writes `public/<file_name>` containing the bare token line. Skipped
/// when the file already exists.
fn create_html_verification_file(
    project_root: &Path,
    token: &str,
    file_name: &str,
) -> Result<String> {
    let public_dir = project_root.join("public");
    fs::create_dir_all(&public_dir)
        .with_context(|| format!("Failed to create {}", public_dir.display()))?;

    let file_path = public_dir.join(file_name);
    if file_path.exists() {
        return Ok(format!("{file_name} already exists - skipped"));
    }

    fs::write(&file_path, format!("google-site-verification: {token}"))
        .with_context(|| format!("Failed to write {}", file_path.display()))?;
    Ok(format!("Created public/{file_name}"))
}

/// Accepts a full `<meta ...>` tag, a `content="..."` fragment, or a bare
/// token, and returns the bare token.
pub fn extract_verification_token(input: &str) -> String {
    if let Ok(content_attr) = Regex::new(r#"content="([^"]+)""#) {
        if let Some(caps) = content_attr.captures(input) {
            return caps[1].to_string();
        }
    }

    if let Ok(loose_attr) = Regex::new(r#"content="?([^"\s]+)"?"#) {
        if let Some(caps) = loose_attr.captures(input) {
            return caps[1].to_string();
        }
    }

    input.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Features, OutputPaths, SearchConsoleConfig};
    use tempfile::TempDir;

    fn config(method: VerificationMethod, file_name: Option<&str>) -> SeoConfig {
        SeoConfig {
            site_url: "https://example.com/".to_string(),
            features: Features::default(),
            paths: OutputPaths::default(),
            sitemap: None,
            robots: None,
            metadata: None,
            google_search_console: Some(SearchConsoleConfig {
                enabled: true,
                method,
                value: "tok123".to_string(),
                original_input: None,
                file_name: file_name.map(String::from),
            }),
        }
    }

    #[test]
    fn test_html_file_created_once() {
        let dir = TempDir::new().unwrap();
        let config = config(VerificationMethod::Html, Some("google123.html"));

        let detail = generate_verification(&config, dir.path()).unwrap();
        assert_eq!(detail, "Created public/google123.html");

        let content = fs::read_to_string(dir.path().join("public/google123.html")).unwrap();
        assert_eq!(content, "google-site-verification: tok123");

        let detail = generate_verification(&config, dir.path()).unwrap();
        assert!(detail.contains("already exists"));
    }

    #[test]
    fn test_meta_injection_into_metadata_export() {
        let dir = TempDir::new().unwrap();
        let app_dir = dir.path().join("app");
        fs::create_dir_all(&app_dir).unwrap();
        fs::write(
            app_dir.join("layout.tsx"),
            "export const metadata = {\n  title: 'Example',\n}\n",
        )
        .unwrap();

        let config = config(VerificationMethod::Meta, None);
        let detail = generate_verification(&config, dir.path()).unwrap();
        assert!(detail.starts_with("Verification added"));

        let content = fs::read_to_string(app_dir.join("layout.tsx")).unwrap();
        assert!(content.contains("verification: {"));
        assert!(content.contains("google: 'tok123'"));
        assert!(content.contains("title: 'Example'"));
    }

    #[test]
    fn test_meta_injection_skips_existing_verification() {
        let dir = TempDir::new().unwrap();
        let app_dir = dir.path().join("app");
        fs::create_dir_all(&app_dir).unwrap();
        let original = "export const metadata = {\n  verification: { google: 'old' },\n}\n";
        fs::write(app_dir.join("layout.tsx"), original).unwrap();

        let config = config(VerificationMethod::Meta, None);
        let detail = generate_verification(&config, dir.path()).unwrap();
        assert!(detail.contains("skipped"));
        assert_eq!(
            fs::read_to_string(app_dir.join("layout.tsx")).unwrap(),
            original
        );
    }

    #[test]
    fn test_meta_injection_without_layout_fails() {
        let dir = TempDir::new().unwrap();
        let config = config(VerificationMethod::Meta, None);
        assert!(generate_verification(&config, dir.path()).is_err());
    }

    #[test]
    fn test_extract_token_variants() {
        assert_eq!(
            extract_verification_token(
                r#"<meta name="google-site-verification" content="ABC123" />"#
            ),
            "ABC123"
        );
        assert_eq!(extract_verification_token(r#"content="ABC123""#), "ABC123");
        assert_eq!(extract_verification_token("  ABC123  "), "ABC123");
    }
}
