use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{Confirm, MultiSelect, Select, Text};
use std::path::PathBuf;

use seoforge::config::{
    Changefreq, Features, MetadataConfig, OpenGraphConfig, OutputPaths, RobotsConfig,
    SearchConsoleConfig, SeoConfig, SitemapConfig, TwitterCard, TwitterConfig,
    VerificationMethod, CONFIG_FILE,
};
use seoforge::verification::extract_verification_token;

use crate::logger;

const FEATURE_SITEMAP: &str = "Sitemap";
const FEATURE_ROBOTS: &str = "Robots.txt";
const FEATURE_META: &str = "Meta tags";

pub fn execute() -> Result<()> {
    logger::success("Seoforge init running...");

    let project_path = Text::new("Path to your Next.js project:")
        .with_default(".")
        .prompt()?;

    let site_url = Text::new("Site URL (e.g., https://example.com):")
        .with_validator(|input: &str| {
            if input.starts_with("http") {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid("Must be a valid URL".into()))
            }
        })
        .prompt()?;

    let features = MultiSelect::new(
        "Which SEO features would you like to enable?",
        vec![FEATURE_SITEMAP, FEATURE_ROBOTS, FEATURE_META],
    )
    .prompt()?;

    let search_console = prompt_search_console()?;

    logger::info(&format!("Project path: {project_path}"));
    logger::info(&format!(
        "Selected features: {}",
        if features.is_empty() {
            "none".to_string()
        } else {
            features.join(", ")
        }
    ));

    // Trailing slash so route concatenation works downstream
    let site_url = if site_url.ends_with('/') {
        site_url
    } else {
        format!("{site_url}/")
    };

    let config = build_config(&site_url, &features, search_console);

    let config_path = PathBuf::from(&project_path).join(CONFIG_FILE);
    config
        .save(&config_path)
        .context("Failed to write config file")?;
    logger::success(&format!(
        "SEO setup initialized! Config saved to {}",
        config_path.display()
    ));

    Ok(())
}

fn prompt_search_console() -> Result<SearchConsoleConfig> {
    let enabled = Confirm::new("Set up Google Search Console verification?")
        .with_default(true)
        .prompt()?;

    if !enabled {
        return Ok(SearchConsoleConfig {
            enabled: false,
            method: VerificationMethod::Meta,
            value: String::new(),
            original_input: None,
            file_name: None,
        });
    }

    let choice = Select::new(
        "Choose your verification method:",
        vec![
            "Meta tag (recommended - works with any hosting)",
            "HTML file (requires file upload access)",
        ],
    )
    .prompt()?;

    if choice.starts_with("Meta") {
        let input = Text::new("Paste your verification meta tag or just the content value:")
            .with_validator(|input: &str| {
                if input.len() > 10 {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid("Verification code seems too short".into()))
                }
            })
            .prompt()?;

        Ok(SearchConsoleConfig {
            enabled: true,
            method: VerificationMethod::Meta,
            value: extract_verification_token(&input),
            original_input: Some(input),
            file_name: None,
        })
    } else {
        let file_name = Text::new("Enter your HTML file name (e.g., google12345.html):")
            .with_validator(|input: &str| {
                if input.ends_with(".html") {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid("Filename must end with .html".into()))
                }
            })
            .prompt()?;

        Ok(SearchConsoleConfig {
            enabled: true,
            method: VerificationMethod::Html,
            value: file_name.clone(),
            original_input: Some(file_name.clone()),
            file_name: Some(file_name),
        })
    }
}

fn build_config(
    site_url: &str,
    features: &[&str],
    search_console: SearchConsoleConfig,
) -> SeoConfig {
    SeoConfig {
        site_url: site_url.to_string(),
        features: Features {
            sitemap: features.contains(&FEATURE_SITEMAP),
            robots: features.contains(&FEATURE_ROBOTS),
            meta: features.contains(&FEATURE_META),
        },
        paths: OutputPaths::default(),
        sitemap: Some(SitemapConfig {
            include: Vec::new(),
            exclude: vec!["/admin/*".to_string(), "/api/*".to_string()],
            additional_paths: Vec::new(),
            changefreq: Changefreq::Weekly,
            priority: 0.7,
        }),
        robots: Some(RobotsConfig {
            user_agent: "*".to_string(),
            disallow: vec!["/admin".to_string(), "/api".to_string()],
            allow: Vec::new(),
            crawl_delay: None,
            host: None,
        }),
        metadata: Some(MetadataConfig {
            title: Some("Your Title".to_string()),
            description: Some("Your Description".to_string()),
            keywords: vec![
                "nextjs".to_string(),
                "react".to_string(),
                "seo".to_string(),
            ],
            author: Some("Your Name".to_string()),
            open_graph: Some(OpenGraphConfig {
                title: Some("Your Title".to_string()),
                description: Some("Your Description".to_string()),
                image: Some(format!("{site_url}openGraph-image.jpg")),
                og_type: Some("website".to_string()),
            }),
            twitter: Some(TwitterConfig {
                title: Some("Your Title".to_string()),
                description: Some("Your Description".to_string()),
                image: Some(format!("{site_url}openGraph-image.jpg")),
                card: Some(TwitterCard::SummaryLargeImage),
            }),
        }),
        google_search_console: Some(search_console),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_feature_flags() {
        let gsc = SearchConsoleConfig {
            enabled: false,
            method: VerificationMethod::Meta,
            value: String::new(),
            original_input: None,
            file_name: None,
        };
        let config = build_config("https://example.com/", &[FEATURE_SITEMAP, FEATURE_META], gsc);

        assert!(config.features.sitemap);
        assert!(!config.features.robots);
        assert!(config.features.meta);
        assert_eq!(config.site_url, "https://example.com/");
        assert_eq!(
            config.sitemap.unwrap().exclude,
            vec!["/admin/*", "/api/*"]
        );
    }
}
