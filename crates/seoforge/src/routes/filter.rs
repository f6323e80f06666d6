//! Route filter: include/exclude pattern rules.

use anyhow::{Context, Result};
use regex::Regex;

/// A single include/exclude pattern, compiled once.
///
/// Patterns without `*` match by route-prefix comparison; patterns with
/// `*` are compiled to a regex where each `*` matches any substring and
/// the rest is taken literally.
#[derive(Debug, Clone)]
pub enum FilterRule {
    Prefix(String),
    Wildcard(Regex),
}

impl FilterRule {
    pub fn parse(pattern: &str) -> Result<Self> {
        if pattern.contains('*') {
            let source = pattern
                .split('*')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(".*");
            let matcher = Regex::new(&source)
                .with_context(|| format!("Invalid filter pattern: {pattern}"))?;
            Ok(FilterRule::Wildcard(matcher))
        } else {
            Ok(FilterRule::Prefix(pattern.to_string()))
        }
    }

    pub fn matches(&self, route: &str) -> bool {
        match self {
            FilterRule::Prefix(prefix) => route.starts_with(prefix.as_str()),
            FilterRule::Wildcard(matcher) => matcher.is_match(route),
        }
    }
}

/// Compiles a pattern list into filter rules
pub fn compile_rules(patterns: &[String]) -> Result<Vec<FilterRule>> {
    patterns.iter().map(|p| FilterRule::parse(p)).collect()
}

/// Applies include rules (OR, only when any exist), then exclude rules
/// (OR, subtractive). Returns a new list in input order.
pub fn apply_filters(
    routes: Vec<String>,
    include: &[FilterRule],
    exclude: &[FilterRule],
) -> Vec<String> {
    let mut filtered = routes;

    if !include.is_empty() {
        filtered.retain(|route| include.iter().any(|rule| rule.matches(route)));
    }

    if !exclude.is_empty() {
        filtered.retain(|route| !exclude.iter().any(|rule| rule.matches(route)));
    }

    filtered
}
