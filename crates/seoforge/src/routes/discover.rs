//! Route classifier: walks a `pages`/`app` directory tree and emits the
//! literal routes implied by its structure.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Route-root candidates relative to the project root, in priority order
pub const ROUTE_ROOT_CANDIDATES: [&str; 4] = ["src/pages", "pages", "src/app", "app"];

/// Skip policy and page-file conventions for the directory walk.
///
/// Held as explicit data so the policy is testable on its own instead of
/// being scattered through the recursion.
#[derive(Debug, Clone)]
pub struct ScanRules {
    /// File names that mark a directory as a routable page (App Router)
    pub page_files: Vec<String>,
    /// Extensions recognized for flat file-based routes (Pages Router)
    pub route_extensions: Vec<String>,
    /// Leading characters that mark a directory as dynamic (`[`), a route
    /// group (`(`) or private (`_`)
    pub skip_prefixes: Vec<char>,
    /// Directory names excluded from routing entirely
    pub ignored_dirs: Vec<String>,
}

impl Default for ScanRules {
    fn default() -> Self {
        Self {
            page_files: vec!["page.tsx", "page.ts", "page.jsx", "page.js"]
                .into_iter()
                .map(String::from)
                .collect(),
            route_extensions: vec!["tsx", "ts", "jsx", "js"]
                .into_iter()
                .map(String::from)
                .collect(),
            skip_prefixes: vec!['[', '(', '_'],
            ignored_dirs: vec!["components".to_string()],
        }
    }
}

impl ScanRules {
    /// Whether a directory contributes no routes and is not recursed into
    pub fn is_skipped_dir(&self, name: &str) -> bool {
        name.chars()
            .next()
            .is_some_and(|c| self.skip_prefixes.contains(&c))
            || self.ignored_dirs.iter().any(|d| d == name)
    }

    /// Whether a file name marks its directory as a routable page
    pub fn is_page_file(&self, name: &str) -> bool {
        self.page_files.iter().any(|p| p == name)
    }

    /// For flat file-based routes: returns the route stem of a file name,
    /// or `None` if the file does not register a route.
    pub fn route_stem<'a>(&self, name: &'a str) -> Option<&'a str> {
        if name.starts_with('_') || name.contains('[') || name.starts_with("page.") {
            return None;
        }
        self.route_extensions
            .iter()
            .find_map(|ext| name.strip_suffix(&format!(".{ext}")))
    }
}

/// Finds the first existing route root under the project root.
///
/// Pages Router conventions win over App Router conventions.
pub fn resolve_route_root(project_root: &Path) -> Option<PathBuf> {
    ROUTE_ROOT_CANDIDATES
        .iter()
        .map(|candidate| project_root.join(candidate))
        .find(|path| path.is_dir())
}

/// Walks the route tree and returns raw routes in traversal order.
///
/// Depth-first; entries within a directory are visited in lexicographic
/// file-name order so output is stable across filesystems. A directory
/// containing a page file emits its accumulated prefix before its
/// children are visited. Does not guarantee a `/` entry; see
/// [`discover_routes`] for that.
pub fn walk_routes(root: &Path, rules: &ScanRules) -> Result<Vec<String>> {
    let mut routes = Vec::new();
    scan_directory(root, "", rules, &mut routes)?;
    Ok(routes)
}

/// [`walk_routes`] plus the root guarantee: if no route equals `/`, it is
/// inserted at the front.
pub fn discover_routes(root: &Path, rules: &ScanRules) -> Result<Vec<String>> {
    let mut routes = walk_routes(root, rules)?;
    if !routes.iter().any(|r| r == "/") {
        routes.insert(0, "/".to_string());
    }
    Ok(routes)
}

fn scan_directory(
    dir: &Path,
    route_path: &str,
    rules: &ScanRules,
    routes: &mut Vec<String>,
) -> Result<()> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to list directory {}", dir.display()))?;
    entries.sort_by_key(|entry| entry.file_name());

    // App Router: a page file makes this directory a route
    let has_page_file = entries.iter().any(|entry| {
        entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| rules.is_page_file(name))
    });

    if has_page_file {
        routes.push(route_for_prefix(route_path));
    }

    for entry in entries {
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };

        if file_type.is_dir() {
            if rules.is_skipped_dir(name) {
                continue;
            }
            let child_route = format!("{route_path}/{name}");
            scan_directory(&entry.path(), &child_route, rules, routes)?;
        } else if file_type.is_file() {
            // Pages Router: each eligible file is a route of its own
            if let Some(stem) = rules.route_stem(name) {
                let route = if stem == "index" {
                    route_path.to_string()
                } else {
                    format!("{route_path}/{stem}")
                };
                routes.push(route_for_prefix(&route));
            }
        }
    }

    Ok(())
}

fn route_for_prefix(prefix: &str) -> String {
    if prefix.is_empty() {
        "/".to_string()
    } else {
        prefix.to_string()
    }
}
