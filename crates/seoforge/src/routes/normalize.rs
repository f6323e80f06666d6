//! Route normalizer: final cleanup before serialization.

use std::collections::HashSet;

/// Drops unresolvable placeholder routes (containing `[` or `:`), strips
/// a trailing `/page` segment (an empty result becomes `/`), and removes
/// duplicates keeping first-occurrence order.
///
/// Idempotent: normalizing already-normalized input returns it unchanged.
/// Does not re-insert `/`; that guarantee belongs to the classifier.
pub fn normalize_routes(routes: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();

    for route in routes {
        if route.contains('[') || route.contains(':') {
            continue;
        }

        let route = match route.strip_suffix("/page") {
            Some("") => "/".to_string(),
            Some(stripped) => stripped.to_string(),
            None => route,
        };

        if seen.insert(route.clone()) {
            normalized.push(route);
        }
    }

    normalized
}
