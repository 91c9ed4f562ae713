//! Component catalog — the table of importable diagram components, keyed by
//! dotted category path (e.g. `"cloud.compute.Server"` → `["Server", "EC2"]`).
//!
//! The catalog is an explicitly constructed, immutable value supplied by the
//! embedding application. Lookup is pure: no hidden process-wide state.

use indexmap::IndexMap;
use tracing::debug;

/// Ordered mapping from dotted category path to component names.
/// Iteration order is insertion order, and it is load-bearing: relevant
/// imports and the formatted import lines follow it.
pub type ComponentCatalog = IndexMap<String, Vec<String>>;

/// The subset of the catalog whose components were mentioned in a prompt.
/// Category order follows the catalog; component order follows each
/// category's list, filtered by match.
pub type RelevantImports = IndexMap<String, Vec<String>>;

/// Scans the prompt for every component name in the catalog.
///
/// Matching is case-insensitive substring — not word-boundary — so a short
/// component name embedded inside a longer prompt word still matches.
/// Catalog lists are assumed to hold no case-insensitive duplicates within
/// a category, so no deduplication happens here. No match yields an empty
/// mapping; there is no failure mode.
pub fn find_relevant_components(catalog: &ComponentCatalog, prompt: &str) -> RelevantImports {
    let prompt_lower = prompt.to_lowercase();
    let mut relevant = RelevantImports::new();

    for (category, components) in catalog {
        for component in components {
            if prompt_lower.contains(&component.to_lowercase()) {
                relevant
                    .entry(category.clone())
                    .or_insert_with(Vec::new)
                    .push(component.clone());
            }
        }
    }

    debug!(matched_categories = relevant.len(), "Catalog lookup complete");

    relevant
}

/// Returns the full catalog unfiltered. Convenience passthrough for callers
/// that want every component regardless of the prompt.
pub fn all_components(catalog: &ComponentCatalog) -> &ComponentCatalog {
    catalog
}
