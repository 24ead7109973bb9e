//! # Search Ranking
//!
//! Scores and ranks product variants against a free-text query, and sorts
//! whole products in browse mode.
//!
//! ## Two Modes, Deliberately Asymmetric
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Search vs Browse                                     │
//! │                                                                         │
//! │  Query non-empty: SEARCH MODE                                           │
//! │  ─────────────────────────────                                          │
//! │  rank() flattens the catalog to (product, single-variant) pairs,       │
//! │  scores each pair in [0, 100], drops score-0 pairs, sorts by score     │
//! │  descending (stable - ties keep catalog order).                        │
//! │                                                                         │
//! │  Query empty: BROWSE MODE                                               │
//! │  ────────────────────────                                               │
//! │  browse() keeps PRODUCT granularity (no flattening) and applies the    │
//! │  caller's chosen sort: name / min buying price / total stock,          │
//! │  ascending or descending, stable.                                      │
//! │                                                                         │
//! │  The granularity split is intentional and covered by tests.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Scoring Ladder (first match wins)
//! ```text
//! barcode == query                      → 100
//! barcode non-empty, contains query     →  90
//! ── gate: EVERY query word must be a substring of combined name,
//!          otherwise score 0 and the pair is excluded ──
//! combined name == query                → 100
//! variant name == query                 →  90
//! product name == query                 →  85
//! combined name starts with query       →  80
//! variant name starts with query        →  75
//! product name starts with query        →  70
//! otherwise                             →  50 + min(words × 10, 40)
//! ```
//! A scanned barcode therefore always beats any name-based match, even
//! when the names have nothing to do with the query.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Product, Variant};

// =============================================================================
// Search Mode
// =============================================================================

/// One ranked search result: a single variant of a product.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub product: &'a Product,
    pub variant: &'a Variant,
    /// Match score in [0, 100]; recomputed per keystroke, never persisted.
    pub score: u8,
}

/// Ranks all variants of the catalog against a free-text query.
///
/// Inactive products are skipped. The result is flattened to one entry per
/// matching variant, ordered by descending score; ties keep the original
/// product/variant order (stable sort).
///
/// An empty (or whitespace) query returns no hits - callers switch to
/// [`browse`] instead, at product granularity.
pub fn rank<'a>(products: &'a [Product], query: &str) -> Vec<SearchHit<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let words: Vec<&str> = query.split_whitespace().collect();

    let mut hits: Vec<SearchHit<'a>> = Vec::new();
    for product in products.iter().filter(|p| p.is_active) {
        for variant in &product.variants {
            let score = score_pair(product, variant, &query, &words);
            if score > 0 {
                hits.push(SearchHit {
                    product,
                    variant,
                    score,
                });
            }
        }
    }

    // Vec::sort_by is stable: equal scores keep catalog order
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}

/// Scores one (product, variant) pair. `query` is already lowercased and
/// trimmed; `words` is its whitespace split.
fn score_pair(product: &Product, variant: &Variant, query: &str, words: &[&str]) -> u8 {
    let barcode = variant
        .barcode
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_lowercase();

    if !barcode.is_empty() {
        if barcode == query {
            return 100;
        }
        if barcode.contains(query) {
            return 90;
        }
    }

    let product_name = product.name.trim().to_lowercase();
    let variant_name = variant.name.trim().to_lowercase();
    let combined_name = format!("{} {}", product_name, variant_name);

    // Gate: every query word must appear somewhere in the combined name
    if !words.iter().all(|w| combined_name.contains(w)) {
        return 0;
    }

    if combined_name == query {
        return 100;
    }
    if variant_name == query {
        return 90;
    }
    if product_name == query {
        return 85;
    }
    if combined_name.starts_with(query) {
        return 80;
    }
    if variant_name.starts_with(query) {
        return 75;
    }
    if product_name.starts_with(query) {
        return 70;
    }

    // Multi-word partial match: more words matched, higher confidence
    50 + (words.len() as u8 * 10).min(40)
}

// =============================================================================
// Browse Mode
// =============================================================================

/// Browse-mode sort key. Price and stock keys aggregate over the whole
/// product (minimum buying price / summed stock across all sizes of all
/// variants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Price,
    Stock,
}

/// Browse-mode sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sorts the catalog for browse mode (empty query): whole products, not
/// flattened variants. Inactive products are skipped. Stable: equal keys
/// keep catalog order in both directions.
pub fn browse<'a>(products: &'a [Product], key: SortKey, direction: SortDirection) -> Vec<&'a Product> {
    let mut visible: Vec<&'a Product> = products.iter().filter(|p| p.is_active).collect();

    visible.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Price => a.min_buying_price_paise().cmp(&b.min_buying_price_paise()),
            SortKey::Stock => a.total_stock().cmp(&b.total_stock()),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    visible
}

// =============================================================================
// Unit Tests
// =============================================================================
