//! # Catalog Services
//!
//! Search, browse, and variant size-list editing.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Search Flow                                  │
//! │                                                                         │
//! │  User types "blue shirt" (every keystroke, debounced client-side)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_catalog(catalog, "blue shirt", limit)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  Query empty?                             │                         │
//! │  │  YES: caller uses browse_catalog instead  │──► whole products       │
//! │  │  NO:  rank() over the in-memory catalog   │──► (product, variant)   │
//! │  └───────────────────────────────────────────┘      pairs by score     │
//! │                                                                         │
//! │  Scanned barcodes arrive as plain query text and win via the           │
//! │  barcode-exact rule (score 100).                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SessionError;
use crate::state::CatalogState;
use stockbook_core::search::{self, SortDirection, SortKey};
use stockbook_core::types::{Product, Variant, VariantSize};
use stockbook_core::validation;

/// One size row as the frontend sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeDto {
    pub size: String,
    pub buying_price_paise: i64,
    pub selling_price_paise: i64,
    pub stock: i64,
}

impl From<&VariantSize> for SizeDto {
    fn from(s: &VariantSize) -> Self {
        SizeDto {
            size: s.size.clone(),
            buying_price_paise: s.buying_price_paise,
            selling_price_paise: s.selling_price_paise,
            stock: s.stock,
        }
    }
}

impl From<SizeDto> for VariantSize {
    fn from(dto: SizeDto) -> Self {
        VariantSize {
            size: dto.size,
            buying_price_paise: dto.buying_price_paise,
            selling_price_paise: dto.selling_price_paise,
            stock: dto.stock,
        }
    }
}

/// One ranked search result for the frontend: a single variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHitDto {
    pub product_id: String,
    pub product_name: String,
    pub variant_id: String,
    pub variant_name: String,
    pub barcode: Option<String>,
    pub sizes: Vec<SizeDto>,
    pub score: u8,
}

impl SearchHitDto {
    fn new(product: &Product, variant: &Variant, score: u8) -> Self {
        SearchHitDto {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            variant_id: variant.id.clone(),
            variant_name: variant.name.clone(),
            barcode: variant.barcode.clone(),
            sizes: variant.sizes.iter().map(SizeDto::from).collect(),
            score,
        }
    }
}

/// One product card for browse mode (empty query) - product granularity,
/// not flattened per variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCardDto {
    pub id: String,
    pub name: String,
    pub hsn: Option<String>,
    pub variant_count: usize,
    pub min_buying_price_paise: i64,
    pub total_stock: i64,
}

impl From<&Product> for ProductCardDto {
    fn from(p: &Product) -> Self {
        ProductCardDto {
            id: p.id.clone(),
            name: p.name.clone(),
            hsn: p.hsn.clone(),
            variant_count: p.variants.len(),
            min_buying_price_paise: p.min_buying_price_paise(),
            total_stock: p.total_stock(),
        }
    }
}

/// Ranks the catalog against a free-text query.
///
/// Runs on every keystroke; scores are ephemeral and never persisted.
/// Returns flattened (product, single-variant) entries ordered by
/// descending score. For an empty query the caller switches to
/// [`browse_catalog`] - the granularity split is deliberate.
///
/// ## Arguments
/// * `query` - Search term (also matches scanned barcodes)
/// * `limit` - Maximum results to return (default: 20, max: 100)
pub fn search_catalog(
    catalog: &CatalogState,
    query: &str,
    limit: Option<usize>,
) -> Result<Vec<SearchHitDto>, SessionError> {
    let query = validation::validate_search_query(query)?;
    let limit = limit.unwrap_or(20).min(100);

    debug!(query = %query, limit = %limit, "search_catalog");

    let hits = catalog.with_products(|products| {
        search::rank(products, &query)
            .into_iter()
            .take(limit)
            .map(|hit| SearchHitDto::new(hit.product, hit.variant, hit.score))
            .collect::<Vec<_>>()
    });

    info!(count = hits.len(), query = %query, "search_catalog complete");
    Ok(hits)
}

/// Sorts the catalog for browse mode (empty query): whole products under
/// the caller's chosen sort, ascending or descending.
pub fn browse_catalog(
    catalog: &CatalogState,
    key: SortKey,
    direction: SortDirection,
) -> Vec<ProductCardDto> {
    debug!(?key, ?direction, "browse_catalog");

    catalog.with_products(|products| {
        search::browse(products, key, direction)
            .into_iter()
            .map(ProductCardDto::from)
            .collect()
    })
}

/// Commits an edited size list for a variant.
///
/// Structural violations (empty size label, duplicate size names,
/// negative price or stock) fail with a ValidationError BEFORE anything
/// is touched - the external persistence of catalog records happens
/// outside this core, strictly after this validation passes.
pub fn update_variant_sizes(
    catalog: &CatalogState,
    variant_id: &str,
    sizes: Vec<SizeDto>,
) -> Result<(), SessionError> {
    debug!(variant_id = %variant_id, count = sizes.len(), "update_variant_sizes");

    let sizes: Vec<VariantSize> = sizes.into_iter().map(VariantSize::from).collect();
    validation::validate_sizes(&sizes)?;

    if !catalog.replace_sizes(variant_id, sizes) {
        return Err(SessionError::not_found("Variant", variant_id));
    }

    info!(variant_id = %variant_id, "variant sizes updated");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Utc;

    fn test_catalog() -> CatalogState {
        let catalog = CatalogState::new();
        catalog.load(vec![
            Product {
                id: "p1".to_string(),
                name: "Shirt".to_string(),
                hsn: Some("6105".to_string()),
                is_active: true,
                variants: vec![Variant {
                    id: "v1".to_string(),
                    name: "Blue XL".to_string(),
                    barcode: None,
                    sizes: vec![VariantSize {
                        size: "XL".to_string(),
                        buying_price_paise: 30_000,
                        selling_price_paise: 45_000,
                        stock: 12,
                    }],
                }],
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            Product {
                id: "p2".to_string(),
                name: "Kurta".to_string(),
                hsn: None,
                is_active: true,
                variants: vec![Variant {
                    id: "v2".to_string(),
                    name: "Plain".to_string(),
                    barcode: Some("8901234567890".to_string()),
                    sizes: vec![VariantSize {
                        size: "M".to_string(),
                        buying_price_paise: 20_000,
                        selling_price_paise: 35_000,
                        stock: 4,
                    }],
                }],
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        ]);
        catalog
    }

    #[test]
    fn test_search_returns_ranked_dtos() {
        let catalog = test_catalog();
        let hits = search_catalog(&catalog, "blue shirt", None).unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].variant_id, "v1");
        assert_eq!(hits[0].score, 70);
        assert_eq!(hits[0].sizes.len(), 1);
    }

    #[test]
    fn test_search_barcode_beats_names() {
        let catalog = test_catalog();
        let hits = search_catalog(&catalog, "8901234567890", None).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].variant_id, "v2");
        assert_eq!(hits[0].score, 100);
    }

    #[test]
    fn test_search_rejects_overlong_query() {
        let catalog = test_catalog();
        let err = search_catalog(&catalog, &"q".repeat(200), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_search_respects_limit() {
        let catalog = test_catalog();
        let hits = search_catalog(&catalog, "a", Some(1)).unwrap();
        assert!(hits.len() <= 1);
    }

    #[test]
    fn test_browse_returns_product_cards() {
        let catalog = test_catalog();
        let cards = browse_catalog(&catalog, SortKey::Price, SortDirection::Ascending);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "p2"); // min buying ₹200 < ₹300
        assert_eq!(cards[0].min_buying_price_paise, 20_000);
        assert_eq!(cards[1].total_stock, 12);
    }

    #[test]
    fn test_update_variant_sizes_rejects_duplicates_before_touching_state() {
        let catalog = test_catalog();
        let err = update_variant_sizes(
            &catalog,
            "v1",
            vec![
                SizeDto {
                    size: "xl".to_string(),
                    buying_price_paise: 1,
                    selling_price_paise: 2,
                    stock: 0,
                },
                SizeDto {
                    size: " XL ".to_string(),
                    buying_price_paise: 1,
                    selling_price_paise: 2,
                    stock: 0,
                },
            ],
        )
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        // Catalog unchanged
        assert_eq!(catalog.find_size("v1", "XL").unwrap().stock, 12);
    }

    #[test]
    fn test_update_variant_sizes_commits_clean_list() {
        let catalog = test_catalog();
        update_variant_sizes(
            &catalog,
            "v1",
            vec![SizeDto {
                size: "L".to_string(),
                buying_price_paise: 28_000,
                selling_price_paise: 40_000,
                stock: 6,
            }],
        )
        .unwrap();

        assert!(catalog.find_size("v1", "XL").is_none());
        assert_eq!(catalog.find_size("v1", "L").unwrap().stock, 6);
    }

    #[test]
    fn test_update_variant_sizes_unknown_variant() {
        let catalog = test_catalog();
        let err = update_variant_sizes(&catalog, "missing", vec![]).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
