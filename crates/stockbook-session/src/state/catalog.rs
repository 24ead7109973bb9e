//! # Catalog State
//!
//! Holds the product list fetched by the external data collaborator.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog State Lifecycle                              │
//! │                                                                         │
//! │  External fetch collaborator ──► load(products)                         │
//! │                                                                         │
//! │  Every search keystroke ───────► with_products(|p| rank(p, query))     │
//! │                                                                         │
//! │  Successful stock commit ──────► set_stock(variant, size, new)         │
//! │  Successful size-list edit ────► replace_sizes(variant, sizes)         │
//! │                                                                         │
//! │  The in-memory copy is kept consistent with what was last confirmed    │
//! │  persisted; it is never mutated on a failed commit.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use stockbook_core::types::{Product, Variant, VariantSize};

/// Session-held product catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    products: Arc<Mutex<Vec<Product>>>,
}

impl CatalogState {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        CatalogState {
            products: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replaces the catalog with a freshly fetched product list.
    pub fn load(&self, products: Vec<Product>) {
        let mut guard = self.products.lock().expect("Catalog mutex poisoned");
        *guard = products;
    }

    /// Executes a function with read access to the product list.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let hits = catalog.with_products(|p| rank(p, "blue shirt").len());
    /// ```
    pub fn with_products<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Product]) -> R,
    {
        let guard = self.products.lock().expect("Catalog mutex poisoned");
        f(&guard)
    }

    /// Clones a variant by id, with its owning product's name.
    pub fn find_variant(&self, variant_id: &str) -> Option<(String, Variant)> {
        self.with_products(|products| {
            products.iter().find_map(|p| {
                p.variant(variant_id)
                    .map(|v| (p.name.clone(), v.clone()))
            })
        })
    }

    /// Clones one size row of a variant.
    pub fn find_size(&self, variant_id: &str, size: &str) -> Option<VariantSize> {
        self.find_variant(variant_id)
            .and_then(|(_, v)| v.size(size).cloned())
    }

    /// Updates the stock of one size row after a confirmed persistence.
    /// Returns false if the variant or size is no longer in the catalog.
    pub fn set_stock(&self, variant_id: &str, size: &str, new_stock: i64) -> bool {
        let mut guard = self.products.lock().expect("Catalog mutex poisoned");
        let wanted = size.trim().to_lowercase();

        for product in guard.iter_mut() {
            if let Some(variant) = product.variants.iter_mut().find(|v| v.id == variant_id) {
                if let Some(row) = variant
                    .sizes
                    .iter_mut()
                    .find(|s| s.size.trim().to_lowercase() == wanted)
                {
                    row.stock = new_stock;
                    return true;
                }
                return false;
            }
        }
        false
    }

    /// Replaces a variant's size list after a validated edit commit.
    /// Returns false if the variant is no longer in the catalog.
    pub fn replace_sizes(&self, variant_id: &str, sizes: Vec<VariantSize>) -> bool {
        let mut guard = self.products.lock().expect("Catalog mutex poisoned");

        for product in guard.iter_mut() {
            if let Some(variant) = product.variants.iter_mut().find(|v| v.id == variant_id) {
                variant.sizes = sizes;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn catalog_with_one_product() -> CatalogState {
        let catalog = CatalogState::new();
        catalog.load(vec![Product {
            id: "p1".to_string(),
            name: "Shirt".to_string(),
            hsn: None,
            is_active: true,
            variants: vec![Variant {
                id: "v1".to_string(),
                name: "Blue".to_string(),
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
        }]);
        catalog
    }

    #[test]
    fn test_find_variant_and_size() {
        let catalog = catalog_with_one_product();

        let (product_name, variant) = catalog.find_variant("v1").unwrap();
        assert_eq!(product_name, "Shirt");
        assert_eq!(variant.name, "Blue");

        let size = catalog.find_size("v1", " xl ").unwrap();
        assert_eq!(size.stock, 12);

        assert!(catalog.find_variant("missing").is_none());
        assert!(catalog.find_size("v1", "S").is_none());
    }

    #[test]
    fn test_set_stock_updates_the_row() {
        let catalog = catalog_with_one_product();
        assert!(catalog.set_stock("v1", "XL", 40));
        assert_eq!(catalog.find_size("v1", "XL").unwrap().stock, 40);

        assert!(!catalog.set_stock("v1", "S", 40));
        assert!(!catalog.set_stock("missing", "XL", 40));
    }

    #[test]
    fn test_replace_sizes() {
        let catalog = catalog_with_one_product();
        let replaced = catalog.replace_sizes(
            "v1",
            vec![VariantSize {
                size: "L".to_string(),
                buying_price_paise: 28_000,
                selling_price_paise: 42_000,
                stock: 3,
            }],
        );
        assert!(replaced);
        assert!(catalog.find_size("v1", "XL").is_none());
        assert_eq!(catalog.find_size("v1", "L").unwrap().stock, 3);
    }
}
