//! # Validation Module
//!
//! Business rule validation for Stockbook.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                 │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session service (Rust)                                        │
//! │  ├── Numeric coercion (input module - clamps, never rejects)           │
//! │  └── THIS MODULE: Structural rule validation - blocks the commit       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: External persistence collaborator                             │
//! │  └── Its own constraints (outside this workspace)                      │
//! │                                                                         │
//! │  Defense in depth: a structural violation must fail HERE, before       │
//! │  any persistence call is made.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockbook_core::validation::{validate_product_name, validate_sizes};
//! use stockbook_core::types::VariantSize;
//!
//! validate_product_name("Check Shirt").unwrap();
//!
//! let sizes = vec![VariantSize {
//!     size: "XL".to_string(),
//!     buying_price_paise: 30_000,
//!     selling_price_paise: 45_000,
//!     stock: 10,
//! }];
//! validate_sizes(&sizes).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::VariantSize;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_name("name", name, 200)
}

/// Validates a variant name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 100 characters
pub fn validate_variant_name(name: &str) -> ValidationResult<()> {
    validate_name("variant name", name, 100)
}

fn validate_name(field: &str, name: &str, max: usize) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a barcode.
///
/// ## Rules
/// - May be empty (not every variant is barcoded)
/// - Maximum 50 characters
/// - Digits only (EAN/UPC family)
pub fn validate_barcode(barcode: &str) -> ValidationResult<()> {
    let barcode = barcode.trim();

    if barcode.is_empty() {
        return Ok(());
    }

    if barcode.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "barcode".to_string(),
            max: 50,
        });
    }

    if !barcode.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "barcode".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (browse mode applies instead of ranking)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a GST rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
/// - Real slabs are 0-2800 (0% to 28%), but the cap is structural only
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

// =============================================================================
// Size List Validators
// =============================================================================

/// Validates a variant's size list before an edit commit.
///
/// ## Rules
/// - Every size label non-empty, at most 50 characters
/// - Prices and stock non-negative
/// - No two entries with the same size label (case-insensitive, trimmed)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Variant Edit: Sizes                                                    │
/// │                                                                         │
/// │  ┌──────┬─────────┬─────────┬───────┐                                  │
/// │  │ Size │ Buying  │ Selling │ Stock │                                  │
/// │  ├──────┼─────────┼─────────┼───────┤                                  │
/// │  │  M   │  300.00 │  450.00 │   12  │                                  │
/// │  │  xl  │  320.00 │  480.00 │    7  │                                  │
/// │  │  XL  │  320.00 │  480.00 │    7  │ ◄── Duplicate of "xl"!          │
/// │  └──────┴─────────┴─────────┴───────┘                                  │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_sizes(...) ← THIS FUNCTION                                   │
/// │       │                                                                 │
/// │       └── Err(Duplicate { field: "size", value: "XL" })                │
/// │           Commit blocked BEFORE any persistence call.                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_sizes(sizes: &[VariantSize]) -> ValidationResult<()> {
    let mut seen: Vec<String> = Vec::with_capacity(sizes.len());

    for entry in sizes {
        let label = entry.size.trim();

        if label.is_empty() {
            return Err(ValidationError::Required {
                field: "size".to_string(),
            });
        }

        if label.len() > 50 {
            return Err(ValidationError::TooLong {
                field: "size".to_string(),
                max: 50,
            });
        }

        if entry.buying_price_paise < 0 {
            return Err(ValidationError::OutOfRange {
                field: "buying_price".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }

        if entry.selling_price_paise < 0 {
            return Err(ValidationError::OutOfRange {
                field: "selling_price".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }

        if entry.stock < 0 {
            return Err(ValidationError::OutOfRange {
                field: "stock".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }

        let key = label.to_lowercase();
        if seen.contains(&key) {
            return Err(ValidationError::Duplicate {
                field: "size".to_string(),
                value: entry.size.trim().to_string(),
            });
        }
        seen.push(key);
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ## Rules
/// - Must be a valid UUID format
/// - 36 characters with hyphens: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn size(label: &str, stock: i64) -> VariantSize {
        VariantSize {
            size: label.to_string(),
            buying_price_paise: 30_000,
            selling_price_paise: 45_000,
            stock,
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Check Shirt").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_barcode() {
        assert!(validate_barcode("").is_ok());
        assert!(validate_barcode("8901234567890").is_ok());
        assert!(validate_barcode("12-34").is_err());
        assert!(validate_barcode(&"9".repeat(60)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  blue shirt ").unwrap(), "blue shirt");
        assert!(validate_search_query(&"q".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1800).is_ok());
        assert!(validate_tax_rate_bps(10_000).is_ok());
        assert!(validate_tax_rate_bps(10_001).is_err());
    }

    #[test]
    fn test_validate_sizes_duplicate_is_case_insensitive() {
        let sizes = vec![size("M", 2), size("xl", 1), size(" XL ", 1)];
        let err = validate_sizes(&sizes).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Duplicate { ref field, ref value }
                if field == "size" && value == "XL"
        ));
    }

    #[test]
    fn test_validate_sizes_rejects_structural_violations() {
        assert!(validate_sizes(&[size("", 1)]).is_err());
        assert!(validate_sizes(&[size("M", -1)]).is_err());

        let mut bad_price = size("M", 1);
        bad_price.buying_price_paise = -100;
        assert!(validate_sizes(&[bad_price]).is_err());
    }

    #[test]
    fn test_validate_sizes_accepts_clean_list() {
        assert!(validate_sizes(&[size("S", 0), size("M", 5), size("L", 9)]).is_ok());
        assert!(validate_sizes(&[]).is_ok());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
    }
}
