//! # cater-core
//!
//! Catalog and quoting logic for the catering backend.
//!
//! This crate provides:
//! - `Catalog` with `Category`, `Item` and `Pack` (immutable after load)
//! - `PriceTier` and exact-quantity tier resolution
//! - `calculate_quote` turning a `QuoteRequest` into a `QuoteResult`
//! - `Terms` for the ordering policies
//! - `Price`, fixed-precision money
//! - `CatalogError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use cater_core::{calculate_quote, Catalog, Price, QuoteRequest};
//!
//! let catalog = Catalog::embedded().unwrap();
//!
//! let request = QuoteRequest::new()
//!     .with_item("mini-cheese-bacon-burger", 25)
//!     .with_pack("pv-1", 2);
//!
//! let quote = calculate_quote(&catalog, &request);
//! assert_eq!(quote.total, Price::from_soles(739));
//! ```

pub mod catalog;
pub mod error;
pub mod price;
pub mod quote;
pub mod terms;
pub mod tier;

// Re-exports for convenience
pub use catalog::{
    Catalog, CatalogListing, Category, Item, Pack, EMBEDDED_CATALOG, PACK_TYPE_SALADO,
    PACK_TYPE_VARIADO,
};
pub use error::{CatalogError, CatalogResult};
pub use price::Price;
pub use quote::{
    calculate_quote, QuoteItemRequest, QuoteLine, QuotePackRequest, QuoteRequest, QuoteResult,
};
pub use terms::{Contact, Terms};
pub use tier::{resolve_tier, PriceTier};
