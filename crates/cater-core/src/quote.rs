//! # Quotes
//!
//! Turns a customer's selection of items and packs into an itemized quote.
//!
//! Entries that cannot be priced (unknown id, or a quantity that is not one
//! of the item's batch sizes) are left out of the result instead of failing
//! the request. The total only covers the lines that made it in.

use crate::catalog::{Catalog, Item, Pack};
use crate::price::Price;
use crate::tier::PriceTier;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Requested item batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteItemRequest {
    /// Item ID
    pub id: String,
    /// Units; must equal one of the item's tier quantities
    pub qty: u32,
}

/// Requested pack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotePackRequest {
    /// Pack ID
    pub id: String,
    /// Number of packs
    pub count: u32,
}

/// Quote request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub items: Vec<QuoteItemRequest>,
    #[serde(default)]
    pub packs: Vec<QuotePackRequest>,
}

impl QuoteRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: request `qty` units of an item
    pub fn with_item(mut self, id: impl Into<String>, qty: u32) -> Self {
        self.items.push(QuoteItemRequest { id: id.into(), qty });
        self
    }

    /// Builder: request `count` packs
    pub fn with_pack(mut self, id: impl Into<String>, count: u32) -> Self {
        self.packs.push(QuotePackRequest {
            id: id.into(),
            count,
        });
        self
    }

    /// Number of entries across items and packs
    pub fn entry_count(&self) -> usize {
        self.items.len() + self.packs.len()
    }
}

/// A priced line of the quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub label: String,
    pub subtotal: Price,
}

impl QuoteLine {
    /// Line for one item batch: "<name> × <qty>" plus the tier's unit label
    pub fn for_item(item: &Item, tier: &PriceTier) -> Self {
        let label = match &tier.unit_label {
            Some(unit) => format!("{} × {} {}", item.name, tier.quantity, unit),
            None => format!("{} × {}", item.name, tier.quantity),
        };
        Self {
            label,
            subtotal: tier.price,
        }
    }

    /// Line for `count` copies of a pack
    pub fn for_pack(pack: &Pack, count: u32) -> Self {
        Self {
            label: format!("{} × {}", pack.name, count),
            subtotal: pack.price * count,
        }
    }
}

/// Itemized quote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub lines: Vec<QuoteLine>,
    pub total: Price,
}

impl QuoteResult {
    /// Append a line and add its subtotal to the total
    pub fn push(&mut self, line: QuoteLine) {
        self.total += line.subtotal;
        self.lines.push(line);
    }

    /// Check if no entry could be priced
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Price a request against the catalog.
///
/// Item lines come first, then pack lines, each in request order.
pub fn calculate_quote(catalog: &Catalog, request: &QuoteRequest) -> QuoteResult {
    let mut result = QuoteResult::default();

    for entry in &request.items {
        let Some(item) = catalog.item(&entry.id) else {
            debug!(item_id = %entry.id, "Skipping unknown item");
            continue;
        };
        let Some(tier) = item.tier_for(entry.qty) else {
            debug!(item_id = %entry.id, qty = entry.qty, "Skipping item: no tier for quantity");
            continue;
        };
        result.push(QuoteLine::for_item(item, tier));
    }

    for entry in &request.packs {
        let Some(pack) = catalog.pack(&entry.id) else {
            debug!(pack_id = %entry.id, "Skipping unknown pack");
            continue;
        };
        result.push(QuoteLine::for_pack(pack, entry.count));
    }

    result
}
