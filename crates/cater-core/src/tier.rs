//! # Price Tiers
//!
//! Items are sold only in fixed batch sizes (25/50/100, 24/48/96, ...).
//! A quantity either matches a tier exactly or cannot be quoted; there is no
//! rounding to the nearest batch and no per-unit interpolation.

use crate::price::Price;
use serde::{Deserialize, Serialize};

/// One purchasable batch: buying `quantity` units costs `price`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTier {
    /// Units in the batch (always > 0 in a loaded catalog)
    pub quantity: u32,

    /// Price for the whole batch
    pub price: Price,

    /// Optional unit description appended to quote labels (e.g. "cake (21×11×7 cm)")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_label: Option<String>,
}

impl PriceTier {
    pub fn new(quantity: u32, price: Price) -> Self {
        Self {
            quantity,
            price,
            unit_label: None,
        }
    }

    /// Builder: set unit label
    pub fn with_unit_label(mut self, label: impl Into<String>) -> Self {
        self.unit_label = Some(label.into());
        self
    }
}

/// Find the tier whose quantity equals `quantity` exactly.
///
/// An empty tier list ("price on request") never resolves.
pub fn resolve_tier(tiers: &[PriceTier], quantity: u32) -> Option<&PriceTier> {
    tiers.iter().find(|tier| tier.quantity == quantity)
}
