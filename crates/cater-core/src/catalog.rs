//! # Catalog
//!
//! Categories, items and packs for the catering menu.
//! The catalog is parsed once from TOML (normally the copy compiled into the
//! binary, see [`EMBEDDED_CATALOG`]), validated, and never mutated afterwards.

use crate::error::{CatalogError, CatalogResult};
use crate::price::Price;
use crate::terms::Terms;
use crate::tier::{resolve_tier, PriceTier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Catalog data shipped with the service
pub const EMBEDDED_CATALOG: &str = include_str!("../../../config/catalog.toml");

/// Pack type listed first when packs are not filtered
pub const PACK_TYPE_VARIADO: &str = "variado";

/// Pack type listed second when packs are not filtered
pub const PACK_TYPE_SALADO: &str = "salado";

/// A menu category (e.g. "salados", "dulces")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable slug
    pub id: String,

    /// Display name
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A catalog item sold in fixed batch sizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique item identifier (e.g., "mini-cheese-bacon-burger")
    pub id: String,

    /// Display name
    pub name: String,

    /// Owning category slug
    pub category_id: String,

    /// Free-form tags ("burger", "incluye cucharita", ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Purchasable batches; empty means "price on request"
    #[serde(default)]
    pub price_tiers: Vec<PriceTier>,

    /// Optional notes (sizes, servings)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Optional image path for the front-end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl Item {
    /// Create an item with no tiers
    pub fn new(id: impl Into<String>, name: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: category_id.into(),
            tags: Vec::new(),
            price_tiers: Vec::new(),
            notes: None,
            image_ref: None,
        }
    }

    /// Builder: append a price tier
    pub fn with_tier(mut self, tier: PriceTier) -> Self {
        self.price_tiers.push(tier);
        self
    }

    /// Builder: add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Builder: set notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builder: set image path
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// Tier for exactly `quantity` units, if the item is sold in that batch
    pub fn tier_for(&self, quantity: u32) -> Option<&PriceTier> {
        resolve_tier(&self.price_tiers, quantity)
    }

    /// True when the item has no tiers and must be priced on request
    pub fn is_price_on_request(&self) -> bool {
        self.price_tiers.is_empty()
    }
}

/// A pre-bundled, flat-priced pack for a given headcount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    /// Unique pack identifier (e.g., "pv-1")
    pub id: String,

    /// Display name
    pub name: String,

    /// Open tag, "variado" or "salado" in the shipped catalog
    #[serde(rename = "type")]
    pub pack_type: String,

    /// Number of pieces in the pack
    pub piece_count: u32,

    /// Free text headcount (e.g. "15–20 personas")
    pub serving_size: String,

    /// Flat price for one pack
    pub price: Price,

    /// Descriptive contents. Prose only, not item ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<String>,
}

impl Pack {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pack_type: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pack_type: pack_type.into(),
            piece_count: 0,
            serving_size: String::new(),
            price,
            contents: Vec::new(),
        }
    }

    /// Builder: set piece count and serving size
    pub fn with_servings(mut self, piece_count: u32, serving_size: impl Into<String>) -> Self {
        self.piece_count = piece_count;
        self.serving_size = serving_size.into();
        self
    }

    /// Builder: add a contents line
    pub fn with_content(mut self, line: impl Into<String>) -> Self {
        self.contents.push(line.into());
        self
    }

    /// Case-insensitive type comparison
    pub fn is_type(&self, pack_type: &str) -> bool {
        self.pack_type
            .chars()
            .flat_map(char::to_lowercase)
            .eq(pack_type.chars().flat_map(char::to_lowercase))
    }

    /// Listing group: variado first, salado second, anything else last
    fn listing_rank(&self) -> u8 {
        if self.is_type(PACK_TYPE_VARIADO) {
            0
        } else if self.is_type(PACK_TYPE_SALADO) {
            1
        } else {
            2
        }
    }
}

/// Raw catalog document as written in TOML
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    packs: Vec<Pack>,
    #[serde(default)]
    terms: Terms,
}

/// Immutable, validated catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<Item>,
    /// Held in listing order: variado group, salado group, others
    packs: Vec<Pack>,
    terms: Terms,
}

/// `{categories, items}` body of the catalog listing
#[derive(Debug, Serialize)]
pub struct CatalogListing<'a> {
    pub categories: &'a [Category],
    pub items: &'a [Item],
}

impl Catalog {
    /// Build and validate a catalog from in-memory parts
    pub fn new(categories: Vec<Category>, items: Vec<Item>, packs: Vec<Pack>) -> CatalogResult<Self> {
        validate(&categories, &items, &packs)?;

        let mut packs = packs;
        // stable, so definition order survives inside each group
        packs.sort_by_cached_key(Pack::listing_rank);

        Ok(Self {
            categories,
            items,
            packs,
            terms: Terms::default(),
        })
    }

    /// Builder: attach terms metadata
    pub fn with_terms(mut self, terms: Terms) -> Self {
        self.terms = terms;
        self
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> CatalogResult<Self> {
        let doc: CatalogDocument = toml::from_str(toml_str)?;
        Ok(Self::new(doc.categories, doc.items, doc.packs)?.with_terms(doc.terms))
    }

    /// The catalog compiled into the binary
    pub fn embedded() -> CatalogResult<Self> {
        Self::from_toml(EMBEDDED_CATALOG)
    }

    /// All categories in definition order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All items in definition order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Find an item by ID
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Find an item by ID, as an error when missing
    pub fn require_item(&self, id: &str) -> CatalogResult<&Item> {
        self.item(id).ok_or_else(|| CatalogError::ItemNotFound {
            item_id: id.to_string(),
        })
    }

    /// Items belonging to a category, in definition order
    pub fn items_in_category<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |i| i.category_id == category_id)
    }

    /// Packs, optionally filtered by type (case-insensitive).
    ///
    /// Unfiltered, variado packs come before salado packs.
    pub fn packs<'a>(&'a self, pack_type: Option<&'a str>) -> impl Iterator<Item = &'a Pack> + 'a {
        self.packs
            .iter()
            .filter(move |p| pack_type.map_or(true, |t| p.is_type(t)))
    }

    /// Find a pack by ID, searching variado packs before salado packs
    pub fn pack(&self, id: &str) -> Option<&Pack> {
        self.packs.iter().find(|p| p.id == id)
    }

    /// Static terms and policies
    pub fn terms(&self) -> &Terms {
        &self.terms
    }

    /// Body for the catalog listing endpoint
    pub fn listing(&self) -> CatalogListing<'_> {
        CatalogListing {
            categories: &self.categories,
            items: &self.items,
        }
    }

    pub fn pack_count(&self) -> usize {
        self.packs.len()
    }
}

fn validate(categories: &[Category], items: &[Item], packs: &[Pack]) -> CatalogResult<()> {
    let mut category_ids = HashSet::new();
    for category in categories {
        if !category_ids.insert(category.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                kind: "category",
                id: category.id.clone(),
            });
        }
    }

    let mut item_ids = HashSet::new();
    for item in items {
        if !item_ids.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                kind: "item",
                id: item.id.clone(),
            });
        }

        if !category_ids.contains(item.category_id.as_str()) {
            return Err(CatalogError::UnknownCategory {
                item_id: item.id.clone(),
                category_id: item.category_id.clone(),
            });
        }

        let mut quantities = HashSet::new();
        for tier in &item.price_tiers {
            if tier.quantity == 0 {
                return Err(CatalogError::InvalidTier {
                    item_id: item.id.clone(),
                    message: "tier quantity must be greater than zero".to_string(),
                });
            }
            if !quantities.insert(tier.quantity) {
                return Err(CatalogError::InvalidTier {
                    item_id: item.id.clone(),
                    message: format!("duplicate tier quantity {}", tier.quantity),
                });
            }
            if tier.price.is_negative() {
                return Err(CatalogError::InvalidPrice {
                    id: item.id.clone(),
                    message: format!("tier for {} units is negative", tier.quantity),
                });
            }
        }
    }

    let mut pack_ids = HashSet::new();
    for pack in packs {
        if !pack_ids.insert(pack.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                kind: "pack",
                id: pack.id.clone(),
            });
        }
        if pack.price.is_negative() {
            return Err(CatalogError::InvalidPrice {
                id: pack.id.clone(),
                message: "pack price is negative".to_string(),
            });
        }
    }

    Ok(())
}
