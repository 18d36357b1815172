//! Item metadata passed alongside each generated class list.
//!
//! The host renderer owns these values; the filter only reads them to
//! resolve the parameterized class rules for the item being rendered.

use serde::{Deserialize, Serialize};

/// Metadata for one navigation-menu item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemContext {
    /// The menu item's own id.
    #[serde(default)]
    pub id: u64,
    /// Id of the entity the item points at (page, post, term).
    #[serde(default)]
    pub object_id: u64,
    /// Object name (e.g. "page", "category", "tag", or a custom type).
    #[serde(default)]
    pub object: String,
    /// Item type (e.g. "post_type", "taxonomy").
    #[serde(default, rename = "type")]
    pub item_type: String,
    /// Taxonomy name, for taxonomy-backed items only.
    #[serde(default)]
    pub taxonomy: Option<String>,
}

impl MenuItemContext {
    /// Create a context for the item with the given id.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Set the referenced entity id.
    pub fn with_object_id(mut self, object_id: u64) -> Self {
        self.object_id = object_id;
        self
    }

    /// Set the object name.
    pub fn with_object(mut self, object: impl Into<String>) -> Self {
        self.object = object.into();
        self
    }

    /// Set the item type.
    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    /// Set the taxonomy name.
    pub fn with_taxonomy(mut self, taxonomy: impl Into<String>) -> Self {
        self.taxonomy = Some(taxonomy.into());
        self
    }
}

/// Metadata for one page-menu item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageItemContext {
    /// The page id.
    #[serde(default)]
    pub id: u64,
}

impl PageItemContext {
    /// Create a context for the page with the given id.
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}
