//! Stored settings: the toggle map that drives class filtering.
//!
//! Every class rule is governed by exactly one named boolean toggle. The
//! toggle names are fixed (they double as the storage keys) and live in
//! [`toggles`]; a [`Configuration`] is the immutable snapshot of their
//! values that a render pass threads through every filter call.

mod store;
pub mod yaml;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use store::{MemorySettingsStore, SettingsStore, get_configuration};

/// Toggle name constants for use with [`Configuration`].
///
/// The names are the stored keys; renaming one would orphan existing
/// settings data.
pub mod toggles {
    /// Keep the `menu-item` class on every item.
    pub const PRINT_MENU_ITEM: &str = "pwpm_print_menu_item";

    /// Keep the `menu-item-{id}` class carrying the item id.
    pub const PRINT_MENU_ITEM_ID_AS_CLASS: &str = "pwpm_print_menu_item_id_as_class";

    /// Keep `menu-item-object-category` on category items.
    pub const PRINT_MENU_ITEM_OBJECT_CATEGORY: &str = "pwpm_print_menu_item_object_category";

    /// Keep `menu-item-object-tag` on tag items.
    pub const PRINT_MENU_ITEM_OBJECT_TAG: &str = "pwpm_print_menu_item_object_tag";

    /// Keep `menu-item-object-page` on static-page items.
    pub const PRINT_MENU_ITEM_OBJECT_PAGE: &str = "pwpm_print_menu_item_object_page";

    /// Keep `menu-item-object-{object}` for the item's own object name.
    pub const PRINT_MENU_ITEM_OBJECT_ANY: &str = "pwpm_print_menu_item_object_any";

    /// Keep `menu-item-object-{object}` on custom post types and taxonomies.
    /// Same class shape as [`PRINT_MENU_ITEM_OBJECT_ANY`]; the two toggles are
    /// kept separate so that sites which enabled only one keep their output.
    pub const PRINT_MENU_ITEM_OBJECT_CUSTOM: &str = "pwpm_print_menu_item_object_custom";

    /// Keep `menu-item-type-post_type` on post-type-backed items.
    pub const PRINT_MENU_ITEM_TYPE_POST_TYPE: &str = "pwpm_print_menu_item_type_post_type";

    /// Keep `menu-item-type-taxonomy` on taxonomy-backed items.
    pub const PRINT_MENU_ITEM_TYPE_TAXONOMY: &str = "pwpm_print_menu_item_type_taxonomy";

    /// Keep `menu-item-type-{type}` for the item's own type name.
    pub const PRINT_MENU_ITEM_TYPE_ANY: &str = "pwpm_print_menu_item_type_any";

    /// Keep `menu-item-has-children` on items with sub-items.
    pub const PRINT_MENU_ITEM_HAS_CHILDREN: &str = "pwpm_print_menu_item_has_children";

    /// Keep `current-menu-item` on the item for the page being rendered.
    pub const PRINT_CURRENT_MENU_ITEM: &str = "pwpm_print_current_menu_item";

    /// Keep `current-menu-parent` on the parent of the current item.
    pub const PRINT_CURRENT_MENU_PARENT: &str = "pwpm_print_current_menu_parent";

    /// Keep `current-{type}-parent` for the item's own type name.
    pub const PRINT_CURRENT_TYPE_ANY_PARENT: &str = "pwpm_print_current_type_any_parent";

    /// Keep `current-{object}-parent` for the item's own object name.
    pub const PRINT_CURRENT_OBJECT_ANY_PARENT: &str = "pwpm_print_current_object_any_parent";

    /// Keep `current-menu-ancestor` on ancestors of the current item.
    pub const PRINT_CURRENT_MENU_ANCESTOR: &str = "pwpm_print_current_menu_ancestor";

    /// Keep `current-{type}-ancestor` for the item's own type name.
    pub const PRINT_CURRENT_TYPE_ANY_ANCESTOR: &str = "pwpm_print_current_type_any_ancestor";

    /// Keep `current-{taxonomy}-ancestor` for the item's taxonomy.
    pub const PRINT_CURRENT_TAXONOMY_ANCESTOR: &str = "pwpm_print_current_taxonomy_ancestor";

    /// Keep `current-{object}-ancestor` for the item's own object name.
    pub const PRINT_CURRENT_OBJECT_ANY_ANCESTOR: &str = "pwpm_print_current_object_any_ancestor";

    /// Keep `menu-item-home` on the front-page item.
    pub const PRINT_MENU_ITEM_HOME: &str = "pwpm_print_menu_item_home";

    /// Keep the `id` attribute on menu items. INVERTED sense: when this is
    /// disabled the host should install
    /// [`purify_menu_item_id`](crate::filter::purify_menu_item_id) to blank
    /// the attribute; when enabled, ids are left alone. The stored name and
    /// sense are historical and must not change.
    pub const PRINT_MENU_ITEM_ID: &str = "pwpm_print_menu_item_id";

    /// Keep the `page_item` class on page-menu items.
    pub const PRINT_PAGE_ITEM: &str = "pwpm_print_page_item";

    /// Keep `page_item_has_children` on page-menu items with sub-pages.
    pub const PRINT_PAGE_ITEM_HAS_CHILDREN: &str = "pwpm_print_page_item_has_children";

    /// Keep the `page-item-{id}` class carrying the page id.
    pub const PRINT_PAGE_ITEM_ID: &str = "pwpm_print_page_item_id";

    /// Keep `current_page_item` on the item for the page being rendered.
    pub const PRINT_CURRENT_PAGE_ITEM: &str = "pwpm_print_current_page_item";

    /// Keep `current_page_parent` on the parent of the current page.
    pub const PRINT_CURRENT_PAGE_PARENT: &str = "pwpm_print_current_page_parent";

    /// Keep `current_page_ancestor` on ancestors of the current page.
    pub const PRINT_CURRENT_PAGE_ANCESTOR: &str = "pwpm_print_current_page_ancestor";

    /// Additionally run the page-menu rules over nav-menu items, for themes
    /// styled against the legacy page-menu markup.
    pub const BACKWARD_COMPATIBILITY_WITH_WP_PAGE_MENU: &str =
        "pwpm_backward_compatibility_with_wp_page_menu";

    /// Strip ancestor classes from items that are also marked as parent.
    pub const DO_NOT_PRINT_PARENT_AS_ANCESTOR: &str = "pwpm_do_not_print_parent_as_ancestor";

    /// Every known toggle name.
    pub const ALL: &[&str] = &[
        PRINT_MENU_ITEM,
        PRINT_MENU_ITEM_ID_AS_CLASS,
        PRINT_MENU_ITEM_OBJECT_CATEGORY,
        PRINT_MENU_ITEM_OBJECT_TAG,
        PRINT_MENU_ITEM_OBJECT_PAGE,
        PRINT_MENU_ITEM_OBJECT_ANY,
        PRINT_MENU_ITEM_OBJECT_CUSTOM,
        PRINT_MENU_ITEM_TYPE_POST_TYPE,
        PRINT_MENU_ITEM_TYPE_TAXONOMY,
        PRINT_MENU_ITEM_TYPE_ANY,
        PRINT_MENU_ITEM_HAS_CHILDREN,
        PRINT_CURRENT_MENU_ITEM,
        PRINT_CURRENT_MENU_PARENT,
        PRINT_CURRENT_TYPE_ANY_PARENT,
        PRINT_CURRENT_OBJECT_ANY_PARENT,
        PRINT_CURRENT_MENU_ANCESTOR,
        PRINT_CURRENT_TYPE_ANY_ANCESTOR,
        PRINT_CURRENT_TAXONOMY_ANCESTOR,
        PRINT_CURRENT_OBJECT_ANY_ANCESTOR,
        PRINT_MENU_ITEM_HOME,
        PRINT_MENU_ITEM_ID,
        PRINT_PAGE_ITEM,
        PRINT_PAGE_ITEM_HAS_CHILDREN,
        PRINT_PAGE_ITEM_ID,
        PRINT_CURRENT_PAGE_ITEM,
        PRINT_CURRENT_PAGE_PARENT,
        PRINT_CURRENT_PAGE_ANCESTOR,
        BACKWARD_COMPATIBILITY_WITH_WP_PAGE_MENU,
        DO_NOT_PRINT_PARENT_AS_ANCESTOR,
    ];
}

/// Toggles enabled in the default settings set.
///
/// Everything else starts disabled, so a fresh install strips the menus down
/// to the two classes most themes style against.
const DEFAULT_ON: &[&str] = &[
    toggles::PRINT_CURRENT_MENU_ITEM,
    toggles::PRINT_CURRENT_PAGE_ITEM,
];

/// An immutable snapshot of toggle values.
///
/// Resolved once per render pass and passed by reference into every filter
/// call; the filter never writes to it. Missing keys read as disabled, so a
/// partially stored mapping is always safe to use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    values: BTreeMap<String, bool>,
}

impl Configuration {
    /// Create an empty configuration; every toggle reads as disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the fixed default settings set, with every known toggle
    /// present.
    pub fn defaults() -> Self {
        let mut config = Self::new();
        for &key in toggles::ALL {
            config.set(key, DEFAULT_ON.contains(&key));
        }
        config
    }

    /// Whether the named toggle is enabled. Missing keys are disabled.
    pub fn enabled(&self, key: &str) -> bool {
        self.values.get(key).copied().unwrap_or(false)
    }

    /// Set a toggle value.
    pub fn set(&mut self, key: impl Into<String>, value: bool) {
        self.values.insert(key.into(), value);
    }

    /// Enable a toggle, builder style.
    pub fn with_enabled(mut self, key: impl Into<String>) -> Self {
        self.set(key, true);
        self
    }

    /// Fill in every known toggle that is absent, as disabled.
    ///
    /// Unknown keys already present are left in place; they are inert.
    pub fn complete(&mut self) {
        for &key in toggles::ALL {
            self.values.entry(key.to_string()).or_insert(false);
        }
    }

    /// Whether every known toggle is present.
    pub fn is_complete(&self) -> bool {
        toggles::ALL.iter().all(|key| self.values.contains_key(*key))
    }

    /// Keys present in this configuration that no rule reads.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|key| !toggles::ALL.contains(key))
            .collect()
    }

    /// Number of stored toggle values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no toggle values are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over stored toggle values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
