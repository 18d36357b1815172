//! Purify test utilities.
//!
//! Fixture builders that emit the class lists a host renderer generates for
//! menu items, so filter tests read as render scenarios rather than
//! hand-typed string lists.

use purify_menus::{Configuration, MenuItemContext};
use serde_json::Value as JsonValue;

/// Build an owned class list from string literals.
pub fn classes(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

/// A configuration with exactly the given toggles enabled.
pub fn config_enabling(keys: &[&str]) -> Configuration {
    keys.iter().map(|key| (*key, true)).collect()
}

/// Builds the class list a host renderer emits for one nav-menu item.
#[derive(Debug, Clone)]
pub struct RenderedNavItem {
    ctx: MenuItemContext,
    current: bool,
    parent: bool,
    ancestor: bool,
    home: bool,
    has_children: bool,
}

impl RenderedNavItem {
    /// Start from the item's context metadata.
    pub fn new(ctx: MenuItemContext) -> Self {
        Self {
            ctx,
            current: false,
            parent: false,
            ancestor: false,
            home: false,
            has_children: false,
        }
    }

    /// Mark as the item for the currently rendered page.
    pub fn current(mut self) -> Self {
        self.current = true;
        self
    }

    /// Mark as the parent of the currently rendered page.
    pub fn parent(mut self) -> Self {
        self.parent = true;
        self
    }

    /// Mark as an ancestor of the currently rendered page.
    pub fn ancestor(mut self) -> Self {
        self.ancestor = true;
        self
    }

    /// Mark as the front-page item.
    pub fn home(mut self) -> Self {
        self.home = true;
        self
    }

    /// Mark as having sub-items.
    pub fn with_children(mut self) -> Self {
        self.has_children = true;
        self
    }

    /// The item's context, as the host would pass it to the filter.
    pub fn ctx(&self) -> &MenuItemContext {
        &self.ctx
    }

    /// The generated class list, in host emission order. Each class appears
    /// once, as hosts emit them (object and taxonomy names can coincide on
    /// taxonomy-backed items).
    pub fn classes(&self) -> Vec<String> {
        let mut out = vec!["menu-item".to_string(), format!("menu-item-{}", self.ctx.id)];
        let mut push = |out: &mut Vec<String>, class: String| {
            if !out.contains(&class) {
                out.push(class);
            }
        };
        if !self.ctx.item_type.is_empty() {
            push(&mut out, format!("menu-item-type-{}", self.ctx.item_type));
        }
        if !self.ctx.object.is_empty() {
            push(&mut out, format!("menu-item-object-{}", self.ctx.object));
        }
        if self.has_children {
            push(&mut out, "menu-item-has-children".to_string());
        }
        if self.home {
            push(&mut out, "menu-item-home".to_string());
        }
        if self.current {
            push(&mut out, "current-menu-item".to_string());
        }
        if self.parent {
            push(&mut out, "current-menu-parent".to_string());
            if !self.ctx.item_type.is_empty() {
                push(&mut out, format!("current-{}-parent", self.ctx.item_type));
            }
            if !self.ctx.object.is_empty() {
                push(&mut out, format!("current-{}-parent", self.ctx.object));
            }
        }
        if self.ancestor {
            push(&mut out, "current-menu-ancestor".to_string());
            if !self.ctx.item_type.is_empty() {
                push(&mut out, format!("current-{}-ancestor", self.ctx.item_type));
            }
            if let Some(taxonomy) = &self.ctx.taxonomy {
                push(&mut out, format!("current-{taxonomy}-ancestor"));
            }
            if !self.ctx.object.is_empty() {
                push(&mut out, format!("current-{}-ancestor", self.ctx.object));
            }
        }
        out
    }

    /// The generated class list as host-boundary JSON.
    pub fn classes_json(&self) -> JsonValue {
        JsonValue::from(self.classes())
    }
}

/// Builds the class list a host renderer emits for one page-menu item.
#[derive(Debug, Clone)]
pub struct RenderedPageItem {
    id: u64,
    current: bool,
    parent: bool,
    ancestor: bool,
    has_children: bool,
}

impl RenderedPageItem {
    /// Start from the page id.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            current: false,
            parent: false,
            ancestor: false,
            has_children: false,
        }
    }

    /// Mark as the currently rendered page.
    pub fn current(mut self) -> Self {
        self.current = true;
        self
    }

    /// Mark as the parent of the currently rendered page.
    pub fn parent(mut self) -> Self {
        self.parent = true;
        self
    }

    /// Mark as an ancestor of the currently rendered page.
    pub fn ancestor(mut self) -> Self {
        self.ancestor = true;
        self
    }

    /// Mark as having sub-pages.
    pub fn with_children(mut self) -> Self {
        self.has_children = true;
        self
    }

    /// The page id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The generated class list, in host emission order.
    pub fn classes(&self) -> Vec<String> {
        let mut out = vec!["page_item".to_string(), format!("page-item-{}", self.id)];
        if self.has_children {
            out.push("page_item_has_children".to_string());
        }
        if self.current {
            out.push("current_page_item".to_string());
        }
        if self.parent {
            out.push("current_page_parent".to_string());
        }
        if self.ancestor {
            out.push("current_page_ancestor".to_string());
        }
        out
    }
}
