//! Fixed class-rule tables for nav-menu and page-menu items.
//!
//! Each rule pairs one class family with the toggle that governs it. The
//! tables are declaration-ordered: per class, the first rule that is both
//! enabled and matching wins. Parameterized families are recognized by
//! tokenization, never regex: strip the literal prefix and tail, then the
//! captured remainder must be a hyphen-free token equal to the context
//! value.

use crate::settings::toggles;
use crate::types::{MenuItemContext, PageItemContext};

/// Context values the parameterized patterns compare against.
///
/// Built once per filter call. Empty host-supplied fields become `None`, so
/// the patterns that read them simply never match.
pub(crate) struct RuleContext<'a> {
    id: String,
    object: Option<&'a str>,
    item_type: Option<&'a str>,
    taxonomy: Option<&'a str>,
}

impl<'a> RuleContext<'a> {
    pub(crate) fn nav(ctx: &'a MenuItemContext) -> Self {
        Self {
            id: ctx.id.to_string(),
            object: non_empty(&ctx.object),
            item_type: non_empty(&ctx.item_type),
            taxonomy: ctx.taxonomy.as_deref().and_then(non_empty),
        }
    }

    pub(crate) fn page(ctx: &PageItemContext) -> Self {
        Self {
            id: ctx.id.to_string(),
            object: None,
            item_type: None,
            taxonomy: None,
        }
    }

    fn field(&self, field: CtxField) -> Option<&str> {
        match field {
            CtxField::Object => self.object,
            CtxField::ItemType => self.item_type,
            CtxField::Taxonomy => self.taxonomy,
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Which context field a named pattern interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CtxField {
    Object,
    ItemType,
    Taxonomy,
}

/// How a rule recognizes the class family it governs.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Pattern {
    /// Exact class name.
    Literal(&'static str),
    /// Prefix followed by the item's decimal id.
    IdSuffix { prefix: &'static str },
    /// Prefix, a context-supplied name, and a literal tail.
    NamedSuffix {
        prefix: &'static str,
        field: CtxField,
        tail: &'static str,
    },
}

impl Pattern {
    pub(crate) fn matches(&self, class: &str, ctx: &RuleContext<'_>) -> bool {
        match self {
            Self::Literal(name) => class == *name,
            Self::IdSuffix { prefix } => class
                .strip_prefix(prefix)
                .is_some_and(|captured| captured == ctx.id),
            Self::NamedSuffix {
                prefix,
                field,
                tail,
            } => class
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_suffix(tail))
                .is_some_and(|captured| {
                    !captured.contains('-') && ctx.field(*field) == Some(captured)
                }),
        }
    }
}

/// One allowlist entry: a class family and the toggle that keeps it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ClassRule {
    pub(crate) toggle: &'static str,
    pub(crate) pattern: Pattern,
    /// Matching this rule marks the item as a parent of the current page,
    /// feeding the ancestor-suppression pass.
    pub(crate) marks_parent: bool,
}

impl ClassRule {
    const fn literal(toggle: &'static str, class: &'static str) -> Self {
        Self {
            toggle,
            pattern: Pattern::Literal(class),
            marks_parent: false,
        }
    }

    const fn literal_parent(toggle: &'static str, class: &'static str) -> Self {
        Self {
            toggle,
            pattern: Pattern::Literal(class),
            marks_parent: true,
        }
    }

    const fn id(toggle: &'static str, prefix: &'static str) -> Self {
        Self {
            toggle,
            pattern: Pattern::IdSuffix { prefix },
            marks_parent: false,
        }
    }

    const fn named(
        toggle: &'static str,
        prefix: &'static str,
        field: CtxField,
        tail: &'static str,
    ) -> Self {
        Self {
            toggle,
            pattern: Pattern::NamedSuffix {
                prefix,
                field,
                tail,
            },
            marks_parent: false,
        }
    }

    const fn named_parent(
        toggle: &'static str,
        prefix: &'static str,
        field: CtxField,
        tail: &'static str,
    ) -> Self {
        Self {
            toggle,
            pattern: Pattern::NamedSuffix {
                prefix,
                field,
                tail,
            },
            marks_parent: true,
        }
    }
}

/// Allowlist rules for nav-menu items, in evaluation order.
///
/// The two `menu-item-object-{object}` entries are intentionally identical
/// patterns under separate toggles; collapsing them would change output for
/// sites that enabled only one.
pub(crate) static NAV_RULES: &[ClassRule] = &[
    ClassRule::literal(toggles::PRINT_MENU_ITEM, "menu-item"),
    ClassRule::id(toggles::PRINT_MENU_ITEM_ID_AS_CLASS, "menu-item-"),
    ClassRule::literal(
        toggles::PRINT_MENU_ITEM_OBJECT_CATEGORY,
        "menu-item-object-category",
    ),
    ClassRule::literal(toggles::PRINT_MENU_ITEM_OBJECT_TAG, "menu-item-object-tag"),
    ClassRule::literal(
        toggles::PRINT_MENU_ITEM_OBJECT_PAGE,
        "menu-item-object-page",
    ),
    ClassRule::named(
        toggles::PRINT_MENU_ITEM_OBJECT_ANY,
        "menu-item-object-",
        CtxField::Object,
        "",
    ),
    ClassRule::named(
        toggles::PRINT_MENU_ITEM_OBJECT_CUSTOM,
        "menu-item-object-",
        CtxField::Object,
        "",
    ),
    ClassRule::literal(
        toggles::PRINT_MENU_ITEM_TYPE_POST_TYPE,
        "menu-item-type-post_type",
    ),
    ClassRule::literal(
        toggles::PRINT_MENU_ITEM_TYPE_TAXONOMY,
        "menu-item-type-taxonomy",
    ),
    ClassRule::named(
        toggles::PRINT_MENU_ITEM_TYPE_ANY,
        "menu-item-type-",
        CtxField::ItemType,
        "",
    ),
    ClassRule::literal(
        toggles::PRINT_MENU_ITEM_HAS_CHILDREN,
        "menu-item-has-children",
    ),
    ClassRule::literal(toggles::PRINT_CURRENT_MENU_ITEM, "current-menu-item"),
    ClassRule::literal_parent(toggles::PRINT_CURRENT_MENU_PARENT, "current-menu-parent"),
    ClassRule::named_parent(
        toggles::PRINT_CURRENT_TYPE_ANY_PARENT,
        "current-",
        CtxField::ItemType,
        "-parent",
    ),
    ClassRule::named_parent(
        toggles::PRINT_CURRENT_OBJECT_ANY_PARENT,
        "current-",
        CtxField::Object,
        "-parent",
    ),
    ClassRule::literal(toggles::PRINT_CURRENT_MENU_ANCESTOR, "current-menu-ancestor"),
    ClassRule::named(
        toggles::PRINT_CURRENT_TYPE_ANY_ANCESTOR,
        "current-",
        CtxField::ItemType,
        "-ancestor",
    ),
    ClassRule::named(
        toggles::PRINT_CURRENT_TAXONOMY_ANCESTOR,
        "current-",
        CtxField::Taxonomy,
        "-ancestor",
    ),
    ClassRule::named(
        toggles::PRINT_CURRENT_OBJECT_ANY_ANCESTOR,
        "current-",
        CtxField::Object,
        "-ancestor",
    ),
    ClassRule::literal(toggles::PRINT_MENU_ITEM_HOME, "menu-item-home"),
];

/// Allowlist rules for page-menu items, in evaluation order.
pub(crate) static PAGE_RULES: &[ClassRule] = &[
    ClassRule::literal(toggles::PRINT_PAGE_ITEM, "page_item"),
    ClassRule::literal(
        toggles::PRINT_PAGE_ITEM_HAS_CHILDREN,
        "page_item_has_children",
    ),
    ClassRule::id(toggles::PRINT_PAGE_ITEM_ID, "page-item-"),
    ClassRule::literal(toggles::PRINT_CURRENT_PAGE_ITEM, "current_page_item"),
    ClassRule::literal_parent(toggles::PRINT_CURRENT_PAGE_PARENT, "current_page_parent"),
    ClassRule::literal(toggles::PRINT_CURRENT_PAGE_ANCESTOR, "current_page_ancestor"),
];

/// The ancestor class the page-menu suppression pass removes.
pub(crate) const PAGE_ANCESTOR_CLASS: &str = "current_page_ancestor";

/// Whether a class belongs to the `current-{name}-ancestor` family the
/// nav-menu suppression pass removes. `current-menu-ancestor` is part of the
/// family.
pub(crate) fn is_ancestor_family(class: &str) -> bool {
    class
        .strip_prefix("current-")
        .and_then(|rest| rest.strip_suffix("-ancestor"))
        .is_some_and(|mid| !mid.is_empty() && !mid.contains('-'))
}
