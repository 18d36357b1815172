//! Menu item class filtering.
//!
//! The host renderer calls one of these functions per rendered item with the
//! class list it generated; the return value replaces that list verbatim.
//! Filtering is pure: the configuration is read-only, no state survives the
//! call, and classes are only ever kept or dropped, never rewritten.

mod rules;

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::settings::{Configuration, toggles};
use crate::types::{MenuItemContext, PageItemContext};
use rules::{NAV_RULES, PAGE_ANCESTOR_CLASS, PAGE_RULES, RuleContext, is_ancestor_family};

/// Filter the generated classes of one nav-menu item.
///
/// Keeps the subsequence of `classes` allowed by the enabled toggles,
/// applies the parent/ancestor suppression pass, optionally unions in the
/// page-menu compatibility classes, and appends `custom_classes` untouched.
pub fn purify_menu_item_classes(
    classes: &[String],
    ctx: &MenuItemContext,
    config: &Configuration,
    custom_classes: &[String],
) -> Vec<String> {
    let rctx = RuleContext::nav(ctx);
    let mut item_is_parent = false;
    let mut retained: Vec<&str> = Vec::new();

    for class in classes {
        for rule in NAV_RULES {
            if config.enabled(rule.toggle) && rule.pattern.matches(class, &rctx) {
                retained.push(class.as_str());
                if rule.marks_parent {
                    item_is_parent = true;
                }
                break;
            }
        }
    }

    // A parent item should not double as its own ancestor marker.
    if item_is_parent && config.enabled(toggles::DO_NOT_PRINT_PARENT_AS_ANCESTOR) {
        retained.retain(|class| !is_ancestor_family(class));
    }

    // Themes styled against the legacy page-menu markup also need the
    // page-menu classes, evaluated against the referenced page's id.
    if config.enabled(toggles::BACKWARD_COMPATIBILITY_WITH_WP_PAGE_MENU) {
        let page_ctx = PageItemContext::new(ctx.object_id);
        retained.extend(page_retained(classes, &RuleContext::page(&page_ctx), config));
    }

    let mut output = subsequence_of(classes, &retained);
    output.extend(custom_classes.iter().cloned());

    debug!(
        item = ctx.id,
        input = classes.len(),
        output = output.len(),
        "purified nav menu item classes"
    );
    output
}

/// Filter the generated classes of one page-menu item.
///
/// Restricted rule set for the flat page-menu markup; custom classes are the
/// caller's concern at this level.
pub fn purify_page_item_classes(
    classes: &[String],
    ctx: &PageItemContext,
    config: &Configuration,
) -> Vec<String> {
    let retained = page_retained(classes, &RuleContext::page(ctx), config);
    let output = subsequence_of(classes, &retained);

    debug!(
        page = ctx.id,
        input = classes.len(),
        output = output.len(),
        "purified page menu item classes"
    );
    output
}

/// Replacement value for a menu item's `id` attribute.
///
/// Installed by hosts when [`toggles::PRINT_MENU_ITEM_ID`] is disabled (the
/// toggle's sense is inverted; see its documentation). Always empty: the
/// host drops the attribute entirely on an empty value.
pub fn purify_menu_item_id() -> &'static str {
    ""
}

/// Untyped-boundary variant of [`purify_menu_item_classes`].
///
/// Accepts the class list as host-supplied JSON. Anything that is not an
/// array yields an empty list; non-string members are dropped.
pub fn purify_menu_item_classes_value(
    classes: &serde_json::Value,
    ctx: &MenuItemContext,
    config: &Configuration,
    custom_classes: &[String],
) -> Vec<String> {
    match class_list(classes) {
        Some(list) => purify_menu_item_classes(&list, ctx, config, custom_classes),
        None => {
            warn!(item = ctx.id, "menu item class list is not an array");
            Vec::new()
        }
    }
}

/// Untyped-boundary variant of [`purify_page_item_classes`].
pub fn purify_page_item_classes_value(
    classes: &serde_json::Value,
    ctx: &PageItemContext,
    config: &Configuration,
) -> Vec<String> {
    match class_list(classes) {
        Some(list) => purify_page_item_classes(&list, ctx, config),
        None => {
            warn!(page = ctx.id, "page item class list is not an array");
            Vec::new()
        }
    }
}

/// Evaluate the page-menu rules and suppression pass, returning the retained
/// set without finalizing it against the original list.
fn page_retained<'a>(
    classes: &'a [String],
    rctx: &RuleContext<'_>,
    config: &Configuration,
) -> Vec<&'a str> {
    let mut item_is_parent = false;
    let mut retained: Vec<&str> = Vec::new();

    for class in classes {
        for rule in PAGE_RULES {
            if config.enabled(rule.toggle) && rule.pattern.matches(class, rctx) {
                retained.push(class.as_str());
                if rule.marks_parent {
                    item_is_parent = true;
                }
                break;
            }
        }
    }

    if item_is_parent && config.enabled(toggles::DO_NOT_PRINT_PARENT_AS_ANCESTOR) {
        retained.retain(|class| *class != PAGE_ANCESTOR_CLASS);
    }

    retained
}

/// The subsequence of `classes` whose members are in the retained set,
/// preserving original order and multiplicity.
fn subsequence_of(classes: &[String], retained: &[&str]) -> Vec<String> {
    let keep: HashSet<&str> = retained.iter().copied().collect();
    classes
        .iter()
        .filter(|class| keep.contains(class.as_str()))
        .cloned()
        .collect()
}

/// Parse a host-supplied JSON value into a class list, or `None` if it is
/// not an array.
fn class_list(value: &serde_json::Value) -> Option<Vec<String>> {
    value.as_array().map(|members| {
        members
            .iter()
            .filter_map(|member| member.as_str().map(str::to_string))
            .collect()
    })
}
