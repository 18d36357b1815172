#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the menu item class filters.
//!
//! Scenarios are built with the host-shaped fixtures from purify-test-utils,
//! so inputs match what a renderer actually emits per item.

mod common;

use purify_menus::{
    Configuration, MenuItemContext, PageItemContext, purify_menu_item_classes,
    purify_page_item_classes, toggles,
};
use purify_test_utils::{RenderedNavItem, RenderedPageItem, classes, config_enabling};

fn page_nav_item() -> RenderedNavItem {
    RenderedNavItem::new(
        MenuItemContext::new(42)
            .with_object_id(6)
            .with_object("page")
            .with_type("post_type"),
    )
}

/// Output is always a subsequence of input-plus-custom, custom last.
#[test]
fn output_is_subsequence_with_custom_last() {
    common::init_tracing();
    let item = page_nav_item().current().parent().ancestor().with_children();
    let input = item.classes();
    let custom = classes(&["cta", "wide"]);

    // Every print toggle enabled (suppression off): output must echo the
    // input order exactly.
    let mut config = Configuration::defaults();
    for key in toggles::ALL {
        config.set(*key, true);
    }
    config.set(toggles::DO_NOT_PRINT_PARENT_AS_ANCESTOR, false);
    let output = purify_menu_item_classes(&input, item.ctx(), &config, &custom);

    let mut expected = input.clone();
    expected.extend(custom.clone());
    assert_eq!(output, expected);

    // A sparse config keeps a sub-subsequence, custom still last.
    let config = config_enabling(&[toggles::PRINT_MENU_ITEM, toggles::PRINT_CURRENT_MENU_ITEM]);
    let output = purify_menu_item_classes(&input, item.ctx(), &config, &custom);
    assert_eq!(output, classes(&["menu-item", "current-menu-item", "cta", "wide"]));
}

/// Filtering an already-filtered list again changes nothing.
#[test]
fn filtering_is_idempotent_on_clean_input() {
    let item = page_nav_item().current().ancestor();
    let config = config_enabling(&[
        toggles::PRINT_MENU_ITEM,
        toggles::PRINT_CURRENT_MENU_ITEM,
        toggles::PRINT_CURRENT_MENU_ANCESTOR,
        toggles::PRINT_CURRENT_OBJECT_ANY_ANCESTOR,
    ]);

    let once = purify_menu_item_classes(&item.classes(), item.ctx(), &config, &[]);
    let twice = purify_menu_item_classes(&once, item.ctx(), &config, &[]);
    assert_eq!(once, twice);
}

/// With every toggle disabled, only custom classes survive.
#[test]
fn all_disabled_keeps_only_custom_classes() {
    let item = page_nav_item().current().parent().ancestor().home();
    let custom = classes(&["keep-me"]);

    let output =
        purify_menu_item_classes(&item.classes(), item.ctx(), &Configuration::new(), &custom);
    assert_eq!(output, custom);
}

/// Parent items lose their ancestor classes when suppression is on, while
/// the parent classes themselves stay.
#[test]
fn parent_keeps_parent_class_but_loses_ancestor_class() {
    let input = classes(&["current-menu-parent", "current-post_type-ancestor"]);
    let ctx = MenuItemContext::new(11).with_type("post_type");
    let config = config_enabling(&[
        toggles::PRINT_CURRENT_MENU_PARENT,
        toggles::PRINT_CURRENT_TYPE_ANY_ANCESTOR,
        toggles::DO_NOT_PRINT_PARENT_AS_ANCESTOR,
    ]);

    let output = purify_menu_item_classes(&input, &ctx, &config, &[]);
    assert_eq!(output, classes(&["current-menu-parent"]));
}

/// Without the suppression toggle, parent and ancestor classes coexist.
#[test]
fn ancestor_classes_stay_without_suppression_toggle() {
    let input = classes(&["current-menu-parent", "current-post_type-ancestor"]);
    let ctx = MenuItemContext::new(11).with_type("post_type");
    let config = config_enabling(&[
        toggles::PRINT_CURRENT_MENU_PARENT,
        toggles::PRINT_CURRENT_TYPE_ANY_ANCESTOR,
    ]);

    let output = purify_menu_item_classes(&input, &ctx, &config, &[]);
    assert_eq!(output, input);
}

#[test]
fn golden_only_current_menu_item() {
    let input = classes(&[
        "menu-item",
        "menu-item-42",
        "current-menu-item",
        "menu-item-object-page",
    ]);
    let config = config_enabling(&[toggles::PRINT_CURRENT_MENU_ITEM]);

    let output = purify_menu_item_classes(&input, &MenuItemContext::new(42), &config, &[]);
    assert_eq!(output, classes(&["current-menu-item"]));
}

#[test]
fn golden_page_parent_suppresses_ancestor() {
    let input = classes(&["page_item", "current_page_ancestor", "current_page_parent"]);
    let config = config_enabling(&[
        toggles::PRINT_PAGE_ITEM,
        toggles::PRINT_CURRENT_PAGE_PARENT,
        toggles::PRINT_CURRENT_PAGE_ANCESTOR,
        toggles::DO_NOT_PRINT_PARENT_AS_ANCESTOR,
    ]);

    let output = purify_page_item_classes(&input, &PageItemContext::new(6), &config);
    assert_eq!(output, classes(&["page_item", "current_page_parent"]));
}

/// The taxonomy ancestor family resolves against the item's taxonomy name.
#[test]
fn taxonomy_ancestor_family_matches_item_taxonomy() {
    let item = RenderedNavItem::new(
        MenuItemContext::new(9)
            .with_object("category")
            .with_type("taxonomy")
            .with_taxonomy("category"),
    )
    .ancestor();
    let config = config_enabling(&[toggles::PRINT_CURRENT_TAXONOMY_ANCESTOR]);

    let output = purify_menu_item_classes(&item.classes(), item.ctx(), &config, &[]);
    assert_eq!(output, classes(&["current-category-ancestor"]));
}

/// Duplicate input classes keep their multiplicity when retained.
#[test]
fn duplicates_in_input_survive_in_place() {
    let input = classes(&["menu-item", "current-menu-item", "menu-item"]);
    let config = config_enabling(&[toggles::PRINT_MENU_ITEM]);

    let output = purify_menu_item_classes(&input, &MenuItemContext::new(1), &config, &[]);
    assert_eq!(output, classes(&["menu-item", "menu-item"]));
}

/// Page-menu compat classes are unioned in against the referenced page id.
#[test]
fn page_compat_union_preserves_input_order() {
    let item = page_nav_item().current();
    let mut input = item.classes();
    input.extend(classes(&["page_item", "page-item-6", "current_page_item"]));
    let config = config_enabling(&[
        toggles::PRINT_CURRENT_MENU_ITEM,
        toggles::BACKWARD_COMPATIBILITY_WITH_WP_PAGE_MENU,
        toggles::PRINT_PAGE_ITEM,
        toggles::PRINT_PAGE_ITEM_ID,
        toggles::PRINT_CURRENT_PAGE_ITEM,
    ]);

    let output = purify_menu_item_classes(&input, item.ctx(), &config, &[]);
    assert_eq!(
        output,
        classes(&[
            "current-menu-item",
            "page_item",
            "page-item-6",
            "current_page_item"
        ])
    );
}

/// Without the compat toggle, page-menu classes on nav items are stripped.
#[test]
fn page_classes_need_the_compat_toggle_on_nav_items() {
    let mut input = page_nav_item().classes();
    input.push("page_item".to_string());
    let config = config_enabling(&[toggles::PRINT_PAGE_ITEM]);

    let output = purify_menu_item_classes(&input, page_nav_item().ctx(), &config, &[]);
    assert!(output.is_empty());
}

/// A foreign item id in the class list does not match this item's id rule.
#[test]
fn id_class_of_another_item_is_stripped() {
    let input = classes(&["menu-item-42", "menu-item-7"]);
    let config = config_enabling(&[toggles::PRINT_MENU_ITEM_ID_AS_CLASS]);

    let output = purify_menu_item_classes(&input, &MenuItemContext::new(42), &config, &[]);
    assert_eq!(output, classes(&["menu-item-42"]));
}

/// The JSON boundary fails soft on non-array input and keeps custom classes
/// out of the failure path.
#[test]
fn json_boundary_fails_closed() {
    common::init_tracing();
    let config = Configuration::defaults();
    let ctx = MenuItemContext::new(3);

    let output = purify_menus::filter::purify_menu_item_classes_value(
        &serde_json::json!(42),
        &ctx,
        &config,
        &classes(&["custom"]),
    );
    assert!(output.is_empty());
}

/// Full host round trip on JSON input.
#[test]
fn json_boundary_filters_arrays() {
    let item = page_nav_item().current();
    let config = config_enabling(&[toggles::PRINT_CURRENT_MENU_ITEM]);

    let output = purify_menus::filter::purify_menu_item_classes_value(
        &item.classes_json(),
        item.ctx(),
        &config,
        &[],
    );
    assert_eq!(output, classes(&["current-menu-item"]));
}

/// A rendered page-menu item filtered with defaults keeps only the
/// current-page marker.
#[test]
fn page_item_defaults_keep_current_marker() {
    let page = RenderedPageItem::new(8).current().with_children();

    let output = purify_page_item_classes(
        &page.classes(),
        &PageItemContext::new(page.id()),
        &Configuration::defaults(),
    );
    assert_eq!(output, classes(&["current_page_item"]));
}
