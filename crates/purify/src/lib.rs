//! Menu class purifier.
//!
//! Host CMS renderers attach a generous set of CSS classes to every
//! navigation-menu and page-menu item. This library strips each item's list
//! down to the families a site administrator has explicitly enabled, cutting
//! rendered HTML size. The filter is pure and synchronous: resolve a
//! [`settings::Configuration`] once per render pass, then call
//! [`filter::purify_menu_item_classes`] per item and substitute the result
//! for the generated list.

pub mod error;
pub mod filter;
pub mod settings;
pub mod types;

pub use error::{SettingsError, SettingsResult};
pub use filter::{purify_menu_item_classes, purify_menu_item_id, purify_page_item_classes};
pub use settings::{
    Configuration, MemorySettingsStore, SettingsStore, get_configuration, toggles,
};
pub use types::{MenuItemContext, PageItemContext};
