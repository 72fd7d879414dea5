//! UI Components
//!
//! Leptos components for the menu widget.

mod category_nav;
mod menu_form;
mod menu_list;

pub use category_nav::CategoryNav;
pub use menu_form::MenuForm;
pub use menu_list::MenuList;
