//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, MenuStore};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full five-category menu, persisted after every mutation
    pub menu: MenuStore,
    /// Active category; session-only, never persisted
    pub current_category: Category,
}

impl AppState {
    pub fn new(menu: MenuStore) -> Self {
        Self {
            menu,
            current_category: Category::Espresso,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_category_leaves_every_menu_untouched() {
        let mut menu = MenuStore::default();
        menu.add_item(Category::Espresso, "라떼").unwrap();
        menu.add_item(Category::Desert, "티라미수").unwrap();

        let mut state = AppState::new(menu.clone());
        state.current_category = Category::Desert;

        assert_eq!(state.current_category, Category::Desert);
        assert_eq!(state.menu, menu);
    }
}
