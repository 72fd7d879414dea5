//! Café Menu App
//!
//! Loads the persisted menu on mount, provides the store via context, and
//! lays out the nav, form, list, and count label.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategoryNav, MenuForm, MenuList};
use crate::storage::{self, BrowserStorage};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let menu = storage::load(&BrowserStorage);
    let store = Store::new(AppState::new(menu));
    provide_context(store);

    let title = move || format!("{} 메뉴 관리", store.current_category().get().label());
    let count = move || {
        let category = store.current_category().get();
        format!("총 {}개", store.menu().read().count(category))
    };

    view! {
        <div class="app">
            <CategoryNav />

            <main class="menu-manager">
                <h2 id="category-title">{title}</h2>

                <MenuForm />

                <span class="menu-count">{count}</span>

                <MenuList />
            </main>
        </div>
    }
}
