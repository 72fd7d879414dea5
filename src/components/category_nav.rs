//! Category Nav Component
//!
//! One button per fixed category. Switching only changes the selection;
//! no category's items are touched.

use leptos::prelude::*;

use crate::models::Category;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryNav() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="category-nav">
            {Category::ALL.iter().map(|&category| {
                let tab_class = move || {
                    if store.current_category().get() == category {
                        "cafe-category-name active"
                    } else {
                        "cafe-category-name"
                    }
                };
                view! {
                    <button
                        type="button"
                        class=tab_class
                        on:click=move |_| store.current_category().set(category)
                    >
                        {format!("{} {}", category.icon(), category.label())}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
