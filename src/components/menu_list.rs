//! Menu List Component
//!
//! Rows for the active category, each with sold-out / edit / delete
//! buttons targeting the item by its stable id.

use leptos::prelude::*;

use crate::actions;
use crate::dialog::BrowserDialogs;
use crate::models::MenuItem;
use crate::storage::BrowserStorage;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MenuList() -> impl IntoView {
    let store = use_app_store();

    let current_items = move || {
        let category = store.current_category().get();
        store.menu().read().items(category).clone()
    };

    view! {
        <ul id="menu-list">
            <For
                each=current_items
                // Name and flag are part of the key so renames and toggles
                // re-render the row
                key=|item: &MenuItem| (item.id, item.name.clone(), item.sold_out)
                children=move |item| {
                    let id = item.id;
                    let name_class = if item.sold_out {
                        "menu-name sold-out"
                    } else {
                        "menu-name"
                    };
                    view! {
                        <li class="menu-list-item">
                            <span class=name_class>{item.name.clone()}</span>
                            <button
                                type="button"
                                class="menu-sold-out-button"
                                on:click=move |_| {
                                    let category = store.current_category().get();
                                    actions::toggle_sold_out(
                                        &mut store.menu().write(),
                                        category,
                                        id,
                                        &BrowserStorage,
                                    );
                                }
                            >
                                "품절"
                            </button>
                            <button
                                type="button"
                                class="menu-edit-button"
                                on:click=move |_| {
                                    let category = store.current_category().get();
                                    actions::rename_menu(
                                        &mut store.menu().write(),
                                        category,
                                        id,
                                        &BrowserDialogs,
                                        &BrowserStorage,
                                    );
                                }
                            >
                                "수정"
                            </button>
                            <button
                                type="button"
                                class="menu-remove-button"
                                on:click=move |_| {
                                    let category = store.current_category().get();
                                    actions::remove_menu(
                                        &mut store.menu().write(),
                                        category,
                                        id,
                                        &BrowserDialogs,
                                        &BrowserStorage,
                                    );
                                }
                            >
                                "삭제"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
