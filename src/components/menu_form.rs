//! Menu Form Component
//!
//! Input for registering a new menu in the active category. Submits on
//! Enter and on the button; the input clears only when the add succeeds.

use leptos::prelude::*;

use crate::actions;
use crate::dialog::BrowserDialogs;
use crate::storage::BrowserStorage;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MenuForm() -> impl IntoView {
    let store = use_app_store();
    let (menu_name, set_menu_name) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = menu_name.get();
        let category = store.current_category().get();
        let added = actions::add_menu(
            &mut store.menu().write(),
            category,
            &name,
            &BrowserDialogs,
            &BrowserStorage,
        );
        if added {
            set_menu_name.set(String::new());
        }
    };

    view! {
        <form id="menu-form" on:submit=submit>
            <input
                type="text"
                id="menu-name"
                placeholder="메뉴 이름"
                prop:value=move || menu_name.get()
                on:input=move |ev| set_menu_name.set(event_target_value(&ev))
            />
            <button type="submit" id="menu-submit-button">"확인"</button>
        </form>
    }
}
