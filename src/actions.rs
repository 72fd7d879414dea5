//! Menu Actions
//!
//! One function per user action. Each mutates the menu, then persists the
//! full store synchronously; the reactive render picks the change up from
//! the store afterwards. Dialogs and storage are injected so every action
//! runs unmodified in native tests.

use crate::dialog::Dialogs;
use crate::models::{AddError, Category, MenuStore};
use crate::storage::{self, MenuStorage};

/// Register a new menu in the category.
/// Returns true when the add went through and the input should be cleared.
pub fn add_menu(
    menu: &mut MenuStore,
    category: Category,
    raw_name: &str,
    dialogs: &dyn Dialogs,
    storage: &dyn MenuStorage,
) -> bool {
    match menu.add_item(category, raw_name) {
        Ok(_) => {
            storage::save(storage, menu);
            true
        }
        Err(AddError::Empty) => {
            dialogs.alert("값을 입력해주세요");
            false
        }
        Err(AddError::Duplicate) => {
            dialogs.alert("이미 등록된 메뉴입니다");
            false
        }
    }
}

/// Prompt for a new name, pre-filled with the current one.
/// Cancelling the prompt or entering a blank name keeps the old name.
pub fn rename_menu(
    menu: &mut MenuStore,
    category: Category,
    id: u32,
    dialogs: &dyn Dialogs,
    storage: &dyn MenuStorage,
) {
    let Some(current) = menu
        .items(category)
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.name.clone())
    else {
        return;
    };
    let Some(entered) = dialogs.prompt("메뉴명을 수정하세요", &current) else {
        return;
    };
    if menu.rename_item(category, id, &entered) {
        storage::save(storage, menu);
    }
}

/// Delete after a confirmation dialog; declining is a no-op
pub fn remove_menu(
    menu: &mut MenuStore,
    category: Category,
    id: u32,
    dialogs: &dyn Dialogs,
    storage: &dyn MenuStorage,
) {
    if !dialogs.confirm("정말 삭제하시겠습니까?") {
        return;
    }
    if menu.remove_item(category, id) {
        storage::save(storage, menu);
    }
}

/// Flip the sold-out flag, no confirmation involved
pub fn toggle_sold_out(
    menu: &mut MenuStore,
    category: Category,
    id: u32,
    storage: &dyn MenuStorage,
) {
    if menu.toggle_sold_out(category, id) {
        storage::save(storage, menu);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MemoryStorage {
        value: RefCell<Option<String>>,
    }

    impl MemoryStorage {
        fn empty() -> Self {
            Self { value: RefCell::new(None) }
        }

        /// Persisted payload parsed back into a store
        fn persisted(&self) -> Option<MenuStore> {
            self.value
                .borrow()
                .as_ref()
                .map(|raw| serde_json::from_str(raw).unwrap())
        }
    }

    impl MenuStorage for MemoryStorage {
        fn read(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn write(&self, payload: &str) {
            *self.value.borrow_mut() = Some(payload.to_string());
        }
    }

    /// Dialogs with canned answers, recording every alert
    struct ScriptedDialogs {
        confirm_reply: bool,
        prompt_reply: Option<String>,
        alerts: RefCell<Vec<String>>,
    }

    impl ScriptedDialogs {
        fn silent() -> Self {
            Self {
                confirm_reply: true,
                prompt_reply: None,
                alerts: RefCell::new(Vec::new()),
            }
        }

        fn confirming(reply: bool) -> Self {
            Self { confirm_reply: reply, ..Self::silent() }
        }

        fn prompting(reply: Option<&str>) -> Self {
            Self {
                prompt_reply: reply.map(str::to_string),
                ..Self::silent()
            }
        }
    }

    impl Dialogs for ScriptedDialogs {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, _message: &str) -> bool {
            self.confirm_reply
        }

        fn prompt(&self, _message: &str, _default: &str) -> Option<String> {
            self.prompt_reply.clone()
        }
    }

    #[test]
    fn add_persists_and_reports_success() {
        let storage = MemoryStorage::empty();
        let dialogs = ScriptedDialogs::silent();
        let mut menu = MenuStore::default();

        assert!(add_menu(&mut menu, Category::Espresso, "라떼", &dialogs, &storage));
        assert_eq!(storage.persisted().unwrap(), menu);
        assert!(dialogs.alerts.borrow().is_empty());
    }

    #[test]
    fn empty_add_alerts_and_persists_nothing() {
        let storage = MemoryStorage::empty();
        let dialogs = ScriptedDialogs::silent();
        let mut menu = MenuStore::default();

        assert!(!add_menu(&mut menu, Category::Espresso, "   ", &dialogs, &storage));
        assert_eq!(menu.count(Category::Espresso), 0);
        assert!(storage.persisted().is_none());
        assert_eq!(dialogs.alerts.borrow().as_slice(), ["값을 입력해주세요"]);
    }

    #[test]
    fn duplicate_add_alerts_and_persists_nothing() {
        let storage = MemoryStorage::empty();
        let dialogs = ScriptedDialogs::silent();
        let mut menu = MenuStore::default();
        add_menu(&mut menu, Category::Espresso, "라떼", &dialogs, &storage);

        assert!(!add_menu(&mut menu, Category::Espresso, " 라떼", &dialogs, &storage));
        assert_eq!(menu.count(Category::Espresso), 1);
        assert_eq!(dialogs.alerts.borrow().as_slice(), ["이미 등록된 메뉴입니다"]);
    }

    #[test]
    fn rename_applies_prompt_reply() {
        let storage = MemoryStorage::empty();
        let mut menu = MenuStore::default();
        let id = menu.add_item(Category::Espresso, "라떼").unwrap();

        rename_menu(
            &mut menu,
            Category::Espresso,
            id,
            &ScriptedDialogs::prompting(Some("바닐라라떼")),
            &storage,
        );
        assert_eq!(menu.items(Category::Espresso)[0].name, "바닐라라떼");
        assert_eq!(storage.persisted().unwrap(), menu);
    }

    #[test]
    fn cancelled_or_blank_rename_keeps_the_old_name() {
        let storage = MemoryStorage::empty();
        let mut menu = MenuStore::default();
        let id = menu.add_item(Category::Espresso, "라떼").unwrap();

        rename_menu(&mut menu, Category::Espresso, id, &ScriptedDialogs::prompting(None), &storage);
        rename_menu(&mut menu, Category::Espresso, id, &ScriptedDialogs::prompting(Some("  ")), &storage);

        assert_eq!(menu.items(Category::Espresso)[0].name, "라떼");
        assert!(storage.persisted().is_none());
    }

    #[test]
    fn declined_delete_is_a_no_op() {
        let storage = MemoryStorage::empty();
        let mut menu = MenuStore::default();
        let id = menu.add_item(Category::Espresso, "라떼").unwrap();

        remove_menu(&mut menu, Category::Espresso, id, &ScriptedDialogs::confirming(false), &storage);
        assert_eq!(menu.count(Category::Espresso), 1);
        assert!(storage.persisted().is_none());
    }

    #[test]
    fn add_toggle_delete_scenario() {
        let storage = MemoryStorage::empty();
        let dialogs = ScriptedDialogs::silent();
        let mut menu = MenuStore::default();

        assert!(add_menu(&mut menu, Category::Espresso, "Latte", &dialogs, &storage));
        assert_eq!(menu.count(Category::Espresso), 1);
        let item = menu.items(Category::Espresso)[0].clone();
        assert_eq!(item.name, "Latte");
        assert!(!item.sold_out);

        toggle_sold_out(&mut menu, Category::Espresso, item.id, &storage);
        assert!(menu.items(Category::Espresso)[0].sold_out);
        assert_eq!(storage.persisted().unwrap(), menu);

        remove_menu(&mut menu, Category::Espresso, item.id, &ScriptedDialogs::confirming(true), &storage);
        assert_eq!(menu.count(Category::Espresso), 0);
        assert_eq!(storage.persisted().unwrap(), menu);
    }
}
