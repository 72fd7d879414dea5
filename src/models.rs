//! Menu Models
//!
//! Categories, menu items, and the pure mutation operations on the store.
//! No browser I/O here; persistence and dialogs live in their own modules.

use serde::{Deserialize, Serialize};

/// One of the five fixed menu categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Espresso,
    Frappuccino,
    Blended,
    Teavana,
    Desert,
}

impl Category {
    /// Display order for the nav bar
    pub const ALL: [Category; 5] = [
        Category::Espresso,
        Category::Frappuccino,
        Category::Blended,
        Category::Teavana,
        Category::Desert,
    ];

    /// Korean label shown in the nav and the page title
    pub fn label(&self) -> &'static str {
        match self {
            Category::Espresso => "에스프레소",
            Category::Frappuccino => "프라푸치노",
            Category::Blended => "블렌디드",
            Category::Teavana => "티바나",
            Category::Desert => "디저트",
        }
    }

    /// Nav bar icon
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Espresso => "☕",
            Category::Frappuccino => "🥤",
            Category::Blended => "🍹",
            Category::Teavana => "🫖",
            Category::Desert => "🍰",
        }
    }
}

/// A single menu entry within a category
///
/// `id` is assigned once at creation and never changes, so action buttons
/// can target an item without caring about its rendered position. Legacy
/// payloads carry only `name` (and sometimes `soldOut`); both defaulted
/// fields parse as zero/false and ids are backfilled on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sold_out: bool,
}

/// Why an add was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddError {
    /// Input was empty after trimming
    Empty,
    /// Trimmed name already exists in the category
    Duplicate,
}

/// The full five-category menu, mirrored to localStorage after every mutation
///
/// All five categories are always present; item order within a category is
/// insertion order and only `remove_item` changes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuStore {
    pub espresso: Vec<MenuItem>,
    pub frappuccino: Vec<MenuItem>,
    pub blended: Vec<MenuItem>,
    pub teavana: Vec<MenuItem>,
    pub desert: Vec<MenuItem>,
}

impl MenuStore {
    pub fn items(&self, category: Category) -> &Vec<MenuItem> {
        match category {
            Category::Espresso => &self.espresso,
            Category::Frappuccino => &self.frappuccino,
            Category::Blended => &self.blended,
            Category::Teavana => &self.teavana,
            Category::Desert => &self.desert,
        }
    }

    fn items_mut(&mut self, category: Category) -> &mut Vec<MenuItem> {
        match category {
            Category::Espresso => &mut self.espresso,
            Category::Frappuccino => &mut self.frappuccino,
            Category::Blended => &mut self.blended,
            Category::Teavana => &mut self.teavana,
            Category::Desert => &mut self.desert,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.items(category).len()
    }

    /// Next unused id across all categories (ids are 1-based; 0 marks a
    /// legacy item that has not been assigned one yet)
    fn next_id(&self) -> u32 {
        Category::ALL
            .iter()
            .flat_map(|&category| self.items(category))
            .map(|item| item.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Append a new menu with a fresh id, returning the id
    pub fn add_item(&mut self, category: Category, raw_name: &str) -> Result<u32, AddError> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(AddError::Empty);
        }
        if self.items(category).iter().any(|item| item.name == name) {
            return Err(AddError::Duplicate);
        }
        let id = self.next_id();
        self.items_mut(category).push(MenuItem {
            id,
            name: name.to_string(),
            sold_out: false,
        });
        Ok(id)
    }

    /// Set the item's name; blank input or an unknown id leaves it unchanged
    pub fn rename_item(&mut self, category: Category, id: u32, new_name: &str) -> bool {
        let name = new_name.trim();
        if name.is_empty() {
            return false;
        }
        match self.items_mut(category).iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove the item by id; later items shift left
    pub fn remove_item(&mut self, category: Category, id: u32) -> bool {
        let items = self.items_mut(category);
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flip the sold-out flag
    pub fn toggle_sold_out(&mut self, category: Category, id: u32) -> bool {
        match self.items_mut(category).iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.sold_out = !item.sold_out;
                true
            }
            None => false,
        }
    }

    /// Backfill ids for items loaded from payloads that predate them
    pub fn assign_missing_ids(&mut self) {
        let mut next = self.next_id();
        for category in Category::ALL {
            for item in self.items_mut(category) {
                if item.id == 0 {
                    item.id = next;
                    next += 1;
                }
            }
        }
    }
}
