use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One card shown in the carousel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub description: String,
    // older catalogs call the glyph "emoji"
    #[serde(alias = "emoji")]
    pub icon: String,
    pub badge: String,
}

/// Supplies the static, ordered list of items a carousel displays.
pub trait ItemDataSource {
    fn items(&self) -> &[Item];

    fn find(&self, id: u32) -> Option<&Item> {
        self.items().iter().find(|item| item.id == id)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    items: Vec<Item>,
}

/// Immutable in-memory item list with unique ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Parse a catalog of the form `{"items": [...]}`.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(text)?;
        Self::new(file.items)
    }

    /// The catalog compiled into the binary. Falls back to an empty list if
    /// the embedded file is somehow unreadable.
    pub fn bundled() -> Self {
        match Self::from_json(include_str!("../../items.json")) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("bundled item catalog is invalid: {e}");
                Self::default()
            }
        }
    }
}

impl ItemDataSource for ItemCatalog {
    fn items(&self) -> &[Item] {
        &self.items
    }
}

impl<T: ItemDataSource + ?Sized> ItemDataSource for Box<T> {
    fn items(&self) -> &[Item] {
        (**self).items()
    }

    fn find(&self, id: u32) -> Option<&Item> {
        (**self).find(id)
    }
}
