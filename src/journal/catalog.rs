//! The base category catalog supplied by the surrounding application.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One entry of the application's static category catalog. Only `category`
/// is read here; any other fields the catalog carries are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub category: String,
}

static BUILTIN_CATEGORIES: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "Food",
        "Transportation",
        "Housing",
        "Entertainment",
        "Shopping",
        "Utilities",
        "Healthcare",
        "Education",
        "Travel",
        "Other",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
});

/// Ordered base category names. Custom additions live on the journal, not
/// here; this list is fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    names: Vec<String>,
}

impl CategoryCatalog {
    /// Builds a catalog from application-supplied entries, keeping their order.
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        Self {
            names: entries.iter().map(|entry| entry.category.clone()).collect(),
        }
    }

    /// The default catalog shipped with the journal.
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_CATEGORIES.clone(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_entries_keeps_catalog_order() {
        let entries = vec![
            CatalogEntry {
                category: "Rent".into(),
            },
            CatalogEntry {
                category: "Food".into(),
            },
        ];
        let catalog = CategoryCatalog::from_entries(&entries);
        assert_eq!(catalog.names(), ["Rent".to_string(), "Food".to_string()]);
    }

    #[test]
    fn entries_ignore_extra_fields() {
        let json = r#"[{"category":"Food","budget":120,"icon":"f"}]"#;
        let entries: Vec<CatalogEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].category, "Food");
    }

    #[test]
    fn builtin_catalog_is_not_empty() {
        let catalog = CategoryCatalog::builtin();
        assert!(catalog.contains("Food"));
        assert!(!catalog.contains("food"));
    }
}
