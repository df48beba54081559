//! Category domain models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Option<String>,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub is_custom: bool,
    pub owner_id: Option<String>,
}

/// Input model for a custom category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub owner_id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Built-in categories: (name, icon, color).
const BUILT_IN: [(&str, &str, &str); 6] = [
    ("Food", "coffee", "#FF9800"),
    ("Transport", "truck", "#2196F3"),
    ("Housing", "home", "#4CAF50"),
    ("Leisure", "grid", "#9C27B0"),
    ("Health", "activity", "#F44336"),
    ("Other", "shopping-bag", "#607D8B"),
];

/// Categories every owner has, ahead of their custom ones.
pub fn default_categories() -> Vec<Category> {
    BUILT_IN
        .iter()
        .map(|(name, icon, color)| Category {
            id: None,
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            is_custom: false,
            owner_id: None,
        })
        .collect()
}
