use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Country {
    pub id: String,
    pub name: String,
    pub emoji: String,
    #[serde(default)]
    pub description: String,
}

impl Country {
    /// "{emoji} {name}", the label used on cards, breadcrumbs and sidebars.
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }

    pub fn href(&self) -> String {
        format!("/?country={}", crate::query::encode(&self.id))
    }
}

/// Label for an optional country; unresolved references render empty.
pub fn label_or_empty(country: Option<&Country>) -> String {
    country.map(Country::label).unwrap_or_default()
}
