//! Category model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A trivia category. Read-only through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub category_type: String,
}

/// Category id to label, iterated in ascending id order.
pub type CategoryMap = BTreeMap<i64, String>;

/// Build the id to label mapping returned by the category endpoints.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect()
}
