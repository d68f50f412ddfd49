//! Food category model
//!
//! Descriptive grouping for catalog entries; never enters aggregation math.

use serde::{Deserialize, Serialize};

/// A label/grouping for food references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: Option<String>,
    /// Hex color for presentation, e.g. "#4caf50".
    pub color: Option<String>,
}

/// Data for creating a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Data for updating a category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}
