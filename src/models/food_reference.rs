//! Food reference model
//!
//! A catalog entry with nutrition defined per a stated reference quantity.

use serde::{Deserialize, Serialize};

use crate::nutrition::ScalingMode;

/// A food in the catalog, with nutrition per reference unit.
///
/// Immutable for the duration of a selection once fetched from the catalog;
/// scaled entries copy what they need instead of keeping a live link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodReference {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    /// Display label for the reference quantity, e.g. "100g" or "1 unidade".
    pub unit: String,
    /// How requested quantities scale against the reference unit. Resolved
    /// once when the record enters the catalog, never re-inferred per call.
    pub mode: ScalingMode,
    /// Quantity a picker starts from when this food is selected.
    pub default_quantity: f64,
    pub calories: i64, // kcal per reference unit
    pub protein: f64,  // grams per reference unit
    pub carbs: f64,    // grams per reference unit
    pub fat: f64,      // grams per reference unit
}

/// Data for creating a food reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodReferenceCreate {
    pub name: String,
    pub category_id: i64,
    pub unit: String,
    /// Explicit scaling mode; inferred from `unit` when absent.
    #[serde(default)]
    pub mode: Option<ScalingMode>,
    /// Defaults to the mode's natural amount (100 per-hundred, 1 per-item).
    #[serde(default)]
    pub default_quantity: Option<f64>,
    pub calories: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Data for updating a food reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodReferenceUpdate {
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub unit: Option<String>,
    pub mode: Option<ScalingMode>,
    pub default_quantity: Option<f64>,
    pub calories: Option<i64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}
