//! Food entry model
//!
//! A concrete, quantity-scaled addition of a food to a meal.

use serde::{Deserialize, Serialize};

use super::Totals;

/// A food added to a meal, with nutrition already scaled to its quantity.
///
/// Entries are immutable after creation; editing one means removing it and
/// adding a freshly scaled replacement. The id is entry-unique, not a
/// catalog id, and `name`/`unit` are copies taken at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: i64,
    pub name: String,
    /// The raw requested quantity, kept for display.
    pub quantity: f64,
    /// The reference unit label, copied verbatim.
    pub unit: String,
    pub calories: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl FoodEntry {
    /// This entry's contribution to a meal fold.
    pub fn totals(&self) -> Totals {
        Totals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}
