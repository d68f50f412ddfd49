//! Food-quantity scaling
//!
//! Turns a catalog reference plus a requested quantity into a concrete food
//! entry with nutrition already scaled.

use crate::models::{next_id, round_to_tenths, FoodEntry, FoodReference};

/// Scale a food reference to a requested quantity.
///
/// The quantity is clamped to the mode's floor, then the reference nutrition
/// is multiplied out: calories round to a whole kcal, each macro rounds
/// independently to one decimal place from the unrounded product. The entry
/// keeps the raw requested quantity and the reference unit label verbatim,
/// and is issued a fresh entry-unique id.
pub fn scale(reference: &FoodReference, quantity: f64) -> FoodEntry {
    let quantity = reference.mode.clamp_quantity(quantity);
    let multiplier = reference.mode.multiplier(quantity);

    FoodEntry {
        id: next_id(),
        name: reference.name.clone(),
        quantity,
        unit: reference.unit.clone(),
        calories: (reference.calories as f64 * multiplier).round() as i64,
        protein: round_to_tenths(reference.protein * multiplier),
        carbs: round_to_tenths(reference.carbs * multiplier),
        fat: round_to_tenths(reference.fat * multiplier),
    }
}
