//! Data models
//!
//! Rust structs representing days, meals, food entries and the catalog.

mod category;
mod day;
mod food_entry;
mod food_reference;
mod meal;
mod nutrition;

pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use day::Day;
pub use food_entry::FoodEntry;
pub use food_reference::{FoodReference, FoodReferenceCreate, FoodReferenceUpdate};
pub use meal::{Meal, MealSlot};
pub use nutrition::{round_to_tenths, Totals};

use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Issue a fresh identifier, unique across meals and food entries for the
/// lifetime of the process.
pub(crate) fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
