//! Day model
//!
//! The aggregation root: a date-identified collection of meals plus derived
//! day-level totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::nutrition::aggregate;

use super::{FoodEntry, Meal, MealSlot, Totals};

/// A day holding meals and derived totals.
///
/// `totals` is the fold of the meal totals and is recomputed wholesale after
/// every structural mutation; it is never stored independently of the meals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub meals: Vec<Meal>,
    pub totals: Totals,
}

impl Day {
    /// Create an empty day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
            totals: Totals::zero(),
        }
    }

    /// Add a meal for a slot and return its id. Whether a slot may appear
    /// twice in the same day is the caller's responsibility.
    pub fn add_meal(&mut self, slot: MealSlot) -> i64 {
        let meal = Meal::new(slot);
        let id = meal.id;
        self.meals.push(meal);
        self.recalculate_totals();
        id
    }

    /// Remove a meal by id. Removing an id that is not present is a no-op.
    /// Returns whether a meal was removed.
    pub fn remove_meal(&mut self, meal_id: i64) -> bool {
        let before = self.meals.len();
        self.meals.retain(|meal| meal.id != meal_id);
        self.recalculate_totals();
        self.meals.len() != before
    }

    /// Add a scaled food entry to the meal with the given id, then recompute
    /// both the meal's and the day's totals. Returns false (and drops the
    /// entry) when no such meal exists.
    pub fn add_food(&mut self, meal_id: i64, entry: FoodEntry) -> bool {
        if let Some(meal) = self.meals.iter_mut().find(|m| m.id == meal_id) {
            meal.add_food(entry);
            self.recalculate_totals();
            true
        } else {
            false
        }
    }

    /// Remove a food entry from the meal with the given id. A missing meal
    /// or food id is a no-op. Returns whether an entry was removed.
    pub fn remove_food(&mut self, meal_id: i64, food_id: i64) -> bool {
        if let Some(meal) = self.meals.iter_mut().find(|m| m.id == meal_id) {
            let removed = meal.remove_food(food_id);
            self.recalculate_totals();
            removed
        } else {
            false
        }
    }

    /// Look up a meal by id.
    pub fn meal(&self, meal_id: i64) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id == meal_id)
    }

    /// Recompute the day totals from the current meal totals. Each meal
    /// contributes its precomputed totals as a single fold step.
    pub fn recalculate_totals(&mut self) {
        self.totals = aggregate(self.meals.iter().map(|m| m.totals));
    }
}
