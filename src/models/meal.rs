//! Meal model
//!
//! A named slot within a day holding an ordered list of food entries and
//! derived totals.

use serde::{Deserialize, Serialize};

use crate::nutrition::aggregate;

use super::{next_id, FoodEntry, Totals};

/// Meal slot enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    MorningSnack,
    Lunch,
    AfternoonSnack,
    Dinner,
    LateSnack,
}

impl MealSlot {
    /// All slots, in day order. One instance of each per day is the intended
    /// shape; duplicates are a caller concern, not enforced here.
    pub const ALL: [MealSlot; 6] = [
        MealSlot::Breakfast,
        MealSlot::MorningSnack,
        MealSlot::Lunch,
        MealSlot::AfternoonSnack,
        MealSlot::Dinner,
        MealSlot::LateSnack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::MorningSnack => "morning_snack",
            MealSlot::Lunch => "lunch",
            MealSlot::AfternoonSnack => "afternoon_snack",
            MealSlot::Dinner => "dinner",
            MealSlot::LateSnack => "late_snack",
        }
    }

    /// Display label for the slot.
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::MorningSnack => "Morning Snack",
            MealSlot::Lunch => "Lunch",
            MealSlot::AfternoonSnack => "Afternoon Snack",
            MealSlot::Dinner => "Dinner",
            MealSlot::LateSnack => "Late Snack",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(' ', "_").as_str() {
            "breakfast" => Some(MealSlot::Breakfast),
            "morning_snack" => Some(MealSlot::MorningSnack),
            "lunch" => Some(MealSlot::Lunch),
            "afternoon_snack" => Some(MealSlot::AfternoonSnack),
            "dinner" => Some(MealSlot::Dinner),
            "late_snack" => Some(MealSlot::LateSnack),
            _ => None,
        }
    }
}

/// A meal holding food entries and cached totals.
///
/// `totals` is a derived cache: it is recomputed wholesale from `foods`
/// after every mutation and always equals the fold of the entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    pub slot: MealSlot,
    pub foods: Vec<FoodEntry>,
    pub totals: Totals,
}

impl Meal {
    /// Create an empty meal for a slot.
    pub fn new(slot: MealSlot) -> Self {
        Self {
            id: next_id(),
            slot,
            foods: Vec::new(),
            totals: Totals::zero(),
        }
    }

    /// Append a scaled food entry and recompute the cached totals.
    pub fn add_food(&mut self, entry: FoodEntry) {
        self.foods.push(entry);
        self.recalculate_totals();
    }

    /// Remove a food entry by id. Removing an id that is not present is a
    /// no-op. Returns whether an entry was removed.
    pub fn remove_food(&mut self, food_id: i64) -> bool {
        let before = self.foods.len();
        self.foods.retain(|food| food.id != food_id);
        self.recalculate_totals();
        self.foods.len() != before
    }

    /// Recompute the cached totals from the current entries. Always a full
    /// fold, never an incremental patch.
    pub fn recalculate_totals(&mut self) {
        self.totals = aggregate(self.foods.iter().map(FoodEntry::totals));
    }
}
