//! Shared nutrition totals
//!
//! Used for meal and day aggregates and for single-entry contributions.

use serde::{Deserialize, Serialize};

/// Aggregated nutrition values.
///
/// Calories are whole kcal; the three macros are grams kept to one decimal
/// place by the fold that produces them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub calories: i64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl Totals {
    /// Create a new Totals with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Add another totals to this one under the tracker's historical rule:
    /// calories by plain integer addition, each macro re-rounded to one
    /// decimal place after the addition.
    pub fn accumulate(&self, next: &Totals) -> Self {
        Self {
            calories: self.calories + next.calories,
            protein: round_to_tenths(self.protein + next.protein),
            carbs: round_to_tenths(self.carbs + next.carbs),
            fat: round_to_tenths(self.fat + next.fat),
        }
    }

    /// Add without any rounding. Used by the round-at-the-end fold variant.
    pub(crate) fn add_exact(&self, next: &Totals) -> Self {
        Self {
            calories: self.calories + next.calories,
            protein: self.protein + next.protein,
            carbs: self.carbs + next.carbs,
            fat: self.fat + next.fat,
        }
    }

    /// Round the macro fields to one decimal place. Calories are untouched.
    pub(crate) fn rounded_to_tenths(&self) -> Self {
        Self {
            calories: self.calories,
            protein: round_to_tenths(self.protein),
            carbs: round_to_tenths(self.carbs),
            fat: round_to_tenths(self.fat),
        }
    }
}

impl std::ops::Add for Totals {
    type Output = Totals;

    fn add(self, other: Totals) -> Totals {
        self.accumulate(&other)
    }
}

impl std::iter::Sum for Totals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Totals::zero(), |acc, t| acc + t)
    }
}

/// Round to one decimal place, half away from zero.
pub fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
