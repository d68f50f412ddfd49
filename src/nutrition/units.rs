//! Scaling modes
//!
//! Classifies reference units and provides quantity stepping and clamping.

use serde::{Deserialize, Serialize};

/// How a food's requested quantity maps onto its reference nutrition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingMode {
    /// Nutrition is defined per 100 of the unit's base measure (grams or
    /// milliliters). Multiplier is `quantity / 100`.
    PerHundred,
    /// Nutrition is defined per 1 discrete item (an egg, a slice).
    /// Multiplier is the item count directly.
    PerItem,
}

impl ScalingMode {
    /// Resolve the mode from a reference-unit label. Done once when the
    /// record enters the catalog, not per scaling call. A label that
    /// mentions a reference amount of 100 anywhere classifies as
    /// per-hundred; anything else is per-item.
    ///
    /// Examples:
    /// - "100g", "100ml", "pacote 100g" -> PerHundred
    /// - "1 unidade", "1 fatia", "unidade" -> PerItem
    pub fn infer(unit: &str) -> Self {
        if unit.contains("100") {
            ScalingMode::PerHundred
        } else {
            ScalingMode::PerItem
        }
    }

    /// The nutrition multiplier for a requested quantity.
    pub fn multiplier(&self, quantity: f64) -> f64 {
        match self {
            ScalingMode::PerHundred => quantity / 100.0,
            ScalingMode::PerItem => quantity,
        }
    }

    /// Minimum stored quantity. Both modes floor at 1.
    pub fn floor(&self) -> f64 {
        1.0
    }

    /// User-facing increment/decrement step.
    pub fn step(&self) -> f64 {
        match self {
            ScalingMode::PerHundred => 10.0,
            ScalingMode::PerItem => 1.0,
        }
    }

    /// Quantity a picker starts from for this mode.
    pub fn default_quantity(&self) -> f64 {
        match self {
            ScalingMode::PerHundred => 100.0,
            ScalingMode::PerItem => 1.0,
        }
    }

    /// Clamp a caller-supplied quantity to the valid domain. Non-finite or
    /// sub-floor values clamp up to the floor instead of failing; this gates
    /// simple UI input, not untrusted data.
    pub fn clamp_quantity(&self, quantity: f64) -> f64 {
        if !quantity.is_finite() {
            tracing::warn!("Non-finite quantity {}; clamping to {}", quantity, self.floor());
            return self.floor();
        }
        if quantity < self.floor() {
            self.floor()
        } else {
            quantity
        }
    }

    /// One step up from a quantity.
    pub fn step_up(&self, quantity: f64) -> f64 {
        self.clamp_quantity(quantity) + self.step()
    }

    /// One step down from a quantity, never below the floor.
    pub fn step_down(&self, quantity: f64) -> f64 {
        let stepped = self.clamp_quantity(quantity) - self.step();
        if stepped < self.floor() {
            self.floor()
        } else {
            stepped
        }
    }
}
