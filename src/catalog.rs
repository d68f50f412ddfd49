//! Food catalog
//!
//! In-memory CRUD over food references and categories, plus name search.
//! Stands in for the hosting application's persisted catalog store; the
//! engine only ever consumes the flat record lists it exposes.

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Category, CategoryCreate, CategoryUpdate, FoodEntry, FoodReference, FoodReferenceCreate,
    FoodReferenceUpdate,
};
use crate::nutrition::{scale, ScalingMode};

/// The food catalog: flat lists of food references and categories.
#[derive(Debug, Clone)]
pub struct Catalog {
    foods: Vec<FoodReference>,
    categories: Vec<Category>,
    next_food_id: i64,
    next_category_id: i64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            foods: Vec::new(),
            categories: Vec::new(),
            next_food_id: 1,
            next_category_id: 1,
        }
    }

    /// Add a food reference. The scaling mode is resolved here, at data
    /// entry, from the explicit mode when given or from the unit label
    /// otherwise; scaling calls never re-inspect the label.
    pub fn add_food(&mut self, data: FoodReferenceCreate) -> &FoodReference {
        let mode = data.mode.unwrap_or_else(|| ScalingMode::infer(&data.unit));
        let default_quantity = data
            .default_quantity
            .map(|q| mode.clamp_quantity(q))
            .unwrap_or_else(|| mode.default_quantity());

        let id = self.next_food_id;
        self.next_food_id += 1;

        self.foods.push(FoodReference {
            id,
            name: data.name,
            category_id: data.category_id,
            unit: data.unit,
            mode,
            default_quantity,
            calories: data.calories,
            protein: data.protein,
            carbs: data.carbs,
            fat: data.fat,
        });

        self.foods.last().unwrap()
    }

    /// Update a food reference. When the unit label changes without an
    /// explicit mode, the mode is re-resolved from the new label.
    pub fn update_food(&mut self, id: i64, data: FoodReferenceUpdate) -> Option<&FoodReference> {
        let food = self.foods.iter_mut().find(|f| f.id == id)?;

        if let Some(name) = data.name {
            food.name = name;
        }
        if let Some(category_id) = data.category_id {
            food.category_id = category_id;
        }
        if let Some(unit) = data.unit {
            food.mode = match data.mode {
                Some(mode) => mode,
                None => ScalingMode::infer(&unit),
            };
            food.unit = unit;
        } else if let Some(mode) = data.mode {
            food.mode = mode;
        }
        if let Some(default_quantity) = data.default_quantity {
            food.default_quantity = food.mode.clamp_quantity(default_quantity);
        }
        if let Some(calories) = data.calories {
            food.calories = calories;
        }
        if let Some(protein) = data.protein {
            food.protein = protein;
        }
        if let Some(carbs) = data.carbs {
            food.carbs = carbs;
        }
        if let Some(fat) = data.fat {
            food.fat = fat;
        }

        Some(food)
    }

    /// Remove a food reference by id. Removing an unknown id is a no-op.
    pub fn remove_food(&mut self, id: i64) -> bool {
        let before = self.foods.len();
        self.foods.retain(|f| f.id != id);
        self.foods.len() != before
    }

    /// Look up a food reference by id.
    pub fn food(&self, id: i64) -> Option<&FoodReference> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Look up a food reference by id, failing on an unknown id. Callers
    /// must not build a food entry from a reference that does not exist.
    pub fn require_food(&self, id: i64) -> EngineResult<&FoodReference> {
        self.food(id).ok_or(EngineError::InvalidReference(id))
    }

    /// All food references, in insertion order.
    pub fn foods(&self) -> &[FoodReference] {
        &self.foods
    }

    /// Scale a catalog food to a requested quantity.
    pub fn scale_food(&self, id: i64, quantity: f64) -> EngineResult<FoodEntry> {
        let reference = self.require_food(id)?;
        Ok(scale(reference, quantity))
    }

    /// Case-insensitive substring search over food names. Matches keep
    /// their original catalog order; there is no ranking.
    pub fn search(&self, query: &str) -> Vec<&FoodReference> {
        search(&self.foods, query)
    }

    /// Add a category.
    pub fn add_category(&mut self, data: CategoryCreate) -> &Category {
        let id = self.next_category_id;
        self.next_category_id += 1;

        self.categories.push(Category {
            id,
            name: data.name,
            icon: data.icon,
            color: data.color,
        });

        self.categories.last().unwrap()
    }

    /// Update a category. Fields left as `None` are unchanged; `icon` and
    /// `color` can be set or replaced but not cleared back to absent.
    pub fn update_category(&mut self, id: i64, data: CategoryUpdate) -> Option<&Category> {
        let category = self.categories.iter_mut().find(|c| c.id == id)?;

        if let Some(name) = data.name {
            category.name = name;
        }
        if let Some(icon) = data.icon {
            category.icon = Some(icon);
        }
        if let Some(color) = data.color {
            category.color = Some(color);
        }

        Some(category)
    }

    /// Remove a category by id. Removing an unknown id is a no-op.
    pub fn remove_category(&mut self, id: i64) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        self.categories.len() != before
    }

    /// Look up a category by id.
    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All categories, in insertion order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

/// Case-insensitive substring filter over food names, preserving the
/// original relative order of the matches.
pub fn search<'a>(foods: &'a [FoodReference], query: &str) -> Vec<&'a FoodReference> {
    let needle = query.to_lowercase();
    foods
        .iter()
        .filter(|food| food.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str, unit: &str, calories: i64, protein: f64, carbs: f64, fat: f64) -> FoodReferenceCreate {
        FoodReferenceCreate {
            name: name.to_string(),
            category_id: 1,
            unit: unit.to_string(),
            mode: None,
            default_quantity: None,
            calories,
            protein,
            carbs,
            fat,
        }
    }

    fn seeded() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_category(CategoryCreate {
            name: "Básicos".to_string(),
            icon: Some("bowl".to_string()),
            color: Some("#4caf50".to_string()),
        });
        catalog.add_food(food("Arroz branco cozido", "100g", 130, 2.7, 28.0, 0.3));
        catalog.add_food(food("Feijão preto cozido", "100g", 77, 4.5, 14.0, 0.5));
        catalog.add_food(food("Peito de frango grelhado", "100g", 165, 31.0, 0.0, 3.6));
        catalog.add_food(food("Ovo cozido", "1 unidade", 155, 13.0, 1.1, 11.0));
        catalog.add_food(food("Banana", "1 unidade", 89, 1.1, 23.0, 0.3));
        catalog.add_food(food("Coxa de frango assada", "100g", 215, 26.0, 0.0, 11.2));
        catalog
    }

    #[test]
    fn test_add_food_infers_mode_and_default_quantity() {
        let catalog = seeded();
        let rice = catalog.food(1).unwrap();
        assert_eq!(rice.mode, ScalingMode::PerHundred);
        assert_eq!(rice.default_quantity, 100.0);

        let egg = catalog.food(4).unwrap();
        assert_eq!(egg.mode, ScalingMode::PerItem);
        assert_eq!(egg.default_quantity, 1.0);
    }

    #[test]
    fn test_search_is_case_insensitive_and_order_stable() {
        let catalog = seeded();
        let hits = catalog.search("FRANGO");
        let names: Vec<&str> = hits.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Peito de frango grelhado", "Coxa de frango assada"]
        );
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        let catalog = seeded();
        assert_eq!(catalog.search("").len(), catalog.foods().len());
    }

    #[test]
    fn test_search_no_match() {
        let catalog = seeded();
        assert!(catalog.search("picanha").is_empty());
    }

    #[test]
    fn test_require_food_unknown_id() {
        let catalog = seeded();
        assert_eq!(
            catalog.require_food(999).unwrap_err(),
            EngineError::InvalidReference(999)
        );
    }

    #[test]
    fn test_scale_food_by_id() {
        let catalog = seeded();
        let entry = catalog.scale_food(3, 150.0).unwrap();
        assert_eq!(entry.name, "Peito de frango grelhado");
        assert_eq!(entry.calories, 248); // 165 * 1.5 = 247.5 -> 248
        assert!(catalog.scale_food(999, 150.0).is_err());
    }

    #[test]
    fn test_update_food_reinfers_mode_on_unit_change() {
        let mut catalog = seeded();
        let updated = catalog
            .update_food(
                1,
                FoodReferenceUpdate {
                    unit: Some("1 colher".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.mode, ScalingMode::PerItem);

        // An explicit mode wins over inference.
        let updated = catalog
            .update_food(
                1,
                FoodReferenceUpdate {
                    unit: Some("1 colher".to_string()),
                    mode: Some(ScalingMode::PerHundred),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.mode, ScalingMode::PerHundred);
    }

    #[test]
    fn test_remove_food_is_idempotent() {
        let mut catalog = seeded();
        assert!(catalog.remove_food(2));
        assert!(!catalog.remove_food(2));
        assert!(catalog.food(2).is_none());
    }

    #[test]
    fn test_pick_flow_updates_meal_and_day_totals() {
        use crate::models::{Day, MealSlot};

        let catalog = seeded();
        let mut day = Day::new(chrono::NaiveDate::from_ymd_opt(2025, 1, 9).unwrap());
        let lunch = day.add_meal(MealSlot::Lunch);

        day.add_food(lunch, catalog.scale_food(1, 150.0).unwrap()); // rice, 150g
        day.add_food(lunch, catalog.scale_food(3, 100.0).unwrap()); // chicken, 100g
        day.add_food(lunch, catalog.scale_food(4, 2.0).unwrap()); // two eggs

        let meal = day.meal(lunch).unwrap();
        assert_eq!(meal.totals.calories, 670);
        assert!((meal.totals.protein - 61.1).abs() < 1e-9);
        assert!((meal.totals.carbs - 44.2).abs() < 1e-9);
        // Rice fat is 0.3 * 1.5 = 0.45 -> 0.5, so 0.5 + 3.6 + 22.0.
        assert!((meal.totals.fat - 26.1).abs() < 1e-9);

        // A single meal's totals pass through to the day unchanged.
        assert_eq!(day.totals.calories, 670);
        assert!((day.totals.protein - 61.1).abs() < 1e-9);
    }

    #[test]
    fn test_category_crud() {
        let mut catalog = seeded();
        let id = catalog
            .add_category(CategoryCreate {
                name: "Frutas".to_string(),
                icon: None,
                color: None,
            })
            .id;

        let updated = catalog
            .update_category(
                id,
                CategoryUpdate {
                    color: Some("#ff9800".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.color.as_deref(), Some("#ff9800"));

        // None fields leave existing values untouched.
        let updated = catalog
            .update_category(id, CategoryUpdate::default())
            .unwrap();
        assert_eq!(updated.name, "Frutas");
        assert_eq!(updated.color.as_deref(), Some("#ff9800"));

        assert!(catalog.remove_category(id));
        assert!(!catalog.remove_category(id));
    }
}
