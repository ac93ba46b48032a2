use serde::{Deserialize, Serialize};

use super::meal_type::MealType;

/// The serving size a consumption was logged in.
///
/// `ratio` converts one of this serving size into base-unit multiples,
/// e.g. a 250 g glass of a food measured per 100 g has ratio 2.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingSize {
    pub id: i64,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedServing {
    pub serving_size: ServingSize,
    pub quantity: f64,
}

/// One recorded food consumption, as stored by the server.
///
/// Nutrient fields are densities per base-serving unit; the actual
/// consumed amount is density times the serving multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionItem {
    pub consumption_id: i64,
    pub name: String,
    pub calories: f64,
    pub carbs: f64,
    pub fat: f64,
    pub protein: f64,
    pub selected_serving: SelectedServing,
}

impl ConsumptionItem {
    pub fn new(consumption_id: i64, name: impl Into<String>) -> Self {
        Self {
            consumption_id,
            name: name.into(),
            calories: 0.0,
            carbs: 0.0,
            fat: 0.0,
            protein: 0.0,
            selected_serving: SelectedServing {
                serving_size: ServingSize { id: 0, ratio: 1.0 },
                quantity: 1.0,
            },
        }
    }

    pub fn with_densities(mut self, calories: f64, carbs: f64, fat: f64, protein: f64) -> Self {
        self.calories = calories;
        self.carbs = carbs;
        self.fat = fat;
        self.protein = protein;
        self
    }

    pub fn with_serving(mut self, serving_size_id: i64, ratio: f64, quantity: f64) -> Self {
        self.selected_serving = SelectedServing {
            serving_size: ServingSize {
                id: serving_size_id,
                ratio,
            },
            quantity,
        };
        self
    }

    /// Effective serving multiplier: quantity times serving-size ratio.
    pub fn multiplier(&self) -> f64 {
        self.selected_serving.quantity * self.selected_serving.serving_size.ratio
    }
}

/// An ordered list of consumptions for one meal. Order is the
/// server-reported order and is preserved across removals and updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealBucket {
    #[serde(default)]
    pub items: Vec<ConsumptionItem>,
}

/// All four meal buckets for one day. Buckets missing from a server
/// response deserialize as empty, never as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayMeals {
    #[serde(default)]
    pub breakfast: MealBucket,
    #[serde(default)]
    pub lunch: MealBucket,
    #[serde(default)]
    pub dinner: MealBucket,
    #[serde(default)]
    pub snacks: MealBucket,
}

impl DayMeals {
    pub fn bucket(&self, meal: MealType) -> &MealBucket {
        match meal {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snacks => &self.snacks,
        }
    }

    pub fn bucket_mut(&mut self, meal: MealType) -> &mut MealBucket {
        match meal {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snacks => &mut self.snacks,
        }
    }

    /// Buckets in fixed meal order.
    pub fn iter(&self) -> impl Iterator<Item = (MealType, &MealBucket)> {
        MealType::ALL.iter().map(move |meal| (*meal, self.bucket(*meal)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier() {
        let item = ConsumptionItem::new(1, "Oatmeal").with_serving(4, 2.5, 2.0);
        assert_eq!(item.multiplier(), 5.0);
    }

    #[test]
    fn test_item_wire_shape_is_camel_case() {
        let item = ConsumptionItem::new(17, "Banana")
            .with_densities(89.0, 23.0, 0.3, 1.1)
            .with_serving(3, 1.18, 1.0);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["consumptionId"], 17);
        assert_eq!(json["selectedServing"]["quantity"], 1.0);
        assert_eq!(json["selectedServing"]["servingSize"]["id"], 3);
        assert_eq!(json["selectedServing"]["servingSize"]["ratio"], 1.18);
    }

    #[test]
    fn test_item_json_roundtrip() {
        let item = ConsumptionItem::new(5, "Greek Yogurt")
            .with_densities(59.0, 3.6, 0.4, 10.0)
            .with_serving(2, 1.7, 1.5);

        let json = serde_json::to_string(&item).unwrap();
        let parsed: ConsumptionItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_missing_buckets_deserialize_empty() {
        let meals: DayMeals = serde_json::from_str(
            r#"{"breakfast": {"items": []}, "lunch": {}}"#,
        )
        .unwrap();

        assert!(meals.breakfast.items.is_empty());
        assert!(meals.lunch.items.is_empty());
        assert!(meals.dinner.items.is_empty());
        assert!(meals.snacks.items.is_empty());
    }

    #[test]
    fn test_bucket_lookup_matches_iter_order() {
        let mut meals = DayMeals::default();
        meals.dinner.items.push(ConsumptionItem::new(9, "Pasta"));

        let order: Vec<MealType> = meals.iter().map(|(meal, _)| meal).collect();
        assert_eq!(order, MealType::ALL.to_vec());
        assert_eq!(meals.bucket(MealType::Dinner).items.len(), 1);
        assert!(meals.bucket(MealType::Lunch).items.is_empty());
    }
}
