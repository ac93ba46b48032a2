//! Pure totals derivation.
//!
//! Nothing here is cached: callers recompute from the day's buckets on
//! every read, so identical inputs always give identical output.

use crate::models::{ConsumptionItem, DayTotals, MealTotals};

/// Sums one meal bucket. Each nutrient is rounded per item before
/// summing, matching the per-row figures the user sees.
pub fn meal_totals(items: &[ConsumptionItem]) -> MealTotals {
    let mut totals = MealTotals::default();
    for item in items {
        let multiplier = item.multiplier();
        totals.calories += rounded(item.calories * multiplier);
        totals.carbs += rounded(item.carbs * multiplier);
        totals.fat += rounded(item.fat * multiplier);
        totals.protein += rounded(item.protein * multiplier);
    }
    totals
}

/// Sums meal totals into day totals. Unset burned calories count as
/// zero here; the distinction from an explicit zero is display-only.
pub fn day_totals(meal_totals: &[MealTotals], calories_burned: Option<u32>) -> DayTotals {
    let mut calories_eaten = 0;
    let mut carbs = 0;
    let mut fat = 0;
    let mut protein = 0;

    for totals in meal_totals {
        calories_eaten += totals.calories;
        carbs += totals.carbs;
        fat += totals.fat;
        protein += totals.protein;
    }

    DayTotals {
        calories_eaten,
        net_calories: calories_eaten - calories_burned.unwrap_or(0) as i32,
        carbs,
        fat,
        protein,
    }
}

fn rounded(value: f64) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, calories: f64, quantity: f64, ratio: f64) -> ConsumptionItem {
        ConsumptionItem::new(id, format!("food-{}", id))
            .with_densities(calories, 0.0, 0.0, 0.0)
            .with_serving(1, ratio, quantity)
    }

    #[test]
    fn test_single_item_meal_total() {
        let bucket = vec![item(1, 100.0, 2.0, 1.0)];
        assert_eq!(meal_totals(&bucket).calories, 200);
    }

    #[test]
    fn test_each_nutrient_rounds_independently() {
        let items = vec![ConsumptionItem::new(1, "Peanut Butter")
            .with_densities(94.0, 3.6, 8.1, 3.55)
            .with_serving(1, 0.5, 1.0)];

        let totals = meal_totals(&items);
        assert_eq!(totals.calories, 47);
        assert_eq!(totals.carbs, 2);
        assert_eq!(totals.fat, 4);
        assert_eq!(totals.protein, 2);
    }

    #[test]
    fn test_bucket_total_is_sum_of_item_contributions() {
        let items = vec![
            item(1, 33.4, 1.0, 1.0),
            item(2, 33.4, 1.0, 1.0),
            item(3, 33.4, 1.0, 1.0),
        ];

        // 33 + 33 + 33, not round(100.2)
        assert_eq!(meal_totals(&items).calories, 99);
    }

    #[test]
    fn test_empty_bucket_is_zero() {
        assert_eq!(meal_totals(&[]), MealTotals::default());
    }

    #[test]
    fn test_day_totals_sum_and_net() {
        let lunch = meal_totals(&[item(1, 50.0, 1.0, 2.0), item(2, 30.0, 3.0, 1.0)]);
        assert_eq!(lunch.calories, 190);

        let per_meal = [MealTotals::default(), lunch, MealTotals::default(), MealTotals::default()];
        let day = day_totals(&per_meal, Some(40));
        assert_eq!(day.calories_eaten, 190);
        assert_eq!(day.net_calories, 150);
    }

    #[test]
    fn test_unset_burned_counts_as_zero() {
        let per_meal = [meal_totals(&[item(1, 120.0, 1.0, 1.0)])];
        let day = day_totals(&per_meal, None);
        assert_eq!(day.calories_eaten, 120);
        assert_eq!(day.net_calories, 120);
    }

    #[test]
    fn test_net_can_go_negative() {
        let per_meal = [meal_totals(&[item(1, 100.0, 1.0, 1.0)])];
        let day = day_totals(&per_meal, Some(250));
        assert_eq!(day.net_calories, -150);
    }

    #[test]
    fn test_determinism() {
        let items = vec![item(1, 87.3, 2.0, 1.3), item(2, 12.9, 0.5, 4.0)];
        assert_eq!(meal_totals(&items), meal_totals(&items));
    }
}
