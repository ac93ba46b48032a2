use serde::Serialize;

/// Derived nutrient totals for one meal bucket. Never stored; always
/// recomputed from the bucket's items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MealTotals {
    pub calories: i32,
    pub carbs: i32,
    pub fat: i32,
    pub protein: i32,
}

/// Derived totals for the whole day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTotals {
    pub calories_eaten: i32,
    pub net_calories: i32,
    pub carbs: i32,
    pub fat: i32,
    pub protein: i32,
}
