pub mod consumption;
pub mod goal;
pub mod meal_type;
pub mod totals;

pub use consumption::{ConsumptionItem, DayMeals, MealBucket, SelectedServing, ServingSize};
pub use goal::{Goal, GoalUpdate};
pub use meal_type::MealType;
pub use totals::{DayTotals, MealTotals};
