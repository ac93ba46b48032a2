//! Day view state: the authoritative in-memory record of what was
//! eaten on the selected day, kept consistent with the backend.
//!
//! All mutations go through the remote service first; the local store
//! is only touched after the service confirms success. Totals are
//! derived fresh on every read and never cached.

use chrono::NaiveDate;

use super::totals;
use crate::api::{ConsumptionService, ServiceError};
use crate::models::{ConsumptionItem, DayMeals, DayTotals, MealTotals, MealType};

/// What happens to the burned-calories entry when the user navigates
/// to another day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BurnedCaloriesPolicy {
    /// Burned calories describe a single day; clear on navigation
    #[default]
    Reset,
    /// Keep the entry across day changes
    Keep,
}

/// Errors surfaced at the day-view boundary. None of these leave the
/// store in a partially mutated state.
#[derive(Debug)]
pub enum DayViewError {
    /// The day's consumptions could not be fetched
    LoadFailed(ServiceError),
    /// The delete request failed; the item is still in its bucket
    ItemRemovalFailed(ServiceError),
    /// The update request failed; the bucket is unchanged
    ServingUpdateFailed(ServiceError),
    /// A serving update was submitted with no changed item
    NoServingChange,
    /// A serving update changed more than one item
    AmbiguousServingChange { changed: usize },
    /// A serving update's item list does not match the bucket's length
    BucketShapeMismatch { expected: usize, got: usize },
    /// Calories-burned input was not a non-negative whole number
    InvalidCaloriesBurned(String),
}

impl std::fmt::Display for DayViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayViewError::LoadFailed(e) => {
                write!(f, "Failed to load the day's consumptions: {}", e)
            }
            DayViewError::ItemRemovalFailed(e) => {
                write!(f, "This item couldn't be removed: {}", e)
            }
            DayViewError::ServingUpdateFailed(e) => {
                write!(f, "There was a problem updating this serving size: {}", e)
            }
            DayViewError::NoServingChange => {
                write!(f, "No serving change found in the submitted items")
            }
            DayViewError::AmbiguousServingChange { changed } => {
                write!(
                    f,
                    "Serving updates must change exactly one item, found {} changes",
                    changed
                )
            }
            DayViewError::BucketShapeMismatch { expected, got } => {
                write!(
                    f,
                    "Submitted list has {} item(s) but the bucket has {}",
                    got, expected
                )
            }
            DayViewError::InvalidCaloriesBurned(input) => {
                write!(
                    f,
                    "Calories burned must be a non-negative whole number, got '{}'",
                    input
                )
            }
        }
    }
}

impl std::error::Error for DayViewError {}

/// Ties an in-flight fetch to the load that issued it, so a response
/// that was overtaken by a newer load can be recognized and dropped.
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket {
    seq: u64,
    day: NaiveDate,
}

impl LoadTicket {
    /// The day this load was issued for.
    pub fn day(&self) -> NaiveDate {
        self.day
    }
}

/// The day aggregator: selected day, four meal buckets, burned
/// calories, and the busy flags collaborators render from.
pub struct DayView<S> {
    service: S,
    user_id: i64,
    selected_day: NaiveDate,
    meals: DayMeals,
    calories_burned: Option<u32>,
    loading_items: bool,
    removing_item: bool,
    burned_policy: BurnedCaloriesPolicy,
    load_seq: u64,
}

impl<S: ConsumptionService> DayView<S> {
    /// Creates an empty view for `day`. `loading_items` starts true;
    /// the caller is expected to issue the initial [`load`](Self::load).
    pub fn new(service: S, user_id: i64, day: NaiveDate) -> Self {
        Self {
            service,
            user_id,
            selected_day: day,
            meals: DayMeals::default(),
            calories_burned: None,
            loading_items: true,
            removing_item: false,
            burned_policy: BurnedCaloriesPolicy::default(),
            load_seq: 0,
        }
    }

    pub fn with_burned_policy(mut self, policy: BurnedCaloriesPolicy) -> Self {
        self.burned_policy = policy;
        self
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.selected_day
    }

    pub fn meals(&self) -> &DayMeals {
        &self.meals
    }

    pub fn calories_burned(&self) -> Option<u32> {
        self.calories_burned
    }

    pub fn loading_items(&self) -> bool {
        self.loading_items
    }

    pub fn removing_item(&self) -> bool {
        self.removing_item
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Fetches the selected day and replaces all four buckets at once.
    /// Equivalent to [`begin_load`](Self::begin_load) followed by
    /// [`apply_load`](Self::apply_load).
    pub async fn load(&mut self) -> Result<(), DayViewError> {
        let ticket = self.begin_load();
        let result = self.service.fetch_day(self.user_id, ticket.day()).await;
        self.apply_load(ticket, result)
    }

    /// Marks the view as loading and issues a ticket for the fetch.
    /// Each call supersedes all earlier tickets.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        self.loading_items = true;
        LoadTicket {
            seq: self.load_seq,
            day: self.selected_day,
        }
    }

    /// Applies a fetch outcome. A response whose ticket is no longer
    /// the latest issued is discarded without touching the store.
    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<DayMeals, ServiceError>,
    ) -> Result<(), DayViewError> {
        if ticket.seq != self.load_seq {
            tracing::debug!(
                stale = ticket.seq,
                latest = self.load_seq,
                "discarding stale day load"
            );
            return Ok(());
        }

        self.loading_items = false;
        match result {
            Ok(meals) => {
                self.meals = meals;
                Ok(())
            }
            Err(e) => Err(DayViewError::LoadFailed(e)),
        }
    }

    /// Switches the view to `new_day` and reloads its buckets.
    pub async fn change_day(&mut self, new_day: NaiveDate) -> Result<(), DayViewError> {
        self.selected_day = new_day;
        if self.burned_policy == BurnedCaloriesPolicy::Reset {
            self.calories_burned = None;
        }
        self.load().await
    }

    /// Deletes one consumption on the server, then excises it from
    /// whichever bucket holds it. The `removing_item` flag is held for
    /// the whole operation and cleared on both outcomes.
    pub async fn remove_item(&mut self, consumption_id: i64) -> Result<(), DayViewError> {
        self.removing_item = true;
        let result = self.service.delete_consumption(consumption_id).await;
        let outcome = match result {
            Ok(()) => {
                self.excise(consumption_id);
                Ok(())
            }
            Err(e) => Err(DayViewError::ItemRemovalFailed(e)),
        };
        self.removing_item = false;
        outcome
    }

    fn excise(&mut self, consumption_id: i64) {
        for meal in MealType::ALL {
            let bucket = self.meals.bucket_mut(meal);
            if let Some(index) = bucket
                .items
                .iter()
                .position(|item| item.consumption_id == consumption_id)
            {
                bucket.items.remove(index);
                return;
            }
        }
        tracing::warn!(consumption_id, "deleted consumption was not present locally");
    }

    /// Applies a single-item serving edit, submitted as a full
    /// replacement list for one bucket. Exactly one item may differ
    /// from the current bucket (by serving-size id or quantity); the
    /// changed record is sent to the server and, on success, the whole
    /// bucket is swapped for `new_items`.
    pub async fn update_serving(
        &mut self,
        meal: MealType,
        new_items: Vec<ConsumptionItem>,
    ) -> Result<(), DayViewError> {
        let current = &self.meals.bucket(meal).items;
        if current.len() != new_items.len() {
            return Err(DayViewError::BucketShapeMismatch {
                expected: current.len(),
                got: new_items.len(),
            });
        }

        let mut changed: Option<&ConsumptionItem> = None;
        let mut diffs = 0;
        for (old, new) in current.iter().zip(&new_items) {
            let serving_changed = old.selected_serving.serving_size.id
                != new.selected_serving.serving_size.id
                || old.selected_serving.quantity != new.selected_serving.quantity;
            if serving_changed {
                diffs += 1;
                changed = Some(new);
            }
        }

        let updated = match (diffs, changed) {
            (1, Some(item)) => item.clone(),
            (0, _) => return Err(DayViewError::NoServingChange),
            (n, _) => return Err(DayViewError::AmbiguousServingChange { changed: n }),
        };

        self.service
            .update_consumption(updated.consumption_id, &updated)
            .await
            .map_err(DayViewError::ServingUpdateFailed)?;

        self.meals.bucket_mut(meal).items = new_items;
        Ok(())
    }

    /// Records calories burned for the current day. The value is
    /// session-local and never sent to the server. Empty input clears
    /// it; anything that is not a non-negative whole number is
    /// rejected before any state changes.
    pub fn set_calories_burned(&mut self, input: &str) -> Result<(), DayViewError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.calories_burned = None;
            return Ok(());
        }
        match trimmed.parse::<u32>() {
            Ok(calories) => {
                self.calories_burned = Some(calories);
                Ok(())
            }
            Err(_) => Err(DayViewError::InvalidCaloriesBurned(input.to_string())),
        }
    }

    /// Totals for one meal, recomputed from the bucket.
    pub fn meal_totals(&self, meal: MealType) -> MealTotals {
        totals::meal_totals(&self.meals.bucket(meal).items)
    }

    /// Totals for the whole day, recomputed from all buckets.
    pub fn day_totals(&self) -> DayTotals {
        let per_meal: Vec<MealTotals> = MealType::ALL
            .iter()
            .map(|meal| self.meal_totals(*meal))
            .collect();
        totals::day_totals(&per_meal, self.calories_burned)
    }
}
