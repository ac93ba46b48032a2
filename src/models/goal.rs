use serde::{Deserialize, Deserializer, Serialize};

/// Nutrition goals for one user, as reported by the server.
///
/// The server stores unset goals as `-1`; that sentinel is mapped to
/// `None` on deserialization so callers never see it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Goal {
    #[serde(deserialize_with = "unset_as_none")]
    pub calories: Option<i32>,
    #[serde(deserialize_with = "unset_as_none")]
    pub carbs: Option<i32>,
    #[serde(deserialize_with = "unset_as_none")]
    pub fat: Option<i32>,
    #[serde(deserialize_with = "unset_as_none")]
    pub protein: Option<i32>,
    #[serde(deserialize_with = "unset_as_none")]
    pub fiber: Option<i32>,
    #[serde(deserialize_with = "unset_as_none")]
    pub sugar: Option<i32>,
    #[serde(deserialize_with = "unset_as_none")]
    pub sodium: Option<i32>,
}

fn unset_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i32::deserialize(deserializer)?;
    Ok(if value == -1 { None } else { Some(value) })
}

/// Partial goal update. Only fields the user filled in are serialized,
/// so untouched goals keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<i32>,
}

impl GoalUpdate {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// True if at least one goal field is being set.
    pub fn has_changes(&self) -> bool {
        self.calories.is_some()
            || self.carbs.is_some()
            || self.fat.is_some()
            || self.protein.is_some()
            || self.fiber.is_some()
            || self.sugar.is_some()
            || self.sodium.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_sentinel_maps_to_none() {
        let goal: Goal = serde_json::from_str(
            r#"{"calories": 2300, "carbs": -1, "fat": 80, "protein": -1,
                "fiber": 20, "sugar": -1, "sodium": 1600}"#,
        )
        .unwrap();

        assert_eq!(goal.calories, Some(2300));
        assert_eq!(goal.carbs, None);
        assert_eq!(goal.fat, Some(80));
        assert_eq!(goal.protein, None);
        assert_eq!(goal.fiber, Some(20));
        assert_eq!(goal.sugar, None);
        assert_eq!(goal.sodium, Some(1600));
    }

    #[test]
    fn test_goal_update_serializes_only_set_fields() {
        let mut update = GoalUpdate::new(1);
        update.calories = Some(2100);
        update.protein = Some(110);

        let json = serde_json::to_value(&update).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(json["userId"], 1);
        assert_eq!(json["calories"], 2100);
        assert_eq!(json["protein"], 110);
    }

    #[test]
    fn test_goal_update_has_changes() {
        let mut update = GoalUpdate::new(1);
        assert!(!update.has_changes());
        update.sodium = Some(1500);
        assert!(update.has_changes());
    }
}
