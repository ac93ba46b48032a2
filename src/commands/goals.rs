use clap::{Args, Subcommand};

use crate::api::{ApiClient, ConsumptionService};
use crate::config::Config;
use crate::models::GoalUpdate;

#[derive(Args)]
pub struct GoalsCommand {
    #[command(subcommand)]
    pub command: GoalsSubcommand,
}

#[derive(Subcommand)]
pub enum GoalsSubcommand {
    /// Show the user's nutrition goals
    Show,

    /// Set one or more nutrition goals; omitted goals are untouched
    Set {
        /// Daily calorie goal
        #[arg(long)]
        calories: Option<i32>,

        /// Carbohydrate goal (g)
        #[arg(long)]
        carbs: Option<i32>,

        /// Fat goal (g)
        #[arg(long)]
        fat: Option<i32>,

        /// Protein goal (g)
        #[arg(long)]
        protein: Option<i32>,

        /// Fiber goal (g)
        #[arg(long)]
        fiber: Option<i32>,

        /// Sugar goal (g)
        #[arg(long)]
        sugar: Option<i32>,

        /// Sodium goal (mg)
        #[arg(long)]
        sodium: Option<i32>,
    },
}

impl GoalsCommand {
    pub async fn run(
        &self,
        service: &ApiClient,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            GoalsSubcommand::Show => {
                let goal = service.fetch_goal(config.user_id).await?;

                println!("Nutrition Goals");
                println!("===============");
                print_goal("calories", goal.calories, "kcal");
                print_goal("carbs", goal.carbs, "g");
                print_goal("fat", goal.fat, "g");
                print_goal("protein", goal.protein, "g");
                print_goal("fiber", goal.fiber, "g");
                print_goal("sugar", goal.sugar, "g");
                print_goal("sodium", goal.sodium, "mg");
                Ok(())
            }
            GoalsSubcommand::Set {
                calories,
                carbs,
                fat,
                protein,
                fiber,
                sugar,
                sodium,
            } => {
                let update = GoalUpdate {
                    user_id: config.user_id,
                    calories: *calories,
                    carbs: *carbs,
                    fat: *fat,
                    protein: *protein,
                    fiber: *fiber,
                    sugar: *sugar,
                    sodium: *sodium,
                };
                if !update.has_changes() {
                    return Err("Provide at least one goal value to set".into());
                }

                service.save_goal(&update).await?;
                println!("Your goals have been updated.");
                Ok(())
            }
        }
    }
}

fn print_goal(name: &str, value: Option<i32>, unit: &str) {
    match value {
        Some(v) => println!("  {:9} {} {}", format!("{}:", name), v, unit),
        None => println!("  {:9} (not set)", format!("{}:", name)),
    }
}
