use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand, ValueEnum};

use crate::api::ApiClient;
use crate::config::Config;
use crate::day::{BurnedCaloriesPolicy, DayView};
use crate::models::{ConsumptionItem, MealType, ServingSize};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct DayCommand {
    #[command(subcommand)]
    pub command: DaySubcommand,
}

#[derive(Subcommand)]
pub enum DaySubcommand {
    /// Show a day's meals and totals
    Show {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Calories burned from activity, included in net calories
        #[arg(long)]
        burned: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Remove a logged consumption
    Remove {
        /// Consumption ID to remove
        consumption_id: i64,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Change the serving of a logged consumption
    Serving {
        /// Consumption ID to update
        consumption_id: i64,

        /// New number of servings
        #[arg(long, short)]
        quantity: Option<f64>,

        /// New serving size ID (requires --ratio)
        #[arg(long)]
        serving_id: Option<i64>,

        /// Base-unit ratio of the new serving size
        #[arg(long)]
        ratio: Option<f64>,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Record calories burned and show the resulting net calories
    Activity {
        /// Calories burned from activity
        calories: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },
}

impl DayCommand {
    pub async fn run(
        &self,
        service: ApiClient,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            DaySubcommand::Show {
                date,
                burned,
                format,
            } => self.show(service, config, date, burned, format).await,
            DaySubcommand::Remove {
                consumption_id,
                date,
            } => self.remove(service, config, *consumption_id, date).await,
            DaySubcommand::Serving {
                consumption_id,
                quantity,
                serving_id,
                ratio,
                date,
            } => {
                self.serving(
                    service,
                    config,
                    *consumption_id,
                    *quantity,
                    *serving_id,
                    *ratio,
                    date,
                )
                .await
            }
            DaySubcommand::Activity { calories, date } => {
                self.activity(service, config, calories, date).await
            }
        }
    }

    async fn load_view(
        &self,
        service: ApiClient,
        config: &Config,
        date: &Option<String>,
    ) -> Result<DayView<ApiClient>, Box<dyn std::error::Error>> {
        let day = parse_date(date)?;
        let policy = if config.keep_burned_on_day_change {
            BurnedCaloriesPolicy::Keep
        } else {
            BurnedCaloriesPolicy::Reset
        };

        let mut view = DayView::new(service, config.user_id, day).with_burned_policy(policy);
        view.load().await?;
        Ok(view)
    }

    async fn show(
        &self,
        service: ApiClient,
        config: &Config,
        date: &Option<String>,
        burned: &Option<String>,
        format: &OutputFormat,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut view = self.load_view(service, config, date).await?;
        if let Some(burned) = burned {
            view.set_calories_burned(burned)?;
        }

        match format {
            OutputFormat::Json => print_day_json(&view)?,
            OutputFormat::Text => print_day(&view),
        }
        Ok(())
    }

    async fn remove(
        &self,
        service: ApiClient,
        config: &Config,
        consumption_id: i64,
        date: &Option<String>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut view = self.load_view(service, config, date).await?;

        let known = view
            .meals()
            .iter()
            .any(|(_, bucket)| bucket.items.iter().any(|i| i.consumption_id == consumption_id));
        if !known {
            return Err(format!(
                "No consumption {} found on {}",
                consumption_id,
                view.selected_day()
            )
            .into());
        }

        view.remove_item(consumption_id).await?;

        println!("Removed consumption {}.", consumption_id);
        println!();
        print_day(&view);
        Ok(())
    }

    async fn serving(
        &self,
        service: ApiClient,
        config: &Config,
        consumption_id: i64,
        quantity: Option<f64>,
        serving_id: Option<i64>,
        ratio: Option<f64>,
        date: &Option<String>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if quantity.is_none() && serving_id.is_none() {
            return Err("Provide --quantity and/or --serving-id with --ratio".into());
        }
        let new_serving_size = match (serving_id, ratio) {
            (Some(id), Some(ratio)) => Some(ServingSize { id, ratio }),
            (Some(_), None) => return Err("--serving-id requires --ratio".into()),
            (None, Some(_)) => return Err("--ratio requires --serving-id".into()),
            (None, None) => None,
        };

        let mut view = self.load_view(service, config, date).await?;

        let located = view.meals().iter().find_map(|(meal, bucket)| {
            bucket
                .items
                .iter()
                .position(|i| i.consumption_id == consumption_id)
                .map(|index| (meal, index))
        });
        let (meal, index) = located.ok_or_else(|| {
            format!(
                "No consumption {} found on {}",
                consumption_id,
                view.selected_day()
            )
        })?;

        let mut new_items: Vec<ConsumptionItem> = view.meals().bucket(meal).items.clone();
        if let Some(quantity) = quantity {
            new_items[index].selected_serving.quantity = quantity;
        }
        if let Some(serving_size) = new_serving_size {
            new_items[index].selected_serving.serving_size = serving_size;
        }

        view.update_serving(meal, new_items).await?;

        println!("Updated serving for consumption {}.", consumption_id);
        println!();
        print_day(&view);
        Ok(())
    }

    async fn activity(
        &self,
        service: ApiClient,
        config: &Config,
        calories: &str,
        date: &Option<String>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut view = self.load_view(service, config, date).await?;
        view.set_calories_burned(calories)?;

        let totals = view.day_totals();
        println!("{}", view.selected_day());
        println!("Calories eaten:  {}", totals.calories_eaten);
        match view.calories_burned() {
            Some(burned) => println!("Calories burned: {}", burned),
            None => println!("Calories burned: (not set)"),
        }
        println!("Net calories:    {}", totals.net_calories);
        Ok(())
    }
}

fn parse_date(date: &Option<String>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date format '{}'. Use YYYY-MM-DD.", d).into()),
        None => Ok(Local::now().date_naive()),
    }
}

fn print_day(view: &DayView<ApiClient>) {
    println!("{}", view.selected_day());
    println!("{}", "=".repeat(10));

    for (meal, bucket) in view.meals().iter() {
        println!();
        println!("{}", capitalize(&meal.to_string()));
        if bucket.items.is_empty() {
            println!("  (nothing logged)");
            continue;
        }
        for item in &bucket.items {
            let calories = (item.calories * item.multiplier()).round() as i32;
            println!(
                "  [{}] {:24} {} x {:.2}  {} cal",
                item.consumption_id,
                item.name,
                item.selected_serving.quantity,
                item.selected_serving.serving_size.ratio,
                calories
            );
        }
        let totals = view.meal_totals(meal);
        println!(
            "  total: {} cal, {} g carbs, {} g fat, {} g protein",
            totals.calories, totals.carbs, totals.fat, totals.protein
        );
    }

    let totals = view.day_totals();
    println!();
    println!("Calories eaten:  {}", totals.calories_eaten);
    if let Some(burned) = view.calories_burned() {
        println!("Calories burned: {}", burned);
        println!("Net calories:    {}", totals.net_calories);
    }
    println!(
        "Macros: {} g carbs, {} g fat, {} g protein",
        totals.carbs, totals.fat, totals.protein
    );
}

fn print_day_json(view: &DayView<ApiClient>) -> Result<(), Box<dyn std::error::Error>> {
    let meal_totals: serde_json::Map<String, serde_json::Value> = MealType::ALL
        .iter()
        .map(|meal| {
            (
                meal.to_string(),
                serde_json::json!(view.meal_totals(*meal)),
            )
        })
        .collect();

    let output = serde_json::json!({
        "date": view.selected_day(),
        "meals": view.meals(),
        "mealTotals": meal_totals,
        "dayTotals": view.day_totals(),
        "caloriesBurned": view.calories_burned(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
