use clap::{Args, Parser, Subcommand};
use tracing::warn;

use crate::error::{PlannerError, Result};
use crate::interface::{resolve_cuisine, DEFAULT_CUISINE};
use crate::models::{
    ActivityLevel, DietType, FitnessGoal, Gender, MealCategory, MealDistribution, UserProfile,
};
use crate::planner::constants::{
    AGE_MAX, HEIGHT_CM_MAX, HEIGHT_CM_MIN, MEAL_SHARE_MAX, WEIGHT_KG_MAX, WEIGHT_KG_MIN,
};

/// Magic Meal Planner: turns body metrics into a seven-day meal schedule.
#[derive(Parser, Debug)]
#[command(name = "magic_meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV file.
    #[arg(short, long, global = true, default_value = "data/indian_foods_sample.csv")]
    pub catalog: String,

    /// Log filter (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = crate::logging::DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Interactively build a profile and generate a weekly plan.
    #[default]
    Plan,

    /// Generate a weekly plan from command-line flags.
    Report(ReportArgs),

    /// List the cuisine tags found in the catalog.
    Cuisines,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[arg(long, default_value_t = 25)]
    pub age: u32,

    #[arg(long, default_value_t = 170.0)]
    pub height_cm: f64,

    /// Current weight in kg.
    #[arg(long, default_value_t = 70.0)]
    pub weight: f64,

    /// Target weight in kg (defaults to current weight).
    #[arg(long)]
    pub target_weight: Option<f64>,

    /// male, female or other.
    #[arg(long, default_value = "male")]
    pub gender: Gender,

    /// sedentary, light, moderate or very.
    #[arg(long, default_value = "sedentary")]
    pub activity: ActivityLevel,

    /// lose, maintain or gain.
    #[arg(long, default_value = "maintain")]
    pub goal: FitnessGoal,

    /// veg or non-veg.
    #[arg(long, default_value = "veg")]
    pub diet: DietType,

    /// Preferred cuisine; repeat for several.
    #[arg(long = "cuisine")]
    pub cuisines: Vec<String>,

    /// Breakfast share of daily calories, in percent.
    #[arg(long, default_value_t = 25.0)]
    pub breakfast: f64,

    #[arg(long, default_value_t = 30.0)]
    pub lunch: f64,

    #[arg(long, default_value_t = 30.0)]
    pub dinner: f64,

    #[arg(long, default_value_t = 15.0)]
    pub snack: f64,

    /// Print metrics and plan as JSON.
    #[arg(long)]
    pub json: bool,
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(PlannerError::InvalidInput(format!(
            "{} must be between {} and {}, got {}",
            name, min, max, value
        )))
    }
}

impl ReportArgs {
    /// Raw meal shares, each checked against the slider range.
    pub fn distribution(&self) -> Result<MealDistribution> {
        let dist = MealDistribution::new(self.breakfast, self.lunch, self.dinner, self.snack);
        for category in MealCategory::ALL {
            check_range(category.as_str(), dist.share(category), 0.0, MEAL_SHARE_MAX)?;
        }
        Ok(dist)
    }

    /// Build a validated profile, resolving cuisines against the catalog tags.
    pub fn profile(&self, cuisine_options: &[String]) -> Result<UserProfile> {
        check_range("age", self.age as f64, 0.0, AGE_MAX as f64)?;
        check_range("height", self.height_cm, HEIGHT_CM_MIN, HEIGHT_CM_MAX)?;
        check_range("weight", self.weight, WEIGHT_KG_MIN, WEIGHT_KG_MAX)?;
        let target_weight_kg = self.target_weight.unwrap_or(self.weight);
        check_range("target weight", target_weight_kg, WEIGHT_KG_MIN, WEIGHT_KG_MAX)?;

        let cuisines = if self.cuisines.is_empty() {
            cuisine_options
                .iter()
                .filter(|o| o.eq_ignore_ascii_case(DEFAULT_CUISINE))
                .cloned()
                .collect()
        } else {
            self.cuisines
                .iter()
                .filter_map(|c| {
                    let resolved = resolve_cuisine(c, cuisine_options);
                    if resolved.is_none() {
                        warn!(cuisine = %c, "unknown cuisine, ignoring");
                    }
                    resolved
                })
                .collect()
        };

        Ok(UserProfile {
            age: self.age,
            height_m: self.height_cm / 100.0,
            weight_kg: self.weight,
            target_weight_kg,
            gender: self.gender,
            activity: self.activity,
            goal: self.goal,
            diet: self.diet,
            cuisines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_plan() {
        let cli = Cli::parse_from(["magic_meal_planner"]);
        assert!(matches!(cli.command.unwrap_or_default(), Command::Plan));
        assert_eq!(cli.catalog, "data/indian_foods_sample.csv");
    }

    #[test]
    fn test_report_flags() {
        let cli = Cli::parse_from([
            "magic_meal_planner",
            "report",
            "--gender",
            "female",
            "--activity",
            "very",
            "--goal",
            "lose",
            "--diet",
            "non-veg",
            "--cuisine",
            "Bengali",
            "--cuisine",
            "Goan",
            "--snack",
            "0",
            "--json",
            "--catalog",
            "foods.csv",
        ]);

        assert_eq!(cli.catalog, "foods.csv");
        let Some(Command::Report(args)) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.gender, Gender::Female);
        assert_eq!(args.activity, ActivityLevel::VeryActive);
        assert_eq!(args.goal, FitnessGoal::Lose);
        assert_eq!(args.diet, DietType::NonVeg);
        assert_eq!(args.cuisines, vec!["Bengali", "Goan"]);
        assert!(args.json);
        assert_eq!(
            args.distribution().unwrap(),
            MealDistribution::new(25.0, 30.0, 30.0, 0.0)
        );
    }

    fn report_args(extra: &[&str]) -> ReportArgs {
        let mut argv = vec!["magic_meal_planner", "report"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Some(Command::Report(args)) => args,
            other => panic!("expected report command, got {:?}", other),
        }
    }

    #[test]
    fn test_profile_defaults() {
        let options = vec!["South Indian".to_string(), "North Indian".to_string()];
        let profile = report_args(&[]).profile(&options).unwrap();

        assert_eq!(profile.age, 25);
        assert!((profile.height_m - 1.7).abs() < 1e-9);
        assert_eq!(profile.target_weight_kg, 70.0);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.cuisines, vec!["North Indian"]);
    }

    #[test]
    fn test_profile_resolves_cuisines() {
        let options = vec!["South Indian".to_string(), "Gujarati".to_string()];
        let args = report_args(&["--cuisine", "south indian", "--cuisine", "Martian"]);
        let profile = args.profile(&options).unwrap();
        assert_eq!(profile.cuisines, vec!["South Indian"]);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(report_args(&["--height-cm", "90"]).profile(&[]).is_err());
        assert!(report_args(&["--weight", "250"]).profile(&[]).is_err());
        assert!(report_args(&["--age", "130"]).profile(&[]).is_err());
        assert!(report_args(&["--breakfast", "45"]).distribution().is_err());
    }

    #[test]
    fn test_bad_enum_rejected() {
        let result = Cli::try_parse_from(["magic_meal_planner", "report", "--diet", "vegan"]);
        assert!(result.is_err());
    }
}
