use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{
    ActivityLevel, DietType, FitnessGoal, Gender, MealCategory, MealDistribution, UserProfile,
};
use crate::planner::constants::{
    AGE_MAX, HEIGHT_CM_MAX, HEIGHT_CM_MIN, MEAL_SHARE_MAX, WEIGHT_KG_MAX, WEIGHT_KG_MIN,
};

/// Cuisine pre-selected when the catalog offers it.
pub const DEFAULT_CUISINE: &str = "North Indian";

/// Minimum Jaro-Winkler similarity for a fuzzy cuisine match.
const CUISINE_MATCH_THRESHOLD: f64 = 0.8;

/// Resolve a free-text cuisine against the catalog tags.
///
/// Exact (case-insensitive) matches win; otherwise the closest tag above the
/// similarity threshold is returned.
pub fn resolve_cuisine(input: &str, options: &[String]) -> Option<String> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(exact) = options.iter().find(|o| o.to_lowercase() == needle) {
        return Some(exact.clone());
    }

    options
        .iter()
        .map(|o| (o, jaro_winkler(&o.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > CUISINE_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(o, _)| o.clone())
}

/// Prompt for a number within an inclusive range, re-asking until valid.
fn prompt_in_range(prompt: &str, default: f64, min: f64, max: f64) -> Result<f64> {
    let value = Input::<f64>::new()
        .with_prompt(prompt)
        .default(default)
        .validate_with(move |v: &f64| -> std::result::Result<(), String> {
            if (min..=max).contains(v) {
                Ok(())
            } else {
                Err(format!("Enter a value between {} and {}", min, max))
            }
        })
        .interact_text()?;

    Ok(value)
}

fn prompt_choice(prompt: &str, labels: &[&str], default: usize) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(default)
        .interact()?)
}

const DIETS: [DietType; 2] = [DietType::Veg, DietType::NonVeg];

fn index_of<T: PartialEq>(items: &[T], value: &T) -> usize {
    items.iter().position(|item| item == value).unwrap_or(0)
}

/// Pre-filled answers for one round of prompts.
///
/// The first round starts from fixed defaults; later rounds start from the
/// previous answers so the user only changes what they want to.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptDefaults {
    pub age: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// `None` means "same as current weight".
    pub target_weight_kg: Option<f64>,
    pub gender: usize,
    pub activity: usize,
    pub diet: usize,
    pub goal: usize,
    pub cuisines: Option<Vec<String>>,
    pub distribution: MealDistribution,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            age: 25.0,
            height_cm: 170.0,
            weight_kg: 70.0,
            target_weight_kg: None,
            gender: 0,
            activity: 0,
            diet: 0,
            goal: index_of(&FitnessGoal::ALL, &FitnessGoal::Maintain),
            cuisines: None,
            distribution: MealDistribution::default(),
        }
    }
}

impl PromptDefaults {
    pub fn from_previous(profile: &UserProfile, distribution: &MealDistribution) -> Self {
        Self {
            age: profile.age as f64,
            height_cm: profile.height_cm(),
            weight_kg: profile.weight_kg,
            target_weight_kg: Some(profile.target_weight_kg),
            gender: index_of(&Gender::ALL, &profile.gender),
            activity: index_of(&ActivityLevel::ALL, &profile.activity),
            diet: index_of(&DIETS, &profile.diet),
            goal: index_of(&FitnessGoal::ALL, &profile.goal),
            cuisines: Some(profile.cuisines.clone()),
            distribution: *distribution,
        }
    }

    /// Which cuisine options start ticked.
    fn cuisine_flags(&self, options: &[String]) -> Vec<bool> {
        options
            .iter()
            .map(|o| match &self.cuisines {
                Some(previous) => previous.iter().any(|p| p.eq_ignore_ascii_case(o)),
                None => o.eq_ignore_ascii_case(DEFAULT_CUISINE),
            })
            .collect()
    }
}

/// Prompt for the cuisines the user enjoys.
pub fn prompt_cuisines(options: &[String], defaults: &PromptDefaults) -> Result<Vec<String>> {
    if options.is_empty() {
        return Ok(Vec::new());
    }

    let picked = MultiSelect::new()
        .with_prompt("Preferred cuisines (space to toggle)")
        .items(options)
        .defaults(&defaults.cuisine_flags(options))
        .interact()?;

    Ok(picked.into_iter().map(|i| options[i].clone()).collect())
}

/// Collect body metrics and preferences.
pub fn prompt_profile(
    cuisine_options: &[String],
    defaults: &PromptDefaults,
) -> Result<UserProfile> {
    let age = prompt_in_range("Age", defaults.age, 0.0, AGE_MAX as f64)?.round() as u32;
    let height_cm =
        prompt_in_range("Height (cm)", defaults.height_cm, HEIGHT_CM_MIN, HEIGHT_CM_MAX)?;
    let weight_kg = prompt_in_range(
        "Current weight (kg)",
        defaults.weight_kg,
        WEIGHT_KG_MIN,
        WEIGHT_KG_MAX,
    )?;

    let gender_labels: Vec<&str> = Gender::ALL.iter().map(|g| g.as_str()).collect();
    let gender = Gender::ALL[prompt_choice("Gender", &gender_labels, defaults.gender)?];

    let activity_labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let activity =
        ActivityLevel::ALL[prompt_choice("Lifestyle", &activity_labels, defaults.activity)?];

    let diet_labels: Vec<&str> = DIETS.iter().map(|d| d.as_str()).collect();
    let diet = DIETS[prompt_choice("Food preference", &diet_labels, defaults.diet)?];

    let goal_labels: Vec<&str> = FitnessGoal::ALL.iter().map(|g| g.label()).collect();
    let goal = FitnessGoal::ALL[prompt_choice("Fitness goal", &goal_labels, defaults.goal)?];

    let target_weight_kg = prompt_in_range(
        "Target weight (kg)",
        defaults.target_weight_kg.unwrap_or(weight_kg),
        WEIGHT_KG_MIN,
        WEIGHT_KG_MAX,
    )?;

    let cuisines = prompt_cuisines(cuisine_options, defaults)?;

    Ok(UserProfile {
        age,
        height_m: height_cm / 100.0,
        weight_kg,
        target_weight_kg,
        gender,
        activity,
        goal,
        diet,
        cuisines,
    })
}

/// Collect the raw calorie share per meal (not yet normalized).
pub fn prompt_distribution(defaults: &MealDistribution) -> Result<MealDistribution> {
    println!("Adjust how you want your daily calories distributed:");

    let mut shares = [0.0; 4];
    for (slot, category) in shares.iter_mut().zip(MealCategory::ALL) {
        *slot = prompt_in_range(
            &format!("{} %", category),
            defaults.share(category),
            0.0,
            MEAL_SHARE_MAX,
        )?;
    }

    Ok(MealDistribution::new(shares[0], shares[1], shares[2], shares[3]))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect everything one planning round needs, pre-filled from `defaults`.
pub fn collect_plan_inputs(
    cuisine_options: &[String],
    defaults: &PromptDefaults,
) -> Result<(UserProfile, MealDistribution)> {
    let profile = prompt_profile(cuisine_options, defaults)?;
    println!();
    let distribution = prompt_distribution(&defaults.distribution)?;
    Ok((profile, distribution))
}
