use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::DietType;
use crate::planner::constants::{
    ACTIVITY_LIGHT_ACTIVE, ACTIVITY_MODERATE_ACTIVE, ACTIVITY_SEDENTARY, ACTIVITY_VERY_ACTIVE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!("unknown gender '{}'", other)),
        }
    }
}

/// Lifestyle level with a fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Office job, little exercise.
    Sedentary,
    /// Light exercise.
    LightActive,
    /// Regular exercise.
    ModerateActive,
    /// Athlete.
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightActive,
        ActivityLevel::ModerateActive,
        ActivityLevel::VeryActive,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => ACTIVITY_SEDENTARY,
            ActivityLevel::LightActive => ACTIVITY_LIGHT_ACTIVE,
            ActivityLevel::ModerateActive => ACTIVITY_MODERATE_ACTIVE,
            ActivityLevel::VeryActive => ACTIVITY_VERY_ACTIVE,
        }
    }

    /// Human-readable description used by the prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (Office Job)",
            ActivityLevel::LightActive => "Light Active (Light Exercise)",
            ActivityLevel::ModerateActive => "Moderate Active (Regular Exercise)",
            ActivityLevel::VeryActive => "Very Active (Athlete)",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match squashed.as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" | "lightactive" => Ok(ActivityLevel::LightActive),
            "moderate" | "moderateactive" => Ok(ActivityLevel::ModerateActive),
            "very" | "veryactive" => Ok(ActivityLevel::VeryActive),
            _ => Err(format!("unknown activity level '{}'", s.trim())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessGoal {
    Lose,
    Maintain,
    Gain,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 3] = [FitnessGoal::Lose, FitnessGoal::Maintain, FitnessGoal::Gain];

    pub fn label(&self) -> &'static str {
        match self {
            FitnessGoal::Lose => "Lose Weight",
            FitnessGoal::Maintain => "Maintain Weight",
            FitnessGoal::Gain => "Gain Weight",
        }
    }
}

impl FromStr for FitnessGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" | "lose weight" => Ok(FitnessGoal::Lose),
            "maintain" | "maintain weight" => Ok(FitnessGoal::Maintain),
            "gain" | "gain weight" => Ok(FitnessGoal::Gain),
            other => Err(format!("unknown fitness goal '{}'", other)),
        }
    }
}

/// Per-invocation body metrics and preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    /// Height in meters.
    pub height_m: f64,
    pub weight_kg: f64,
    /// Informational only; planning uses the current weight.
    pub target_weight_kg: f64,
    pub gender: Gender,
    pub activity: ActivityLevel,
    pub goal: FitnessGoal,
    pub diet: DietType,
    /// Displayed but never used to filter selection.
    pub cuisines: Vec<String>,
}

impl UserProfile {
    #[inline]
    pub fn height_cm(&self) -> f64 {
        self.height_m * 100.0
    }
}
