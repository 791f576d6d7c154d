use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::MealCategory;

/// Share of daily calories per meal, in percent.
///
/// Raw slider values need not sum to 100; call [`MealDistribution::normalized`]
/// before handing the distribution to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealDistribution {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snack: f64,
}

impl Default for MealDistribution {
    fn default() -> Self {
        Self {
            breakfast: 25.0,
            lunch: 30.0,
            dinner: 30.0,
            snack: 15.0,
        }
    }
}

impl MealDistribution {
    pub fn new(breakfast: f64, lunch: f64, dinner: f64, snack: f64) -> Self {
        Self {
            breakfast,
            lunch,
            dinner,
            snack,
        }
    }

    pub fn share(&self, category: MealCategory) -> f64 {
        match category {
            MealCategory::Breakfast => self.breakfast,
            MealCategory::Lunch => self.lunch,
            MealCategory::Dinner => self.dinner,
            MealCategory::Snack => self.snack,
        }
    }

    pub fn total(&self) -> f64 {
        MealCategory::ALL.iter().map(|c| self.share(*c)).sum()
    }

    /// Rescale so the four shares sum to 100.
    ///
    /// Negative or non-finite shares and an all-zero distribution are rejected.
    pub fn normalized(&self) -> Result<Self> {
        for category in MealCategory::ALL {
            let share = self.share(category);
            if !share.is_finite() || share < 0.0 {
                return Err(PlannerError::InvalidDistribution(format!(
                    "{} share must be a non-negative number, got {}",
                    category, share
                )));
            }
        }

        // Scale by the largest share first so the sum cannot overflow.
        let largest = MealCategory::ALL
            .iter()
            .map(|c| self.share(*c))
            .fold(0.0_f64, f64::max);
        if largest <= 0.0 {
            return Err(PlannerError::InvalidDistribution(
                "at least one meal needs a positive share".to_string(),
            ));
        }

        let scaled = Self {
            breakfast: self.breakfast / largest,
            lunch: self.lunch / largest,
            dinner: self.dinner / largest,
            snack: self.snack / largest,
        };
        let total = scaled.total();

        Ok(Self {
            breakfast: scaled.breakfast / total * 100.0,
            lunch: scaled.lunch / total * 100.0,
            dinner: scaled.dinner / total * 100.0,
            snack: scaled.snack / total * 100.0,
        })
    }
}
