#[macro_use]
extern crate assert_float_eq;

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use magic_meal_planner_rs::catalog::{load_catalog, Catalog};
use magic_meal_planner_rs::interface::PlanReport;
use magic_meal_planner_rs::models::{
    ActivityLevel, DietType, FitnessGoal, FoodItem, Gender, MealCategory, MealDistribution,
    UserProfile,
};
use magic_meal_planner_rs::planner::{category_target, generate_plan, CALORIE_HEADROOM, PLAN_DAYS};

fn sample_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/indian_foods_sample.csv")
}

fn bundled_catalog() -> Catalog {
    load_catalog(sample_catalog_path()).unwrap()
}

fn food(name: &str, category: MealCategory, diet: DietType, calories: f64) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        category,
        diet,
        tags: vec!["Test".to_string()],
        calories,
        protein: 10.0,
        carbs: 20.0,
        fat: 5.0,
    }
}

/// Brute-force reference: minimum gap among eligible rows, first one on ties.
fn expected_pick<'a>(
    catalog: &'a Catalog,
    diet: DietType,
    category: MealCategory,
    target: f64,
) -> Option<&'a FoodItem> {
    let mut best: Option<&FoodItem> = None;
    for item in catalog.iter() {
        if item.diet != diet || item.category != category {
            continue;
        }
        if item.calories > target * CALORIE_HEADROOM {
            continue;
        }
        let better = match best {
            None => true,
            Some(b) => (item.calories - target).abs() < (b.calories - target).abs(),
        };
        if better {
            best = Some(item);
        }
    }
    best
}

#[test]
fn test_bundled_catalog_plans_full_week() {
    let catalog = bundled_catalog();
    let plan =
        generate_plan(&catalog, 2000.0, DietType::Veg, &MealDistribution::default()).unwrap();

    assert_eq!(plan.days.len(), PLAN_DAYS);
    for (i, day) in plan.days.iter().enumerate() {
        assert_eq!(day.label, format!("Day {}", i + 1));
        assert_eq!(day.meals.len(), 4);
        let categories: Vec<MealCategory> = day.meals.iter().map(|m| m.category).collect();
        assert_eq!(categories, MealCategory::ALL.to_vec());
    }
}

#[test]
fn test_selection_matches_brute_force() {
    let catalog = bundled_catalog();
    let distribution = MealDistribution::new(20.0, 35.0, 30.0, 15.0);

    for diet in [DietType::Veg, DietType::NonVeg] {
        for target in [900.0, 1500.0, 2040.07, 2600.0, 3400.0] {
            let plan = generate_plan(&catalog, target, diet, &distribution).unwrap();
            let norm = distribution.normalized().unwrap();

            for category in MealCategory::ALL {
                let cat_target = category_target(target, norm.share(category));
                let expected = expect_name(expected_pick(&catalog, diet, category, cat_target));

                for day in &plan.days {
                    let got = day.meal(category).map(|m| m.food.name.clone());
                    assert_eq!(got, expected, "diet {} target {} {}", diet, target, category);
                }
            }
        }
    }
}

fn expect_name(item: Option<&FoodItem>) -> Option<String> {
    item.map(|f| f.name.clone())
}

#[test]
fn test_idempotent() {
    let catalog = bundled_catalog();
    let dist = MealDistribution::new(30.0, 30.0, 25.0, 15.0);

    let first = generate_plan(&catalog, 1850.0, DietType::NonVeg, &dist).unwrap();
    let second = generate_plan(&catalog, 1850.0, DietType::NonVeg, &dist).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_diet_filter_is_exact() {
    let catalog = bundled_catalog();
    let plan =
        generate_plan(&catalog, 2200.0, DietType::NonVeg, &MealDistribution::default()).unwrap();

    assert!(!plan.is_empty());
    assert!(plan.meals().all(|m| m.food.diet == DietType::NonVeg));
}

#[test]
fn test_empty_when_diet_excludes_everything() {
    let catalog = Catalog::new(vec![
        food("Idli", MealCategory::Breakfast, DietType::Veg, 200.0),
        food("Dal", MealCategory::Dinner, DietType::Veg, 500.0),
    ]);

    let plan =
        generate_plan(&catalog, 2000.0, DietType::NonVeg, &MealDistribution::default()).unwrap();
    assert!(plan.is_empty());
    assert_eq!(plan.meal_count(), 0);
}

#[test]
fn test_missing_category_skipped_every_day() {
    let catalog = Catalog::new(vec![
        food("Idli", MealCategory::Breakfast, DietType::Veg, 450.0),
        food("Dal", MealCategory::Dinner, DietType::Veg, 550.0),
        // Over the 1.2x cap for a 300 kcal snack.
        food("Jalebi", MealCategory::Snack, DietType::Veg, 400.0),
    ]);

    let plan =
        generate_plan(&catalog, 2000.0, DietType::Veg, &MealDistribution::default()).unwrap();

    assert_eq!(plan.days.len(), PLAN_DAYS);
    for day in &plan.days {
        assert_eq!(day.meals.len(), 2);
        assert!(day.meal(MealCategory::Lunch).is_none());
        assert!(day.meal(MealCategory::Snack).is_none());
    }
}

#[test]
fn test_tie_broken_by_catalog_order() {
    let catalog = Catalog::new(vec![
        food("Low Lunch", MealCategory::Lunch, DietType::Veg, 550.0),
        food("High Lunch", MealCategory::Lunch, DietType::Veg, 650.0),
    ]);
    // Lunch target = 2000 * 30% = 600; both are 50 away.
    let plan =
        generate_plan(&catalog, 2000.0, DietType::Veg, &MealDistribution::default()).unwrap();
    assert_eq!(plan.days[0].meals[0].food.name, "Low Lunch");

    let swapped = Catalog::new(vec![
        food("High Lunch", MealCategory::Lunch, DietType::Veg, 650.0),
        food("Low Lunch", MealCategory::Lunch, DietType::Veg, 550.0),
    ]);
    let plan =
        generate_plan(&swapped, 2000.0, DietType::Veg, &MealDistribution::default()).unwrap();
    assert_eq!(plan.days[0].meals[0].food.name, "High Lunch");
}

#[test]
fn test_tiny_item_has_no_lower_bound() {
    let catalog = Catalog::new(vec![food("Water", MealCategory::Snack, DietType::Veg, 1.0)]);
    let plan =
        generate_plan(&catalog, 2000.0, DietType::Veg, &MealDistribution::default()).unwrap();
    assert_eq!(plan.meal_count(), PLAN_DAYS);
}

#[test]
fn test_raw_distribution_normalized_before_targets() {
    let catalog = bundled_catalog();
    let raw = MealDistribution::new(40.0, 40.0, 40.0, 40.0);
    let plan = generate_plan(&catalog, 2000.0, DietType::Veg, &raw).unwrap();

    for meal in plan.meals() {
        assert_float_absolute_eq!(meal.target_calories, 500.0, 1e-9);
        assert!(meal.food.calories <= 600.0);
    }
}

#[test]
fn test_normalization_sums_to_100() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let raw = MealDistribution::new(
            rng.gen_range(0.01..=40.0),
            rng.gen_range(0.01..=40.0),
            rng.gen_range(0.01..=40.0),
            rng.gen_range(0.01..=40.0),
        );
        let norm = raw.normalized().unwrap();
        assert_float_absolute_eq!(norm.total(), 100.0, 1e-9);

        // Proportions are preserved.
        assert_float_absolute_eq!(
            norm.breakfast / norm.lunch,
            raw.breakfast / raw.lunch,
            1e-9
        );
    }
}

#[test]
fn test_cuisine_preference_does_not_filter() {
    let catalog = bundled_catalog();
    let profile = |cuisines: &[&str]| UserProfile {
        age: 30,
        height_m: 1.65,
        weight_kg: 60.0,
        target_weight_kg: 58.0,
        gender: Gender::Female,
        activity: ActivityLevel::LightActive,
        goal: FitnessGoal::Lose,
        diet: DietType::Veg,
        cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
    };
    let dist = MealDistribution::default();

    let south = PlanReport::build(&catalog, profile(&["South Indian"]), &dist).unwrap();
    let unknown = PlanReport::build(&catalog, profile(&["Atlantis Cuisine"]), &dist).unwrap();
    let none = PlanReport::build(&catalog, profile(&[]), &dist).unwrap();

    assert!(!south.plan.is_empty());
    assert_eq!(south.plan, unknown.plan);
    assert_eq!(south.plan, none.plan);
}
