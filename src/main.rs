use clap::Parser;
use tracing::{info, warn};

use magic_meal_planner_rs::catalog::CatalogCache;
use magic_meal_planner_rs::cli::{Cli, Command, ReportArgs};
use magic_meal_planner_rs::error::{PlannerError, Result};
use magic_meal_planner_rs::interface::{
    collect_plan_inputs, display_cuisines, display_report, prompt_yes_no, PlanReport,
    PromptDefaults,
};
use magic_meal_planner_rs::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let cache = CatalogCache::new(&cli.catalog);
    let command = cli.command.unwrap_or_default();
    info!(?command, catalog = %cache.path().display(), "starting");

    match command {
        Command::Plan => cmd_plan(&cache),
        Command::Report(args) => cmd_report(&cache, &args),
        Command::Cuisines => cmd_cuisines(&cache),
    }
}

/// Interactive session: prompt, plan, render, and offer to go again.
fn cmd_plan(cache: &CatalogCache) -> Result<()> {
    let catalog = cache.get_or_load()?;
    println!("Loaded {} foods", catalog.len());
    println!();

    let cuisines = catalog.cuisines();
    let mut defaults = PromptDefaults::default();

    loop {
        // Cached after the first round.
        let catalog = cache.get_or_load()?;
        let (profile, distribution) = collect_plan_inputs(&cuisines, &defaults)?;
        defaults = PromptDefaults::from_previous(&profile, &distribution);

        match PlanReport::build(catalog, profile, &distribution) {
            Ok(report) => display_report(&report),
            Err(PlannerError::InvalidDistribution(reason)) => {
                warn!(%reason, "rejected meal distribution");
                println!("{}", reason);
            }
            Err(e) => return Err(e),
        }

        if !prompt_yes_no("Adjust your preferences and regenerate?", false)? {
            break;
        }
        println!();
    }

    Ok(())
}

/// One-shot plan from command-line flags.
fn cmd_report(cache: &CatalogCache, args: &ReportArgs) -> Result<()> {
    let catalog = cache.get_or_load()?;
    let profile = args.profile(&catalog.cuisines())?;
    let distribution = args.distribution()?;

    let report = PlanReport::build(catalog, profile, &distribution)?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        display_report(&report);
    }

    Ok(())
}

/// List distinct cuisine tags.
fn cmd_cuisines(cache: &CatalogCache) -> Result<()> {
    let catalog = cache.get_or_load()?;
    display_cuisines(&catalog.cuisines());
    Ok(())
}
