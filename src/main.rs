use pmd_combat::battle::resolution::Resolution;
use pmd_combat::config::RulesConfig;
use pmd_combat::dice::RandomRoller;
use pmd_combat::errors::ScenarioResult;
use pmd_combat::scenario::Scenario;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_SCENARIO: &str = "data/scenarios/lanzallamas.ron";
const DEFAULT_RULES: &str = "data/rules.ron";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let scenario_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCENARIO));
    let rules_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RULES));

    if let Err(e) = run(&scenario_path, &rules_path) {
        tracing::error!("{}", e);
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(scenario_path: &Path, rules_path: &Path) -> ScenarioResult<()> {
    let config = if rules_path.exists() {
        RulesConfig::load(rules_path)?
    } else {
        tracing::warn!(path = %rules_path.display(), "rules config not found, using defaults");
        RulesConfig::default()
    };

    let scenario = Scenario::load(scenario_path)?;
    let prepared = scenario.prepare(&config)?;
    let mut roller = match scenario.seed {
        Some(seed) => RandomRoller::seeded(seed),
        None => RandomRoller::new(),
    };

    let attacker = &prepared.attacker;
    println!("{} (HP {}/{})", attacker.name, attacker.hp.value, attacker.hp.max);
    for (i, target) in prepared.targets.iter().enumerate() {
        println!(
            "  Target {}: {} (HP {}/{})",
            i + 1,
            target.name,
            target.hp.value,
            target.hp.max
        );
    }
    println!();

    match prepared.run(&config, &mut roller) {
        Resolution::Completed(outcome) => print!("{}", outcome),
        Resolution::Cancelled => println!("Move use cancelled."),
        Resolution::NoPowerPoints => println!("{} has no PP left.", prepared.selected.name()),
    }
    Ok(())
}
