use clap::Subcommand;
use lifetrack_core::stats::weekly_fitness_readiness;
use lifetrack_core::{Config, DailyFitness, FitnessTargets};
use serde_json::json;

use super::{after_mutation, open_store, parse_date, print_json, today};

#[derive(Subcommand)]
pub enum FitnessAction {
    /// Set weekly targets
    Targets {
        #[arg(long)]
        pushups: Option<u32>,
        #[arg(long)]
        pullups: Option<u32>,
        /// Plank seconds
        #[arg(long)]
        plank: Option<u32>,
    },
    /// Record a day's workout, replacing any record for that date
    Log {
        #[arg(long, default_value = "0")]
        pushups: u32,
        #[arg(long, default_value = "0")]
        pullups: u32,
        /// Plank seconds
        #[arg(long, default_value = "0")]
        plank: u32,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<chrono::NaiveDate>,
    },
    /// Show history, targets and readiness
    Show,
}

pub fn run(action: FitnessAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;

    match action {
        FitnessAction::Targets { pushups, pullups, plank } => {
            let current = store.state().fitness_targets;
            let targets = FitnessTargets {
                pushups: pushups.unwrap_or(current.pushups),
                pullups: pullups.unwrap_or(current.pullups),
                plank: plank.unwrap_or(current.plank),
            };
            store.set_fitness_targets(targets)?;
            print_json(&targets)?;
        }
        FitnessAction::Log { pushups, pullups, plank, notes, date } => {
            let entry = DailyFitness {
                date: date.unwrap_or_else(today),
                pushups,
                pullups,
                plank,
                notes,
            };
            store.record_daily_fitness(entry)?;
            println!("ok");
        }
        FitnessAction::Show => {
            let state = store.state();
            return print_json(&json!({
                "targets": state.fitness_targets,
                "readiness": weekly_fitness_readiness(&state.fitness_history, &state.fitness_targets),
                "history": state.fitness_history,
            }));
        }
    }

    after_mutation(config, &store);
    Ok(())
}
