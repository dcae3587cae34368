use clap::Subcommand;
use lifetrack_core::{Config, DashboardSummary};

use super::{open_store, print_json, today};

#[derive(Subcommand)]
pub enum DashboardAction {
    /// All progress figures as JSON
    Show,
    /// Just the motivational message
    Motivation,
}

pub fn run(action: DashboardAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config)?;
    let summary = DashboardSummary::compute(store.state(), today());

    match action {
        DashboardAction::Show => print_json(&summary)?,
        DashboardAction::Motivation => println!("{}", summary.message),
    }
    Ok(())
}
