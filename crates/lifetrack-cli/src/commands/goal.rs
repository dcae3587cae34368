//! Goal commands.

use clap::Subcommand;
use lifetrack_core::stats::{goal_completion, long_goal_completion, small_goal_completion};
use lifetrack_core::{Config, ProgressBand};
use serde_json::json;

use super::{after_mutation, open_store, print_json, today};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Add a short-term goal
    Add {
        /// Goal name
        name: String,
    },
    /// Toggle a short-term goal's completion
    Toggle {
        /// Goal ID
        id: String,
    },
    /// Delete a short-term goal
    Delete {
        /// Goal ID
        id: String,
    },
    /// Add a long-term goal
    AddLong {
        /// Goal name
        name: String,
    },
    /// Set a long-term goal's progress (0-100)
    Progress {
        /// Goal ID
        id: String,
        /// Progress percentage; values above 100 are capped
        percent: u8,
    },
    /// Record a learning on a long-term goal
    Learn {
        /// Goal ID
        id: String,
        /// What was learned
        intel: String,
    },
    /// Delete a long-term goal
    DeleteLong {
        /// Goal ID
        id: String,
    },
    /// List all goals with completion figures
    List,
}

pub fn run(action: GoalAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;

    match action {
        GoalAction::Add { name } => {
            let id = store.add_small_goal(&name)?;
            println!("Goal created: {id}");
        }
        GoalAction::Toggle { id } => {
            let completed = store.toggle_small_goal(&id)?;
            println!("{}", if completed { "completed" } else { "pending" });
        }
        GoalAction::Delete { id } => {
            store.delete_small_goal(&id)?;
            println!("ok");
        }
        GoalAction::AddLong { name } => {
            let id = store.add_long_goal(&name)?;
            println!("Goal created: {id}");
        }
        GoalAction::Progress { id, percent } => {
            store.set_long_goal_progress(&id, percent)?;
            println!("ok");
        }
        GoalAction::Learn { id, intel } => {
            store.add_learning(&id, today(), &intel)?;
            println!("ok");
        }
        GoalAction::DeleteLong { id } => {
            store.delete_long_goal(&id)?;
            println!("ok");
        }
        GoalAction::List => {
            let state = store.state();
            let long_goals: Vec<_> = state
                .long_goals
                .iter()
                .map(|g| json!({ "goal": g, "band": ProgressBand::from_percent(g.progress) }))
                .collect();
            return print_json(&json!({
                "smallGoals": state.small_goals,
                "longGoals": long_goals,
                "completion": {
                    "small": small_goal_completion(&state.small_goals),
                    "long": long_goal_completion(&state.long_goals),
                    "overall": goal_completion(&state.small_goals, &state.long_goals),
                },
            }));
        }
    }

    after_mutation(config, &store);
    Ok(())
}
