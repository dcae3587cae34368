use clap::Subcommand;
use lifetrack_core::stats::subject_distribution;
use lifetrack_core::{Config, NewAcademicLog};
use serde_json::json;

use super::{after_mutation, open_store, parse_date, print_json, today};

#[derive(Subcommand)]
pub enum AcademicAction {
    /// Log a study session
    Log {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        topic: String,
        /// What was learned
        #[arg(long)]
        intel: String,
        /// Minutes spent
        #[arg(long, default_value = "0")]
        minutes: u32,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<chrono::NaiveDate>,
    },
    /// Delete a study log
    DeleteLog {
        /// Log ID
        id: String,
    },
    /// Plan a study session for tomorrow
    Plan {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        topic: String,
    },
    /// Delete a plan
    DeletePlan {
        /// Plan ID
        id: String,
    },
    /// List logs, plans and time per subject
    List,
}

pub fn run(action: AcademicAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;

    match action {
        AcademicAction::Log { subject, topic, intel, minutes, date } => {
            let id = store.add_academic_log(NewAcademicLog {
                date: date.unwrap_or_else(today),
                subject,
                topic,
                intel,
                time_spent: minutes,
            })?;
            println!("Log created: {id}");
        }
        AcademicAction::DeleteLog { id } => {
            store.delete_academic_log(&id)?;
            println!("ok");
        }
        AcademicAction::Plan { subject, topic } => {
            let id = store.add_academic_plan(&subject, &topic, today())?;
            println!("Plan created: {id}");
        }
        AcademicAction::DeletePlan { id } => {
            store.delete_academic_plan(&id)?;
            println!("ok");
        }
        AcademicAction::List => {
            let state = store.state();
            return print_json(&json!({
                "logs": state.academic_logs,
                "plans": state.academic_plans,
                "subjects": subject_distribution(&state.academic_logs),
            }));
        }
    }

    after_mutation(config, &store);
    Ok(())
}
