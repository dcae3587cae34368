//! Reminder commands.
//!
//! The study reminder's sent date is kept in the data dir, so it fires at
//! most once per day across invocations. `watch` re-reads state every tick
//! to pick up changes made by other invocations.

use std::time::Duration;

use clap::Subcommand;
use lifetrack_core::{Config, Notifier};
use serde_json::json;

use super::{load_evaluator, open_store, print_json, save_evaluator, today};
use crate::notifier::StdoutNotifier;

#[derive(Subcommand)]
pub enum RemindAction {
    /// Evaluate reminders once and print any that are due
    Check,
    /// Re-evaluate reminders periodically
    Watch {
        /// Seconds between checks
        #[arg(long, default_value = "60")]
        interval: u64,
        /// Stop after this many checks
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        ticks: Option<u32>,
    },
    /// Allow notifications
    Enable,
    /// Deny notifications
    Disable,
    /// Show the notification permission and today's reminder status
    Status,
}

pub fn run(action: RemindAction, mut config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut notifier = StdoutNotifier::new(config.notifications.permission);

    match action {
        RemindAction::Check => {
            let store = open_store(&config)?;
            let mut evaluator = load_evaluator();
            let sent = evaluator.deliver(store.state(), today(), &mut notifier);
            if sent == 0 {
                println!("no reminders due");
            } else {
                save_evaluator(&evaluator);
            }
        }
        RemindAction::Watch { interval, ticks } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(watch(&config, &mut notifier, interval, ticks))?;
        }
        RemindAction::Enable => {
            config.notifications.permission = notifier.request_permission();
            config.save()?;
            println!("notifications enabled");
        }
        RemindAction::Disable => {
            config.notifications.permission = lifetrack_core::NotificationPermission::Denied;
            config.save()?;
            println!("notifications disabled");
        }
        RemindAction::Status => {
            let store = open_store(&config)?;
            let pending =
                load_evaluator().evaluate(store.state(), today(), notifier.permission());
            print_json(&json!({
                "permission": notifier.permission(),
                "mutedToday": store.state().mute_reminders_date == Some(today()),
                "pending": pending,
            }))?;
        }
    }
    Ok(())
}

async fn watch(
    config: &Config,
    notifier: &mut StdoutNotifier,
    interval: u64,
    ticks: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut evaluator = load_evaluator();
    let mut timer = tokio::time::interval(Duration::from_secs(interval.max(1)));
    let mut remaining = ticks;

    loop {
        timer.tick().await;
        let store = open_store(config)?;
        let sent = evaluator.deliver(store.state(), today(), notifier);
        tracing::debug!(sent, "reminder tick");
        if sent > 0 {
            save_evaluator(&evaluator);
        }

        if let Some(n) = remaining.as_mut() {
            *n = n.saturating_sub(1);
            if *n == 0 {
                return Ok(());
            }
        }
    }
}
