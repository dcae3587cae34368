use clap::Subcommand;
use lifetrack_core::stats::today_usage;
use lifetrack_core::{Config, Platform};
use serde_json::json;

use super::{after_mutation, open_store, parse_date, print_json, today};

#[derive(Subcommand)]
pub enum SocialAction {
    /// Log time spent on a platform
    Add {
        /// Instagram, TikTok, X, Facebook, YouTube, Gaming or Other
        #[arg(value_parser = str::parse::<Platform>)]
        platform: Platform,
        /// Minutes spent (must be positive)
        minutes: u32,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<chrono::NaiveDate>,
    },
    /// Delete a usage record
    Delete {
        /// Record ID
        id: String,
    },
    /// Set the daily screen-time limit in minutes
    Limit {
        minutes: u32,
    },
    /// Mute or unmute today's screen-time alert
    Mute,
    /// List usage records with today's total
    List,
}

pub fn run(action: SocialAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;

    match action {
        SocialAction::Add { platform, minutes, date } => {
            let id = store.add_social_usage(platform, minutes, date.unwrap_or_else(today))?;
            println!("Usage logged: {id}");
        }
        SocialAction::Delete { id } => {
            store.delete_social_usage(&id)?;
            println!("ok");
        }
        SocialAction::Limit { minutes } => {
            store.set_screen_time_limit(minutes)?;
            println!("ok");
        }
        SocialAction::Mute => {
            let muted = store.toggle_mute(today())?;
            println!("{}", if muted { "muted for today" } else { "unmuted" });
        }
        SocialAction::List => {
            let state = store.state();
            return print_json(&json!({
                "limit": state.screen_time_limit,
                "todayMinutes": today_usage(&state.social_usage, today()),
                "mutedToday": state.mute_reminders_date == Some(today()),
                "usage": state.social_usage,
            }));
        }
    }

    after_mutation(config, &store);
    Ok(())
}
