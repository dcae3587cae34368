use clap::Subcommand;
use lifetrack_core::Config;

use super::{after_mutation, open_store};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Switch between light and dark
    Toggle,
    /// Print the current theme
    Show,
}

pub fn run(action: ThemeAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;
    match action {
        ThemeAction::Toggle => {
            let dark = store.toggle_dark_mode()?;
            println!("{}", if dark { "dark" } else { "light" });
            after_mutation(config, &store);
        }
        ThemeAction::Show => {
            println!("{}", if store.state().dark_mode { "dark" } else { "light" });
        }
    }
    Ok(())
}
