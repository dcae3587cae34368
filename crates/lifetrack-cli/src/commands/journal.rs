use clap::Subcommand;
use lifetrack_core::{
    check_journal_grammar, Config, GeminiChecker, GrammarFeedback, NewJournalEntry,
};

use super::{after_mutation, open_store, parse_date, print_json, today};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Write a journal entry
    Add {
        /// Lesson learned (title)
        #[arg(long)]
        lesson: String,
        /// Entry body
        #[arg(long)]
        content: String,
        /// Hours studied
        #[arg(long, default_value = "0")]
        hours: f64,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<chrono::NaiveDate>,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: String,
    },
    /// List entries, newest first
    List {
        /// Only entries whose lesson or content contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Check the grammar of a text
    CheckGrammar {
        /// Text to check
        text: String,
    },
}

pub fn run(action: JournalAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;

    match action {
        JournalAction::Add { lesson, content, hours, date } => {
            let id = store.add_journal_entry(NewJournalEntry {
                date: date.unwrap_or_else(today),
                lesson,
                content,
                study_hours: hours,
            })?;
            println!("Entry created: {id}");
        }
        JournalAction::Delete { id } => {
            store.delete_journal_entry(&id)?;
            println!("ok");
        }
        JournalAction::List { search } => {
            return match search {
                Some(term) => print_json(&store.search_journal(&term)),
                None => print_json(&store.state().journal_entries),
            };
        }
        JournalAction::CheckGrammar { text } => return check_grammar(config, &text),
    }

    after_mutation(config, &store);
    Ok(())
}

fn check_grammar(config: &Config, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let checker = match GeminiChecker::from_config(&config.grammar) {
        Ok(checker) => checker,
        Err(e) => {
            tracing::error!("grammar service not configured: {e}");
            println!("{}", GrammarFeedback::Unavailable.message());
            return Ok(());
        }
    };

    let runtime = tokio::runtime::Runtime::new()?;
    match runtime.block_on(check_journal_grammar(&checker, text)) {
        Some(feedback) => println!("{}", feedback.message()),
        None => println!("Text too short to check."),
    }
    Ok(())
}
