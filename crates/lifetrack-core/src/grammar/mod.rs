//! Grammar check for journal content.
//!
//! The core only sees [`GrammarChecker`]: text in, a verdict or an error
//! out. [`GeminiChecker`] is the HTTP adapter used by default. Callers
//! that just need something to show the user go through
//! [`check_journal_grammar`], which never fails.

mod gemini;

pub use gemini::GeminiChecker;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::GrammarError;

/// Shortest text worth sending.
pub const MIN_CHECK_LEN: usize = 5;

/// Reply the service gives for flawless text.
pub const PERFECT_SENTINEL: &str = "PERFECT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrammarVerdict {
    Perfect,
    /// Human-readable list of corrections.
    Corrections(String),
}

impl GrammarVerdict {
    /// Classify a raw service reply by exact comparison with the sentinel.
    pub fn from_reply(reply: &str) -> Self {
        let reply = reply.trim();
        if reply == PERFECT_SENTINEL {
            GrammarVerdict::Perfect
        } else if reply.is_empty() {
            GrammarVerdict::Corrections("No feedback available.".to_string())
        } else {
            GrammarVerdict::Corrections(reply.to_string())
        }
    }
}

pub trait GrammarChecker {
    fn check(&self, text: &str) -> impl Future<Output = Result<GrammarVerdict, GrammarError>> + Send;
}

/// What to show after a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrammarFeedback {
    Correct,
    Corrections(String),
    Unavailable,
}

impl GrammarFeedback {
    pub fn message(&self) -> &str {
        match self {
            GrammarFeedback::Correct => "Scan Complete: Your grammar is correct.",
            GrammarFeedback::Corrections(text) => text,
            GrammarFeedback::Unavailable => "Service temporarily unavailable.",
        }
    }
}

/// Run a check and turn the outcome into a status message.
///
/// Returns `None` for text too short to check. Failures of any kind become
/// [`GrammarFeedback::Unavailable`]; the cause is only logged.
pub async fn check_journal_grammar<C: GrammarChecker>(
    checker: &C,
    text: &str,
) -> Option<GrammarFeedback> {
    if text.chars().count() < MIN_CHECK_LEN {
        return None;
    }

    let feedback = match checker.check(text).await {
        Ok(GrammarVerdict::Perfect) => GrammarFeedback::Correct,
        Ok(GrammarVerdict::Corrections(text)) => GrammarFeedback::Corrections(text),
        Err(e) => {
            tracing::error!("grammar check failed: {e}");
            GrammarFeedback::Unavailable
        }
    };
    Some(feedback)
}
