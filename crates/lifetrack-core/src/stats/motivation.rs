use serde::{Deserialize, Serialize};

/// Motivational tier for a 0-100 score. The highest qualifying tier wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotivationTier {
    /// Exactly 100
    MissionComplete,
    /// 90 and up
    Elite,
    /// 75 and up
    Consistent,
    /// 50 and up
    Steady,
    /// 25 and up
    Initiating,
    ZeroHour,
}

impl MotivationTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            100 => MotivationTier::MissionComplete,
            s if s >= 90 => MotivationTier::Elite,
            s if s >= 75 => MotivationTier::Consistent,
            s if s >= 50 => MotivationTier::Steady,
            s if s >= 25 => MotivationTier::Initiating,
            _ => MotivationTier::ZeroHour,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MotivationTier::MissionComplete => "Mission Complete. Every objective has been neutralized.",
            MotivationTier::Elite => "Elite performance. Your focus is unmatched.",
            MotivationTier::Consistent => "Consistent output. Maintain this momentum.",
            MotivationTier::Steady => "Steady progress. You are exactly where you need to be.",
            MotivationTier::Initiating => "Initiating protocol. Increase operational tempo.",
            MotivationTier::ZeroHour => "Zero hour. Your fresh start begins with the next action.",
        }
    }
}

pub fn motivational_message(score: u8) -> &'static str {
    MotivationTier::from_score(score).message()
}

/// Coarse visual band for a progress figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressBand {
    /// Up to 40
    Low,
    /// 41 to 75
    Moderate,
    High,
}

impl ProgressBand {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            0..=40 => ProgressBand::Low,
            41..=75 => ProgressBand::Moderate,
            _ => ProgressBand::High,
        }
    }
}
