use serde::{Deserialize, Serialize};

use super::{ratio_percent, round_percent};
use crate::records::{DailyFitness, FitnessTargets};

/// Progress toward the weekly fitness targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FitnessReadiness {
    pub pushups: u8,
    pub pullups: u8,
    pub plank: u8,
    pub overall: u8,
}

/// Sum each metric across `history` and compare it to its target.
///
/// The overall figure averages the unrounded per-metric percentages, so it
/// can differ by one from the mean of the three rounded values.
pub fn weekly_fitness_readiness(history: &[DailyFitness], targets: &FitnessTargets) -> FitnessReadiness {
    let sum = |metric: fn(&DailyFitness) -> u32| -> f64 {
        history.iter().map(|h| u64::from(metric(h))).sum::<u64>() as f64
    };

    let pushups = ratio_percent(sum(|h| h.pushups), f64::from(targets.pushups));
    let pullups = ratio_percent(sum(|h| h.pullups), f64::from(targets.pullups));
    let plank = ratio_percent(sum(|h| h.plank), f64::from(targets.plank));

    FitnessReadiness {
        pushups: round_percent(pushups),
        pullups: round_percent(pullups),
        plank: round_percent(plank),
        overall: round_percent((pushups + pullups + plank) / 3.0),
    }
}
