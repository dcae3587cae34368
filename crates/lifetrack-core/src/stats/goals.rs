use super::{ratio_percent, round_percent};
use crate::records::{LongGoal, SmallGoal};

/// Share of short-term goals marked complete.
pub fn small_goal_completion(goals: &[SmallGoal]) -> u8 {
    let completed = goals.iter().filter(|g| g.completed).count();
    round_percent(ratio_percent(completed as f64, goals.len() as f64))
}

/// Mean progress across long-term goals.
pub fn long_goal_completion(goals: &[LongGoal]) -> u8 {
    if goals.is_empty() {
        return 0;
    }
    let total: u32 = goals.iter().map(|g| u32::from(g.progress.min(100))).sum();
    round_percent(f64::from(total) / goals.len() as f64)
}

/// Mean of the short- and long-term completion percentages.
pub fn goal_completion(small: &[SmallGoal], long: &[LongGoal]) -> u8 {
    let sum = u32::from(small_goal_completion(small)) + u32::from(long_goal_completion(long));
    round_percent(f64::from(sum) / 2.0)
}
