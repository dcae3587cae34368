use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    goal_completion, long_goal_completion, ratio_percent, round_percent, small_goal_completion,
    today_usage, weekly_fitness_readiness, FitnessReadiness, MotivationTier,
};
use crate::AppState;

/// Academic logs that count as "full" activity. Cosmetic, not a target.
const ACADEMIC_LOG_GOAL: f64 = 10.0;

/// Every figure on the dashboard, derived from one state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub small_goals: u8,
    pub long_goals: u8,
    pub goals: u8,
    pub fitness: FitnessReadiness,
    /// Mean of goal and overall fitness percentages.
    pub composite: u8,
    pub academic_activity: u8,
    pub today_usage_minutes: u32,
    pub screen_time: u8,
    pub tier: MotivationTier,
    pub message: String,
}

impl DashboardSummary {
    pub fn compute(state: &AppState, today: NaiveDate) -> Self {
        let goals = goal_completion(&state.small_goals, &state.long_goals);
        let fitness = weekly_fitness_readiness(&state.fitness_history, &state.fitness_targets);
        let composite = round_percent((f64::from(goals) + f64::from(fitness.overall)) / 2.0);

        let usage = today_usage(&state.social_usage, today);
        let screen_time = round_percent(ratio_percent(
            f64::from(usage),
            f64::from(state.screen_time_limit),
        ));
        let academic_activity = round_percent(ratio_percent(
            state.academic_logs.len() as f64,
            ACADEMIC_LOG_GOAL,
        ));

        let tier = MotivationTier::from_score(composite);
        Self {
            small_goals: small_goal_completion(&state.small_goals),
            long_goals: long_goal_completion(&state.long_goals),
            goals,
            fitness,
            composite,
            academic_activity,
            today_usage_minutes: usage,
            screen_time,
            tier,
            message: tier.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{AcademicLog, DailyFitness, Platform, SmallGoal, SocialUsage};

    fn today() -> NaiveDate {
        "2024-05-20".parse().unwrap()
    }

    #[test]
    fn empty_state_scores_zero() {
        let summary = DashboardSummary::compute(&AppState::default(), today());
        assert_eq!(summary.composite, 0);
        assert_eq!(summary.academic_activity, 0);
        assert_eq!(summary.screen_time, 0);
        assert_eq!(summary.tier, MotivationTier::ZeroHour);
    }

    #[test]
    fn composite_averages_goals_and_fitness() {
        let mut state = AppState::default();
        let mut done = SmallGoal::new("done".into());
        done.completed = true;
        state.small_goals = vec![done];
        // small 100, long 0 -> goals 50; fitness all at target -> 100
        state.fitness_history = vec![DailyFitness {
            date: today(),
            pushups: 10,
            pullups: 2,
            plank: 20,
            notes: String::new(),
        }];

        let summary = DashboardSummary::compute(&state, today());
        assert_eq!(summary.goals, 50);
        assert_eq!(summary.fitness.overall, 100);
        assert_eq!(summary.composite, 75);
        assert_eq!(summary.tier, MotivationTier::Consistent);
    }

    #[test]
    fn academic_activity_caps_at_ten_logs() {
        let mut state = AppState::default();
        let log = AcademicLog {
            id: "x".into(),
            date: today(),
            subject: "Math".into(),
            topic: "Sets".into(),
            intel: "unions".into(),
            time_spent: 10,
        };
        state.academic_logs = vec![log.clone(); 3];
        assert_eq!(DashboardSummary::compute(&state, today()).academic_activity, 30);
        state.academic_logs = vec![log; 14];
        assert_eq!(DashboardSummary::compute(&state, today()).academic_activity, 100);
    }

    #[test]
    fn screen_time_relative_to_limit() {
        let mut state = AppState::default();
        state.screen_time_limit = 120;
        state.social_usage = vec![SocialUsage {
            id: "u".into(),
            platform: Platform::YouTube,
            minutes: 90,
            date: today(),
        }];
        let summary = DashboardSummary::compute(&state, today());
        assert_eq!(summary.today_usage_minutes, 90);
        assert_eq!(summary.screen_time, 75);

        state.screen_time_limit = 0;
        assert_eq!(DashboardSummary::compute(&state, today()).screen_time, 0);
    }
}
