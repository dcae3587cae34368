use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::{AcademicLog, SocialUsage};
use crate::AppState;

/// Total screen minutes logged for `day`.
pub fn today_usage(usage: &[SocialUsage], day: NaiveDate) -> u32 {
    usage
        .iter()
        .filter(|u| u.date == day)
        .map(|u| u.minutes)
        .fold(0u32, u32::saturating_add)
}

/// Any academic log, or a journal entry with study hours, dated `day`.
pub fn has_studied(state: &AppState, day: NaiveDate) -> bool {
    state.academic_logs.iter().any(|log| log.date == day)
        || state
            .journal_entries
            .iter()
            .any(|entry| entry.date == day && entry.study_hours > 0.0)
}

/// Minutes spent on one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectTime {
    pub subject: String,
    pub minutes: u32,
}

/// Study minutes per subject, in order of first appearance.
pub fn subject_distribution(logs: &[AcademicLog]) -> Vec<SubjectTime> {
    let mut out: Vec<SubjectTime> = Vec::new();
    for log in logs {
        match out.iter_mut().find(|s| s.subject == log.subject) {
            Some(entry) => entry.minutes = entry.minutes.saturating_add(log.time_spent),
            None => out.push(SubjectTime {
                subject: log.subject.clone(),
                minutes: log.time_spent,
            }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Platform;

    fn log(subject: &str, minutes: u32) -> AcademicLog {
        AcademicLog {
            id: crate::records::new_id(),
            date: "2024-04-01".parse().unwrap(),
            subject: subject.into(),
            topic: "t".into(),
            intel: "i".into(),
            time_spent: minutes,
        }
    }

    #[test]
    fn usage_counts_only_the_given_day() {
        let day: NaiveDate = "2024-04-01".parse().unwrap();
        let usage = vec![
            SocialUsage { id: "a".into(), platform: Platform::X, minutes: 20, date: day },
            SocialUsage { id: "b".into(), platform: Platform::Gaming, minutes: 45, date: day },
            SocialUsage {
                id: "c".into(),
                platform: Platform::X,
                minutes: 300,
                date: day.pred_opt().unwrap(),
            },
        ];
        assert_eq!(today_usage(&usage, day), 65);
        assert_eq!(today_usage(&[], day), 0);
    }

    #[test]
    fn distribution_groups_by_subject() {
        let logs = [log("Math", 30), log("Physics", 20), log("Math", 15)];
        let dist = subject_distribution(&logs);
        assert_eq!(
            dist,
            vec![
                SubjectTime { subject: "Math".into(), minutes: 45 },
                SubjectTime { subject: "Physics".into(), minutes: 20 },
            ]
        );
    }
}
