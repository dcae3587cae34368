//! Integration tests for the state store over real storage backends.
//!
//! Drives the store the way the CLI does: open, mutate, drop, reopen.

use chrono::NaiveDate;
use lifetrack_core::{
    AppState, DailyFitness, DashboardSummary, FileStorage, MotivationTier, NewAcademicLog,
    NewJournalEntry, Platform, SqliteStorage, StateStorage, StateStore,
};

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn test_sqlite_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lifetrack.db");

    let goal_id = {
        let mut store = StateStore::open(SqliteStorage::open(&path).unwrap());
        let id = store.add_small_goal("Ship the release").unwrap();
        store.toggle_small_goal(&id).unwrap();
        store
            .add_social_usage(Platform::YouTube, 45, day("2024-07-01"))
            .unwrap();
        id
    };

    let store = StateStore::open(SqliteStorage::open(&path).unwrap());
    let state = store.state();
    assert_eq!(state.small_goals.len(), 1);
    assert_eq!(state.small_goals[0].id, goal_id);
    assert!(state.small_goals[0].completed);
    assert_eq!(state.social_usage[0].minutes, 45);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let mut store = StateStore::open(FileStorage::new(&path));
        store.set_screen_time_limit(60).unwrap();
        store.toggle_mute(day("2024-07-01")).unwrap();
    }

    let store = StateStore::open(FileStorage::new(&path));
    assert_eq!(store.state().screen_time_limit, 60);
    assert_eq!(store.state().mute_reminders_date, Some(day("2024-07-01")));
}

#[test]
fn test_corrupt_file_recovers_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{\"smallGoals\": \"oops\"").unwrap();

    let mut store = StateStore::open(FileStorage::new(&path));
    assert_eq!(store.state(), &AppState::default());

    // The next write replaces the corrupt blob with a valid one.
    store.toggle_dark_mode().unwrap();
    let blob = FileStorage::new(&path).read().unwrap().unwrap();
    let reread: AppState = serde_json::from_str(&blob).unwrap();
    assert!(reread.dark_mode);
}

#[test]
fn test_loads_blob_in_original_layout() {
    let blob = r#"{
        "smallGoals": [{"id": "1700000000000", "name": "Read", "priority": "High", "completed": true}],
        "longGoals": [{"id": "1700000000001", "name": "Run a marathon", "progress": 30,
            "learnings": [{"date": "3/2/2024", "intel": "negative splits"}]}],
        "fitnessTargets": {"pushups": 50, "pullups": 10, "plank": 120},
        "fitnessHistory": [{"date": "2024-01-02", "pushups": 25, "pullups": 5, "plank": 60, "sixPackDetails": "crunches"}],
        "journalEntries": [{"id": "1700000000002", "date": "2024-01-02", "lesson": "Patience", "content": "Slow is smooth", "studyHours": 2}],
        "socialUsage": [{"platform": "TikTok", "minutes": 40, "date": "2024-01-02"}],
        "academicLogs": [{"id": "1700000000003", "date": "2024-01-02", "subject": "Math", "topic": "Series", "intel": "ratio test", "timeSpent": 49.6}],
        "academicPlans": [{"id": "1700000000004", "date": "2024-01-03", "subject": "Math", "topic": "Integrals"}],
        "screenTimeLimit": 150,
        "muteRemindersDate": null,
        "darkMode": true
    }"#;

    let db = SqliteStorage::open_memory().unwrap();
    db.kv_set(lifetrack_core::storage::STATE_KEY, blob).unwrap();
    let store = StateStore::open(db);
    let state = store.state();

    assert_eq!(state.small_goals[0].name, "Read");
    assert_eq!(state.long_goals[0].learnings[0].date, "3/2/2024");
    assert_eq!(state.fitness_targets.plank, 120);
    assert_eq!(state.fitness_history[0].notes, "crunches");
    assert_eq!(state.journal_entries[0].study_hours, 2.0);
    assert_eq!(state.academic_logs[0].time_spent, 50);
    assert!(!state.social_usage[0].id.is_empty());
    assert!(state.dark_mode);

    let summary = DashboardSummary::compute(state, day("2024-01-02"));
    // small 100, long 30 -> 65; fitness 50/50/50 -> 50; composite 57.5 -> 58
    assert_eq!(summary.goals, 65);
    assert_eq!(summary.fitness.overall, 50);
    assert_eq!(summary.composite, 58);
    assert_eq!(summary.tier, MotivationTier::Steady);
    assert_eq!(summary.today_usage_minutes, 40);
}

#[test]
fn test_null_screen_time_limit_keeps_the_rest() {
    let blob = r#"{
        "smallGoals": [{"id": "1700000000000", "name": "Read", "priority": "Low", "completed": false}],
        "screenTimeLimit": null,
        "darkMode": false
    }"#;

    let db = SqliteStorage::open_memory().unwrap();
    db.kv_set(lifetrack_core::storage::STATE_KEY, blob).unwrap();
    let mut store = StateStore::open(db);
    assert_eq!(store.state().small_goals.len(), 1);
    assert_eq!(store.state().screen_time_limit, 120);

    store.toggle_dark_mode().unwrap();
    let saved: AppState = serde_json::from_str(&store.storage().read().unwrap().unwrap()).unwrap();
    assert_eq!(saved.small_goals[0].name, "Read");
    assert!(saved.dark_mode);
}

#[test]
fn test_unreadable_file_is_kept_aside() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, r#"{"smallGoals": [{"name": 42}]}"#).unwrap();

    let mut store = StateStore::open(FileStorage::new(&path));
    assert!(store.state().small_goals.is_empty());
    store.toggle_dark_mode().unwrap();

    let backup = std::fs::read_to_string(dir.path().join("state.json.unreadable")).unwrap();
    assert_eq!(backup, r#"{"smallGoals": [{"name": 42}]}"#);
}

#[test]
fn test_full_tracking_day() {
    let mut store = StateStore::open(SqliteStorage::open_memory().unwrap());
    let today = day("2024-09-15");

    let goal = store.add_long_goal("Learn Rust").unwrap();
    store.set_long_goal_progress(&goal, 80).unwrap();
    store.add_learning(&goal, today, "iterators are lazy").unwrap();

    store
        .record_daily_fitness(DailyFitness {
            date: today,
            pushups: 10,
            pullups: 2,
            plank: 20,
            notes: "felt strong".into(),
        })
        .unwrap();

    store
        .add_journal_entry(NewJournalEntry {
            date: today,
            lesson: "Ownership".into(),
            content: "Values have a single owner.".into(),
            study_hours: 1.5,
        })
        .unwrap();

    for _ in 0..4 {
        store
            .add_academic_log(NewAcademicLog {
                date: today,
                subject: "CS".into(),
                topic: "Graphs".into(),
                intel: "BFS finds shortest paths".into(),
                time_spent: 25,
            })
            .unwrap();
    }

    let summary = DashboardSummary::compute(store.state(), today);
    // small 0, long 80 -> 40; fitness 100 -> composite 70
    assert_eq!(summary.goals, 40);
    assert_eq!(summary.fitness.overall, 100);
    assert_eq!(summary.composite, 70);
    assert_eq!(summary.academic_activity, 40);
    assert_eq!(
        lifetrack_core::stats::subject_distribution(&store.state().academic_logs)[0].minutes,
        100
    );
}
