//! Task create/update/done date policy, wired from configuration.

use dueday_test::component::config::Settings;
use dueday_test::component::error::ServiceError;
use dueday_test::component::task::{DateAlgorithm, DoneOutcome, TaskScheduler};
use dueday_test::ymd;

fn scheduler() -> TaskScheduler {
    let settings = Settings::from_toml_str("").unwrap();
    TaskScheduler::from_config(&settings.scheduler).unwrap()
}

#[test]
fn default_settings_select_nextdate() {
    assert_eq!(scheduler().algorithm(), DateAlgorithm::NextDate);
}

#[test_log::test]
fn configured_unknown_algorithm_fails() {
    let settings = Settings::from_toml_str("[scheduler]\nalgorithm = \"cron\"\n").unwrap();
    let err = TaskScheduler::from_config(&settings.scheduler).unwrap_err();
    assert!(matches!(err, ServiceError::CoreError(_)));
    assert!(err.to_string().contains("cron"), "{err}");
}

#[test]
fn create_then_complete_cycle() {
    let scheduler = scheduler();
    let today = ymd(2024, 1, 10);

    // created in the past with a weekly rule: moves to the next Friday
    let date = scheduler
        .execute_date(today, Some("20240101"), "w 5")
        .unwrap();
    assert_eq!(date, "20240112");

    // done two days early: next Friday after the task's own date
    let outcome = scheduler.date_after_done(today, &date, "w 5").unwrap();
    assert_eq!(outcome, DoneOutcome::Reschedule("20240119".into()));

    // a one-off task is simply completed
    let date = scheduler.execute_date(today, None, "").unwrap();
    assert_eq!(date, "20240110");
    let outcome = scheduler.date_after_done(today, &date, "").unwrap();
    assert_eq!(outcome, DoneOutcome::Complete);
}

#[test]
fn done_late_reschedules_after_today() {
    let scheduler = scheduler();
    let outcome = scheduler
        .date_after_done(ymd(2024, 3, 20), "20240101", "m 1,15")
        .unwrap();
    assert_eq!(outcome, DoneOutcome::Reschedule("20240401".into()));
}

#[test]
fn invalid_inputs_are_validation_errors() {
    let scheduler = scheduler();
    let today = ymd(2024, 1, 10);

    let err = scheduler
        .execute_date(today, Some("2024011"), "d 1")
        .unwrap_err();
    assert!(err.is_validation());

    let err = scheduler
        .execute_date(today, Some("20300101"), "m 1 13")
        .unwrap_err();
    assert!(err.is_validation());

    let err = scheduler
        .date_after_done(today, "20240110", "x")
        .unwrap_err();
    assert!(err.is_validation());
}
