//! Window fetch and calendar views.

use almanac_test::core::window::CalendarView;
use almanac_test::service::occurrence::{
    WindowParams, fetch_occurrences, fetch_view_occurrences,
};
use chrono::{NaiveDate, TimeDelta};
use uuid::Uuid;

use super::helpers::*;

/// ## Summary
/// Mixed single and recurring templates keep storage order across templates.
#[test_log::test(tokio::test)]
async fn mixed_templates_keep_storage_order() {
    let owner = Uuid::new_v4();
    let store = MemoryStore::with_templates(vec![
        TemplateBuilder::new(owner, "Review", utc(2024, 3, 4, 15, 0), utc(2024, 3, 4, 16, 0))
            .build(),
        TemplateBuilder::new(owner, "Standup", utc(2024, 3, 4, 9, 0), utc(2024, 3, 4, 9, 15))
            .repeat(Repeat::Daily)
            .build(),
    ]);

    let occurrences = fetch_occurrences(
        &store,
        owner,
        Some(utc(2024, 3, 4, 0, 0)),
        Some(utc(2024, 3, 6, 0, 0)),
        ExpansionLimits::unbounded(),
    )
    .await
    .expect("fetch succeeds");

    assert_eq!(
        titles_and_starts(&occurrences),
        vec![
            ("Review".to_owned(), utc(2024, 3, 4, 15, 0)),
            ("Standup".to_owned(), utc(2024, 3, 4, 9, 0)),
            ("Standup".to_owned(), utc(2024, 3, 5, 9, 0)),
        ]
    );
}

/// ## Summary
/// Bounds arriving as strings resolve into the same window as typed bounds.
#[test_log::test(tokio::test)]
async fn string_bounds_resolve_before_fetch() {
    let owner = Uuid::new_v4();
    let store = MemoryStore::with_templates(vec![
        TemplateBuilder::new(owner, "Yoga", utc(2024, 2, 1, 7, 0), utc(2024, 2, 1, 8, 0))
            .repeat(Repeat::Weekly)
            .build(),
    ]);

    let window = WindowParams {
        start: Some("2024-02-01".to_owned()),
        end: Some("2024-02-15T00:00:00Z".to_owned()),
    }
    .resolve()
    .expect("valid window");

    let occurrences = fetch_occurrences(
        &store,
        owner,
        Some(window.start),
        Some(window.end),
        ExpansionLimits::unbounded(),
    )
    .await
    .expect("fetch succeeds");

    assert_eq!(
        starts(&occurrences),
        vec![utc(2024, 2, 1, 7, 0), utc(2024, 2, 8, 7, 0)]
    );
}

/// ## Summary
/// Every returned occurrence overlaps the window and keeps the template's duration.
#[test_log::test(tokio::test)]
async fn occurrences_overlap_window_and_keep_duration() {
    let owner = Uuid::new_v4();
    let window_start = utc(2024, 1, 1, 0, 0);
    let window_end = utc(2024, 4, 1, 0, 0);
    let store = MemoryStore::with_templates(vec![
        TemplateBuilder::new(owner, "Late shift", utc(2024, 1, 1, 22, 0), utc(2024, 1, 2, 6, 0))
            .repeat(Repeat::Daily)
            .build(),
        TemplateBuilder::new(owner, "Sprint", utc(2024, 1, 1, 9, 0), utc(2024, 1, 12, 17, 0))
            .repeat(Repeat::Weekly)
            .build(),
        TemplateBuilder::new(owner, "Invoice", utc(2024, 1, 31, 12, 0), utc(2024, 1, 31, 13, 0))
            .repeat(Repeat::Monthly)
            .build(),
    ]);

    let occurrences = fetch_occurrences(
        &store,
        owner,
        Some(window_start),
        Some(window_end),
        ExpansionLimits::unbounded(),
    )
    .await
    .expect("fetch succeeds");

    assert!(!occurrences.is_empty());
    for occurrence in &occurrences {
        assert!(occurrence.start < window_end, "{occurrence:?}");
        assert!(occurrence.end > window_start, "{occurrence:?}");
    }
    for occurrence in occurrences.iter().filter(|o| o.title != "Invoice") {
        let expected = if occurrence.title == "Sprint" {
            TimeDelta::hours(24 * 11 + 8)
        } else {
            TimeDelta::hours(8)
        };
        assert_eq!(occurrence.duration(), expected);
    }
}

/// ## Summary
/// Monthly series anchored on the 31st roll over through the fetch path too.
#[test_log::test(tokio::test)]
async fn monthly_rollover_through_fetch() {
    let owner = Uuid::new_v4();
    let store = MemoryStore::with_templates(vec![
        TemplateBuilder::new(owner, "Invoice", utc(2023, 1, 31, 12, 0), utc(2023, 1, 31, 13, 0))
            .repeat(Repeat::Monthly)
            .build(),
    ]);

    let occurrences = fetch_occurrences(
        &store,
        owner,
        Some(utc(2023, 1, 1, 0, 0)),
        Some(utc(2023, 4, 1, 0, 0)),
        ExpansionLimits::unbounded(),
    )
    .await
    .expect("fetch succeeds");

    assert_eq!(
        starts(&occurrences),
        vec![utc(2023, 1, 31, 12, 0), utc(2023, 3, 3, 12, 0)]
    );
}

/// ## Summary
/// Repeating a fetch gives the same result.
#[test_log::test(tokio::test)]
async fn fetch_is_idempotent() {
    let owner = Uuid::new_v4();
    let store = MemoryStore::with_templates(vec![
        TemplateBuilder::new(owner, "Standup", utc(2024, 5, 1, 9, 0), utc(2024, 5, 1, 9, 15))
            .repeat(Repeat::Daily)
            .build(),
    ]);

    let fetch = || {
        fetch_occurrences(
            &store,
            owner,
            Some(utc(2024, 5, 1, 0, 0)),
            Some(utc(2024, 6, 1, 0, 0)),
            ExpansionLimits::unbounded(),
        )
    };
    let first = fetch().await.expect("fetch succeeds");
    let second = fetch().await.expect("fetch succeeds");

    assert_eq!(first.len(), 31);
    assert_eq!(first, second);
}

/// ## Summary
/// A month view covers the calendar month of the given date.
#[test_log::test(tokio::test)]
async fn month_view_covers_calendar_month() {
    let owner = Uuid::new_v4();
    let store = MemoryStore::with_templates(vec![
        TemplateBuilder::new(owner, "Standup", utc(2024, 2, 1, 9, 0), utc(2024, 2, 1, 9, 15))
            .repeat(Repeat::Daily)
            .build(),
    ]);

    let occurrences = fetch_view_occurrences(
        &store,
        owner,
        CalendarView::Month,
        NaiveDate::from_ymd_opt(2024, 2, 14).expect("valid date"),
        ExpansionLimits::unbounded(),
    )
    .await
    .expect("fetch succeeds");

    // leap year
    assert_eq!(occurrences.len(), 29);
    assert_eq!(occurrences.last().map(|o| o.start), Some(utc(2024, 2, 29, 9, 0)));
}

/// ## Summary
/// An oversized expansion fails the whole fetch.
#[test_log::test(tokio::test)]
async fn expansion_limit_fails_fetch() {
    let owner = Uuid::new_v4();
    let store = MemoryStore::with_templates(vec![
        TemplateBuilder::new(owner, "Standup", utc(2024, 1, 1, 9, 0), utc(2024, 1, 1, 9, 15))
            .repeat(Repeat::Daily)
            .build(),
    ]);

    let result = fetch_occurrences(
        &store,
        owner,
        Some(utc(2024, 1, 1, 0, 0)),
        Some(utc(2034, 1, 1, 0, 0)),
        ExpansionLimits::capped(365),
    )
    .await;

    assert!(matches!(result, Err(ServiceError::TooManyOccurrences { limit: 365 })));
}
