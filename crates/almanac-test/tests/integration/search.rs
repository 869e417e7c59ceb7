//! Filtered search.

use almanac_test::service::occurrence::{SearchFilters, SearchParams, search_occurrences};
use uuid::Uuid;

use super::helpers::*;

fn store_for(owner: Uuid) -> MemoryStore {
    MemoryStore::with_templates(vec![
        TemplateBuilder::new(owner, "Gym", utc(2024, 1, 3, 18, 0), utc(2024, 1, 3, 19, 0))
            .repeat(Repeat::Weekly)
            .color("#10B981")
            .build(),
        TemplateBuilder::new(owner, "Quarterly review", utc(2024, 1, 10, 14, 0), utc(2024, 1, 10, 16, 0))
            .category(Category::Work)
            .description("Bring the GYM budget numbers")
            .build(),
        TemplateBuilder::new(owner, "Dinner", utc(2024, 1, 2, 19, 0), utc(2024, 1, 2, 21, 0))
            .category(Category::Other)
            .build(),
        TemplateBuilder::new(Uuid::new_v4(), "Gym", utc(2024, 1, 3, 18, 0), utc(2024, 1, 3, 19, 0))
            .build(),
    ])
}

async fn search(store: &MemoryStore, owner: Uuid, params: &SearchParams) -> Vec<Occurrence> {
    let filters = SearchFilters::try_from(params).expect("valid search params");
    search_occurrences(
        store,
        owner,
        &filters,
        utc(2024, 1, 12, 0, 0),
        ExpansionLimits::unbounded(),
    )
    .await
    .expect("search succeeds")
}

/// ## Summary
/// Text matches title or description, case-insensitively, within one owner.
#[test_log::test(tokio::test)]
async fn text_search_is_case_insensitive() {
    let owner = Uuid::new_v4();
    let store = store_for(owner);

    let occurrences = search(
        &store,
        owner,
        &SearchParams {
            text: Some("gym".to_owned()),
            ..SearchParams::default()
        },
    )
    .await;

    assert_eq!(
        titles_and_starts(&occurrences),
        vec![
            ("Gym".to_owned(), utc(2024, 1, 3, 18, 0)),
            ("Quarterly review".to_owned(), utc(2024, 1, 10, 14, 0)),
        ]
    );
}

/// ## Summary
/// A full date range expands recurring templates over exactly that range.
#[test_log::test(tokio::test)]
async fn date_range_expands_recurring_templates() {
    let owner = Uuid::new_v4();
    let store = store_for(owner);

    let occurrences = search(
        &store,
        owner,
        &SearchParams {
            start_date: Some("2024-01-01".to_owned()),
            end_date: Some("2024-01-21".to_owned()),
            color: Some("#10B981".to_owned()),
            ..SearchParams::default()
        },
    )
    .await;

    assert_eq!(
        starts(&occurrences),
        vec![
            utc(2024, 1, 3, 18, 0),
            utc(2024, 1, 10, 18, 0),
            utc(2024, 1, 17, 18, 0),
        ]
    );
}

/// ## Summary
/// Results come out with templates ordered by start.
#[test_log::test(tokio::test)]
async fn results_are_ordered_by_template_start() {
    let owner = Uuid::new_v4();
    let store = store_for(owner);

    let occurrences = search(&store, owner, &SearchParams::default()).await;

    assert_eq!(
        titles_and_starts(&occurrences),
        vec![
            ("Dinner".to_owned(), utc(2024, 1, 2, 19, 0)),
            ("Gym".to_owned(), utc(2024, 1, 3, 18, 0)),
            ("Quarterly review".to_owned(), utc(2024, 1, 10, 14, 0)),
        ]
    );
}

/// ## Summary
/// `upcoming=false` keeps only templates that already ended.
#[test_log::test(tokio::test)]
async fn past_search_uses_template_end() {
    let owner = Uuid::new_v4();
    let store = store_for(owner);

    let occurrences = search(
        &store,
        owner,
        &SearchParams {
            upcoming: Some("false".to_owned()),
            category: Some("Work".to_owned()),
            ..SearchParams::default()
        },
    )
    .await;

    assert_eq!(
        titles_and_starts(&occurrences),
        vec![("Quarterly review".to_owned(), utc(2024, 1, 10, 14, 0))]
    );
}

/// ## Summary
/// An unknown category is rejected before the store is consulted.
#[test_log::test]
fn unknown_category_is_a_validation_error() {
    let params = SearchParams {
        category: Some("Hobby".to_owned()),
        ..SearchParams::default()
    };

    assert!(matches!(
        SearchFilters::try_from(&params),
        Err(ServiceError::ValidationError(_))
    ));
}
