//! Template lifecycle feeding the occurrence queries.

use almanac_test::service::occurrence::fetch_occurrences;
use almanac_test::service::template::{
    create_template, delete_template, get_template, update_template,
};
use uuid::Uuid;

use super::helpers::*;

async fn january(store: &MemoryStore, owner: Uuid) -> Vec<Occurrence> {
    fetch_occurrences(
        store,
        owner,
        Some(utc(2024, 1, 1, 0, 0)),
        Some(utc(2024, 2, 1, 0, 0)),
        ExpansionLimits::unbounded(),
    )
    .await
    .expect("fetch succeeds")
}

/// ## Summary
/// Created, updated and deleted templates show up in window fetches accordingly.
#[test_log::test(tokio::test)]
async fn lifecycle_is_visible_to_fetch() {
    let store = MemoryStore::new();
    let owner = Uuid::new_v4();

    let created = create_template(
        &store,
        owner,
        NewEventTemplate {
            title: "  Book club  ".to_owned(),
            start: utc(2024, 1, 4, 19, 0),
            end: utc(2024, 1, 4, 21, 0),
            ..NewEventTemplate::default()
        },
    )
    .await
    .expect("create succeeds");
    assert_eq!(created.title, "Book club");
    assert_eq!(created.category, Category::Personal);
    assert_eq!(january(&store, owner).await.len(), 1);

    let updated = update_template(
        &store,
        owner,
        created.id,
        TemplateChanges {
            repeat: Some(Repeat::Weekly),
            ..TemplateChanges::default()
        },
    )
    .await
    .expect("update succeeds");
    assert_eq!(updated.repeat, Repeat::Weekly);
    assert_eq!(
        starts(&january(&store, owner).await),
        vec![
            utc(2024, 1, 4, 19, 0),
            utc(2024, 1, 11, 19, 0),
            utc(2024, 1, 18, 19, 0),
            utc(2024, 1, 25, 19, 0),
        ]
    );

    delete_template(&store, owner, created.id)
        .await
        .expect("delete succeeds");
    assert!(january(&store, owner).await.is_empty());
    assert!(matches!(
        get_template(&store, owner, created.id).await,
        Err(ServiceError::NotFound(_))
    ));
}

/// ## Summary
/// Another owner cannot see, change or delete a template.
#[test_log::test(tokio::test)]
async fn templates_are_owner_scoped() {
    let store = MemoryStore::new();
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();

    let created = create_template(
        &store,
        owner,
        NewEventTemplate {
            title: "Payday".to_owned(),
            start: utc(2024, 1, 25, 0, 0),
            end: utc(2024, 1, 25, 1, 0),
            repeat: Some(Repeat::Monthly),
            ..NewEventTemplate::default()
        },
    )
    .await
    .expect("create succeeds");

    assert!(january(&store, intruder).await.is_empty());
    assert!(matches!(
        get_template(&store, intruder, created.id).await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        update_template(&store, intruder, created.id, TemplateChanges::default()).await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        delete_template(&store, intruder, created.id).await,
        Err(ServiceError::NotFound(_))
    ));

    assert_eq!(
        get_template(&store, owner, created.id)
            .await
            .expect("owner still sees it"),
        created
    );
}
