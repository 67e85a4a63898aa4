use serial_test::serial;

use crate::api::error::ApiError;
use crate::api::profile::{self, ProfileUpdate};
use crate::database::SearchMode;
use crate::tests::global::{mock_global_state, seed_user};

#[serial]
#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_serial_create_and_fetch() {
    let global = mock_global_state().await;

    let user = profile::create(&global, "anna", Some("I read a lot"))
        .await
        .unwrap();

    let fetched = profile::by_id(&global, user.id).await.unwrap();
    assert_eq!(fetched.name, "anna");
    assert_eq!(fetched.introduction.as_deref(), Some("I read a lot"));

    let by_name = profile::by_name(&global, "anna").await.unwrap();
    assert_eq!(by_name.map(|u| u.id), Some(user.id));
    assert!(profile::by_name(&global, "bella").await.unwrap().is_none());

    let err = profile::by_id(&global, common::database::Ulid::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound("user")));
}

#[serial]
#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_serial_duplicate_name_fails_validation() {
    let global = mock_global_state().await;

    profile::create(&global, "anna", None).await.unwrap();
    let err = profile::create(&global, "anna", None).await.unwrap_err();

    assert_eq!(err.kind(), "InvalidInput");
    assert_eq!(err.fields(), vec!["name"]);
}

#[serial]
#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_serial_invalid_profiles_are_rejected() {
    let global = mock_global_state().await;

    assert!(profile::create(&global, "a", None).await.is_err());
    assert!(profile::create(&global, &"a".repeat(21), None).await.is_err());
    assert!(profile::create(&global, "anna", Some("a".repeat(51).as_str()))
        .await
        .is_err());
}

#[serial]
#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_serial_only_the_owner_may_update_or_destroy() {
    let global = mock_global_state().await;
    let anna = seed_user(&global, "anna").await;
    let bella = seed_user(&global, "bella").await;

    let err = profile::update(&global, &bella, anna.id, ProfileUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "Unauthorized");

    let err = profile::destroy(&global, &bella, anna.id).await.unwrap_err();
    assert_eq!(err.kind(), "Unauthorized");

    // the owner may
    profile::destroy(&global, &anna, anna.id).await.unwrap();
    let err = profile::by_id(&global, anna.id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound("user")));
}

#[serial]
#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_serial_update_changes_only_provided_fields() {
    let global = mock_global_state().await;
    let anna = seed_user(&global, "anna").await;

    let updated = profile::update(
        &global,
        &anna,
        anna.id,
        ProfileUpdate {
            introduction: Some("now with an introduction".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "anna");
    assert_eq!(
        updated.introduction.as_deref(),
        Some("now with an introduction")
    );

    let err = profile::update(
        &global,
        &anna,
        anna.id,
        ProfileUpdate {
            introduction: Some("a".repeat(51)),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.fields(), vec!["introduction"]);
}

#[serial]
#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_serial_search_modes() {
    let global = mock_global_state().await;
    seed_user(&global, "anna").await;
    seed_user(&global, "joanna").await;
    seed_user(&global, "hannah").await;
    seed_user(&global, "ann").await;

    let names = |users: Vec<crate::database::User>| {
        let mut names: Vec<String> = users.into_iter().map(|u| u.name).collect();
        names.sort();
        names
    };

    let exact = profile::search(&global, "ann", SearchMode::Exact).await.unwrap();
    assert_eq!(names(exact), vec!["ann"]);

    let prefix = profile::search(&global, "ann", SearchMode::Prefix).await.unwrap();
    assert_eq!(names(prefix), vec!["ann", "anna"]);

    let suffix = profile::search(&global, "ann", SearchMode::Suffix).await.unwrap();
    assert_eq!(names(suffix), vec!["ann"]);

    let substring = profile::search(&global, "ann", SearchMode::Substring)
        .await
        .unwrap();
    assert_eq!(names(substring), vec!["ann", "anna", "hannah", "joanna"]);
}

#[serial]
#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_serial_search_treats_wildcards_literally() {
    let global = mock_global_state().await;
    seed_user(&global, "anna").await;
    seed_user(&global, "an_a").await;

    let substring = profile::search(&global, "n_", SearchMode::Substring)
        .await
        .unwrap();

    assert_eq!(substring.len(), 1);
    assert_eq!(substring[0].name, "an_a");
}
