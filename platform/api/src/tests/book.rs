use serial_test::serial;

use common::database::Ulid;

use crate::api::book::{self, BookUpdate};
use crate::api::error::ApiError;
use crate::tests::global::{mock_global_state, seed_user};

#[serial]
#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_serial_post_and_list_books() {
    let global = mock_global_state().await;
    let anna = seed_user(&global, "anna").await;

    let book = book::post_book(&global, &anna, "Dune", "a slow start, then great")
        .await
        .unwrap();
    assert_eq!(book.user_id, anna.id);

    let books = book::books_of_user(&global, anna.id).await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");

    assert!(book::post_book(&global, &anna, "", "no title").await.is_err());
    assert!(book::post_book(&global, &anna, "Dune", &"a".repeat(201))
        .await
        .is_err());
}

#[serial]
#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_serial_only_the_owner_may_update_or_destroy_books() {
    let global = mock_global_state().await;
    let anna = seed_user(&global, "anna").await;
    let bella = seed_user(&global, "bella").await;

    let book = book::post_book(&global, &anna, "Dune", "great").await.unwrap();

    let err = book::update_book(&global, &bella, book.id, BookUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "Unauthorized");

    let err = book::destroy_book(&global, &bella, book.id).await.unwrap_err();
    assert_eq!(err.kind(), "Unauthorized");

    let updated = book::update_book(
        &global,
        &anna,
        book.id,
        BookUpdate {
            body: Some("read it twice".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.title, "Dune");
    assert_eq!(updated.body, "read it twice");

    book::destroy_book(&global, &anna, book.id).await.unwrap();
    assert!(matches!(
        book::by_id(&global, book.id).await.unwrap_err(),
        ApiError::NotFound("book")
    ));
}

#[serial]
#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_serial_comments() {
    let global = mock_global_state().await;
    let anna = seed_user(&global, "anna").await;
    let bella = seed_user(&global, "bella").await;

    let book = book::post_book(&global, &anna, "Dune", "great").await.unwrap();

    let comment = book::add_comment(&global, &bella, book.id, "on my list too")
        .await
        .unwrap();
    assert_eq!(comment.user_id, bella.id);

    let comments = book::comments_of_book(&global, book.id).await.unwrap();
    assert_eq!(comments.len(), 1);

    // comment on a missing book
    let err = book::add_comment(&global, &bella, Ulid::new(), "hello")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound("book")));

    // only the author may remove a comment
    let err = book::destroy_comment(&global, &anna, comment.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "Unauthorized");

    book::destroy_comment(&global, &bella, comment.id).await.unwrap();
    assert!(book::comments_of_book(&global, book.id)
        .await
        .unwrap()
        .is_empty());
}

#[serial]
#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn test_serial_favorites() {
    let global = mock_global_state().await;
    let anna = seed_user(&global, "anna").await;
    let bella = seed_user(&global, "bella").await;

    let book = book::post_book(&global, &anna, "Dune", "great").await.unwrap();

    assert!(!book::is_favorited(&global, bella.id, book.id).await.unwrap());

    book::favorite(&global, &bella, book.id).await.unwrap();
    assert!(book::is_favorited(&global, bella.id, book.id).await.unwrap());
    assert_eq!(book::favorites_count(&global, book.id).await.unwrap(), 1);

    // favoriting twice keeps a single edge
    book::favorite(&global, &bella, book.id).await.unwrap();
    assert_eq!(book::favorites_count(&global, book.id).await.unwrap(), 1);

    book::unfavorite(&global, &bella, book.id).await.unwrap();
    assert!(!book::is_favorited(&global, bella.id, book.id).await.unwrap());

    let err = book::unfavorite(&global, &bella, book.id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound("favorite")));

    let err = book::favorite(&global, &bella, Ulid::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound("book")));
}
