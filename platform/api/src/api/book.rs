use common::database::Ulid;

use crate::api::error::{ApiError, Result};
use crate::database::{Book, BookComment, Favorite, User};
use crate::global::GlobalState;

/// Fields of a book entry update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
}

pub async fn post_book(global: &GlobalState, actor: &User, title: &str, body: &str) -> Result<Book> {
    Book::validate_title(title).map_err(|e| ApiError::invalid_input("title", e))?;
    Book::validate_body(body).map_err(|e| ApiError::invalid_input("body", e))?;

    let book: Book = sqlx::query_as(
        "INSERT INTO books (id, user_id, title, body) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(Ulid::new())
    .bind(actor.id)
    .bind(title)
    .bind(body)
    .fetch_one(global.db.as_ref())
    .await?;

    Ok(book)
}

pub async fn by_id(global: &GlobalState, id: Ulid) -> Result<Book> {
    sqlx::query_as("SELECT * FROM books WHERE id = $1")
        .bind(id)
        .fetch_optional(global.db.as_ref())
        .await?
        .ok_or(ApiError::NotFound("book"))
}

/// All book entries of a user, newest first.
pub async fn books_of_user(global: &GlobalState, user_id: Ulid) -> Result<Vec<Book>> {
    let books =
        sqlx::query_as("SELECT * FROM books WHERE user_id = $1 ORDER BY created_at DESC")
            .bind(user_id)
            .fetch_all(global.db.as_ref())
            .await?;

    Ok(books)
}

/// Updates a book entry. Only the entry owner may update it.
pub async fn update_book(
    global: &GlobalState,
    actor: &User,
    book_id: Ulid,
    update: BookUpdate,
) -> Result<Book> {
    let book = by_id(global, book_id).await?;

    if book.user_id != actor.id {
        return Err(ApiError::Unauthorized {
            action: "update this book",
        });
    }

    if let Some(title) = &update.title {
        Book::validate_title(title).map_err(|e| ApiError::invalid_input("title", e))?;
    }

    if let Some(body) = &update.body {
        Book::validate_body(body).map_err(|e| ApiError::invalid_input("body", e))?;
    }

    let book: Book = sqlx::query_as(
        r#"
        UPDATE books SET
            title = COALESCE($2, title),
            body = COALESCE($3, body)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(book_id)
    .bind(update.title)
    .bind(update.body)
    .fetch_one(global.db.as_ref())
    .await?;

    Ok(book)
}

/// Deletes a book entry and its comments and favorites. Only the entry
/// owner may delete it.
pub async fn destroy_book(global: &GlobalState, actor: &User, book_id: Ulid) -> Result<()> {
    let book = by_id(global, book_id).await?;

    if book.user_id != actor.id {
        return Err(ApiError::Unauthorized {
            action: "delete this book",
        });
    }

    sqlx::query("DELETE FROM books WHERE id = $1")
        .bind(book_id)
        .execute(global.db.as_ref())
        .await?;

    tracing::debug!(book_id = %book_id, "book deleted");

    Ok(())
}

pub async fn add_comment(
    global: &GlobalState,
    actor: &User,
    book_id: Ulid,
    comment: &str,
) -> Result<BookComment> {
    BookComment::validate_comment(comment).map_err(|e| ApiError::invalid_input("comment", e))?;

    let comment: BookComment = sqlx::query_as(
        "INSERT INTO book_comments (id, user_id, book_id, comment) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(Ulid::new())
    .bind(actor.id)
    .bind(book_id)
    .bind(comment)
    .fetch_one(global.db.as_ref())
    .await
    .map_err(book_missing)?;

    Ok(comment)
}

/// All comments on a book entry, oldest first.
pub async fn comments_of_book(global: &GlobalState, book_id: Ulid) -> Result<Vec<BookComment>> {
    let comments =
        sqlx::query_as("SELECT * FROM book_comments WHERE book_id = $1 ORDER BY created_at")
            .bind(book_id)
            .fetch_all(global.db.as_ref())
            .await?;

    Ok(comments)
}

/// Deletes a comment. Only the comment author may delete it.
pub async fn destroy_comment(global: &GlobalState, actor: &User, comment_id: Ulid) -> Result<()> {
    let comment: BookComment = sqlx::query_as("SELECT * FROM book_comments WHERE id = $1")
        .bind(comment_id)
        .fetch_optional(global.db.as_ref())
        .await?
        .ok_or(ApiError::NotFound("comment"))?;

    if comment.user_id != actor.id {
        return Err(ApiError::Unauthorized {
            action: "delete this comment",
        });
    }

    sqlx::query("DELETE FROM book_comments WHERE id = $1")
        .bind(comment_id)
        .execute(global.db.as_ref())
        .await?;

    Ok(())
}

/// Favorites a book entry and returns the edge. Favoriting an already
/// favorited entry is a no-op that returns the existing edge.
pub async fn favorite(global: &GlobalState, actor: &User, book_id: Ulid) -> Result<Favorite> {
    let edge: Favorite = sqlx::query_as(
        r#"
        INSERT INTO favorites (user_id, book_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, book_id)
        DO UPDATE SET user_id = EXCLUDED.user_id
        RETURNING *
        "#,
    )
    .bind(actor.id)
    .bind(book_id)
    .fetch_one(global.db.as_ref())
    .await
    .map_err(book_missing)?;

    Ok(edge)
}

/// Removes a favorite. Fails with NotFound when the entry was not
/// favorited, mirroring `relationship::unfollow`.
pub async fn unfavorite(global: &GlobalState, actor: &User, book_id: Ulid) -> Result<()> {
    let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND book_id = $2")
        .bind(actor.id)
        .bind(book_id)
        .execute(global.db.as_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("favorite"));
    }

    Ok(())
}

pub async fn is_favorited(global: &GlobalState, user_id: Ulid, book_id: Ulid) -> Result<bool> {
    let (is_favorited,): (bool,) = sqlx::query_as(
        "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND book_id = $2)",
    )
    .bind(user_id)
    .bind(book_id)
    .fetch_one(global.db.as_ref())
    .await?;

    Ok(is_favorited)
}

pub async fn favorites_count(global: &GlobalState, book_id: Ulid) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM favorites WHERE book_id = $1")
        .bind(book_id)
        .fetch_one(global.db.as_ref())
        .await?;

    Ok(count)
}

fn book_missing(err: sqlx::Error) -> ApiError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
    {
        return ApiError::NotFound("book");
    }

    err.into()
}
