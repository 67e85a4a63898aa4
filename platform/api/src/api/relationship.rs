use common::database::Ulid;

use crate::api::error::{ApiError, Result};
use crate::database::{Follow, User};
use crate::global::GlobalState;

/// Follows a user and returns the edge. Following an already followed user
/// is a no-op that returns the existing edge.
pub async fn follow(global: &GlobalState, actor: &User, target_id: Ulid) -> Result<Follow> {
    if actor.id == target_id {
        return Err(ApiError::invalid_input(
            "followed_id",
            "You cannot follow yourself",
        ));
    }

    // The no-op update makes the insert idempotent while still returning
    // the edge row, with its original created_at, on a duplicate follow.
    let edge: Follow = sqlx::query_as(
        r#"
        INSERT INTO follows (follower_id, followed_id)
        VALUES ($1, $2)
        ON CONFLICT (follower_id, followed_id)
        DO UPDATE SET follower_id = EXCLUDED.follower_id
        RETURNING *
        "#,
    )
    .bind(actor.id)
    .bind(target_id)
    .fetch_one(global.db.as_ref())
    .await
    .map_err(user_missing)?;

    tracing::debug!(follower_id = %actor.id, followed_id = %target_id, "follow upserted");

    Ok(edge)
}

/// Removes the follow edge from `actor` to `target_id`. Fails with NotFound
/// when no such edge exists, an unfollow of a stranger is a caller bug.
pub async fn unfollow(global: &GlobalState, actor: &User, target_id: Ulid) -> Result<()> {
    let result = sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followed_id = $2")
        .bind(actor.id)
        .bind(target_id)
        .execute(global.db.as_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("follow"));
    }

    Ok(())
}

pub async fn is_following(
    global: &GlobalState,
    follower_id: Ulid,
    followed_id: Ulid,
) -> Result<bool> {
    let (is_following,): (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT
                1
            FROM
                follows
            WHERE
                follower_id = $1
                AND followed_id = $2
        )
        "#,
    )
    .bind(follower_id)
    .bind(followed_id)
    .fetch_one(global.db.as_ref())
    .await?;

    Ok(is_following)
}

/// The users `user_id` follows, most recently followed first.
pub async fn followings(global: &GlobalState, user_id: Ulid) -> Result<Vec<User>> {
    let users = sqlx::query_as(
        r#"
        SELECT
            users.*
        FROM
            follows
        INNER JOIN
            users
        ON
            users.id = follows.followed_id
        WHERE
            follows.follower_id = $1
        ORDER BY
            follows.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(global.db.as_ref())
    .await?;

    Ok(users)
}

/// The users following `user_id`, most recent follower first.
pub async fn followers(global: &GlobalState, user_id: Ulid) -> Result<Vec<User>> {
    let users = sqlx::query_as(
        r#"
        SELECT
            users.*
        FROM
            follows
        INNER JOIN
            users
        ON
            users.id = follows.follower_id
        WHERE
            follows.followed_id = $1
        ORDER BY
            follows.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(global.db.as_ref())
    .await?;

    Ok(users)
}

fn user_missing(err: sqlx::Error) -> ApiError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
    {
        return ApiError::NotFound("user");
    }

    err.into()
}
