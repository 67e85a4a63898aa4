use common::database::Ulid;

use crate::api::error::{ApiError, Result};
use crate::database::{SearchMode, User};
use crate::global::GlobalState;

/// Fields of a profile update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub introduction: Option<String>,
    pub profile_image_id: Option<Ulid>,
}

/// Creates a user. The name must be unique, a duplicate comes back as a
/// validation error on `name`, not as a database error.
pub async fn create(global: &GlobalState, name: &str, introduction: Option<&str>) -> Result<User> {
    User::validate_name(name).map_err(|e| ApiError::invalid_input("name", e))?;

    if let Some(introduction) = introduction {
        User::validate_introduction(introduction)
            .map_err(|e| ApiError::invalid_input("introduction", e))?;
    }

    let user: User = sqlx::query_as(
        "INSERT INTO users (id, name, introduction) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Ulid::new())
    .bind(name)
    .bind(introduction)
    .fetch_one(global.db.as_ref())
    .await
    .map_err(name_taken)?;

    tracing::debug!(user_id = %user.id, "user created");

    Ok(user)
}

pub async fn by_id(global: &GlobalState, id: Ulid) -> Result<User> {
    sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(global.db.as_ref())
        .await?
        .ok_or(ApiError::NotFound("user"))
}

pub async fn by_name(global: &GlobalState, name: &str) -> Result<Option<User>> {
    let user = sqlx::query_as("SELECT * FROM users WHERE name = $1")
        .bind(name)
        .fetch_optional(global.db.as_ref())
        .await?;

    Ok(user)
}

/// Updates a profile. Only the profile owner may update it.
pub async fn update(
    global: &GlobalState,
    actor: &User,
    target_id: Ulid,
    update: ProfileUpdate,
) -> Result<User> {
    if actor.id != target_id {
        return Err(ApiError::Unauthorized {
            action: "update this profile",
        });
    }

    if let Some(name) = &update.name {
        User::validate_name(name).map_err(|e| ApiError::invalid_input("name", e))?;
    }

    if let Some(introduction) = &update.introduction {
        User::validate_introduction(introduction)
            .map_err(|e| ApiError::invalid_input("introduction", e))?;
    }

    let user: Option<User> = sqlx::query_as(
        r#"
        UPDATE users SET
            name = COALESCE($2, name),
            introduction = COALESCE($3, introduction),
            profile_image_id = COALESCE($4, profile_image_id)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(target_id)
    .bind(update.name)
    .bind(update.introduction)
    .bind(update.profile_image_id)
    .fetch_optional(global.db.as_ref())
    .await
    .map_err(name_taken)?;

    user.ok_or(ApiError::NotFound("user"))
}

/// Deletes a profile and everything it owns: book entries, comments,
/// favorites and both directions of follow edges. Only the profile owner
/// may delete it.
pub async fn destroy(global: &GlobalState, actor: &User, target_id: Ulid) -> Result<()> {
    if actor.id != target_id {
        return Err(ApiError::Unauthorized {
            action: "delete this profile",
        });
    }

    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(target_id)
        .execute(global.db.as_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("user"));
    }

    tracing::debug!(user_id = %target_id, "user deleted");

    Ok(())
}

/// Searches users by name. Case sensitivity is whatever the collation of
/// the `name` column does, registration order otherwise.
pub async fn search(global: &GlobalState, content: &str, mode: SearchMode) -> Result<Vec<User>> {
    let users = sqlx::query_as("SELECT * FROM users WHERE name LIKE $1 ORDER BY created_at")
        .bind(mode.pattern(content))
        .fetch_all(global.db.as_ref())
        .await?;

    Ok(users)
}

fn name_taken(err: sqlx::Error) -> ApiError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        return ApiError::invalid_input("name", "Name is already taken");
    }

    err.into()
}
