use chrono::{DateTime, Utc};
use common::database::Ulid;

/// A logged book entry. `created_at` drives all activity statistics.
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct Book {
    pub id: Ulid,
    pub user_id: Ulid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Book {
    pub fn validate_title(title: &str) -> Result<(), &'static str> {
        if title.trim().is_empty() {
            return Err("Title must not be empty");
        }

        Ok(())
    }

    pub fn validate_body(body: &str) -> Result<(), &'static str> {
        if body.trim().is_empty() {
            return Err("Body must not be empty");
        }

        if body.chars().count() > 200 {
            return Err("Body must be at most 200 characters long");
        }

        Ok(())
    }
}
