use chrono::{DateTime, Utc};
use common::database::Ulid;

/// A comment on a book entry.
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct BookComment {
    pub id: Ulid,
    pub user_id: Ulid,
    pub book_id: Ulid,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl BookComment {
    pub fn validate_comment(comment: &str) -> Result<(), &'static str> {
        if comment.trim().is_empty() {
            return Err("Comment must not be empty");
        }

        Ok(())
    }
}
