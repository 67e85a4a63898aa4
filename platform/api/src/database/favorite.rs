use chrono::{DateTime, Utc};
use common::database::Ulid;

/// A favorite on a book entry, one per `(user, book)` pair.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Favorite {
    pub user_id: Ulid,             // uuid, foreign key -> users.id
    pub book_id: Ulid,             // uuid, foreign key -> books.id
    pub created_at: DateTime<Utc>, // timestamptz
}
