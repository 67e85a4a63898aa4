use chrono::{DateTime, Utc};
use common::database::Ulid;

/// A directed follow edge. The primary key keeps at most one edge per
/// `(follower, followed)` pair.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Follow {
    pub follower_id: Ulid,         // uuid, foreign key -> users.id
    pub followed_id: Ulid,         // uuid, foreign key -> users.id
    pub created_at: DateTime<Utc>, // timestamptz
}
