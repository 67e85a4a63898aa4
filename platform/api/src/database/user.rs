use chrono::{DateTime, Utc};
use common::database::Ulid;

#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct User {
    /// The unique identifier for the user.
    pub id: Ulid,
    /// The display name of the user. Unique across the platform.
    pub name: String,
    /// The self description shown on the profile page.
    pub introduction: Option<String>,
    /// Reference to the externally stored profile image, if one was uploaded.
    pub profile_image_id: Option<Ulid>,
    /// The time the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Validates a profile name. Lengths are counted in characters, not
    /// bytes, names are not restricted to ascii.
    pub fn validate_name(name: &str) -> Result<(), &'static str> {
        let length = name.chars().count();

        if length < 2 {
            return Err("Name must be at least 2 characters long");
        }

        if length > 20 {
            return Err("Name must be at most 20 characters long");
        }

        Ok(())
    }

    /// Validates a profile introduction.
    pub fn validate_introduction(introduction: &str) -> Result<(), &'static str> {
        if introduction.chars().count() > 50 {
            return Err("Introduction must be at most 50 characters long");
        }

        Ok(())
    }
}
