//! User entity.

use chrono::{DateTime, Utc};

/// An account that authors posts.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}
