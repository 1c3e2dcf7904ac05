//! Post-tag join record.

/// A join record associating one post with one tag.
///
/// Deliberately not unique per `(post_id, tag_id)`: a caller that repeats a
/// tag id gets a duplicate link, and the read view reflects the duplicate.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostTagLink {
    pub id: i64,
    pub post_id: i64,
    pub tag_id: i64,
}

/// Input data for creating a new post-tag link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPostTagLink {
    pub post_id: i64,
    pub tag_id: i64,
}
