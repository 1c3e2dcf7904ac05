//! Tag entity.

use serde::Serialize;

/// A named label attachable to posts.
///
/// Also used verbatim inside [`crate::domain::entities::PostView`], so it
/// serializes directly as the `{id, name}` pair of the aggregate read view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_serializes_as_id_name_pair() {
        let tag = Tag {
            id: 3,
            name: "holiday".to_string(),
        };

        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "name": "holiday" }));
    }
}
