//! The correctness boundary for the whole system: a narrow, four-operation
//! contract that both the ingestion engine and the search service depend on
//! without knowing which backend implements it.

pub mod memory;
pub mod models;
pub mod pg;
pub mod schema;

use crate::error::GuzzleError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
pub use models::Post;

/// Arguments to `create_post_with_tags`. `tags` is deduplicated by the
/// implementation before it is persisted.
#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub post_id: String,
    pub creator_did: String,
    pub created_at: DateTime<Utc>,
    pub text: String,
    pub tags: Vec<String>,
}

impl CreatePostParams {
    /// `Invalid` if a required string is empty; text may legitimately be empty.
    pub fn validate(&self) -> Result<(), GuzzleError> {
        if self.post_id.is_empty() {
            return Err(GuzzleError::Invalid("post_id must not be empty".into()));
        }
        if self.creator_did.is_empty() {
            return Err(GuzzleError::Invalid("creator_did must not be empty".into()));
        }
        Ok(())
    }

    /// Tag names deduplicated, preserving first-occurrence order.
    pub fn deduped_tags(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.tags
            .iter()
            .filter(|tag| seen.insert((*tag).clone()))
            .cloned()
            .collect()
    }
}

#[async_trait]
pub trait Store: Send + Sync {
    /// Atomic: either the post and all its tag associations are persisted,
    /// or nothing is. `Conflict` on a duplicate `(post_id, creator_did)`.
    async fn create_post_with_tags(&self, params: CreatePostParams) -> Result<Post, GuzzleError>;

    async fn get_post_by_id(&self, id: i64) -> Result<Post, GuzzleError>;

    /// Root posts whose tags intersect `tag_names`, ordered by `created_at`
    /// descending then surrogate id descending.
    async fn get_recent_root_posts_by_tags(
        &self,
        tag_names: Vec<String>,
        created_after: DateTime<Utc>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, GuzzleError>;

    /// As above, additionally restricted to `creator_did ∈ creator_dids`.
    async fn get_recent_root_posts_by_tag_and_creator(
        &self,
        tag_names: Vec<String>,
        creator_dids: Vec<String>,
        created_after: DateTime<Utc>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, GuzzleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupes_tags_preserving_first_occurrence_order() {
        let params = CreatePostParams {
            post_id: "p1".into(),
            creator_did: "did:a".into(),
            created_at: Utc::now(),
            text: "hello".into(),
            tags: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(params.deduped_tags(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn rejects_empty_post_id_or_creator_did() {
        let mut params = CreatePostParams {
            post_id: "".into(),
            creator_did: "did:a".into(),
            created_at: Utc::now(),
            text: "hello".into(),
            tags: vec![],
        };
        assert!(matches!(params.validate(), Err(GuzzleError::Invalid(_))));
        params.post_id = "p1".into();
        params.creator_did = "".into();
        assert!(matches!(params.validate(), Err(GuzzleError::Invalid(_))));
    }

    #[test]
    fn allows_empty_text() {
        let params = CreatePostParams {
            post_id: "p1".into(),
            creator_did: "did:a".into(),
            created_at: Utc::now(),
            text: "".into(),
            tags: vec!["x".into()],
        };
        assert!(params.validate().is_ok());
    }
}
