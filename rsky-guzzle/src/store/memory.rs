//! An in-process fake implementing the `Store` trait, so the engine and
//! search service can be exercised without a running Postgres instance.
//! Mirrors the same atomicity and uniqueness invariants as `PgStore`.

use super::models::Post;
use super::{CreatePostParams, Store};
use crate::error::GuzzleError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Default)]
struct Inner {
    posts: Vec<Post>,
    tags_by_name: HashMap<String, i64>,
    post_tags: Vec<(i64, i64)>,
    next_post_id: i64,
    next_tag_id: i64,
}

#[derive(Default)]
pub struct InMemoryStore(Mutex<Inner>);

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn create_post_with_tags(&self, params: CreatePostParams) -> Result<Post, GuzzleError> {
        params.validate()?;
        let tag_names = params.deduped_tags();
        let mut inner = self.0.lock();

        if inner
            .posts
            .iter()
            .any(|p| p.post_id == params.post_id && p.creator_did == params.creator_did)
        {
            return Err(GuzzleError::Conflict);
        }

        inner.next_post_id += 1;
        let post = Post {
            id: inner.next_post_id,
            post_id: params.post_id,
            creator_did: params.creator_did,
            text: params.text,
            created_at: params.created_at,
            data: None,
        };

        let mut tag_ids = Vec::with_capacity(tag_names.len());
        for name in tag_names {
            let id = if let Some(id) = inner.tags_by_name.get(&name) {
                *id
            } else {
                inner.next_tag_id += 1;
                let id = inner.next_tag_id;
                inner.tags_by_name.insert(name, id);
                id
            };
            tag_ids.push(id);
        }

        for tag_id in tag_ids {
            inner.post_tags.push((post.id, tag_id));
        }
        inner.posts.push(post.clone());
        Ok(post)
    }

    async fn get_post_by_id(&self, id: i64) -> Result<Post, GuzzleError> {
        let inner = self.0.lock();
        inner
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(GuzzleError::NotFound)
    }

    async fn get_recent_root_posts_by_tags(
        &self,
        tag_names: Vec<String>,
        created_after: DateTime<Utc>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, GuzzleError> {
        let inner = self.0.lock();
        let matching_ids = matching_tag_ids(&inner, &tag_names);
        Ok(select(&inner, &matching_ids, None, created_after, offset, limit))
    }

    async fn get_recent_root_posts_by_tag_and_creator(
        &self,
        tag_names: Vec<String>,
        creator_dids: Vec<String>,
        created_after: DateTime<Utc>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, GuzzleError> {
        let inner = self.0.lock();
        let matching_ids = matching_tag_ids(&inner, &tag_names);
        Ok(select(
            &inner,
            &matching_ids,
            Some(&creator_dids),
            created_after,
            offset,
            limit,
        ))
    }
}

fn matching_tag_ids(inner: &Inner, tag_names: &[String]) -> std::collections::HashSet<i64> {
    tag_names
        .iter()
        .filter_map(|name| inner.tags_by_name.get(name).copied())
        .collect()
}

fn select(
    inner: &Inner,
    matching_tag_ids: &std::collections::HashSet<i64>,
    creator_dids: Option<&[String]>,
    created_after: DateTime<Utc>,
    offset: i64,
    limit: i64,
) -> Vec<Post> {
    let mut results: Vec<Post> = inner
        .posts
        .iter()
        .filter(|post| post.created_at > created_after)
        .filter(|post| creator_dids.map_or(true, |dids| dids.contains(&post.creator_did)))
        .filter(|post| {
            inner
                .post_tags
                .iter()
                .any(|(post_id, tag_id)| *post_id == post.id && matching_tag_ids.contains(tag_id))
        })
        .cloned()
        .collect();

    results.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    results
        .into_iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(post_id: &str, creator_did: &str, tags: Vec<&str>) -> CreatePostParams {
        CreatePostParams {
            post_id: post_id.to_string(),
            creator_did: creator_did.to_string(),
            created_at: Utc::now(),
            text: "hi".to_string(),
            tags: tags.into_iter().map(String::from).collect(),
        }
    }

    #[tokio::test]
    async fn rejects_duplicate_post_id_and_creator() {
        let store = InMemoryStore::new();
        store
            .create_post_with_tags(params("p1", "did:a", vec!["x"]))
            .await
            .unwrap();
        let err = store
            .create_post_with_tags(params("p1", "did:a", vec!["x"]))
            .await
            .unwrap_err();
        assert!(matches!(err, GuzzleError::Conflict));
    }

    #[tokio::test]
    async fn interns_tags_by_name() {
        let store = InMemoryStore::new();
        store
            .create_post_with_tags(params("p1", "did:a", vec!["x", "y"]))
            .await
            .unwrap();
        store
            .create_post_with_tags(params("p2", "did:a", vec!["x"]))
            .await
            .unwrap();
        let inner = store.0.lock();
        assert_eq!(inner.tags_by_name.len(), 2);
    }

    #[tokio::test]
    async fn search_restricts_by_creator() {
        let store = InMemoryStore::new();
        store
            .create_post_with_tags(params("p1", "did:a", vec!["test"]))
            .await
            .unwrap();
        store
            .create_post_with_tags(params("p2", "did:b", vec!["test"]))
            .await
            .unwrap();

        let epoch = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
        let rows = store
            .get_recent_root_posts_by_tag_and_creator(
                vec!["test".to_string()],
                vec!["did:a".to_string()],
                epoch,
                0,
                50,
            )
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].creator_did, "did:a");
    }
}
