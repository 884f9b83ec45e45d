//! PostgreSQL-backed `Store`, pooled with `r2d2` and bridged into async call
//! sites with `spawn_blocking` since diesel's connection is synchronous and
//! cannot be held across an await point.

use super::models::{NewPost, NewTag, Post, PostTag};
use super::schema::{post_tags, posts, tags};
use super::{CreatePostParams, Store};
use crate::error::GuzzleError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::upsert::excluded;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(database_url: &str) -> Result<Self, GuzzleError> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .build(manager)
            .map_err(|e| GuzzleError::Backend(format!("failed to build connection pool: {e}")))?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_post_with_tags(&self, params: CreatePostParams) -> Result<Post, GuzzleError> {
        params.validate()?;
        let tag_names = params.deduped_tags();
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(GuzzleError::from)?;
            conn.transaction::<Post, GuzzleError, _>(|conn| {
                let new_post = NewPost {
                    post_id: &params.post_id,
                    creator_did: &params.creator_did,
                    text: &params.text,
                    created_at: params.created_at,
                };
                let post: Post = diesel::insert_into(posts::table)
                    .values(&new_post)
                    .get_result(conn)?;

                let mut tag_ids = Vec::with_capacity(tag_names.len());
                for name in &tag_names {
                    let tag_id: i64 = diesel::insert_into(tags::table)
                        .values(NewTag { name })
                        .on_conflict(tags::name)
                        .do_update()
                        .set(tags::name.eq(excluded(tags::name)))
                        .returning(tags::id)
                        .get_result(conn)?;
                    tag_ids.push(tag_id);
                }

                if !tag_ids.is_empty() {
                    let join_rows: Vec<PostTag> = tag_ids
                        .into_iter()
                        .map(|tag_id| PostTag {
                            post_id: post.id,
                            tag_id,
                        })
                        .collect();
                    diesel::insert_into(post_tags::table)
                        .values(&join_rows)
                        .execute(conn)?;
                }

                Ok(post)
            })
        })
        .await?
    }

    async fn get_post_by_id(&self, id: i64) -> Result<Post, GuzzleError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(GuzzleError::from)?;
            posts::table
                .find(id)
                .first::<Post>(&mut conn)
                .map_err(GuzzleError::from)
        })
        .await?
    }

    async fn get_recent_root_posts_by_tags(
        &self,
        tag_names: Vec<String>,
        created_after: DateTime<Utc>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, GuzzleError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(GuzzleError::from)?;
            let matching_post_ids = post_tags::table
                .inner_join(tags::table)
                .filter(tags::name.eq_any(&tag_names))
                .select(post_tags::post_id)
                .distinct();

            posts::table
                .filter(posts::id.eq_any(matching_post_ids))
                .filter(posts::created_at.gt(created_after))
                .order((posts::created_at.desc(), posts::id.desc()))
                .offset(offset)
                .limit(limit)
                .load::<Post>(&mut conn)
                .map_err(GuzzleError::from)
        })
        .await?
    }

    async fn get_recent_root_posts_by_tag_and_creator(
        &self,
        tag_names: Vec<String>,
        creator_dids: Vec<String>,
        created_after: DateTime<Utc>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, GuzzleError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(GuzzleError::from)?;
            let matching_post_ids = post_tags::table
                .inner_join(tags::table)
                .filter(tags::name.eq_any(&tag_names))
                .select(post_tags::post_id)
                .distinct();

            posts::table
                .filter(posts::id.eq_any(matching_post_ids))
                .filter(posts::creator_did.eq_any(&creator_dids))
                .filter(posts::created_at.gt(created_after))
                .order((posts::created_at.desc(), posts::id.desc()))
                .offset(offset)
                .limit(limit)
                .load::<Post>(&mut conn)
                .map_err(GuzzleError::from)
        })
        .await?
    }
}
