//! The Search Service: a minimal `warp` HTTP front door over the store's
//! write path and its two tag-search read paths. Its lifecycle is
//! independent of the ingestion engine's — it owns its own `Store` handle
//! and can run, or not, regardless of whether the engine is ingesting.

use crate::error::GuzzleError;
use crate::store::{CreatePostParams, Store};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

const DEFAULT_LIMIT: i64 = 50;
const DEFAULT_LOOKBACK_DAYS: i64 = 365;

#[derive(Debug, Deserialize)]
struct CreatePostRequest {
    post_id: String,
    creator_did: String,
    text: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SearchRequest {
    tags: Vec<String>,
    #[serde(default)]
    creator_dids: Vec<String>,
    created_after: Option<DateTime<Utc>>,
    limit: Option<i64>,
    offset: Option<i64>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Assembles the full route tree, including fallback error handling for
/// malformed bodies and disallowed methods.
pub fn routes(store: Arc<dyn Store>) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let with_store = warp::any().map(move || store.clone());

    let create = warp::path!("api" / "posts" / "create")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store.clone())
        .and_then(handle_create);

    let search = warp::path!("api" / "posts" / "search")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store)
        .and_then(handle_search);

    create.or(search).recover(handle_rejection)
}

async fn handle_create(
    request: CreatePostRequest,
    store: Arc<dyn Store>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, Rejection> {
    if request.post_id.is_empty() || request.creator_did.is_empty() || request.text.is_empty() {
        return Ok(error_reply(&GuzzleError::Invalid(
            "post_id, creator_did and text must be non-empty".to_string(),
        )));
    }

    let result = store
        .create_post_with_tags(CreatePostParams {
            post_id: request.post_id,
            creator_did: request.creator_did,
            created_at: Utc::now(),
            text: request.text,
            tags: request.tags,
        })
        .await;

    Ok(match result {
        Ok(post) => warp::reply::with_status(warp::reply::json(&post), StatusCode::CREATED),
        Err(e) => error_reply(&e),
    })
}

async fn handle_search(
    request: SearchRequest,
    store: Arc<dyn Store>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, Rejection> {
    if request.tags.is_empty() {
        return Ok(error_reply(&GuzzleError::Invalid("tags must not be empty".to_string())));
    }

    let limit = request.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = request.offset.unwrap_or(0);
    let created_after = request
        .created_after
        .unwrap_or_else(|| Utc::now() - chrono::Duration::days(DEFAULT_LOOKBACK_DAYS));

    let result = if request.creator_dids.is_empty() {
        store
            .get_recent_root_posts_by_tags(request.tags, created_after, offset, limit)
            .await
    } else {
        store
            .get_recent_root_posts_by_tag_and_creator(request.tags, request.creator_dids, created_after, offset, limit)
            .await
    };

    Ok(match result {
        Ok(posts) => warp::reply::with_status(warp::reply::json(&posts), StatusCode::OK),
        Err(e) => error_reply(&e),
    })
}

/// Maps a `GuzzleError` to its response status. `Conflict` maps to 500 here,
/// not 409: a duplicate `create` is an ingestion-path no-op elsewhere in this
/// crate, and this endpoint surfaces it as a generic backend failure rather
/// than minting a new status code for it.
fn error_reply(error: &GuzzleError) -> warp::reply::WithStatus<warp::reply::Json> {
    let status = match error {
        GuzzleError::Invalid(_) => StatusCode::BAD_REQUEST,
        GuzzleError::NotFound => StatusCode::NOT_FOUND,
        GuzzleError::Conflict | GuzzleError::Backend(_) | GuzzleError::ExtractError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    warp::reply::with_status(
        warp::reply::json(&ErrorBody {
            error: error.to_string(),
        }),
        status,
    )
}

async fn handle_rejection(err: Rejection) -> Result<warp::reply::WithStatus<warp::reply::Json>, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not found".to_string())
    } else if err.find::<warp::body::BodyDeserializeError>().is_some() {
        (StatusCode::BAD_REQUEST, "malformed request body".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "method not allowed".to_string())
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
    };
    Ok(warp::reply::with_status(warp::reply::json(&ErrorBody { error: message }), status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn store() -> Arc<dyn Store> {
        Arc::new(InMemoryStore::new())
    }

    #[tokio::test]
    async fn create_returns_201_for_a_valid_post() {
        let filter = routes(store());
        let response = warp::test::request()
            .method("POST")
            .path("/api/posts/create")
            .json(&serde_json::json!({
                "post_id": "p1",
                "creator_did": "did:test:a",
                "text": "hi #golang",
                "tags": ["golang"]
            }))
            .reply(&filter)
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn create_returns_400_for_missing_fields() {
        let filter = routes(store());
        let response = warp::test::request()
            .method("POST")
            .path("/api/posts/create")
            .json(&serde_json::json!({"post_id": "", "creator_did": "did:test:a", "text": "hi"}))
            .reply(&filter)
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_returns_500_on_duplicate() {
        let store = store();
        let filter = routes(store.clone());
        let body = serde_json::json!({
            "post_id": "p1",
            "creator_did": "did:test:a",
            "text": "hi #golang",
            "tags": ["golang"]
        });
        let first = warp::test::request()
            .method("POST")
            .path("/api/posts/create")
            .json(&body)
            .reply(&filter)
            .await;
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = warp::test::request()
            .method("POST")
            .path("/api/posts/create")
            .json(&body)
            .reply(&filter)
            .await;
        assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn search_rejects_empty_tags() {
        let filter = routes(store());
        let response = warp::test::request()
            .method("POST")
            .path("/api/posts/search")
            .json(&serde_json::json!({"tags": []}))
            .reply(&filter)
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_restricts_by_creator_when_given() {
        let backing = Arc::new(InMemoryStore::new());
        backing
            .create_post_with_tags(CreatePostParams {
                post_id: "p1".into(),
                creator_did: "did:a".into(),
                created_at: Utc::now(),
                text: "hi".into(),
                tags: vec!["test".into()],
            })
            .await
            .unwrap();
        backing
            .create_post_with_tags(CreatePostParams {
                post_id: "p2".into(),
                creator_did: "did:b".into(),
                created_at: Utc::now(),
                text: "hi".into(),
                tags: vec!["test".into()],
            })
            .await
            .unwrap();

        let filter = routes(backing);
        let response = warp::test::request()
            .method("POST")
            .path("/api/posts/search")
            .json(&serde_json::json!({
                "tags": ["test"],
                "creator_dids": ["did:a"],
                "created_after": "1970-01-01T00:00:00Z",
                "limit": 50
            }))
            .reply(&filter)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let posts: Vec<crate::store::Post> = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].creator_did, "did:a");
    }

    #[tokio::test]
    async fn non_post_method_returns_405() {
        let filter = routes(store());
        let response = warp::test::request()
            .method("GET")
            .path("/api/posts/create")
            .reply(&filter)
            .await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
