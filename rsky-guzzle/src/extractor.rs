//! Pure transformer from a Jetstream commit event to a normalised post tuple
//! plus a tag set. No I/O, no clock reads — the system's single semantic
//! seam where the upstream record shape is decoded.

use crate::error::GuzzleError;
use crate::jetstream::CommitEvent;
use chrono::{DateTime, Utc};
use rsky_lexicon::app::bsky::richtext::Features;
use rsky_lexicon::app::bsky::feed::Post as PostRecord;

pub const FEED_POST_COLLECTION: &str = "app.bsky.feed.post";

/// The fields needed to persist an accepted post, plus its tags.
#[derive(Debug, Clone, PartialEq)]
pub struct PostParams {
    pub post_id: String,
    pub creator_did: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// Every reason an event does not produce a persisted post.
#[derive(Debug, Clone, PartialEq)]
pub enum Skip {
    NonCommit,
    OtherCollection,
    DeleteLogged { rkey: String },
    UnsupportedOp,
    Reply,
    Untagged,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractOutcome {
    Accepted(PostParams),
    Skipped(Skip),
}

/// Runs the extraction algorithm against one commit event.
///
/// Returns `Ok(Skipped(_))` for every filtered outcome (never an error); only
/// a malformed record payload for an otherwise-qualifying create surfaces as
/// `GuzzleError::ExtractError`.
pub fn extract(event: &CommitEvent) -> Result<ExtractOutcome, GuzzleError> {
    if event.kind != "commit" {
        return Ok(ExtractOutcome::Skipped(Skip::NonCommit));
    }
    let Some(commit) = &event.commit else {
        return Ok(ExtractOutcome::Skipped(Skip::NonCommit));
    };
    if commit.collection != FEED_POST_COLLECTION {
        return Ok(ExtractOutcome::Skipped(Skip::OtherCollection));
    }
    if commit.operation == "delete" {
        return Ok(ExtractOutcome::Skipped(Skip::DeleteLogged {
            rkey: commit.rkey.clone(),
        }));
    }
    if commit.operation != "create" {
        return Ok(ExtractOutcome::Skipped(Skip::UnsupportedOp));
    }

    let record_value = commit
        .record
        .clone()
        .ok_or_else(|| GuzzleError::ExtractError("create commit missing record".into()))?;
    let record: PostRecord = serde_json::from_value(record_value)
        .map_err(|e| GuzzleError::ExtractError(e.to_string()))?;

    let mut tags = Vec::new();
    if let Some(facets) = &record.facets {
        for facet in facets {
            for feature in &facet.features {
                if let Features::Tag(tag) = feature {
                    if !tag.tag.is_empty() {
                        tags.push(tag.tag.clone());
                    }
                }
            }
        }
    }

    if record.reply.is_some() {
        return Ok(ExtractOutcome::Skipped(Skip::Reply));
    }
    if tags.is_empty() {
        return Ok(ExtractOutcome::Skipped(Skip::Untagged));
    }

    Ok(ExtractOutcome::Accepted(PostParams {
        post_id: commit.rkey.clone(),
        creator_did: event.did.clone(),
        text: record.text.clone(),
        created_at: record.created_at,
        tags,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jetstream::read;

    fn commit_event(json: &str) -> CommitEvent {
        read(json).unwrap()
    }

    #[test]
    fn accepts_a_tagged_root_post() {
        let event = commit_event(
            r#"{"did":"did:plc:abc","time_us":1,"kind":"commit","commit":{"rev":"r","operation":"create","collection":"app.bsky.feed.post","rkey":"p1","record":{"$type":"app.bsky.feed.post","text":"hi #golang","createdAt":"2024-11-13T23:19:36.449Z","facets":[{"index":{"byteStart":3,"byteEnd":10},"features":[{"$type":"app.bsky.richtext.facet#tag","tag":"golang"}]}]}}}"#,
        );
        let outcome = extract(&event).unwrap();
        assert_eq!(
            outcome,
            ExtractOutcome::Accepted(PostParams {
                post_id: "p1".to_string(),
                creator_did: "did:plc:abc".to_string(),
                text: "hi #golang".to_string(),
                created_at: "2024-11-13T23:19:36.449Z".parse().unwrap(),
                tags: vec!["golang".to_string()],
            })
        );
    }

    #[test]
    fn skips_non_commit_events() {
        let event = commit_event(r#"{"did":"did:plc:abc","time_us":1,"kind":"identity"}"#);
        assert_eq!(
            extract(&event).unwrap(),
            ExtractOutcome::Skipped(Skip::NonCommit)
        );
    }

    #[test]
    fn skips_other_collections() {
        let event = commit_event(
            r#"{"did":"did:plc:abc","time_us":1,"kind":"commit","commit":{"rev":"r","operation":"create","collection":"app.bsky.feed.like","rkey":"p1"}}"#,
        );
        assert_eq!(
            extract(&event).unwrap(),
            ExtractOutcome::Skipped(Skip::OtherCollection)
        );
    }

    #[test]
    fn logs_deletes_without_writing() {
        let event = commit_event(
            r#"{"did":"did:plc:abc","time_us":1,"kind":"commit","commit":{"rev":"r","operation":"delete","collection":"app.bsky.feed.post","rkey":"p1"}}"#,
        );
        assert_eq!(
            extract(&event).unwrap(),
            ExtractOutcome::Skipped(Skip::DeleteLogged {
                rkey: "p1".to_string()
            })
        );
    }

    #[test]
    fn skips_unsupported_operations() {
        let event = commit_event(
            r#"{"did":"did:plc:abc","time_us":1,"kind":"commit","commit":{"rev":"r","operation":"update","collection":"app.bsky.feed.post","rkey":"p1","record":{"$type":"app.bsky.feed.post","text":"x","createdAt":"2024-11-13T23:19:36.449Z"}}}"#,
        );
        assert_eq!(
            extract(&event).unwrap(),
            ExtractOutcome::Skipped(Skip::UnsupportedOp)
        );
    }

    #[test]
    fn skips_replies() {
        let event = commit_event(
            r#"{"did":"did:plc:abc","time_us":1,"kind":"commit","commit":{"rev":"r","operation":"create","collection":"app.bsky.feed.post","rkey":"p1","record":{"$type":"app.bsky.feed.post","text":"x","createdAt":"2024-11-13T23:19:36.449Z","facets":[{"index":{"byteStart":0,"byteEnd":1},"features":[{"$type":"app.bsky.richtext.facet#tag","tag":"x"}]}],"reply":{"root":{"uri":"at://did:plc:abc/app.bsky.feed.post/root","cid":"bafy"},"parent":{"uri":"at://did:plc:abc/app.bsky.feed.post/parent","cid":"bafy"}}}}}"#,
        );
        assert_eq!(
            extract(&event).unwrap(),
            ExtractOutcome::Skipped(Skip::Reply)
        );
    }

    #[test]
    fn skips_untagged_posts() {
        let event = commit_event(
            r#"{"did":"did:plc:abc","time_us":1,"kind":"commit","commit":{"rev":"r","operation":"create","collection":"app.bsky.feed.post","rkey":"p1","record":{"$type":"app.bsky.feed.post","text":"hello","createdAt":"2024-11-13T23:19:36.449Z"}}}"#,
        );
        assert_eq!(
            extract(&event).unwrap(),
            ExtractOutcome::Skipped(Skip::Untagged)
        );
    }

    #[test]
    fn preserves_tag_order_and_keeps_duplicates() {
        let event = commit_event(
            r#"{"did":"did:plc:abc","time_us":1,"kind":"commit","commit":{"rev":"r","operation":"create","collection":"app.bsky.feed.post","rkey":"p1","record":{"$type":"app.bsky.feed.post","text":"hello","createdAt":"2024-11-13T23:19:36.449Z","facets":[{"index":{"byteStart":0,"byteEnd":1},"features":[{"$type":"app.bsky.richtext.facet#tag","tag":"a"}]},{"index":{"byteStart":1,"byteEnd":2},"features":[{"$type":"app.bsky.richtext.facet#tag","tag":"b"}]},{"index":{"byteStart":2,"byteEnd":3},"features":[{"$type":"app.bsky.richtext.facet#tag","tag":"a"}]}]}}}"#,
        );
        let ExtractOutcome::Accepted(params) = extract(&event).unwrap() else {
            panic!("expected an accepted outcome");
        };
        assert_eq!(params.tags, vec!["a", "b", "a"]);
    }

    #[test]
    fn fails_to_decode_a_malformed_record() {
        let event = commit_event(
            r#"{"did":"did:plc:abc","time_us":1,"kind":"commit","commit":{"rev":"r","operation":"create","collection":"app.bsky.feed.post","rkey":"p1","record":{"$type":"app.bsky.feed.post"}}}"#,
        );
        assert!(matches!(extract(&event), Err(GuzzleError::ExtractError(_))));
    }

    #[test]
    fn is_pure() {
        let event = commit_event(
            r#"{"did":"did:plc:abc","time_us":1,"kind":"commit","commit":{"rev":"r","operation":"create","collection":"app.bsky.feed.post","rkey":"p1","record":{"$type":"app.bsky.feed.post","text":"hi #golang","createdAt":"2024-11-13T23:19:36.449Z","facets":[{"index":{"byteStart":3,"byteEnd":10},"features":[{"$type":"app.bsky.richtext.facet#tag","tag":"golang"}]}]}}}"#,
        );
        assert_eq!(extract(&event).unwrap(), extract(&event).unwrap());
    }
}
