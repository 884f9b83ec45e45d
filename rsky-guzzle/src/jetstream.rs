//! Wire shape of a Jetstream message, decoded just far enough for the Record
//! Extractor to pick it apart. The `record` field is kept as an opaque JSON
//! value here; only the extractor decodes it into a concrete lexicon type.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CommitEvent {
    pub did: String,
    pub time_us: i64,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<Commit>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Commit {
    pub rev: String,
    pub operation: String,
    pub collection: String,
    pub rkey: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,
}

impl CommitEvent {
    /// The monotonic stream position this event was delivered at.
    pub fn cursor(&self) -> i64 {
        self.time_us
    }
}

/// Parses one line of the Jetstream websocket stream.
pub fn read(data: &str) -> Result<CommitEvent, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_create_commit() {
        let data = r#"{"did":"did:plc:abc","time_us":1731539977109649,"kind":"commit","commit":{"rev":"3laui","operation":"create","collection":"app.bsky.feed.post","rkey":"3lauicnw5op2f","record":{"$type":"app.bsky.feed.post","text":"hi #golang","createdAt":"2024-11-13T23:19:36.449Z"},"cid":"bafyrei"}}"#;
        let event = read(data).unwrap();
        assert_eq!(event.kind, "commit");
        assert_eq!(event.cursor(), 1731539977109649);
        let commit = event.commit.unwrap();
        assert_eq!(commit.collection, "app.bsky.feed.post");
        assert_eq!(commit.operation, "create");
        assert_eq!(commit.rkey, "3lauicnw5op2f");
    }

    #[test]
    fn reads_a_delete_commit_without_a_record() {
        let data = r#"{"did":"did:plc:abc","time_us":1731623029598761,"kind":"commit","commit":{"rev":"3lawvnsupm222","operation":"delete","collection":"app.bsky.feed.post","rkey":"3kwrdj3olqr2t"}}"#;
        let event = read(data).unwrap();
        let commit = event.commit.unwrap();
        assert_eq!(commit.operation, "delete");
        assert!(commit.record.is_none());
    }

    #[test]
    fn reads_a_non_commit_event() {
        let data = r#"{"did":"did:plc:abc","time_us":1731623029648609,"kind":"account"}"#;
        let event = read(data).unwrap();
        assert_eq!(event.kind, "account");
        assert!(event.commit.is_none());
    }
}
