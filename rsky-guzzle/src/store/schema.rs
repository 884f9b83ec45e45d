// @generated manually to match migrations/2024-01-01-000000_create_guzzle_schema.

diesel::table! {
    posts (id) {
        id -> Int8,
        post_id -> Text,
        creator_did -> Text,
        text -> Text,
        created_at -> Timestamptz,
        data -> Nullable<Bytea>,
    }
}

diesel::table! {
    tags (id) {
        id -> Int8,
        name -> Text,
    }
}

diesel::table! {
    post_tags (post_id, tag_id) {
        post_id -> Int8,
        tag_id -> Int8,
    }
}

diesel::joinable!(post_tags -> posts (post_id));
diesel::joinable!(post_tags -> tags (tag_id));

diesel::allow_tables_to_appear_in_same_query!(posts, tags, post_tags,);
