diesel::table! {
    ContentItem (content_item_id) {
        content_item_id -> Text,
        title -> Text,
        description -> Nullable<Text>,
        file_url -> Text,
        category -> Text,
        suggested_date -> Nullable<Text>,
        status -> Text,
        comments -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}
