use diesel::prelude::Insertable;
use diesel::{Queryable, Selectable};
use eyre::{eyre, Context};

use crate::content::dates::{self, DateValue};
use crate::model::util::{datetime_from_db_repr, datetime_to_db_repr};
use crate::model::{ContentItem, ContentItemId, ContentItemStatus};

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = super::super::schema::ContentItem)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DbContentItem {
    pub content_item_id: String,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub category: String,
    pub suggested_date: Option<String>,
    pub status: String,
    pub comments: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<DbContentItem> for ContentItem {
    type Error = eyre::Report;

    fn try_from(value: DbContentItem) -> Result<Self, Self::Error> {
        let status: ContentItemStatus = value
            .status
            .parse()
            .map_err(|_| eyre!("invalid db content item status {}", value.status))?;
        // Stored dates can be YYYY-MM-DD or any other textual form the
        // normalizer understands; anything unparseable reads back as None.
        let suggested_date = value
            .suggested_date
            .and_then(|s| dates::to_suggested_date(&DateValue::Text(s)));
        Ok(ContentItem {
            id: ContentItemId(value.content_item_id),
            title: value.title,
            description: value.description,
            file_url: value.file_url,
            category: value.category,
            suggested_date,
            status,
            comments: value.comments,
            created_at: datetime_from_db_repr(value.created_at)
                .wrap_err("invalid created_at in db")?,
            updated_at: datetime_from_db_repr(value.updated_at)
                .wrap_err("invalid updated_at in db")?,
        })
    }
}

impl From<&ContentItem> for DbContentItem {
    fn from(value: &ContentItem) -> Self {
        DbContentItem {
            content_item_id: value.id.0.clone(),
            title: value.title.clone(),
            description: value.description.clone(),
            file_url: value.file_url.clone(),
            category: value.category.clone(),
            suggested_date: value.suggested_date.map(dates::to_canonical_string),
            status: value.status.to_string(),
            comments: value.comments.clone(),
            created_at: datetime_to_db_repr(&value.created_at),
            updated_at: datetime_to_db_repr(&value.updated_at),
        }
    }
}
