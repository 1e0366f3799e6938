use chrono::NaiveDate;
use diesel::prelude::*;
use eyre::Result;
use tracing::instrument;
use uuid::Uuid;

use crate::content::dates;
use crate::model::util::datetime_to_db_repr;
use crate::model::{ContentItem, ContentItemId, ContentItemStatus};

use super::db::DbConn;
use super::db_entity::DbContentItem;
use super::schema;

/// Fields the form writes. The id and the created_at/updated_at pair are
/// assigned by the store, never by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContentItem {
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub category: String,
    pub suggested_date: Option<NaiveDate>,
    pub status: ContentItemStatus,
    pub comments: Option<String>,
}

#[instrument(skip(conn), level = "trace")]
pub fn get_all_content_items(conn: &mut DbConn) -> Result<Vec<ContentItem>> {
    use schema::ContentItem;
    let db_items: Vec<DbContentItem> = ContentItem::table.load(conn)?;
    db_items
        .into_iter()
        .map(|db_item| db_item.try_into())
        .collect::<Result<Vec<_>>>()
}

#[instrument(skip(conn), level = "trace")]
pub fn get_content_item(conn: &mut DbConn, id: ContentItemId) -> Result<Option<ContentItem>> {
    use schema::ContentItem;
    let db_item: Option<DbContentItem> = ContentItem::table.find(&id.0).first(conn).optional()?;
    db_item.map(|db_item| db_item.try_into()).transpose()
}

#[instrument(skip(conn), level = "trace")]
pub fn insert_content_item(
    conn: &mut DbConn,
    create: CreateContentItem,
) -> Result<ContentItemId> {
    use schema::ContentItem;
    let now = chrono::Utc::now();
    let id = Uuid::new_v4().to_string();
    let db_item = DbContentItem {
        content_item_id: id.clone(),
        title: create.title,
        description: create.description,
        file_url: create.file_url,
        category: create.category,
        suggested_date: create.suggested_date.map(dates::to_canonical_string),
        status: create.status.to_string(),
        comments: create.comments,
        created_at: datetime_to_db_repr(&now),
        updated_at: datetime_to_db_repr(&now),
    };
    diesel::insert_into(ContentItem::table)
        .values(&db_item)
        .execute(conn)?;
    Ok(ContentItemId(id))
}

/// Rewrites the form fields and refreshes updated_at. Returns false when no
/// item with this id exists. created_at and the id itself are never touched.
#[instrument(skip(conn), level = "trace")]
pub fn update_content_item(
    conn: &mut DbConn,
    id: ContentItemId,
    update: CreateContentItem,
) -> Result<bool> {
    use schema::ContentItem;
    let now = chrono::Utc::now();
    let rows = diesel::update(ContentItem::table.find(&id.0))
        .set((
            ContentItem::title.eq(update.title),
            ContentItem::description.eq(update.description),
            ContentItem::file_url.eq(update.file_url),
            ContentItem::category.eq(update.category),
            ContentItem::suggested_date.eq(update.suggested_date.map(dates::to_canonical_string)),
            ContentItem::status.eq(update.status.to_string()),
            ContentItem::comments.eq(update.comments),
            ContentItem::updated_at.eq(datetime_to_db_repr(&now)),
        ))
        .execute(conn)?;
    Ok(rows != 0)
}
