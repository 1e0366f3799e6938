use chrono::NaiveDate;
use claims::{assert_none, assert_ok, assert_some};
use diesel::prelude::*;
use pretty_assertions::assert_eq;

use crate::model::{
    repository::{
        self,
        content_item::CreateContentItem,
        db_entity::DbContentItem,
        schema,
    },
    ContentItemId, ContentItemStatus,
};

fn create_tip() -> CreateContentItem {
    CreateContentItem {
        title: "Tip: Optimiza tu SEO Local".to_owned(),
        description: Some("5 sencillos pasos".to_owned()),
        file_url: "https://picsum.photos/seed/tip/400/300".to_owned(),
        category: "tips".to_owned(),
        suggested_date: NaiveDate::from_ymd_opt(2024, 8, 22),
        status: ContentItemStatus::Draft,
        comments: None,
    }
}

fn create_promo() -> CreateContentItem {
    CreateContentItem {
        title: "Promo Verano 20% OFF".to_owned(),
        description: None,
        file_url: "https://picsum.photos/seed/promo/400/300".to_owned(),
        category: "promociones".to_owned(),
        suggested_date: None,
        status: ContentItemStatus::Approved,
        comments: Some("Revisar copy final".to_owned()),
    }
}

#[test]
fn insert_retrieve() {
    let mut conn = super::db::open_in_memory_and_migrate();
    let create = create_tip();
    let id = assert_ok!(repository::content_item::insert_content_item(
        &mut conn,
        create.clone()
    ));
    assert!(!id.0.is_empty());
    let retrieved = assert_some!(assert_ok!(repository::content_item::get_content_item(
        &mut conn,
        id.clone()
    )));
    assert_eq!(retrieved.id, id);
    assert_eq!(retrieved.title, create.title);
    assert_eq!(retrieved.description, create.description);
    assert_eq!(retrieved.file_url, create.file_url);
    assert_eq!(retrieved.category, create.category);
    assert_eq!(retrieved.suggested_date, create.suggested_date);
    assert_eq!(retrieved.status, create.status);
    assert_eq!(retrieved.comments, create.comments);
    assert_eq!(retrieved.created_at, retrieved.updated_at);
}

#[test]
fn inserted_items_get_distinct_ids() {
    let mut conn = super::db::open_in_memory_and_migrate();
    let id1 = assert_ok!(repository::content_item::insert_content_item(
        &mut conn,
        create_tip()
    ));
    let id2 = assert_ok!(repository::content_item::insert_content_item(
        &mut conn,
        create_tip()
    ));
    assert_ne!(id1, id2);
    let all = assert_ok!(repository::content_item::get_all_content_items(&mut conn));
    assert_eq!(all.len(), 2);
}

#[test]
fn get_missing_item_is_none() {
    let mut conn = super::db::open_in_memory_and_migrate();
    let missing = assert_ok!(repository::content_item::get_content_item(
        &mut conn,
        ContentItemId::from("no-such-id")
    ));
    assert_none!(missing);
}

#[test]
fn update_rewrites_fields_and_refreshes_updated_at() {
    let mut conn = super::db::open_in_memory_and_migrate();
    let id = assert_ok!(repository::content_item::insert_content_item(
        &mut conn,
        create_tip()
    ));
    let inserted = assert_some!(assert_ok!(repository::content_item::get_content_item(
        &mut conn,
        id.clone()
    )));
    // updated_at is millisecond precision, make sure the clock moves
    std::thread::sleep(std::time::Duration::from_millis(5));
    let mut update = create_promo();
    update.status = ContentItemStatus::Published;
    let matched = assert_ok!(repository::content_item::update_content_item(
        &mut conn,
        id.clone(),
        update.clone()
    ));
    assert!(matched);
    let updated = assert_some!(assert_ok!(repository::content_item::get_content_item(
        &mut conn,
        id.clone()
    )));
    assert_eq!(updated.id, id);
    assert_eq!(updated.title, update.title);
    assert_eq!(updated.status, ContentItemStatus::Published);
    assert_eq!(updated.suggested_date, None);
    assert_eq!(updated.created_at, inserted.created_at);
    assert!(updated.updated_at > inserted.updated_at);
}

#[test]
fn update_missing_item_matches_nothing() {
    let mut conn = super::db::open_in_memory_and_migrate();
    let matched = assert_ok!(repository::content_item::update_content_item(
        &mut conn,
        ContentItemId::from("no-such-id"),
        create_promo()
    ));
    assert!(!matched);
}

#[test]
fn stored_date_forms_are_normalized_on_read() {
    use schema::ContentItem;
    let mut conn = super::db::open_in_memory_and_migrate();
    let rows = vec![
        raw_item("iso", Some("2024-07-10T23:30:00Z".to_owned())),
        raw_item("plain", Some("2024-08-15".to_owned())),
        raw_item("garbage", Some("not a date".to_owned())),
        raw_item("unscheduled", None),
    ];
    assert_ok!(diesel::insert_into(ContentItem::table)
        .values(&rows)
        .execute(&mut conn));

    let mut by_id = |id: &str| {
        assert_some!(assert_ok!(repository::content_item::get_content_item(
            &mut conn,
            ContentItemId::from(id)
        )))
    };
    assert_eq!(
        by_id("iso").suggested_date,
        NaiveDate::from_ymd_opt(2024, 7, 10)
    );
    assert_eq!(
        by_id("plain").suggested_date,
        NaiveDate::from_ymd_opt(2024, 8, 15)
    );
    // unparseable stored dates read back as unscheduled, not as errors
    assert_eq!(by_id("garbage").suggested_date, None);
    assert_eq!(by_id("unscheduled").suggested_date, None);
}

fn raw_item(id: &str, suggested_date: Option<String>) -> DbContentItem {
    DbContentItem {
        content_item_id: id.to_owned(),
        title: format!("item {}", id),
        description: None,
        file_url: "https://example.com/f".to_owned(),
        category: "otro".to_owned(),
        suggested_date,
        status: "draft".to_owned(),
        comments: None,
        created_at: 1_720_000_000_000,
        updated_at: 1_720_000_000_000,
    }
}
