use super::db;

pub mod content_item;
