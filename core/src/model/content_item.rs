use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::ContentItemId;

/// A single planned social media post.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentItem {
    pub id: ContentItemId,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub category: String,
    /// Calendar date publication is planned for, no time of day. None means
    /// unscheduled.
    pub suggested_date: Option<NaiveDate>,
    pub status: ContentItemStatus,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentItemStatus {
    Draft,
    Approved,
    Published,
}

impl ContentItemStatus {
    /// Translated label shown in the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            ContentItemStatus::Draft => "Borrador",
            ContentItemStatus::Approved => "Aprobado",
            ContentItemStatus::Published => "Publicado",
        }
    }
}

/// Categories the form offers. The model does not restrict categories to
/// this set, it only requires them to be non-empty.
pub const FORM_CATEGORIES: [&str; 5] = ["branding", "promociones", "tips", "campañas", "otro"];
