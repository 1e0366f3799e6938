use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use canvas_core::{
    content::{
        dates,
        form::ContentItemForm,
        listing,
    },
    model,
};

use super::ContentItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentItemStatus {
    Draft,
    Approved,
    Published,
}

impl From<model::ContentItemStatus> for ContentItemStatus {
    fn from(value: model::ContentItemStatus) -> Self {
        match value {
            model::ContentItemStatus::Draft => ContentItemStatus::Draft,
            model::ContentItemStatus::Approved => ContentItemStatus::Approved,
            model::ContentItemStatus::Published => ContentItemStatus::Published,
        }
    }
}

impl From<ContentItemStatus> for model::ContentItemStatus {
    fn from(value: ContentItemStatus) -> Self {
        match value {
            ContentItemStatus::Draft => model::ContentItemStatus::Draft,
            ContentItemStatus::Approved => model::ContentItemStatus::Approved,
            ContentItemStatus::Published => model::ContentItemStatus::Published,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: ContentItemId,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub category: String,
    /// Canonical `YYYY-MM-DD`, absent means unscheduled.
    pub suggested_date: Option<String>,
    pub status: ContentItemStatus,
    /// Translated status label shown by the dashboard.
    pub status_label: String,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn from_model(value: &model::ContentItem) -> ContentItem {
        ContentItem {
            id: (&value.id).into(),
            title: value.title.clone(),
            description: value.description.clone(),
            file_url: value.file_url.clone(),
            category: value.category.clone(),
            suggested_date: value.suggested_date.map(dates::to_canonical_string),
            status: value.status.into(),
            status_label: value.status.label().to_owned(),
            comments: value.comments.clone(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Create/update request body. The suggested date arrives in any of the
/// accepted textual forms and is normalized to a calendar date; the id and
/// timestamps are store-assigned and not part of the body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentItemRequest {
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub category: String,
    pub suggested_date: Option<String>,
    pub status: ContentItemStatus,
    pub comments: Option<String>,
}

impl ContentItemRequest {
    pub fn into_form(self) -> ContentItemForm {
        ContentItemForm {
            title: self.title,
            description: self.description,
            file_url: self.file_url,
            category: self.category,
            suggested_date: self
                .suggested_date
                .and_then(|s| dates::to_suggested_date(&dates::DateValue::Text(s))),
            status: self.status.into(),
            comments: self.comments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentItemResponse {
    pub id: ContentItemId,
}

/// Initial form state for the "new item" view, either empty defaults or a
/// duplicate of an existing item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentFormPrefill {
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub category: String,
    pub suggested_date: Option<String>,
    pub status: ContentItemStatus,
    pub comments: Option<String>,
    /// Categories the form offers in its dropdown.
    pub form_categories: Vec<String>,
}

impl ContentFormPrefill {
    pub fn from_form(value: ContentItemForm) -> ContentFormPrefill {
        ContentFormPrefill {
            title: value.title,
            description: value.description,
            file_url: value.file_url,
            category: value.category,
            suggested_date: value.suggested_date.map(dates::to_canonical_string),
            status: value.status.into(),
            comments: value.comments,
            form_categories: model::FORM_CATEGORIES
                .iter()
                .map(|c| (*c).to_owned())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

impl From<listing::CategoryOption> for CategoryOption {
    fn from(value: listing::CategoryOption) -> Self {
        CategoryOption {
            value: value.value,
            label: value.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub email: String,
    pub display_name: Option<String>,
}

impl From<canvas_core::auth::Identity> for Identity {
    fn from(value: canvas_core::auth::Identity) -> Self {
        Identity {
            email: value.email,
            display_name: value.display_name,
        }
    }
}
