//! Validation and prefill logic for the content item form. The same form
//! backs the create, edit and duplicate flows; duplicate is create with the
//! fields prefilled from an existing item.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::model::{repository::content_item::CreateContentItem, ContentItem, ContentItemStatus};

pub const COPY_SUFFIX: &str = " (Copia)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItemForm {
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub category: String,
    pub suggested_date: Option<NaiveDate>,
    pub status: ContentItemStatus,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("invalid form: {}", .errors.iter().map(|e| e.field).collect::<Vec<_>>().join(", "))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ContentItemForm {
    /// Empty defaults for the "new item" view.
    pub fn empty() -> ContentItemForm {
        ContentItemForm {
            title: String::new(),
            description: None,
            file_url: String::new(),
            category: String::new(),
            suggested_date: None,
            status: ContentItemStatus::Draft,
            comments: None,
        }
    }

    /// Prefill for the duplicate flow: content fields carry over, identity
    /// and schedule do not. The title is marked as a copy, status resets to
    /// draft and the suggested date is cleared.
    pub fn duplicate_of(source: &ContentItem) -> ContentItemForm {
        ContentItemForm {
            title: format!("{}{}", source.title, COPY_SUFFIX),
            description: source.description.clone(),
            file_url: source.file_url.clone(),
            category: source.category.clone(),
            suggested_date: None,
            status: ContentItemStatus::Draft,
            comments: source.comments.clone(),
        }
    }

    /// Prefill for the edit view.
    pub fn edit_of(source: &ContentItem) -> ContentItemForm {
        ContentItemForm {
            title: source.title.clone(),
            description: source.description.clone(),
            file_url: source.file_url.clone(),
            category: source.category.clone(),
            suggested_date: source.suggested_date,
            status: source.status,
            comments: source.comments.clone(),
        }
    }

    /// Field-by-field validation. Persistence must not be attempted when
    /// this fails.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError {
                field: "title",
                message: "Title is required.",
            });
        }
        if self.file_url.trim().is_empty() {
            errors.push(FieldError {
                field: "fileUrl",
                message: "File URL is required.",
            });
        } else if Url::parse(&self.file_url).is_err() {
            errors.push(FieldError {
                field: "fileUrl",
                message: "Please enter a valid URL.",
            });
        }
        if self.category.trim().is_empty() {
            errors.push(FieldError {
                field: "category",
                message: "Category is required.",
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }

    /// The validated form as the fields written to the store.
    pub fn into_create(self) -> Result<CreateContentItem, ValidationErrors> {
        self.validate()?;
        Ok(CreateContentItem {
            title: self.title,
            description: self.description,
            file_url: self.file_url,
            category: self.category,
            suggested_date: self.suggested_date,
            status: self.status,
            comments: self.comments,
        })
    }
}
