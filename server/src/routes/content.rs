use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, warn, Instrument};
use utoipa::{IntoParams, ToSchema};

use canvas_core::{
    content::{dates, example_data, form::ContentItemForm, listing},
    deadpool_diesel, interact,
    model::{self, repository},
};

use crate::{
    app_state::SharedState,
    http_error::ApiResult,
    schema::{
        CategoryOption, ContentFormPrefill, ContentItem, ContentItemId, ContentItemRequest,
        CreateContentItemResponse,
    },
};

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(get_content_list))
        .route("/", post(create_content_item))
        .route("/categories", get(get_category_options))
        .route("/prefill", get(get_form_prefill))
        .route("/:id", get(get_content_item))
        .route("/:id", put(update_content_item))
}

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentListQuery {
    pub category: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
}

impl ContentListQuery {
    /// `"all"` and empty values mean the predicate is inactive, matching the
    /// dashboard's dropdown defaults.
    fn into_query(self) -> listing::ContentQuery {
        let category = self.category.filter(|c| !c.is_empty() && c != "all");
        let status = self
            .status
            .filter(|s| !s.is_empty() && s != "all")
            .and_then(|s| s.parse::<model::ContentItemStatus>().ok());
        let search = self.search.filter(|s| !s.is_empty());
        let date = self
            .date
            .and_then(|s| dates::to_suggested_date(&dates::DateValue::Text(s)));
        listing::ContentQuery {
            category,
            status,
            search,
            date,
        }
    }
}

/// The full collection, falling back to the bundled example items when the
/// store errors out or has nothing in it yet.
async fn fetch_collection(app_state: &SharedState) -> Vec<model::ContentItem> {
    match try_fetch_collection(app_state).await {
        Ok(items) if !items.is_empty() => items,
        Ok(_) => {
            info!("content store is empty, serving example items");
            example_data::example_content_items()
        }
        Err(err) => {
            warn!("could not fetch content items, serving example items: {}", err);
            example_data::example_content_items()
        }
    }
}

async fn try_fetch_collection(app_state: &SharedState) -> eyre::Result<Vec<model::ContentItem>> {
    let conn = app_state.pool.get().in_current_span().await?;
    let items = interact!(conn, move |mut conn| {
        repository::content_item::get_all_content_items(&mut conn)
    })
    .in_current_span()
    .await??;
    Ok(items)
}

#[utoipa::path(get, path = "/api/content",
    params(ContentListQuery),
    responses((status = 200, body=Vec<ContentItem>)),
)]
#[tracing::instrument(skip(app_state))]
pub async fn get_content_list(
    Query(query): Query<ContentListQuery>,
    State(app_state): State<SharedState>,
) -> ApiResult<Json<Vec<ContentItem>>> {
    let items = fetch_collection(&app_state).await;
    let items: Vec<ContentItem> = listing::filter_and_sort(items, &query.into_query())
        .iter()
        .map(ContentItem::from_model)
        .collect();
    Ok(Json(items))
}

#[utoipa::path(get, path = "/api/content/categories",
    responses((status = 200, body=Vec<CategoryOption>)),
)]
#[tracing::instrument(skip(app_state))]
pub async fn get_category_options(
    State(app_state): State<SharedState>,
) -> ApiResult<Json<Vec<CategoryOption>>> {
    let items = fetch_collection(&app_state).await;
    let options: Vec<CategoryOption> = listing::category_options(&items)
        .into_iter()
        .map(|option| option.into())
        .collect();
    Ok(Json(options))
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PrefillQuery {
    /// Id of an existing item to duplicate into the new form.
    pub duplicate_id: Option<String>,
}

#[utoipa::path(get, path = "/api/content/prefill",
    params(PrefillQuery),
    responses(
        (status = 200, body=ContentFormPrefill),
        (status = NOT_FOUND, description = "Duplicate source not found")
    ),
)]
#[tracing::instrument(skip(app_state))]
pub async fn get_form_prefill(
    Query(query): Query<PrefillQuery>,
    State(app_state): State<SharedState>,
) -> ApiResult<Response> {
    let form = match query.duplicate_id {
        None => ContentItemForm::empty(),
        Some(duplicate_id) => {
            let id = model::ContentItemId(duplicate_id);
            match find_item(&app_state, id).await? {
                Some(source) => ContentItemForm::duplicate_of(&source),
                None => {
                    return Ok(
                        (StatusCode::NOT_FOUND, "Content item not found.").into_response()
                    );
                }
            }
        }
    };
    Ok(Json(ContentFormPrefill::from_form(form)).into_response())
}

/// Looks the item up in the store, then among the example items so the
/// duplicate flow also works in demo mode.
async fn find_item(
    app_state: &SharedState,
    id: model::ContentItemId,
) -> eyre::Result<Option<model::ContentItem>> {
    let conn = app_state.pool.get().in_current_span().await?;
    let stored = {
        let id = id.clone();
        interact!(conn, move |mut conn| {
            repository::content_item::get_content_item(&mut conn, id)
        })
        .in_current_span()
        .await??
    };
    if stored.is_some() {
        return Ok(stored);
    }
    Ok(example_data::example_content_items()
        .into_iter()
        .find(|item| item.id == id))
}

#[utoipa::path(get, path = "/api/content/{id}",
    responses(
        (status = 200, body=ContentItem),
        (status = NOT_FOUND, description = "Content item not found")
    ),
    params(("id" = String, Path, description = "ContentItemId")),
)]
#[tracing::instrument(skip(app_state))]
pub async fn get_content_item(
    Path(id): Path<String>,
    State(app_state): State<SharedState>,
) -> ApiResult<Response> {
    let id: model::ContentItemId = ContentItemId(id).into();
    let conn = app_state.pool.get().in_current_span().await?;
    let item = interact!(conn, move |mut conn| {
        repository::content_item::get_content_item(&mut conn, id)
    })
    .in_current_span()
    .await??;
    match item {
        Some(item) => Ok(Json(ContentItem::from_model(&item)).into_response()),
        None => Ok((StatusCode::NOT_FOUND, "Content item not found.").into_response()),
    }
}

#[utoipa::path(post, path = "/api/content",
    request_body = ContentItemRequest,
    responses(
        (status = 200, body=CreateContentItemResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Validation failed, reported field by field")
    ),
)]
#[tracing::instrument(skip(app_state, request))]
pub async fn create_content_item(
    State(app_state): State<SharedState>,
    Json(request): Json<ContentItemRequest>,
) -> ApiResult<Response> {
    // No store call happens unless the form is valid.
    let create = match request.into_form().into_create() {
        Ok(create) => create,
        Err(errors) => {
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response());
        }
    };
    let conn = app_state.pool.get().in_current_span().await?;
    let id = interact!(conn, move |mut conn| {
        repository::content_item::insert_content_item(&mut conn, create)
    })
    .in_current_span()
    .await??;
    info!("created content item {}", id);
    Ok(Json(CreateContentItemResponse { id: id.into() }).into_response())
}

#[utoipa::path(put, path = "/api/content/{id}",
    request_body = ContentItemRequest,
    responses(
        (status = 200, description = "Updated"),
        (status = NOT_FOUND, description = "Content item not found"),
        (status = UNPROCESSABLE_ENTITY, description = "Validation failed, reported field by field")
    ),
    params(("id" = String, Path, description = "ContentItemId")),
)]
#[tracing::instrument(skip(app_state, request))]
pub async fn update_content_item(
    Path(id): Path<String>,
    State(app_state): State<SharedState>,
    Json(request): Json<ContentItemRequest>,
) -> ApiResult<Response> {
    let id: model::ContentItemId = ContentItemId(id).into();
    let update = match request.into_form().into_create() {
        Ok(update) => update,
        Err(errors) => {
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response());
        }
    };
    let conn = app_state.pool.get().in_current_span().await?;
    let matched = {
        let id = id.clone();
        interact!(conn, move |mut conn| {
            repository::content_item::update_content_item(&mut conn, id, update)
        })
        .in_current_span()
        .await??
    };
    if !matched {
        return Ok((StatusCode::NOT_FOUND, "Content item not found.").into_response());
    }
    info!("updated content item {}", id);
    Ok(StatusCode::OK.into_response())
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_and_empty_filter_values_are_inactive() {
        let query = ContentListQuery {
            category: Some("all".to_owned()),
            status: Some("all".to_owned()),
            search: Some(String::new()),
            date: None,
        }
        .into_query();
        assert_eq!(query, listing::ContentQuery::default());
    }

    #[test]
    fn validation_errors_serialize_field_by_field() {
        let request = ContentItemRequest {
            title: String::new(),
            description: None,
            file_url: "not-a-url".to_owned(),
            category: "tips".to_owned(),
            suggested_date: None,
            status: crate::schema::ContentItemStatus::Draft,
            comments: None,
        };
        let errors = request.into_form().validate().unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "errors": [
                    { "field": "title", "message": "Title is required." },
                    { "field": "fileUrl", "message": "Please enter a valid URL." },
                ]
            })
        );
    }

    #[test]
    fn active_filter_values_are_carried_over() {
        let query = ContentListQuery {
            category: Some("tips".to_owned()),
            status: Some("draft".to_owned()),
            search: Some("seo".to_owned()),
            date: Some("2024-08-22".to_owned()),
        }
        .into_query();
        assert_eq!(query.category.as_deref(), Some("tips"));
        assert_eq!(query.status, Some(model::ContentItemStatus::Draft));
        assert_eq!(query.search.as_deref(), Some("seo"));
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 8, 22));
    }
}
