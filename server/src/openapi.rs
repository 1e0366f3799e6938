use utoipa::OpenApi;

use crate::{routes, schema};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::content::get_content_list,
        routes::content::get_category_options,
        routes::content::get_form_prefill,
        routes::content::get_content_item,
        routes::content::create_content_item,
        routes::content::update_content_item,
        routes::auth::post_login,
        routes::auth::get_me,
    ),
    components(schemas(
        schema::ContentItem,
        schema::ContentItemId,
        schema::ContentItemStatus,
        schema::ContentItemRequest,
        schema::CreateContentItemResponse,
        schema::ContentFormPrefill,
        schema::CategoryOption,
        schema::Identity,
        routes::auth::LoginRequest,
    )),
    tags((name = "content-canvas"))
)]
pub struct ApiDoc;
