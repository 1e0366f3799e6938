use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use canvas_core::auth;

use crate::{app_state::SharedState, http_error::ApiResult, schema::Identity};

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/login", post(post_login))
        .route("/me", get(get_me))
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[utoipa::path(post, path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, body=Identity),
        (status = FORBIDDEN, description = "Email is not on the allow list"),
        (status = UNAUTHORIZED, description = "Wrong password")
    ),
)]
#[tracing::instrument(skip(app_state, request))]
pub async fn post_login(
    State(app_state): State<SharedState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Response> {
    let auth_config = &app_state.config.auth;
    let identity = auth::Identity {
        email: request.email,
        display_name: None,
    };
    if !auth::is_allowed(&auth_config.allowed_email, &identity) {
        // mismatching email means signed out, not retry-with-password
        info!("denied login for {}", identity.email);
        return Ok((
            StatusCode::FORBIDDEN,
            "Access Denied: you do not have permission to access this application.",
        )
            .into_response());
    }
    if let Some(password) = &auth_config.password {
        if *password != request.password {
            return Ok((
                StatusCode::UNAUTHORIZED,
                "Login failed. Please check your credentials.",
            )
                .into_response());
        }
    }
    Ok(Json(Identity::from(identity)).into_response())
}

#[utoipa::path(get, path = "/api/auth/me",
    responses((status = 200, body=Identity)),
)]
pub async fn get_me() -> ApiResult<Json<Identity>> {
    // login is bypassed with the mock identity for now
    Ok(Json(Identity::from(auth::mock_identity())))
}
