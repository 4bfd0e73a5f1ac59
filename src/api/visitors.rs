//! Visitor endpoints: JSON twins of the kiosk form operations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{VisitorForm, VisitorRecord},
};

/// Response carrying a newly assigned document id
#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    /// Store-assigned document identifier, also the check-out QR payload
    pub id: String,
}

/// Register a new visitor
#[utoipa::path(
    post,
    path = "/visitors",
    tag = "visitors",
    request_body = VisitorForm,
    responses(
        (status = 201, description = "Visitor created", body = CreatedResponse),
        (status = 400, description = "Missing or invalid field"),
        (status = 422, description = "Tenant scope unavailable")
    )
)]
pub async fn create_visitor(
    State(state): State<crate::AppState>,
    Json(form): Json<VisitorForm>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let school = state.school_id();
    let id = state
        .services
        .visitors
        .create(&form, school.as_ref())
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Get visitor details by id
#[utoipa::path(
    get,
    path = "/visitors/{id}",
    tag = "visitors",
    params(("id" = String, Path, description = "Visitor document id")),
    responses(
        (status = 200, description = "Visitor details", body = VisitorRecord),
        (status = 404, description = "Visitor not found")
    )
)]
pub async fn get_visitor(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<VisitorRecord>> {
    let record = state.services.visitors.get(&id).await?;
    Ok(Json(record))
}

/// Update a visitor and mark the visit checked-in
#[utoipa::path(
    put,
    path = "/visitors/{id}",
    tag = "visitors",
    params(("id" = String, Path, description = "Visitor document id")),
    request_body = VisitorForm,
    responses(
        (status = 200, description = "Updated visitor", body = VisitorRecord),
        (status = 400, description = "Missing or invalid field"),
        (status = 404, description = "Visitor not found"),
        (status = 422, description = "Tenant scope unavailable")
    )
)]
pub async fn update_visitor(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(form): Json<VisitorForm>,
) -> AppResult<Json<VisitorRecord>> {
    let school = state.school_id();
    state
        .services
        .visitors
        .update(&id, &form, school.as_ref())
        .await?;
    let record = state.services.visitors.get(&id).await?;
    Ok(Json(record))
}
