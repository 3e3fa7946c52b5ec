use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::solicitud_dto::{
        CreateSolicitudPayload, SolicitudListQuery, SolicitudResponse, UpdateSolicitudPayload,
    },
    error::{Error, Result},
    AppState,
};

/// Never updatable through PATCH, checked against the raw body so the error
/// names the offending field.
const FORBIDDEN_UPDATE_FIELDS: [&str; 4] = ["id", "created_at", "updated_at", "usuario_id"];

#[utoipa::path(
    post,
    path = "/solicitudes",
    request_body = CreateSolicitudPayload,
    responses(
        (status = 200, description = "Solicitud created successfully", body = Json<SolicitudResponse>),
        (status = 400, description = "Malformed payload")
    )
)]
#[axum::debug_handler]
pub async fn create_solicitud(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse> {
    let payload: CreateSolicitudPayload = serde_json::from_value(body)?;
    payload.validate()?;
    let solicitud = state.solicitud_service.create(payload).await?;
    Ok(Json(SolicitudResponse::from(solicitud)))
}

#[utoipa::path(
    get,
    path = "/solicitudes",
    params(
        ("titulo" = Option<String>, Query, description = "Substring filter on title"),
        ("estado" = Option<String>, Query, description = "Substring filter on state"),
        ("area" = Option<String>, Query, description = "Substring filter on area"),
        ("pais" = Option<String>, Query, description = "Substring filter on country"),
        ("rentaDesde" = Option<i32>, Query, description = "Minimum salary floor"),
        ("rentaHasta" = Option<i32>, Query, description = "Maximum salary ceiling"),
        ("modalidadTrabajo" = Option<String>, Query, description = "Substring filter on work modality"),
        ("tipoServicio" = Option<String>, Query, description = "Substring filter on service type"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("page" = Option<i64>, Query, description = "Page number, 1-based")
    ),
    responses(
        (status = 200, description = "List of solicitudes with their documentos", body = Json<Vec<SolicitudResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn list_solicitudes(
    State(state): State<AppState>,
    Query(query): Query<SolicitudListQuery>,
) -> Result<impl IntoResponse> {
    let items = state.solicitud_service.list(query).await?;
    let response: Vec<SolicitudResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/solicitudes/{id}",
    params(
        ("id" = i64, Path, description = "Solicitud ID")
    ),
    responses(
        (status = 200, description = "Solicitud found", body = Json<SolicitudResponse>),
        (status = 404, description = "Solicitud not found")
    )
)]
#[axum::debug_handler]
pub async fn get_solicitud(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let solicitud = state.solicitud_service.get_by_id(id).await?;
    Ok(Json(SolicitudResponse::from(solicitud)))
}

#[utoipa::path(
    get,
    path = "/solicitudes/{id}/con-documentos",
    params(
        ("id" = i64, Path, description = "Solicitud ID")
    ),
    responses(
        (status = 200, description = "Solicitud with its documentos", body = Json<SolicitudResponse>),
        (status = 404, description = "Solicitud not found")
    )
)]
#[axum::debug_handler]
pub async fn get_solicitud_with_documentos(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let item = state.solicitud_service.get_with_documentos(id).await?;
    Ok(Json(SolicitudResponse::from(item)))
}

#[utoipa::path(
    patch,
    path = "/solicitudes/{id}",
    params(
        ("id" = i64, Path, description = "Solicitud ID")
    ),
    request_body = UpdateSolicitudPayload,
    responses(
        (status = 200, description = "Solicitud updated successfully"),
        (status = 400, description = "Malformed payload or forbidden field"),
        (status = 404, description = "Solicitud not found")
    )
)]
#[axum::debug_handler]
pub async fn update_solicitud(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse> {
    if let Some(fields) = body.as_object() {
        for field in FORBIDDEN_UPDATE_FIELDS {
            if fields.contains_key(field) {
                return Err(Error::BadRequest(format!(
                    "field '{}' cannot be updated",
                    field
                )));
            }
        }
    }

    let payload: UpdateSolicitudPayload = serde_json::from_value(body)?;
    payload.validate()?;
    state.solicitud_service.update(id, payload).await?;
    Ok(Json(json!({ "message": "solicitud updated successfully" })))
}

#[utoipa::path(
    delete,
    path = "/solicitudes/{id}",
    params(
        ("id" = i64, Path, description = "Solicitud ID")
    ),
    responses(
        (status = 200, description = "Solicitud deleted successfully"),
        (status = 404, description = "Solicitud not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_solicitud(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.solicitud_service.delete(id).await?;
    Ok(Json(json!({ "message": "solicitud deleted successfully" })))
}
