use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::etudiant::Etudiant;
use tracing::{debug, info};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/etudiant/retrieve-all-etudiants", tag = "etudiant",
    responses(
        (status = 200, description = "All students, possibly empty", body = [crate::openapi::EtudiantDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn retrieve_all_etudiants(State(state): State<ServerState>) -> Result<Json<Vec<Etudiant>>, JsonApiError> {
    let list = state.etudiants.retrieve_all_etudiants().await?;
    debug!(count = list.len(), "list etudiants");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/etudiant/retrieve-etudiant/{id}", tag = "etudiant",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EtudiantDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn retrieve_etudiant(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Etudiant>, JsonApiError> {
    match state.etudiants.retrieve_etudiant(id).await? {
        Some(e) => Ok(Json(e)),
        None => Err(JsonApiError::not_found(format!("etudiant {} not found", id))),
    }
}

/// Absence is a 200 with a `null` body, not a 404.
#[utoipa::path(
    get, path = "/etudiant/retrieve-etudiant-cin/{cin}", tag = "etudiant",
    params(("cin" = i64, Path, description = "National id (CIN)")),
    responses(
        (status = 200, description = "The student, or null when no student has this CIN", body = crate::openapi::EtudiantDoc)
    )
)]
pub async fn retrieve_etudiant_by_cin(State(state): State<ServerState>, Path(cin): Path<i64>) -> Result<Json<Option<Etudiant>>, JsonApiError> {
    let found = state.etudiants.retrieve_etudiant_by_cin(cin).await?;
    debug!(cin, found = found.is_some(), "lookup etudiant by cin");
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/etudiant/add-etudiant", tag = "etudiant",
    request_body = crate::openapi::EtudiantDoc,
    responses(
        (status = 200, description = "Persisted student with its id", body = crate::openapi::EtudiantDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn add_etudiant(State(state): State<ServerState>, Json(input): Json<Etudiant>) -> Result<Json<Etudiant>, JsonApiError> {
    let saved = state.etudiants.add_etudiant(input).await?;
    info!(id = ?saved.id, national_id = saved.national_id, "created etudiant");
    Ok(Json(saved))
}

#[utoipa::path(
    put, path = "/etudiant/modify-etudiant", tag = "etudiant",
    request_body = crate::openapi::EtudiantDoc,
    responses(
        (status = 200, description = "Updated student", body = crate::openapi::EtudiantDoc),
        (status = 400, description = "Body has no id", body = crate::openapi::ErrorBody),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn modify_etudiant(State(state): State<ServerState>, Json(input): Json<Etudiant>) -> Result<Json<Etudiant>, JsonApiError> {
    let saved = state.etudiants.modify_etudiant(input).await?;
    info!(id = ?saved.id, "updated etudiant");
    Ok(Json(saved))
}

#[utoipa::path(
    delete, path = "/etudiant/remove-etudiant/{id}", tag = "etudiant",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Removed, or nothing to remove"),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn remove_etudiant(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.etudiants.remove_etudiant(id).await?;
    info!(id, "deleted etudiant");
    Ok(StatusCode::OK)
}
