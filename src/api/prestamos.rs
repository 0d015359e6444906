//! Loan management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::prestamo::Prestamo};

/// List all loans
#[utoipa::path(
    get,
    path = "/prestamos",
    tag = "prestamos",
    responses(
        (status = 200, description = "List of loans", body = Vec<Prestamo>)
    )
)]
pub async fn list_prestamos(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Prestamo>>> {
    let prestamos = state.services.prestamos.find_all().await?;
    Ok(Json(prestamos))
}

/// Get a loan by ID
#[utoipa::path(
    get,
    path = "/prestamos/{id}",
    tag = "prestamos",
    params(
        ("id" = i64, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan details", body = Prestamo),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_prestamo(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Prestamo>> {
    let prestamo = state.services.prestamos.find_by_id(id).await?;
    Ok(Json(prestamo))
}

/// Register a new loan
#[utoipa::path(
    post,
    path = "/prestamos",
    tag = "prestamos",
    request_body = Prestamo,
    responses(
        (status = 201, description = "Loan created", body = Prestamo)
    )
)]
pub async fn create_prestamo(
    State(state): State<crate::AppState>,
    Json(prestamo): Json<Prestamo>,
) -> AppResult<(StatusCode, Json<Prestamo>)> {
    let creado = state.services.prestamos.save(prestamo).await?;
    Ok((StatusCode::CREATED, Json(creado)))
}

/// Update an existing loan
#[utoipa::path(
    put,
    path = "/prestamos/{id}",
    tag = "prestamos",
    params(
        ("id" = i64, Path, description = "Loan ID")
    ),
    request_body = Prestamo,
    responses(
        (status = 200, description = "Loan updated", body = Prestamo),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn update_prestamo(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(prestamo): Json<Prestamo>,
) -> AppResult<Json<Prestamo>> {
    let actualizado = state.services.prestamos.update(id, prestamo).await?;
    Ok(Json(actualizado))
}

/// Delete a loan
#[utoipa::path(
    delete,
    path = "/prestamos/{id}",
    tag = "prestamos",
    params(
        ("id" = i64, Path, description = "Loan ID")
    ),
    responses(
        (status = 204, description = "Loan deleted")
    )
)]
pub async fn delete_prestamo(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.prestamos.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
