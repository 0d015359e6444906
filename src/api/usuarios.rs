//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::usuario::Usuario};

/// List all users
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "usuarios",
    responses(
        (status = 200, description = "List of users", body = Vec<Usuario>)
    )
)]
pub async fn list_usuarios(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Usuario>>> {
    let usuarios = state.services.usuarios.find_all().await?;
    Ok(Json(usuarios))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = Usuario),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_usuario(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Usuario>> {
    let usuario = state.services.usuarios.find_by_id(id).await?;
    Ok(Json(usuario))
}

/// Get a user by email
#[utoipa::path(
    get,
    path = "/usuarios/email/{email}",
    tag = "usuarios",
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "User details", body = Usuario),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_usuario_by_email(
    State(state): State<crate::AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Usuario>> {
    let usuario = state.services.usuarios.find_by_email(&email).await?;
    Ok(Json(usuario))
}

/// Get a user by name
#[utoipa::path(
    get,
    path = "/usuarios/nombre/{nombre}",
    tag = "usuarios",
    params(
        ("nombre" = String, Path, description = "User name")
    ),
    responses(
        (status = 200, description = "User details", body = Usuario),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_usuario_by_nombre(
    State(state): State<crate::AppState>,
    Path(nombre): Path<String>,
) -> AppResult<Json<Usuario>> {
    let usuario = state.services.usuarios.find_by_nombre(&nombre).await?;
    Ok(Json(usuario))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "usuarios",
    request_body = Usuario,
    responses(
        (status = 201, description = "User created", body = Usuario)
    )
)]
pub async fn create_usuario(
    State(state): State<crate::AppState>,
    Json(usuario): Json<Usuario>,
) -> AppResult<(StatusCode, Json<Usuario>)> {
    let creado = state.services.usuarios.save(usuario).await?;
    Ok((StatusCode::CREATED, Json(creado)))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = Usuario,
    responses(
        (status = 200, description = "User updated", body = Usuario),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_usuario(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(usuario): Json<Usuario>,
) -> AppResult<Json<Usuario>> {
    let actualizado = state.services.usuarios.update(id, usuario).await?;
    Ok(Json(actualizado))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted")
    )
)]
pub async fn delete_usuario(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.usuarios.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
