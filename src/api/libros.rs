//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::libro::Libro};

/// List all books
#[utoipa::path(
    get,
    path = "/libros",
    tag = "libros",
    responses(
        (status = 200, description = "List of books", body = Vec<Libro>)
    )
)]
pub async fn list_libros(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Libro>>> {
    let libros = state.services.libros.find_all().await?;
    Ok(Json(libros))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/libros/{id}",
    tag = "libros",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Libro),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_libro(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Libro>> {
    let libro = state.services.libros.find_by_id(id).await?;
    Ok(Json(libro))
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/libros/isbn/{isbn}",
    tag = "libros",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = Libro),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_libro_by_isbn(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Libro>> {
    let libro = state.services.libros.find_by_isbn(&isbn).await?;
    Ok(Json(libro))
}

/// Register a new book
#[utoipa::path(
    post,
    path = "/libros",
    tag = "libros",
    request_body = Libro,
    responses(
        (status = 201, description = "Book created", body = Libro)
    )
)]
pub async fn create_libro(
    State(state): State<crate::AppState>,
    Json(libro): Json<Libro>,
) -> AppResult<(StatusCode, Json<Libro>)> {
    let creado = state.services.libros.save(libro).await?;
    Ok((StatusCode::CREATED, Json(creado)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/libros/{id}",
    tag = "libros",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = Libro,
    responses(
        (status = 200, description = "Book updated", body = Libro),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_libro(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(libro): Json<Libro>,
) -> AppResult<Json<Libro>> {
    let actualizado = state.services.libros.update(id, libro).await?;
    Ok(Json(actualizado))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/libros/{id}",
    tag = "libros",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted")
    )
)]
pub async fn delete_libro(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.libros.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
