//! Error types for the Biblioteca server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Entity kinds, used to qualify not-found failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Libro,
    Usuario,
    Prestamo,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Entity::Libro => "libro",
            Entity::Usuario => "usuario",
            Entity::Prestamo => "prestamo",
        };
        write!(f, "{}", label)
    }
}

/// The lookup key that failed to match, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Id(i64),
    Isbn(String),
    Email(String),
    Nombre(String),
}

impl std::fmt::Display for LookupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupKey::Id(id) => write!(f, "id {}", id),
            LookupKey::Isbn(isbn) => write!(f, "isbn {}", isbn),
            LookupKey::Email(email) => write!(f, "email {}", email),
            LookupKey::Nombre(nombre) => write!(f, "nombre {}", nombre),
        }
    }
}

/// Main application error type.
///
/// The domain has a single failure kind: a lookup that matched nothing.
/// Everything else (malformed payloads, unknown routes) is handled at the
/// transport layer by axum itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("{entity} no encontrado con {key}")]
    NotFound { entity: Entity, key: LookupKey },
}

impl AppError {
    pub fn not_found(entity: Entity, key: LookupKey) -> Self {
        AppError::NotFound { entity, key }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound { .. } => {
                tracing::debug!("{}", self);
                // The original API answers misses with a bare 404
                StatusCode::NOT_FOUND.into_response()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
