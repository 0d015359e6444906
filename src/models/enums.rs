//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book circulation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoLibro {
    Disponible,
    Prestado,
}

/// User account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoUsuario {
    Activo,
    Inactivo,
}
