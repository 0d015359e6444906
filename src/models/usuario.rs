//! User model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::EstadoUsuario;

/// Registered library user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Usuario {
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: String,
    /// Intended unique, not enforced
    #[serde(default)]
    pub email: String,
    pub estado: Option<EstadoUsuario>,
}
