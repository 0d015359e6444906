//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::EstadoLibro;

/// Catalog book. The id is assigned by the store on first save; clients may
/// omit it, along with any other field they do not care about, since the
/// store performs no validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Libro {
    pub id: Option<i64>,
    /// Intended unique, not enforced
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub autor: String,
    pub estado: Option<EstadoLibro>,
}
