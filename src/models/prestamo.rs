//! Loan model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::libro::Libro;
use super::usuario::Usuario;

/// Loan of a book to a user.
///
/// The book and user are embedded as snapshot values taken at creation time,
/// not references into the live stores: editing or deleting the referenced
/// book/user afterwards leaves the loan unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prestamo {
    pub id: Option<i64>,
    pub libro: Libro,
    pub usuario: Usuario,
    pub fecha_inicio: NaiveDate,
    pub fecha_vencimiento: Option<NaiveDate>,
}
