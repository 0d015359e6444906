//! Loan management service

use crate::{
    error::{AppError, AppResult, Entity, LookupKey},
    models::{libro::Libro, prestamo::Prestamo, usuario::Usuario},
    repository::Repository,
};

#[derive(Clone)]
pub struct PrestamosService {
    repository: Repository,
}

impl PrestamosService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a loan by ID
    pub async fn find_by_id(&self, id: i64) -> AppResult<Prestamo> {
        self.repository
            .prestamos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(Entity::Prestamo, LookupKey::Id(id)))
    }

    /// Loan holding the given book, if one exists. Unlike the id lookup, a
    /// miss here is a valid outcome, not a failure.
    pub async fn find_by_libro(&self, libro: &Libro) -> AppResult<Option<Prestamo>> {
        self.repository.prestamos.find_by_libro(libro).await
    }

    /// Loan held by the given user, if one exists; a miss is a valid outcome
    pub async fn find_by_usuario(&self, usuario: &Usuario) -> AppResult<Option<Prestamo>> {
        self.repository.prestamos.find_by_usuario(usuario).await
    }

    /// List all loans
    pub async fn find_all(&self) -> AppResult<Vec<Prestamo>> {
        self.repository.prestamos.find_all().await
    }

    /// Register a new loan. The embedded book and user are stored as given,
    /// with no check against the live book/user stores.
    pub async fn save(&self, prestamo: Prestamo) -> AppResult<Prestamo> {
        self.repository.prestamos.save(prestamo).await
    }

    /// Replace an existing loan. The path id wins over any id in the
    /// payload; all other fields are overwritten.
    pub async fn update(&self, id: i64, mut prestamo: Prestamo) -> AppResult<Prestamo> {
        if !self.repository.prestamos.exists_by_id(id).await? {
            return Err(AppError::not_found(Entity::Prestamo, LookupKey::Id(id)));
        }
        prestamo.id = Some(id);
        self.repository.prestamos.save(prestamo).await
    }

    /// Delete a loan; deleting a missing id is silently accepted
    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.repository.prestamos.delete_by_id(id).await
    }
}
