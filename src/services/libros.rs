//! Book catalog service

use crate::{
    error::{AppError, AppResult, Entity, LookupKey},
    models::libro::Libro,
    repository::Repository,
};

#[derive(Clone)]
pub struct LibrosService {
    repository: Repository,
}

impl LibrosService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a book by ID
    pub async fn find_by_id(&self, id: i64) -> AppResult<Libro> {
        self.repository
            .libros
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(Entity::Libro, LookupKey::Id(id)))
    }

    /// Get a book by ISBN
    pub async fn find_by_isbn(&self, isbn: &str) -> AppResult<Libro> {
        self.repository
            .libros
            .find_by_isbn(isbn)
            .await?
            .ok_or_else(|| AppError::not_found(Entity::Libro, LookupKey::Isbn(isbn.to_string())))
    }

    /// List all books
    pub async fn find_all(&self) -> AppResult<Vec<Libro>> {
        self.repository.libros.find_all().await
    }

    /// Register a new book; no validation of field contents
    pub async fn save(&self, libro: Libro) -> AppResult<Libro> {
        self.repository.libros.save(libro).await
    }

    /// Replace an existing book. The path id wins over any id in the
    /// payload; all other fields are overwritten.
    pub async fn update(&self, id: i64, mut libro: Libro) -> AppResult<Libro> {
        if !self.repository.libros.exists_by_id(id).await? {
            return Err(AppError::not_found(Entity::Libro, LookupKey::Id(id)));
        }
        libro.id = Some(id);
        self.repository.libros.save(libro).await
    }

    /// Delete a book. Unlike update, there is no existence pre-check:
    /// deleting a missing id is silently accepted.
    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.repository.libros.delete_by_id(id).await
    }
}
