//! User management service

use crate::{
    error::{AppError, AppResult, Entity, LookupKey},
    models::usuario::Usuario,
    repository::Repository,
};

#[derive(Clone)]
pub struct UsuariosService {
    repository: Repository,
}

impl UsuariosService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a user by ID
    pub async fn find_by_id(&self, id: i64) -> AppResult<Usuario> {
        self.repository
            .usuarios
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(Entity::Usuario, LookupKey::Id(id)))
    }

    /// Get a user by email
    pub async fn find_by_email(&self, email: &str) -> AppResult<Usuario> {
        self.repository
            .usuarios
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::not_found(Entity::Usuario, LookupKey::Email(email.to_string()))
            })
    }

    /// Get a user by name
    pub async fn find_by_nombre(&self, nombre: &str) -> AppResult<Usuario> {
        self.repository
            .usuarios
            .find_by_nombre(nombre)
            .await?
            .ok_or_else(|| {
                AppError::not_found(Entity::Usuario, LookupKey::Nombre(nombre.to_string()))
            })
    }

    /// List all users
    pub async fn find_all(&self) -> AppResult<Vec<Usuario>> {
        self.repository.usuarios.find_all().await
    }

    /// Register a new user; no validation of field contents
    pub async fn save(&self, usuario: Usuario) -> AppResult<Usuario> {
        self.repository.usuarios.save(usuario).await
    }

    /// Replace an existing user. The path id wins over any id in the
    /// payload; all other fields are overwritten.
    pub async fn update(&self, id: i64, mut usuario: Usuario) -> AppResult<Usuario> {
        if !self.repository.usuarios.exists_by_id(id).await? {
            return Err(AppError::not_found(Entity::Usuario, LookupKey::Id(id)));
        }
        usuario.id = Some(id);
        self.repository.usuarios.save(usuario).await
    }

    /// Delete a user; deleting a missing id is silently accepted
    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.repository.usuarios.delete_by_id(id).await
    }
}
