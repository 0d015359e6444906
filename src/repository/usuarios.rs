//! User store

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::{error::AppResult, models::usuario::Usuario};

/// Storage contract for users
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    /// Store a user, assigning an id if it has none
    async fn save(&self, usuario: Usuario) -> AppResult<Usuario>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Usuario>>;
    /// First user whose email matches, if any
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Usuario>>;
    /// First user whose name matches, if any
    async fn find_by_nombre(&self, nombre: &str) -> AppResult<Option<Usuario>>;
    async fn find_all(&self) -> AppResult<Vec<Usuario>>;
    /// Removing an absent id is a no-op
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;
}

struct Store {
    usuarios: HashMap<i64, Usuario>,
    next_id: i64,
}

/// Map-backed user store. One mutex guards both the map and the id counter;
/// it is never held across an await point.
pub struct InMemoryUsuarioRepository {
    store: Mutex<Store>,
}

impl InMemoryUsuarioRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                usuarios: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryUsuarioRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsuarioRepository for InMemoryUsuarioRepository {
    async fn save(&self, mut usuario: Usuario) -> AppResult<Usuario> {
        let mut store = self.lock();
        let id = match usuario.id {
            Some(id) => id,
            None => {
                let id = store.next_id;
                store.next_id += 1;
                usuario.id = Some(id);
                id
            }
        };
        store.usuarios.insert(id, usuario.clone());
        Ok(usuario)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Usuario>> {
        Ok(self.lock().usuarios.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Usuario>> {
        Ok(self
            .lock()
            .usuarios
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_nombre(&self, nombre: &str) -> AppResult<Option<Usuario>> {
        Ok(self
            .lock()
            .usuarios
            .values()
            .find(|u| u.nombre == nombre)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Usuario>> {
        Ok(self.lock().usuarios.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.lock().usuarios.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.lock().usuarios.contains_key(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::EstadoUsuario;

    fn usuario(nombre: &str, email: &str) -> Usuario {
        Usuario {
            id: None,
            nombre: nombre.to_string(),
            email: email.to_string(),
            estado: Some(EstadoUsuario::Activo),
        }
    }

    #[tokio::test]
    async fn save_assigns_monotonic_ids() {
        let repo = InMemoryUsuarioRepository::new();

        let juan = repo.save(usuario("Juan", "juan@mail.com")).await.unwrap();
        let maria = repo.save(usuario("Maria", "maria@mail.com")).await.unwrap();

        assert_eq!(juan.id, Some(1));
        assert_eq!(maria.id, Some(2));
    }

    #[tokio::test]
    async fn find_by_id_round_trips() {
        let repo = InMemoryUsuarioRepository::new();

        let guardado = repo.save(usuario("Juan", "juan@mail.com")).await.unwrap();
        let encontrado = repo.find_by_id(guardado.id.unwrap()).await.unwrap();

        assert_eq!(encontrado, Some(guardado));
    }

    #[tokio::test]
    async fn find_by_email_scans_for_first_match() {
        let repo = InMemoryUsuarioRepository::new();

        let juan = repo.save(usuario("Juan", "juan@mail.com")).await.unwrap();
        repo.save(usuario("Maria", "maria@mail.com")).await.unwrap();

        assert_eq!(repo.find_by_email("juan@mail.com").await.unwrap(), Some(juan));
        assert_eq!(repo.find_by_email("nadie@mail.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_by_nombre_scans_for_first_match() {
        let repo = InMemoryUsuarioRepository::new();

        repo.save(usuario("Juan", "juan@mail.com")).await.unwrap();
        let maria = repo.save(usuario("Maria", "maria@mail.com")).await.unwrap();

        assert_eq!(repo.find_by_nombre("Maria").await.unwrap(), Some(maria));
        assert_eq!(repo.find_by_nombre("Pedro").await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_all_returns_snapshot() {
        let repo = InMemoryUsuarioRepository::new();

        repo.save(usuario("Juan", "juan@mail.com")).await.unwrap();
        repo.save(usuario("Maria", "maria@mail.com")).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = InMemoryUsuarioRepository::new();

        let guardado = repo.save(usuario("Juan", "juan@mail.com")).await.unwrap();
        let id = guardado.id.unwrap();

        repo.delete_by_id(id).await.unwrap();
        assert_eq!(repo.find_by_id(id).await.unwrap(), None);
        repo.delete_by_id(id).await.unwrap();
        repo.delete_by_id(999).await.unwrap();
    }

    #[tokio::test]
    async fn exists_by_id_reports_membership() {
        let repo = InMemoryUsuarioRepository::new();

        let guardado = repo.save(usuario("Juan", "juan@mail.com")).await.unwrap();

        assert!(repo.exists_by_id(guardado.id.unwrap()).await.unwrap());
        assert!(!repo.exists_by_id(123).await.unwrap());
    }
}
