//! Loan store

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{libro::Libro, prestamo::Prestamo, usuario::Usuario},
};

/// Storage contract for loans.
///
/// The relation lookups compare the embedded book/user by full value, not by
/// id: a loan only matches if every field of the snapshot is equal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrestamoRepository: Send + Sync {
    /// Store a loan, assigning an id if it has none
    async fn save(&self, prestamo: Prestamo) -> AppResult<Prestamo>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Prestamo>>;
    /// First loan whose embedded book equals the given one, if any
    async fn find_by_libro(&self, libro: &Libro) -> AppResult<Option<Prestamo>>;
    /// First loan whose embedded user equals the given one, if any
    async fn find_by_usuario(&self, usuario: &Usuario) -> AppResult<Option<Prestamo>>;
    async fn find_all(&self) -> AppResult<Vec<Prestamo>>;
    /// Removing an absent id is a no-op
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;
}

struct Store {
    prestamos: HashMap<i64, Prestamo>,
    next_id: i64,
}

/// Map-backed loan store. One mutex guards both the map and the id counter;
/// it is never held across an await point.
pub struct InMemoryPrestamoRepository {
    store: Mutex<Store>,
}

impl InMemoryPrestamoRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                prestamos: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryPrestamoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrestamoRepository for InMemoryPrestamoRepository {
    async fn save(&self, mut prestamo: Prestamo) -> AppResult<Prestamo> {
        let mut store = self.lock();
        let id = match prestamo.id {
            Some(id) => id,
            None => {
                let id = store.next_id;
                store.next_id += 1;
                prestamo.id = Some(id);
                id
            }
        };
        store.prestamos.insert(id, prestamo.clone());
        Ok(prestamo)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Prestamo>> {
        Ok(self.lock().prestamos.get(&id).cloned())
    }

    async fn find_by_libro(&self, libro: &Libro) -> AppResult<Option<Prestamo>> {
        Ok(self
            .lock()
            .prestamos
            .values()
            .find(|p| &p.libro == libro)
            .cloned())
    }

    async fn find_by_usuario(&self, usuario: &Usuario) -> AppResult<Option<Prestamo>> {
        Ok(self
            .lock()
            .prestamos
            .values()
            .find(|p| &p.usuario == usuario)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Prestamo>> {
        Ok(self.lock().prestamos.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.lock().prestamos.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.lock().prestamos.contains_key(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{EstadoLibro, EstadoUsuario};
    use chrono::NaiveDate;

    fn libro(id: i64, isbn: &str, titulo: &str) -> Libro {
        Libro {
            id: Some(id),
            isbn: isbn.to_string(),
            titulo: titulo.to_string(),
            autor: "Autor".to_string(),
            estado: Some(EstadoLibro::Disponible),
        }
    }

    fn usuario(id: i64, nombre: &str, email: &str) -> Usuario {
        Usuario {
            id: Some(id),
            nombre: nombre.to_string(),
            email: email.to_string(),
            estado: Some(EstadoUsuario::Activo),
        }
    }

    fn prestamo(libro: Libro, usuario: Usuario) -> Prestamo {
        Prestamo {
            id: None,
            libro,
            usuario,
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            fecha_vencimiento: None,
        }
    }

    #[tokio::test]
    async fn save_assigns_id_to_loan() {
        let repo = InMemoryPrestamoRepository::new();
        let libro = libro(1, "111-222", "Libro Test");
        let usuario = usuario(1, "Juan", "juan@mail.com");

        let guardado = repo
            .save(prestamo(libro.clone(), usuario.clone()))
            .await
            .unwrap();

        assert_eq!(guardado.id, Some(1));
        assert_eq!(guardado.libro, libro);
        assert_eq!(guardado.usuario, usuario);
    }

    #[tokio::test]
    async fn find_by_id_round_trips() {
        let repo = InMemoryPrestamoRepository::new();
        let libro = libro(1, "111-222", "Libro Test");

        let guardado = repo
            .save(prestamo(libro.clone(), usuario(1, "Juan", "juan@mail.com")))
            .await
            .unwrap();
        let encontrado = repo.find_by_id(guardado.id.unwrap()).await.unwrap();

        assert_eq!(encontrado.as_ref().map(|p| &p.libro), Some(&libro));
    }

    #[tokio::test]
    async fn find_by_id_missing_returns_none() {
        let repo = InMemoryPrestamoRepository::new();
        assert_eq!(repo.find_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_by_libro_matches_by_full_value() {
        let repo = InMemoryPrestamoRepository::new();
        let libro_prestado = libro(1, "111-222", "Libro Test");

        repo.save(prestamo(
            libro_prestado.clone(),
            usuario(1, "Juan", "juan@mail.com"),
        ))
        .await
        .unwrap();

        let encontrado = repo.find_by_libro(&libro_prestado).await.unwrap();
        assert!(encontrado.is_some());

        // Same id but different title: value equality fails the match
        let modificado = libro(1, "111-222", "Otro Titulo");
        assert_eq!(repo.find_by_libro(&modificado).await.unwrap(), None);

        let otro = libro(2, "222-333", "Otro Libro");
        assert_eq!(repo.find_by_libro(&otro).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_by_usuario_matches_by_full_value() {
        let repo = InMemoryPrestamoRepository::new();
        let prestatario = usuario(1, "Juan", "juan@mail.com");

        repo.save(prestamo(libro(1, "111-222", "Libro Test"), prestatario.clone()))
            .await
            .unwrap();

        let encontrado = repo.find_by_usuario(&prestatario).await.unwrap();
        assert_eq!(encontrado.map(|p| p.usuario), Some(prestatario));

        let otra = usuario(2, "Maria", "maria@mail.com");
        assert_eq!(repo.find_by_usuario(&otra).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_removes_loan() {
        let repo = InMemoryPrestamoRepository::new();

        let guardado = repo
            .save(prestamo(
                libro(1, "111-222", "Libro Test"),
                usuario(1, "Juan", "juan@mail.com"),
            ))
            .await
            .unwrap();
        repo.delete_by_id(guardado.id.unwrap()).await.unwrap();

        assert_eq!(repo.find_by_id(guardado.id.unwrap()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn exists_by_id_reports_membership() {
        let repo = InMemoryPrestamoRepository::new();

        let guardado = repo
            .save(prestamo(
                libro(1, "111-222", "Libro Test"),
                usuario(1, "Juan", "juan@mail.com"),
            ))
            .await
            .unwrap();

        assert!(repo.exists_by_id(guardado.id.unwrap()).await.unwrap());
        assert!(!repo.exists_by_id(123).await.unwrap());
    }

    #[tokio::test]
    async fn find_all_returns_all_loans() {
        let repo = InMemoryPrestamoRepository::new();

        repo.save(prestamo(
            libro(1, "111-222", "Libro Test"),
            usuario(1, "Juan", "juan@mail.com"),
        ))
        .await
        .unwrap();
        repo.save(prestamo(
            libro(2, "444-555", "Otro Libro"),
            usuario(2, "Ana", "ana@mail.com"),
        ))
        .await
        .unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }
}
