//! Book store

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::{error::AppResult, models::libro::Libro};

/// Storage contract for books. In-memory today; a durable backing can be
/// swapped in without touching the service layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibroRepository: Send + Sync {
    /// Store a book, assigning an id if it has none
    async fn save(&self, libro: Libro) -> AppResult<Libro>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Libro>>;
    /// First book whose ISBN matches, if any
    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Libro>>;
    async fn find_all(&self) -> AppResult<Vec<Libro>>;
    /// Removing an absent id is a no-op
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;
}

struct Store {
    libros: HashMap<i64, Libro>,
    next_id: i64,
}

/// Map-backed book store. One mutex guards both the map and the id counter;
/// it is never held across an await point.
pub struct InMemoryLibroRepository {
    store: Mutex<Store>,
}

impl InMemoryLibroRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                libros: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // A poisoned lock cannot leave the map torn: every critical section
        // is a single map operation
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryLibroRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LibroRepository for InMemoryLibroRepository {
    async fn save(&self, mut libro: Libro) -> AppResult<Libro> {
        let mut store = self.lock();
        let id = match libro.id {
            Some(id) => id,
            None => {
                let id = store.next_id;
                store.next_id += 1;
                libro.id = Some(id);
                id
            }
        };
        store.libros.insert(id, libro.clone());
        Ok(libro)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Libro>> {
        Ok(self.lock().libros.get(&id).cloned())
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Libro>> {
        Ok(self.lock().libros.values().find(|l| l.isbn == isbn).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Libro>> {
        Ok(self.lock().libros.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.lock().libros.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.lock().libros.contains_key(&id))
    }
}
