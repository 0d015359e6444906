//! Storage layer: per-entity store traits and their in-memory backings

pub mod libros;
pub mod prestamos;
pub mod usuarios;

use std::sync::Arc;

pub use libros::{InMemoryLibroRepository, LibroRepository};
pub use prestamos::{InMemoryPrestamoRepository, PrestamoRepository};
pub use usuarios::{InMemoryUsuarioRepository, UsuarioRepository};

/// Aggregate of the per-entity stores, built once at startup and shared by
/// the service layer
#[derive(Clone)]
pub struct Repository {
    pub libros: Arc<dyn LibroRepository>,
    pub usuarios: Arc<dyn UsuarioRepository>,
    pub prestamos: Arc<dyn PrestamoRepository>,
}

impl Repository {
    /// Create a repository with all three stores backed by in-process maps
    pub fn in_memory() -> Self {
        Self {
            libros: Arc::new(InMemoryLibroRepository::new()),
            usuarios: Arc::new(InMemoryUsuarioRepository::new()),
            prestamos: Arc::new(InMemoryPrestamoRepository::new()),
        }
    }
}
