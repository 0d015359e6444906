//! API handlers for the Biblioteca REST endpoints

pub mod health;
pub mod libros;
pub mod openapi;
pub mod prestamos;
pub mod usuarios;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/libros", get(libros::list_libros))
        .route("/libros", post(libros::create_libro))
        .route("/libros/:id", get(libros::get_libro))
        .route("/libros/:id", put(libros::update_libro))
        .route("/libros/:id", delete(libros::delete_libro))
        .route("/libros/isbn/:isbn", get(libros::get_libro_by_isbn))
        // Users
        .route("/usuarios", get(usuarios::list_usuarios))
        .route("/usuarios", post(usuarios::create_usuario))
        .route("/usuarios/:id", get(usuarios::get_usuario))
        .route("/usuarios/:id", put(usuarios::update_usuario))
        .route("/usuarios/:id", delete(usuarios::delete_usuario))
        .route("/usuarios/email/:email", get(usuarios::get_usuario_by_email))
        .route("/usuarios/nombre/:nombre", get(usuarios::get_usuario_by_nombre))
        // Loans
        .route("/prestamos", get(prestamos::list_prestamos))
        .route("/prestamos", post(prestamos::create_prestamo))
        .route("/prestamos/:id", get(prestamos::get_prestamo))
        .route("/prestamos/:id", put(prestamos::update_prestamo))
        .route("/prestamos/:id", delete(prestamos::delete_prestamo))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
