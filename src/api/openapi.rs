//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, libros, prestamos, usuarios};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "0.1.0",
        description = "Library Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Libros
        libros::list_libros,
        libros::get_libro,
        libros::get_libro_by_isbn,
        libros::create_libro,
        libros::update_libro,
        libros::delete_libro,
        // Usuarios
        usuarios::list_usuarios,
        usuarios::get_usuario,
        usuarios::get_usuario_by_email,
        usuarios::get_usuario_by_nombre,
        usuarios::create_usuario,
        usuarios::update_usuario,
        usuarios::delete_usuario,
        // Prestamos
        prestamos::list_prestamos,
        prestamos::get_prestamo,
        prestamos::create_prestamo,
        prestamos::update_prestamo,
        prestamos::delete_prestamo,
    ),
    components(
        schemas(
            crate::models::libro::Libro,
            crate::models::usuario::Usuario,
            crate::models::prestamo::Prestamo,
            crate::models::enums::EstadoLibro,
            crate::models::enums::EstadoUsuario,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "libros", description = "Book catalog management"),
        (name = "usuarios", description = "User management"),
        (name = "prestamos", description = "Loan management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
