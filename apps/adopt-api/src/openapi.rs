//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Adopt API",
        version = "0.1.0",
        description = "Pet-adoption REST backend: users, pets, adoptions, sessions and mock data over MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/users", api = domain_users::UsersApiDoc),
        (path = "/api/sessions", api = domain_users::SessionsApiDoc),
        (path = "/api/pets", api = domain_pets::PetsApiDoc),
        (path = "/api/adoptions", api = domain_adoptions::AdoptionsApiDoc),
        (path = "/api/mocks", api = crate::api::mocks::MocksApiDoc)
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "Sessions", description = "Session-cookie authentication endpoints"),
        (name = "Pets", description = "Pet management endpoints"),
        (name = "Adoptions", description = "Adoption records and the adoption workflow"),
        (name = "Mocks", description = "Mock-data generation endpoints")
    )
)]
pub struct ApiDoc;
