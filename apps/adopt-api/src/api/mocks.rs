//! Mock-data endpoints: generated users/pets, and bulk insertion for
//! seeding a development database.

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{envelope, AppError, ErrorBody};
use database::{EntityAdapter, MongoAdapter};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use domain_pets::mock::generate_pets;
use domain_pets::{Pet, PetRepository};
use domain_users::mock::{generate_users, MOCK_PASSWORD};
use domain_users::password::hash_password;
use domain_users::{User, UserAdapter, UserRepository, UserResponse};

use crate::state::AppState;

/// OpenAPI documentation for the Mocks API
#[derive(OpenApi)]
#[openapi(
    paths(mocking_pets, mocking_users, generate_data),
    components(schemas(GenerateDataRequest, ErrorBody)),
    tags(
        (name = "Mocks", description = "Mock-data generation endpoints")
    )
)]
pub struct MocksApiDoc;

const MOCK_PETS_COUNT: usize = 100;
const MOCK_USERS_COUNT: usize = 50;

/// Shared state for mock handlers
struct MocksState<U: EntityAdapter<User>, P: EntityAdapter<Pet>> {
    users: UserRepository<U>,
    pets: PetRepository<P>,
}

impl<U: EntityAdapter<User>, P: EntityAdapter<Pet>> Clone for MocksState<U, P> {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            pets: self.pets.clone(),
        }
    }
}

/// Create the mocks router backed by the MongoDB adapters
pub fn router(state: &AppState) -> Router {
    let mocks_state = MocksState {
        users: UserRepository::new(UserAdapter::new(&state.db)),
        pets: PetRepository::new(MongoAdapter::<Pet>::new(&state.db)),
    };

    Router::new()
        .route("/mockingpets", get(mocking_pets))
        .route("/mockingusers", get(mocking_users))
        .route("/generateData", post(generate_data))
        .with_state(mocks_state)
}

/// Request body for /generateData
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct GenerateDataRequest {
    #[serde(default)]
    pub users: usize,
    #[serde(default)]
    pub pets: usize,
}

/// Payload returned by /generateData
#[derive(Debug, Serialize)]
struct GeneratedData {
    users: Vec<UserResponse>,
    pets: Vec<Pet>,
}

/// Generate 100 mock pets without persisting them
#[utoipa::path(
    get,
    path = "/mockingpets",
    tag = "Mocks",
    responses(
        (status = 200, description = "Generated pets, enveloped", body = Vec<Pet>)
    )
)]
async fn mocking_pets<U, P>(
    State(_state): State<MocksState<U, P>>,
) -> Result<impl IntoResponse, AppError>
where
    U: EntityAdapter<User>,
    P: EntityAdapter<Pet>,
{
    Ok(envelope::payload(generate_pets(MOCK_PETS_COUNT)))
}

/// Generate 50 mock users without persisting them
#[utoipa::path(
    get,
    path = "/mockingusers",
    tag = "Mocks",
    responses(
        (status = 200, description = "Generated users, enveloped", body = Vec<UserResponse>)
    )
)]
async fn mocking_users<U, P>(
    State(_state): State<MocksState<U, P>>,
) -> Result<impl IntoResponse, AppError>
where
    U: EntityAdapter<User>,
    P: EntityAdapter<Pet>,
{
    // One hash shared by every generated user keeps this endpoint quick
    let password_hash = hash_password(MOCK_PASSWORD)?;
    let users: Vec<UserResponse> = generate_users(MOCK_USERS_COUNT, &password_hash)
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(envelope::payload(users))
}

/// Generate and persist the requested number of users and pets
#[utoipa::path(
    post,
    path = "/generateData",
    tag = "Mocks",
    request_body = GenerateDataRequest,
    responses(
        (status = 200, description = "Inserted records, enveloped")
    )
)]
async fn generate_data<U, P>(
    State(state): State<MocksState<U, P>>,
    body: Option<Json<GenerateDataRequest>>,
) -> Result<impl IntoResponse, AppError>
where
    U: EntityAdapter<User>,
    P: EntityAdapter<Pet>,
{
    let Json(request) = body.unwrap_or_default();

    let password_hash = hash_password(MOCK_PASSWORD)?;
    let users = generate_users(request.users, &password_hash);
    let pets = generate_pets(request.pets);

    // Independent create calls issued concurrently; no ordering guarantee
    // among them and no dependency between users and pets
    let (created_users, created_pets) = tokio::try_join!(
        try_join_all(users.into_iter().map(|user| state.users.create(user))),
        try_join_all(pets.into_iter().map(|pet| state.pets.create(pet))),
    )
    .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    tracing::info!(
        users = created_users.len(),
        pets = created_pets.len(),
        "mock data inserted"
    );

    Ok(envelope::payload(GeneratedData {
        users: created_users.into_iter().map(Into::into).collect(),
        pets: created_pets,
    }))
}
