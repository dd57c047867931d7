use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use axum_helpers::{envelope, ErrorBody, Message, UuidPath};
use database::{EntityAdapter, RepositoryError};
use utoipa::OpenApi;
use uuid::Uuid;

use domain_pets::models::{Pet, UpdatePet};
use domain_pets::repository::PetRepository;
use domain_users::models::{PetRef, UpdateUser, User};
use domain_users::repository::UserRepository;

use crate::error::{AdoptionError, AdoptionResult};
use crate::models::Adoption;
use crate::repository::AdoptionRepository;

/// OpenAPI documentation for the Adoptions API
#[derive(OpenApi)]
#[openapi(
    paths(get_all_adoptions, get_adoption, create_adoption),
    components(schemas(Adoption, Message, ErrorBody)),
    tags(
        (name = "Adoptions", description = "Adoption records and the adoption workflow")
    )
)]
pub struct AdoptionsApiDoc;

/// Shared state for adoption handlers: the workflow spans three entities,
/// so this bundles all three repositories.
pub struct AdoptionsState<U, P, A>
where
    U: EntityAdapter<User>,
    P: EntityAdapter<Pet>,
    A: EntityAdapter<Adoption>,
{
    users: UserRepository<U>,
    pets: PetRepository<P>,
    adoptions: AdoptionRepository<A>,
}

impl<U, P, A> Clone for AdoptionsState<U, P, A>
where
    U: EntityAdapter<User>,
    P: EntityAdapter<Pet>,
    A: EntityAdapter<Adoption>,
{
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            pets: self.pets.clone(),
            adoptions: self.adoptions.clone(),
        }
    }
}

/// Create the adoptions router
pub fn router<U, P, A>(
    users: UserRepository<U>,
    pets: PetRepository<P>,
    adoptions: AdoptionRepository<A>,
) -> Router
where
    U: EntityAdapter<User> + 'static,
    P: EntityAdapter<Pet> + 'static,
    A: EntityAdapter<Adoption> + 'static,
{
    let state = AdoptionsState {
        users,
        pets,
        adoptions,
    };

    Router::new()
        .route("/", get(get_all_adoptions))
        .route("/{aid}", get(get_adoption))
        .route("/{uid}/{pid}", post(create_adoption))
        .with_state(state)
}

/// List all adoption records
#[utoipa::path(
    get,
    path = "",
    tag = "Adoptions",
    responses(
        (status = 200, description = "All adoptions, enveloped", body = Vec<Adoption>)
    )
)]
async fn get_all_adoptions<U, P, A>(
    State(state): State<AdoptionsState<U, P, A>>,
) -> AdoptionResult<impl IntoResponse>
where
    U: EntityAdapter<User>,
    P: EntityAdapter<Pet>,
    A: EntityAdapter<Adoption>,
{
    let adoptions = state.adoptions.get_all().await?;
    Ok(envelope::payload(adoptions))
}

/// Get an adoption record by id
#[utoipa::path(
    get,
    path = "/{aid}",
    tag = "Adoptions",
    params(("aid" = Uuid, Path, description = "Adoption id")),
    responses(
        (status = 200, description = "Adoption, enveloped", body = Adoption),
        (status = 404, description = "Adoption not found", body = ErrorBody)
    )
)]
async fn get_adoption<U, P, A>(
    State(state): State<AdoptionsState<U, P, A>>,
    UuidPath(aid): UuidPath,
) -> AdoptionResult<impl IntoResponse>
where
    U: EntityAdapter<User>,
    P: EntityAdapter<Pet>,
    A: EntityAdapter<Adoption>,
{
    let adoption = state
        .adoptions
        .get_adoption_by_id(aid)
        .await?
        .ok_or(AdoptionError::NotFound)?;

    Ok(envelope::payload(adoption))
}

/// Adopt a pet: link the user, mark the pet adopted, record the adoption.
#[utoipa::path(
    post,
    path = "/{uid}/{pid}",
    tag = "Adoptions",
    params(
        ("uid" = Uuid, Path, description = "Adopting user id"),
        ("pid" = Uuid, Path, description = "Pet id")
    ),
    responses(
        (status = 200, description = "Adoption confirmation", body = Message),
        (status = 400, description = "Pet is already adopted", body = ErrorBody),
        (status = 404, description = "User or pet not found", body = ErrorBody)
    )
)]
async fn create_adoption<U, P, A>(
    State(state): State<AdoptionsState<U, P, A>>,
    Path((uid, pid)): Path<(String, String)>,
) -> AdoptionResult<impl IntoResponse>
where
    U: EntityAdapter<User>,
    P: EntityAdapter<Pet>,
    A: EntityAdapter<Adoption>,
{
    let uid = Uuid::parse_str(&uid).map_err(|_| AdoptionError::InvalidId(uid))?;
    let pid = Uuid::parse_str(&pid).map_err(|_| AdoptionError::InvalidId(pid))?;

    // Existence checks happen before any write
    let user = state
        .users
        .get_user_by_id(uid)
        .await?
        .ok_or(AdoptionError::UserNotFound)?;

    let pet = state
        .pets
        .get_pet_by_id(pid)
        .await?
        .ok_or(AdoptionError::PetNotFound)?;

    if pet.adopted {
        return Err(AdoptionError::AlreadyAdopted);
    }

    let mut user_pets = user.pets.clone();
    user_pets.push(PetRef { id: pet.id });

    // Three sequential writes with no surrounding transaction. A failure
    // part-way leaves partial state, and two concurrent requests can both
    // pass the adopted check above before either write lands.
    let user_patch = UpdateUser {
        pets: Some(user_pets),
        ..Default::default()
    }
    .to_patch()
    .map_err(RepositoryError::from)?;
    state.users.update(user.id, user_patch).await?;

    let pet_patch = UpdatePet {
        adopted: Some(true),
        owner: Some(user.id),
        ..Default::default()
    }
    .to_patch()
    .map_err(RepositoryError::from)?;
    state.pets.update(pet.id, pet_patch).await?;

    state.adoptions.create(Adoption::new(user.id, pet.id)).await?;

    tracing::info!(user_id = %user.id, pet_id = %pet.id, "pet adopted");
    Ok(envelope::message("Pet adopted"))
}
