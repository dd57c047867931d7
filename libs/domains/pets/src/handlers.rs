use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{envelope, ErrorBody, Message, UuidPath};
use chrono::Utc;
use core_config::upload::UploadConfig;
use database::{EntityAdapter, RepositoryError};
use utoipa::OpenApi;

use crate::error::{PetError, PetResult};
use crate::models::{parse_birth_date, CreatePetRequest, Pet, UpdatePet};
use crate::repository::PetRepository;

/// OpenAPI documentation for the Pets API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_all_pets,
        create_pet,
        create_pet_with_image,
        get_pet,
        update_pet,
        delete_pet,
    ),
    components(schemas(Pet, CreatePetRequest, UpdatePet, Message, ErrorBody)),
    tags(
        (name = "Pets", description = "Pet management endpoints")
    )
)]
pub struct PetsApiDoc;

/// Shared state for pet handlers
pub struct PetsState<A: EntityAdapter<Pet>> {
    repository: PetRepository<A>,
    uploads: UploadConfig,
}

impl<A: EntityAdapter<Pet>> Clone for PetsState<A> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            uploads: self.uploads.clone(),
        }
    }
}

/// Create the pets router with all HTTP endpoints
pub fn router<A: EntityAdapter<Pet> + 'static>(
    repository: PetRepository<A>,
    uploads: UploadConfig,
) -> Router {
    let state = PetsState {
        repository,
        uploads,
    };

    Router::new()
        .route("/", get(get_all_pets).post(create_pet))
        .route("/withimage", post(create_pet_with_image))
        .route("/{pid}", get(get_pet).put(update_pet).delete(delete_pet))
        .with_state(state)
}

/// List all pets
#[utoipa::path(
    get,
    path = "",
    tag = "Pets",
    responses(
        (status = 200, description = "All pets, enveloped", body = Vec<Pet>)
    )
)]
async fn get_all_pets<A: EntityAdapter<Pet>>(
    State(state): State<PetsState<A>>,
) -> PetResult<impl IntoResponse> {
    let pets = state.repository.get_all().await?;
    Ok(envelope::payload(pets))
}

/// Create a new pet
#[utoipa::path(
    post,
    path = "",
    tag = "Pets",
    request_body = CreatePetRequest,
    responses(
        (status = 200, description = "Created pet, enveloped", body = Pet),
        (status = 400, description = "Incomplete values", body = ErrorBody)
    )
)]
async fn create_pet<A: EntityAdapter<Pet>>(
    State(state): State<PetsState<A>>,
    body: Option<Json<CreatePetRequest>>,
) -> PetResult<impl IntoResponse> {
    let Json(input) = body.unwrap_or_default();

    let (Some(name), Some(specie), Some(raw_date)) = (input.name, input.specie, input.birth_date)
    else {
        return Err(PetError::IncompleteValues);
    };
    let birth_date = parse_birth_date(&raw_date).ok_or(PetError::IncompleteValues)?;

    let pet = state
        .repository
        .create(Pet::new(name, specie, birth_date))
        .await?;

    tracing::info!(pet_id = %pet.id, "pet created");
    Ok(envelope::payload(pet))
}

/// Create a new pet with an uploaded image (multipart)
#[utoipa::path(
    post,
    path = "/withimage",
    tag = "Pets",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Created pet, enveloped", body = Pet),
        (status = 400, description = "Incomplete values or missing image", body = ErrorBody)
    )
)]
async fn create_pet_with_image<A: EntityAdapter<Pet>>(
    State(state): State<PetsState<A>>,
    mut multipart: Multipart,
) -> PetResult<impl IntoResponse> {
    let mut name = None;
    let mut specie = None;
    let mut raw_date = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| PetError::Multipart(e.to_string()))?
    {
        let field_name = field.name().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);

        if let Some(original) = file_name {
            let data = field
                .bytes()
                .await
                .map_err(|e| PetError::Multipart(e.to_string()))?;

            let dir = state.uploads.pet_images_dir();
            tokio::fs::create_dir_all(&dir).await?;

            let filename = format!("{}-{}", Utc::now().timestamp_millis(), original);
            tokio::fs::write(dir.join(&filename), &data).await?;

            image = Some(format!("/public/img/pets/{}", filename));
        } else if let Some(field_name) = field_name {
            let text = field
                .text()
                .await
                .map_err(|e| PetError::Multipart(e.to_string()))?;
            match field_name.as_str() {
                "name" => name = Some(text),
                "specie" => specie = Some(text),
                "birthDate" => raw_date = Some(text),
                _ => {}
            }
        }
    }

    let (Some(name), Some(specie), Some(raw_date)) = (name, specie, raw_date) else {
        return Err(PetError::IncompleteValues);
    };
    let birth_date = parse_birth_date(&raw_date).ok_or(PetError::IncompleteValues)?;
    let image = image.ok_or(PetError::ImageRequired)?;

    let pet = state
        .repository
        .create(Pet::new(name, specie, birth_date).with_image(image))
        .await?;

    tracing::info!(pet_id = %pet.id, "pet created with image");
    Ok(envelope::payload(pet))
}

/// Get a pet by id
#[utoipa::path(
    get,
    path = "/{pid}",
    tag = "Pets",
    params(("pid" = Uuid, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Pet, enveloped", body = Pet),
        (status = 404, description = "Pet not found", body = ErrorBody)
    )
)]
async fn get_pet<A: EntityAdapter<Pet>>(
    State(state): State<PetsState<A>>,
    UuidPath(pid): UuidPath,
) -> PetResult<impl IntoResponse> {
    let pet = state
        .repository
        .get_pet_by_id(pid)
        .await?
        .ok_or(PetError::NotFound)?;

    Ok(envelope::payload(pet))
}

/// Update a pet (partial merge, no existence check)
#[utoipa::path(
    put,
    path = "/{pid}",
    tag = "Pets",
    params(("pid" = Uuid, Path, description = "Pet id")),
    request_body = UpdatePet,
    responses(
        (status = 200, description = "Update confirmation", body = Message)
    )
)]
async fn update_pet<A: EntityAdapter<Pet>>(
    State(state): State<PetsState<A>>,
    UuidPath(pid): UuidPath,
    body: Option<Json<UpdatePet>>,
) -> PetResult<impl IntoResponse> {
    let Json(update) = body.unwrap_or_default();

    let patch = update.to_patch().map_err(RepositoryError::from)?;
    state.repository.update(pid, patch).await?;

    Ok(envelope::message("pet updated"))
}

/// Delete a pet. Idempotent at the adapter; the second delete of the same
/// id still answers 200 here.
#[utoipa::path(
    delete,
    path = "/{pid}",
    tag = "Pets",
    params(("pid" = Uuid, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Delete confirmation", body = Message)
    )
)]
async fn delete_pet<A: EntityAdapter<Pet>>(
    State(state): State<PetsState<A>>,
    UuidPath(pid): UuidPath,
) -> PetResult<impl IntoResponse> {
    state.repository.delete(pid).await?;

    Ok(envelope::message("pet deleted"))
}
