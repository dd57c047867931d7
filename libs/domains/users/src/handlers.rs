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
use mongodb::bson::to_document;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUserRequest, UpdateUser, User, UserDocument, UserResponse};
use crate::password::hash_password;
use crate::repository::UserRepository;

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_all_users,
        create_user,
        get_user,
        update_user,
        delete_user,
        upload_documents,
    ),
    components(schemas(
        UserResponse,
        CreateUserRequest,
        UpdateUser,
        crate::models::UserDocument,
        crate::models::PetRef,
        Message,
        ErrorBody,
    )),
    tags(
        (name = "Users", description = "User management endpoints")
    )
)]
pub struct UsersApiDoc;

/// Shared state for user handlers
pub struct UsersState<A: EntityAdapter<User>> {
    repository: UserRepository<A>,
    uploads: UploadConfig,
}

impl<A: EntityAdapter<User>> Clone for UsersState<A> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            uploads: self.uploads.clone(),
        }
    }
}

/// Create the users router with all HTTP endpoints
pub fn router<A: EntityAdapter<User> + 'static>(
    repository: UserRepository<A>,
    uploads: UploadConfig,
) -> Router {
    let state = UsersState {
        repository,
        uploads,
    };

    Router::new()
        .route("/", get(get_all_users).post(create_user))
        .route(
            "/{uid}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/{uid}/documents", post(upload_documents))
        .with_state(state)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "All users, enveloped", body = Vec<UserResponse>)
    )
)]
async fn get_all_users<A: EntityAdapter<User>>(
    State(state): State<UsersState<A>>,
) -> UserResult<impl IntoResponse> {
    let users = state.repository.get_all().await?;
    let payload: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(envelope::payload(payload))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user, enveloped", body = UserResponse),
        (status = 400, description = "Incomplete values or duplicate email", body = ErrorBody)
    )
)]
async fn create_user<A: EntityAdapter<User>>(
    State(state): State<UsersState<A>>,
    body: Option<Json<CreateUserRequest>>,
) -> UserResult<impl IntoResponse> {
    let Json(input) = body.unwrap_or_default();

    let (Some(first_name), Some(last_name), Some(email), Some(password)) =
        (input.first_name, input.last_name, input.email, input.password)
    else {
        return Err(UserError::IncompleteValues);
    };

    if state
        .repository
        .get_user_by_email(&email)
        .await?
        .is_some()
    {
        return Err(UserError::AlreadyExists);
    }

    let user = User::new(first_name, last_name, email, hash_password(&password)?);
    let created = state.repository.create(user).await?;

    tracing::info!(user_id = %created.id, "user created");
    Ok(envelope::payload(UserResponse::from(created)))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/{uid}",
    tag = "Users",
    params(("uid" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User, enveloped", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
async fn get_user<A: EntityAdapter<User>>(
    State(state): State<UsersState<A>>,
    UuidPath(uid): UuidPath,
) -> UserResult<impl IntoResponse> {
    let user = state
        .repository
        .get_user_by_id(uid)
        .await?
        .ok_or(UserError::NotFound)?;

    Ok(envelope::payload(UserResponse::from(user)))
}

/// Update a user (partial merge of supplied fields)
#[utoipa::path(
    put,
    path = "/{uid}",
    tag = "Users",
    params(("uid" = Uuid, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Update confirmation", body = Message),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
async fn update_user<A: EntityAdapter<User>>(
    State(state): State<UsersState<A>>,
    UuidPath(uid): UuidPath,
    body: Option<Json<UpdateUser>>,
) -> UserResult<impl IntoResponse> {
    let Json(mut update) = body.unwrap_or_default();

    state
        .repository
        .get_user_by_id(uid)
        .await?
        .ok_or(UserError::NotFound)?;

    // Passwords stay hashed at rest, also on update
    if let Some(ref password) = update.password {
        update.password = Some(hash_password(password)?);
    }

    let patch = update.to_patch().map_err(RepositoryError::from)?;
    state.repository.update(uid, patch).await?;

    Ok(envelope::message("User updated"))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{uid}",
    tag = "Users",
    params(("uid" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Delete confirmation", body = Message),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
async fn delete_user<A: EntityAdapter<User>>(
    State(state): State<UsersState<A>>,
    UuidPath(uid): UuidPath,
) -> UserResult<impl IntoResponse> {
    state
        .repository
        .get_user_by_id(uid)
        .await?
        .ok_or(UserError::NotFound)?;

    state.repository.delete(uid).await?;

    Ok(envelope::message("User deleted"))
}

/// Upload documents for a user (multipart)
#[utoipa::path(
    post,
    path = "/{uid}/documents",
    tag = "Users",
    params(("uid" = Uuid, Path, description = "User id")),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload confirmation", body = Message),
        (status = 400, description = "No files were uploaded", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
async fn upload_documents<A: EntityAdapter<User>>(
    State(state): State<UsersState<A>>,
    UuidPath(uid): UuidPath,
    mut multipart: Multipart,
) -> UserResult<impl IntoResponse> {
    let user = state
        .repository
        .get_user_by_id(uid)
        .await?
        .ok_or(UserError::NotFound)?;

    let dir = state.uploads.documents_dir();
    tokio::fs::create_dir_all(&dir).await?;

    let mut documents: Vec<UserDocument> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UserError::Multipart(e.to_string()))?
    {
        // Only fields carrying a file are stored
        let Some(original) = field.file_name().map(str::to_string) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| UserError::Multipart(e.to_string()))?;

        let filename = format!("{}-{}", Utc::now().timestamp_millis(), original);
        tokio::fs::write(dir.join(&filename), &data).await?;

        documents.push(UserDocument {
            name: original,
            reference: format!("/documents/{}", filename),
        });
    }

    if documents.is_empty() {
        return Err(UserError::NoFiles);
    }

    let entries = documents
        .iter()
        .map(to_document)
        .collect::<Result<Vec<_>, _>>()
        .map_err(RepositoryError::from)?;

    state.repository.add_documents(user.id, entries).await?;

    tracing::info!(user_id = %user.id, count = documents.len(), "documents uploaded");
    Ok(envelope::message("Documents uploaded successfully"))
}
