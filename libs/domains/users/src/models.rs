use chrono::{DateTime, Utc};
use database::Entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

fn default_role() -> String {
    "user".to_string()
}

/// Reference to an adopted pet stored on the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PetRef {
    #[serde(rename = "_id")]
    pub id: Uuid,
}

/// An uploaded document attached to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDocument {
    /// Original file name
    pub name: String,
    /// Where the stored file is served from
    pub reference: String,
}

/// User entity as stored in the `users` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Unique across users (enforced by a unique index)
    pub email: String,
    /// Argon2 hash, never exposed in API responses
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
    /// References to adopted pets, in adoption order
    #[serde(default)]
    pub pets: Vec<PetRef>,
    pub last_connection: DateTime<Utc>,
    /// Uploaded documents, in append order
    #[serde(default)]
    pub documents: Vec<UserDocument>,
}

impl User {
    /// Create a new user (password must already be hashed)
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password_hash.into(),
            role: default_role(),
            pets: Vec::new(),
            last_connection: Utc::now(),
            documents: Vec::new(),
        }
    }

    /// Display name used in session claims
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// User as returned by the API (no password hash)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub pets: Vec<PetRef>,
    pub last_connection: DateTime<Utc>,
    pub documents: Vec<UserDocument>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
            pets: user.pets,
            last_connection: user.last_connection,
            documents: user.documents,
        }
    }
}

/// Request body for creating a user (and for session registration).
///
/// Fields are optional so the controller can report missing values itself
/// instead of surfacing a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Partial update for a user. Only supplied fields are merged into the
/// stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pets: Option<Vec<PetRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_connection: Option<DateTime<Utc>>,
}

impl UpdateUser {
    /// Render the update as a `$set` patch carrying only supplied fields
    pub fn to_patch(&self) -> Result<mongodb::bson::Document, mongodb::bson::ser::Error> {
        mongodb::bson::to_document(self)
    }
}

/// Request body for login
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("Jane", "Doe", "jane@test.com", "hash");
        assert_eq!(user.role, "user");
        assert!(user.pets.is_empty());
        assert!(user.documents.is_empty());
        assert_eq!(user.display_name(), "Jane Doe");
    }

    #[test]
    fn test_password_not_serialized_in_response() {
        let user = User::new("Jane", "Doe", "jane@test.com", "hash");
        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "jane@test.com");
    }

    #[test]
    fn test_update_patch_only_carries_supplied_fields() {
        let update = UpdateUser {
            first_name: Some("Janet".to_string()),
            ..Default::default()
        };
        let patch = update.to_patch().unwrap();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.get_str("first_name").unwrap(), "Janet");
    }

    #[test]
    fn test_empty_update_is_empty_patch() {
        let patch = UpdateUser::default().to_patch().unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_user_bson_round_trip() {
        let user = User::new("Jane", "Doe", "jane@test.com", "hash");
        let doc = mongodb::bson::to_document(&user).unwrap();
        assert!(doc.contains_key("_id"));
        let back: User = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(back.id, user.id);
        assert_eq!(back.email, user.email);
    }

    #[test]
    fn test_role_defaults_when_absent() {
        let doc = mongodb::bson::doc! {
            "_id": Uuid::now_v7().to_string(),
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@test.com",
            "password": "hash",
            "last_connection": mongodb::bson::to_bson(&Utc::now()).unwrap(),
        };
        let user: User = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(user.role, "user");
    }
}
