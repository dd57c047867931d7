use chrono::{DateTime, NaiveDate, Utc};
use database::Entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Pet entity as stored in the `pets` collection.
///
/// `owner` is present only once the pet has been adopted; there is no
/// transition back to available.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Pet {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub specie: String,
    #[serde(rename = "birthDate")]
    pub birth_date: DateTime<Utc>,
    pub adopted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Pet {
    /// Create a new, not-yet-adopted pet
    pub fn new(
        name: impl Into<String>,
        specie: impl Into<String>,
        birth_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            specie: specie.into(),
            birth_date,
            adopted: false,
            owner: None,
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

impl Entity for Pet {
    const COLLECTION: &'static str = "pets";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Request body for creating a pet.
///
/// The birth date is taken as text and parsed leniently (RFC 3339 or plain
/// `YYYY-MM-DD`); the controller reports missing or unparsable values.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreatePetRequest {
    pub name: Option<String>,
    pub specie: Option<String>,
    #[serde(rename = "birthDate")]
    pub birth_date: Option<String>,
}

/// Partial update for a pet. Only supplied fields are merged into the
/// stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specie: Option<String>,
    #[serde(rename = "birthDate", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adopted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl UpdatePet {
    /// Render the update as a `$set` patch carrying only supplied fields
    pub fn to_patch(&self) -> Result<mongodb::bson::Document, mongodb::bson::ser::Error> {
        mongodb::bson::to_document(self)
    }
}

/// Parse a birth date given either as RFC 3339 or as a plain date
pub fn parse_birth_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = raw.parse::<DateTime<Utc>>() {
        return Some(datetime);
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}
