use database::Entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Adoption record linking a user and a pet.
///
/// Exactly one record exists per adopted pet; there is no un-adopt
/// operation and deleting a user or pet does not remove the record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Adoption {
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Adopting user
    pub owner: Uuid,
    /// Adopted pet
    pub pet: Uuid,
}

impl Adoption {
    pub fn new(owner: Uuid, pet: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            owner,
            pet,
        }
    }
}

impl Entity for Adoption {
    const COLLECTION: &'static str = "adoptions";

    fn id(&self) -> Uuid {
        self.id
    }
}
