use database::repository::id_filter;
use database::{EntityAdapter, GenericRepository, RepositoryResult};
use mongodb::bson::{doc, Document};
use uuid::Uuid;

use crate::models::Pet;

/// Pet repository: a thin wrapper over the generic façade.
///
/// Adds no surface beyond a typed id lookup used by its controllers.
pub struct PetRepository<A: EntityAdapter<Pet>> {
    repo: GenericRepository<Pet, A>,
}

impl<A: EntityAdapter<Pet>> PetRepository<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            repo: GenericRepository::new(adapter),
        }
    }

    pub async fn get_all(&self) -> RepositoryResult<Vec<Pet>> {
        self.repo.get_all(doc! {}).await
    }

    pub async fn get_by(&self, filter: Document) -> RepositoryResult<Option<Pet>> {
        self.repo.get_by(filter).await
    }

    pub async fn get_pet_by_id(&self, id: Uuid) -> RepositoryResult<Option<Pet>> {
        self.repo.get_by(id_filter(id)).await
    }

    pub async fn create(&self, pet: Pet) -> RepositoryResult<Pet> {
        self.repo.create(pet).await
    }

    pub async fn update(&self, id: Uuid, patch: Document) -> RepositoryResult<Option<Pet>> {
        self.repo.update(id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        self.repo.delete(id).await
    }
}

impl<A: EntityAdapter<Pet>> Clone for PetRepository<A> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}
