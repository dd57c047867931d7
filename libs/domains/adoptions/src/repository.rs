use database::repository::id_filter;
use database::{EntityAdapter, GenericRepository, RepositoryResult};
use mongodb::bson::{doc, Document};
use uuid::Uuid;

use crate::models::Adoption;

/// Adoption repository: a thin wrapper over the generic façade.
///
/// Adds no surface beyond a typed id lookup used by its controllers.
pub struct AdoptionRepository<A: EntityAdapter<Adoption>> {
    repo: GenericRepository<Adoption, A>,
}

impl<A: EntityAdapter<Adoption>> AdoptionRepository<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            repo: GenericRepository::new(adapter),
        }
    }

    pub async fn get_all(&self) -> RepositoryResult<Vec<Adoption>> {
        self.repo.get_all(doc! {}).await
    }

    pub async fn get_by(&self, filter: Document) -> RepositoryResult<Option<Adoption>> {
        self.repo.get_by(filter).await
    }

    pub async fn get_adoption_by_id(&self, id: Uuid) -> RepositoryResult<Option<Adoption>> {
        self.repo.get_by(id_filter(id)).await
    }

    pub async fn create(&self, adoption: Adoption) -> RepositoryResult<Adoption> {
        self.repo.create(adoption).await
    }

    pub async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        self.repo.delete(id).await
    }
}

impl<A: EntityAdapter<Adoption>> Clone for AdoptionRepository<A> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}
