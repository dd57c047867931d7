use database::repository::id_filter;
use database::{EntityAdapter, GenericRepository, RepositoryResult};
use mongodb::bson::{doc, Document};
use uuid::Uuid;

use crate::models::User;

/// User repository: the generic façade plus entity-specific lookups
pub struct UserRepository<A: EntityAdapter<User>> {
    repo: GenericRepository<User, A>,
}

impl<A: EntityAdapter<User>> UserRepository<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            repo: GenericRepository::new(adapter),
        }
    }

    pub async fn get_all(&self) -> RepositoryResult<Vec<User>> {
        self.repo.get_all(doc! {}).await
    }

    pub async fn get_by(&self, filter: Document) -> RepositoryResult<Option<User>> {
        self.repo.get_by(filter).await
    }

    pub async fn create(&self, user: User) -> RepositoryResult<User> {
        self.repo.create(user).await
    }

    pub async fn update(&self, id: Uuid, patch: Document) -> RepositoryResult<Option<User>> {
        self.repo.update(id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        self.repo.delete(id).await
    }

    pub async fn add_documents(
        &self,
        id: Uuid,
        documents: Vec<Document>,
    ) -> RepositoryResult<Option<User>> {
        self.repo.add_documents(id, documents).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        self.repo.get_by(doc! { "email": email }).await
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        self.repo.get_by(id_filter(id)).await
    }
}

impl<A: EntityAdapter<User>> Clone for UserRepository<A> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}
