//! MongoDB adapter for users.
//!
//! Delegates the uniform contract to [`MongoAdapter`] and adds the
//! `documents` append that only the user collection supports.

use async_trait::async_trait;
use database::repository::id_filter;
use database::{Entity, EntityAdapter, MongoAdapter, RepositoryResult};
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Database, IndexModel};
use uuid::Uuid;

use crate::models::User;

pub struct UserAdapter {
    base: MongoAdapter<User>,
}

impl UserAdapter {
    pub fn new(db: &Database) -> Self {
        Self {
            base: MongoAdapter::new(db),
        }
    }

    /// Create the unique index on `email`.
    ///
    /// Uniqueness lives in the store, not in application pre-checks; call
    /// this once at startup.
    pub async fn ensure_indexes(db: &Database) -> RepositoryResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(options)
            .build();

        db.collection::<User>(User::COLLECTION)
            .create_index(index)
            .await?;

        tracing::debug!("users email index ensured");
        Ok(())
    }
}

impl Clone for UserAdapter {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
        }
    }
}

#[async_trait]
impl EntityAdapter<User> for UserAdapter {
    async fn get(&self, filter: Document) -> RepositoryResult<Vec<User>> {
        self.base.get(filter).await
    }

    async fn get_by(&self, filter: Document) -> RepositoryResult<Option<User>> {
        self.base.get_by(filter).await
    }

    async fn save(&self, record: User) -> RepositoryResult<User> {
        self.base.save(record).await
    }

    async fn update(&self, id: Uuid, patch: Document) -> RepositoryResult<Option<User>> {
        self.base.update(id, patch).await
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        self.base.delete(id).await
    }

    /// Append-only `$push $each` on the user's `documents` sequence.
    /// Returns `None` for an unknown user id; callers check existence first.
    async fn add_documents(
        &self,
        id: Uuid,
        documents: Vec<Document>,
    ) -> RepositoryResult<Option<User>> {
        let entries: Vec<Bson> = documents.into_iter().map(Bson::Document).collect();
        let update = doc! { "$push": { "documents": { "$each": entries } } };

        let updated = self
            .base
            .collection()
            .find_one_and_update(id_filter(id), update)
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }
}
