//! Generic repository layer over document collections.
//!
//! Every entity domain talks to its collection through the same three-piece
//! stack:
//!
//! ```text
//! ┌──────────────────────┐
//! │ GenericRepository    │  ← stable façade the controllers depend on
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │ EntityAdapter trait  │  ← per-entity store contract
//! └──────────┬───────────┘
//!            │
//! ┌──────────▼───────────┐
//! │ MongoAdapter<T>      │  ← typed Collection<T> wrapper
//! └──────────────────────┘
//! ```
//!
//! The repository adds no behavior beyond delegation; it exists so domains
//! depend on a stable interface regardless of which concrete store backs an
//! entity (the in-memory adapter used in tests implements the same trait).

use async_trait::async_trait;
use mongodb::bson::{doc, to_bson, Bson, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

/// A plain record persisted in its own collection.
///
/// Entities carry their id in an `_id` field and are otherwise inert serde
/// structs; all behavior lives in the layers above.
pub trait Entity:
    Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static
{
    /// Collection this entity is stored in
    const COLLECTION: &'static str;

    /// Opaque identity assigned at construction
    fn id(&self) -> Uuid;
}

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("BSON encoding error: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),

    #[error("BSON decoding error: {0}")]
    BsonDecode(#[from] mongodb::bson::de::Error),

    #[error("operation '{0}' is not supported by this adapter")]
    Unsupported(&'static str),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Build an `_id` filter for a record
pub fn id_filter(id: Uuid) -> Document {
    doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
}

/// Per-entity document store contract.
///
/// Filters are exact-field BSON documents (field name → expected value).
/// `update` merges only the supplied fields into the stored record; every
/// operation is a single round-trip and nothing here spans entities.
#[async_trait]
pub trait EntityAdapter<T: Entity>: Send + Sync {
    /// All records matching the filter; empty when none match
    async fn get(&self, filter: Document) -> RepositoryResult<Vec<T>>;

    /// First record matching the filter, or `None`. "Not found" is never an
    /// error at this layer.
    async fn get_by(&self, filter: Document) -> RepositoryResult<Option<T>>;

    /// Insert a new record and return it as stored (id included)
    async fn save(&self, record: T) -> RepositoryResult<T>;

    /// Merge the supplied fields into the record, returning the post-update
    /// record or `None` for an unknown id. An empty patch is a no-op read.
    async fn update(&self, id: Uuid, patch: Document) -> RepositoryResult<Option<T>>;

    /// Remove the record. Idempotent: deleting an unknown id returns `false`.
    async fn delete(&self, id: Uuid) -> RepositoryResult<bool>;

    /// Append documents to the record's `documents` sequence (append-only,
    /// no dedup). Only adapters that opt in implement this; the default
    /// reports the operation as unsupported.
    async fn add_documents(
        &self,
        _id: Uuid,
        _documents: Vec<Document>,
    ) -> RepositoryResult<Option<T>> {
        Err(RepositoryError::Unsupported("add_documents"))
    }
}

/// MongoDB implementation of [`EntityAdapter`] for any [`Entity`]
pub struct MongoAdapter<T: Entity> {
    collection: Collection<T>,
}

impl<T: Entity> MongoAdapter<T> {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<T>(T::COLLECTION);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations (index setup)
    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }
}

impl<T: Entity> Clone for MongoAdapter<T> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
        }
    }
}

#[async_trait]
impl<T: Entity> EntityAdapter<T> for MongoAdapter<T> {
    async fn get(&self, filter: Document) -> RepositoryResult<Vec<T>> {
        use futures::TryStreamExt;

        let cursor = self.collection.find(filter).await?;
        let records: Vec<T> = cursor.try_collect().await?;
        Ok(records)
    }

    async fn get_by(&self, filter: Document) -> RepositoryResult<Option<T>> {
        let record = self.collection.find_one(filter).await?;
        Ok(record)
    }

    async fn save(&self, record: T) -> RepositoryResult<T> {
        self.collection.insert_one(&record).await?;
        tracing::debug!(collection = T::COLLECTION, id = %record.id(), "record inserted");
        Ok(record)
    }

    async fn update(&self, id: Uuid, patch: Document) -> RepositoryResult<Option<T>> {
        // The server rejects an empty $set; merging nothing is a plain read
        if patch.is_empty() {
            return self.get_by(id_filter(id)).await;
        }

        let updated = self
            .collection
            .find_one_and_update(id_filter(id), doc! { "$set": patch })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        let result = self.collection.delete_one(id_filter(id)).await?;
        Ok(result.deleted_count > 0)
    }
}

/// Pass-through façade parameterized by entity type, holding one adapter.
///
/// Each method forwards directly to the corresponding adapter method with no
/// added logic. Cloning shares the adapter.
pub struct GenericRepository<T: Entity, A: EntityAdapter<T>> {
    adapter: Arc<A>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity, A: EntityAdapter<T>> GenericRepository<T, A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter: Arc::new(adapter),
            _entity: PhantomData,
        }
    }

    pub async fn get_all(&self, filter: Document) -> RepositoryResult<Vec<T>> {
        self.adapter.get(filter).await
    }

    pub async fn get_by(&self, filter: Document) -> RepositoryResult<Option<T>> {
        self.adapter.get_by(filter).await
    }

    pub async fn create(&self, record: T) -> RepositoryResult<T> {
        self.adapter.save(record).await
    }

    pub async fn update(&self, id: Uuid, patch: Document) -> RepositoryResult<Option<T>> {
        self.adapter.update(id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        self.adapter.delete(id).await
    }

    pub async fn add_documents(
        &self,
        id: Uuid,
        documents: Vec<Document>,
    ) -> RepositoryResult<Option<T>> {
        self.adapter.add_documents(id, documents).await
    }
}

impl<T: Entity, A: EntityAdapter<T>> Clone for GenericRepository<T, A> {
    fn clone(&self) -> Self {
        Self {
            adapter: Arc::clone(&self.adapter),
            _entity: PhantomData,
        }
    }
}
