//! In-memory implementation of the entity adapter contract.
//!
//! Stores records as BSON documents and mirrors the Mongo adapter's
//! semantics: exact-field filter match, `$set`-style partial merge,
//! idempotent delete, and append-only `documents` support.

use async_trait::async_trait;
use database::{Entity, EntityAdapter, RepositoryError, RepositoryResult};
use mongodb::bson::{from_document, to_bson, to_document, Bson, Document};
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct MemoryAdapter<T: Entity> {
    records: Arc<RwLock<Vec<Document>>>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> MemoryAdapter<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            _entity: PhantomData,
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T: Entity> Default for MemoryAdapter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Clone for MemoryAdapter<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            _entity: PhantomData,
        }
    }
}

fn matches(record: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, value)| record.get(key) == Some(value))
}

fn id_bson(id: Uuid) -> RepositoryResult<Bson> {
    to_bson(&id).map_err(RepositoryError::from)
}

#[async_trait]
impl<T: Entity> EntityAdapter<T> for MemoryAdapter<T> {
    async fn get(&self, filter: Document) -> RepositoryResult<Vec<T>> {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| matches(record, &filter))
            .map(|record| from_document(record.clone()).map_err(RepositoryError::from))
            .collect()
    }

    async fn get_by(&self, filter: Document) -> RepositoryResult<Option<T>> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| matches(record, &filter))
            .map(|record| from_document(record.clone()).map_err(RepositoryError::from))
            .transpose()
    }

    async fn save(&self, record: T) -> RepositoryResult<T> {
        let document = to_document(&record)?;
        self.records.write().await.push(document);
        Ok(record)
    }

    async fn update(&self, id: Uuid, patch: Document) -> RepositoryResult<Option<T>> {
        let id = id_bson(id)?;
        let mut records = self.records.write().await;

        let Some(record) = records.iter_mut().find(|r| r.get("_id") == Some(&id)) else {
            return Ok(None);
        };

        for (key, value) in patch {
            record.insert(key, value);
        }

        from_document(record.clone())
            .map(Some)
            .map_err(RepositoryError::from)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        let id = id_bson(id)?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.get("_id") != Some(&id));
        Ok(records.len() < before)
    }

    async fn add_documents(
        &self,
        id: Uuid,
        documents: Vec<Document>,
    ) -> RepositoryResult<Option<T>> {
        let id = id_bson(id)?;
        let mut records = self.records.write().await;

        let Some(record) = records.iter_mut().find(|r| r.get("_id") == Some(&id)) else {
            return Ok(None);
        };

        let entries: Vec<Bson> = documents.into_iter().map(Bson::Document).collect();
        match record.get_array_mut("documents") {
            Ok(existing) => existing.extend(entries),
            Err(_) => {
                record.insert("documents", Bson::Array(entries));
            }
        }

        from_document(record.clone())
            .map(Some)
            .map_err(RepositoryError::from)
    }
}
