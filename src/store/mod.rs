//! Generic record persistence over a hosted document store.
//!
//! [`RecordStore`] is the typed adapter every service goes through. Record
//! types implement [`StoreRecord`] to name their collection and expose their
//! identifier field; the adapter handles id allocation, serialization, and
//! the bounded wait around every backend round trip.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::store::StoreError;
use crate::store::backend::DocumentBackend;
use crate::store::memory::MemoryBackend;

pub mod backend;
pub mod memory;
pub mod rest;


/// Identifier field injected into raw JSON writes, per collection.
///
/// Documents written through the typed path carry their id via
/// [`StoreRecord::set_id`]; this table covers the untyped path. The `users`
/// collection is absent on purpose, its documents are keyed by the identity
/// provider's uid and written by upsert only.
const ID_FIELDS: &[(&str, &str)] = &[
    ("announcements", "announcementId"),
    ("documentRequests", "requestId"),
    ("documents", "documentId"),
    ("meetings", "meetingId"),
    ("parents", "parentId"),
    ("payments", "paymentId"),
    ("students", "studentId"),
    ("trips", "tripId"),
];

/// Reserved collection probed by the health check.
const HEALTH_COLLECTION: &str = "health_check";

fn id_field_for(collection: &str) -> Option<&'static str> {
    ID_FIELDS
        .iter()
        .find(|(name, _)| *name == collection)
        .map(|(_, field)| *field)
}

/// A domain record that lives in its own store collection.
///
/// `id` returns the record's identifier when it has one; `set_id` assigns a
/// freshly allocated identifier during create.
pub trait StoreRecord: Serialize + DeserializeOwned + Send {
    /// Collection the records of this type are stored in.
    const COLLECTION: &'static str;

    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);
}

/// Typed adapter over a [`DocumentBackend`].
///
/// Cheap to clone; the backend is shared behind an `Arc`. Every operation is
/// awaited with a fixed timeout so a slow store surfaces as
/// [`StoreError::Timeout`] instead of hanging the request. There are no
/// retries and no cancellation, an abandoned wait leaves the operation in
/// flight.
#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn DocumentBackend>,
    op_timeout: Duration,
    health_timeout: Duration,
}

impl RecordStore {
    pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
        Self {
            backend,
            op_timeout: Duration::from_secs(10),
            health_timeout: Duration::from_secs(5),
        }
    }

    /// Store over an in-process [`MemoryBackend`], for tests and local runs.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    pub fn with_timeouts(mut self, op_timeout: Duration, health_timeout: Duration) -> Self {
        self.op_timeout = op_timeout;
        self.health_timeout = health_timeout;
        self
    }

    async fn bounded<T>(
        &self,
        operation: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        tokio::time::timeout(self.op_timeout, operation)
            .await
            .map_err(|_| StoreError::Timeout {
                timeout: self.op_timeout,
            })?
    }

    /// Persists a new record and returns its generated identifier.
    ///
    /// The identifier is assigned into the record before serialization, so
    /// the stored document carries its own id field.
    pub async fn create<T: StoreRecord>(&self, record: &mut T) -> Result<String, StoreError> {
        let id = self.backend.allocate_id();
        record.set_id(id.clone());
        let value = serde_json::to_value(&*record)?;
        self.bounded(self.backend.put(T::COLLECTION, &id, value))
            .await?;
        Ok(id)
    }

    /// Persists a raw JSON document and returns its generated identifier.
    ///
    /// When the collection has a mapped identifier field the id is injected
    /// into the object under that name; otherwise the document is stored
    /// untouched.
    pub async fn create_raw(
        &self,
        collection: &str,
        mut value: Value,
    ) -> Result<String, StoreError> {
        let id = self.backend.allocate_id();
        match (id_field_for(collection), value.as_object_mut()) {
            (Some(field), Some(object)) => {
                object.insert(field.to_string(), Value::String(id.clone()));
            }
            _ => {
                tracing::debug!("No identifier field mapped for collection {collection}");
            }
        }
        self.bounded(self.backend.put(collection, &id, value)).await?;
        Ok(id)
    }

    /// Stores the record at an explicit identifier, replacing any existing
    /// document. The record is serialized as-is.
    pub async fn upsert<T: StoreRecord>(&self, id: &str, record: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(record)?;
        self.bounded(self.backend.put(T::COLLECTION, id, value)).await
    }

    /// Fetches a record by identifier. An absent document is `None`, never
    /// an error.
    pub async fn get_by_id<T: StoreRecord>(&self, id: &str) -> Result<Option<T>, StoreError> {
        let value = self.bounded(self.backend.fetch(T::COLLECTION, id)).await?;
        match value {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Fetches every record in the type's collection. Ordering is
    /// store-defined and nothing relies on it.
    pub async fn get_all<T: StoreRecord>(&self) -> Result<Vec<T>, StoreError> {
        let values = self.bounded(self.backend.fetch_all(T::COLLECTION)).await?;
        values
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(StoreError::from))
            .collect()
    }

    /// Fetches the records whose `field` equals `value`. Equality only.
    pub async fn get_by_field<T: StoreRecord>(
        &self,
        field: &str,
        value: &(impl Serialize + Sync),
    ) -> Result<Vec<T>, StoreError> {
        let value = serde_json::to_value(value)?;
        let values = self
            .bounded(self.backend.fetch_by_field(T::COLLECTION, field, &value))
            .await?;
        values
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(StoreError::from))
            .collect()
    }

    /// Fetches every document in a collection without deserializing.
    pub async fn get_all_raw(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        self.bounded(self.backend.fetch_all(collection)).await
    }

    /// Deletes the record at `id`. Deleting an absent record succeeds.
    pub async fn delete<T: StoreRecord>(&self, id: &str) -> Result<(), StoreError> {
        self.bounded(self.backend.remove(T::COLLECTION, id)).await
    }

    /// Confirms the store is reachable with a bounded trivial read.
    ///
    /// Never errors: any failure, including a timeout, logs a warning and
    /// reports `false`.
    pub async fn health_check(&self) -> bool {
        let probe = tokio::time::timeout(self.health_timeout, self.backend.probe(HEALTH_COLLECTION));
        match probe.await {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                tracing::warn!("Store health check failed: {err}");
                false
            }
            Err(_) => {
                tracing::warn!(
                    "Store health check timed out after {:?}",
                    self.health_timeout
                );
                false
            }
        }
    }
}
