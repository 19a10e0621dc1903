use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::error::store::StoreError;

/// Raw document operations the record store is built on.
///
/// Implementations move JSON documents in and out of named collections and
/// know nothing about record types. [`RestBackend`](super::rest::RestBackend)
/// speaks to the hosted store; [`MemoryBackend`](super::memory::MemoryBackend)
/// holds documents in process for tests and local development.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Allocates an identifier for a new document.
    ///
    /// Identifiers are client-side random UUIDs so a create is a single
    /// write round trip.
    fn allocate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    /// Stores `value` at `collection/id`, replacing any existing document.
    async fn put(&self, collection: &str, id: &str, value: Value) -> Result<(), StoreError>;

    /// Fetches the document at `collection/id`.
    ///
    /// # Returns
    /// - `Ok(Some(Value))` - The stored document
    /// - `Ok(None)` - No document exists at that location
    async fn fetch(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Fetches every document in `collection`, in store-defined order.
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    /// Fetches the documents in `collection` whose `field` equals `value`.
    async fn fetch_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StoreError>;

    /// Removes the document at `collection/id`. Removing an absent document
    /// is not an error.
    async fn remove(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// Issues a minimal read against `collection` to confirm the store is
    /// reachable.
    async fn probe(&self, collection: &str) -> Result<(), StoreError>;
}
