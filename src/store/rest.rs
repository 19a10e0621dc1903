use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use crate::error::store::StoreError;
use crate::store::backend::DocumentBackend;

/// Document backend speaking the hosted store's JSON REST protocol.
///
/// Every document lives at `{base_url}/{collection}/{id}`. Writes are full
/// replaces via `PUT`, reads are `GET`, equality queries pass a
/// `field`/`equals` parameter pair, and the health probe is a `limit=1`
/// collection read.
#[derive(Debug, Clone)]
pub struct RestBackend {
    client: Client,
    base_url: String,
}

impl RestBackend {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }

    /// Converts a non-success response into `StoreError::Backend`, keeping
    /// whatever the store put in the body as the message.
    async fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    /// Renders a JSON value for the `equals` query parameter. Strings go
    /// bare; everything else uses its JSON text form.
    fn render_query_value(value: &Value) -> String {
        match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

#[async_trait]
impl DocumentBackend for RestBackend {
    async fn put(&self, collection: &str, id: &str, value: Value) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.document_url(collection, id))
            .json(&value)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn fetch(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let response = self
            .client
            .get(self.document_url(collection, id))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check(response).await?;
        Ok(Some(response.json().await?))
    }

    async fn fetch_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let response = self.client.get(self.collection_url(collection)).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn fetch_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StoreError> {
        let equals = Self::render_query_value(value);
        let response = self
            .client
            .get(self.collection_url(collection))
            .query(&[("field", field), ("equals", equals.as_str())])
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.document_url(collection, id))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        Self::check(response).await?;
        Ok(())
    }

    async fn probe(&self, collection: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .get(self.collection_url(collection))
            .query(&[("limit", "1")])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
