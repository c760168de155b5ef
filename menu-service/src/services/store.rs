use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, to_document, Bson, Document},
    options::ReplaceOptions,
    Client as MongoClient, Collection,
};
use serde_json::Value;
use service_core::error::AppError;

use crate::config::StoreConfig;
use crate::services::StoreCredentials;

/// Capability surface over the single configuration document.
///
/// No retries, no optimistic concurrency, no versioning: the last writer
/// wins, and ordering between concurrent `replace` and `patch_field` calls
/// is whatever the store serializes internally.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Full document contents, or `None` when nothing exists at the path.
    async fn fetch(&self) -> Result<Option<Value>, AppError>;

    /// Overwrites the entire document; the first write creates it.
    async fn replace(&self, payload: &Value) -> Result<(), AppError>;

    /// Updates exactly the named nested field, leaving siblings untouched.
    /// Fails when no document exists at the path: a field update cannot
    /// create the document, only a full replace can.
    async fn patch_field(&self, dot_path: &str, value: &Value) -> Result<(), AppError>;
}

/// MongoDB-backed store scoped to one fixed (database, collection, _id).
#[derive(Clone)]
pub struct MongoMenuStore {
    collection: Collection<Document>,
    document_id: String,
}

impl MongoMenuStore {
    pub async fn connect(
        credentials: &StoreCredentials,
        config: &StoreConfig,
    ) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(&credentials.uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;

        let database = credentials
            .database
            .as_deref()
            .unwrap_or(&config.database);
        let collection = client.database(database).collection(&config.collection);
        tracing::info!(
            database = %database,
            collection = %config.collection,
            document_id = %config.document_id,
            "Menu store ready"
        );

        Ok(Self {
            collection,
            document_id: config.document_id.clone(),
        })
    }
}

#[async_trait]
impl MenuStore for MongoMenuStore {
    async fn fetch(&self) -> Result<Option<Value>, AppError> {
        let found = self
            .collection
            .find_one(doc! { "_id": self.document_id.as_str() }, None)
            .await?;

        Ok(found.map(|mut document| {
            document.remove("_id");
            Bson::Document(document).into_relaxed_extjson()
        }))
    }

    async fn replace(&self, payload: &Value) -> Result<(), AppError> {
        let mut document = to_document(payload).map_err(|e| AppError::Internal(e.into()))?;
        document.insert("_id", self.document_id.as_str());

        let options = ReplaceOptions::builder().upsert(true).build();
        self.collection
            .replace_one(doc! { "_id": self.document_id.as_str() }, document, options)
            .await?;
        Ok(())
    }

    async fn patch_field(&self, dot_path: &str, value: &Value) -> Result<(), AppError> {
        let mut fields = Document::new();
        fields.insert(dot_path, to_bson(value).map_err(|e| AppError::Internal(e.into()))?);

        let result = self
            .collection
            .update_one(
                doc! { "_id": self.document_id.as_str() },
                doc! { "$set": fields },
                None,
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::Store(anyhow::anyhow!(
                "no document at the configured path to update"
            )));
        }
        Ok(())
    }
}
