//! Artifact store gateway — key-addressed blob get/put against a bucket.
//!
//! The trait exists so the pipeline can run against a test double; the real
//! backend is S3 (or MinIO locally) through a client built once at startup.
//! Every storage failure is caught here and converted to
//! `RenderError::Storage` — callers decide response semantics, nothing leaks
//! as an unhandled fault.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tracing::{error, info};

use crate::errors::RenderError;

#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Fetches the blob at `key`.
    async fn fetch(&self, key: &str) -> Result<Bytes, RenderError>;

    /// Stores `bytes` at `key` and returns a deterministic, publicly
    /// constructible URL for it. No signed-URL logic.
    async fn store(
        &self,
        bytes: Bytes,
        key: &str,
        content_type: &str,
    ) -> Result<String, RenderError>;
}

/// S3-backed store over the shared client.
pub struct S3Store {
    client: S3Client,
    bucket: String,
    /// Endpoint override (MinIO). `None` means the public AWS URL shape.
    endpoint: Option<String>,
}

impl S3Store {
    pub fn new(client: S3Client, bucket: String, endpoint: Option<String>) -> Self {
        Self {
            client,
            bucket,
            endpoint,
        }
    }

    fn public_url(&self, key: &str) -> String {
        match &self.endpoint {
            Some(endpoint) => format!("{}/{}/{}", endpoint.trim_end_matches('/'), self.bucket, key),
            None => format!("https://{}.s3.amazonaws.com/{}", self.bucket, key),
        }
    }
}

#[async_trait]
impl ArtifactStore for S3Store {
    async fn fetch(&self, key: &str) -> Result<Bytes, RenderError> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                error!("S3 get_object failed for '{key}': {e}");
                RenderError::Storage(format!("get '{key}': {e}"))
            })?;

        let data = object.body.collect().await.map_err(|e| {
            error!("S3 body read failed for '{key}': {e}");
            RenderError::Storage(format!("read '{key}': {e}"))
        })?;

        Ok(data.into_bytes())
    }

    async fn store(
        &self,
        bytes: Bytes,
        key: &str,
        content_type: &str,
    ) -> Result<String, RenderError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                error!("S3 put_object failed for '{key}': {e}");
                RenderError::Storage(format!("put '{key}': {e}"))
            })?;

        info!("Stored {content_type} at s3://{}/{key}", self.bucket);
        Ok(self.public_url(key))
    }
}

/// In-process store double for pipeline tests. Keys behave like S3 keys;
/// URLs are shaped `memory://<bucket>/<key>`.
#[cfg(test)]
pub struct MemoryStore {
    bucket: String,
    objects: std::sync::Mutex<std::collections::HashMap<String, Bytes>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            objects: std::sync::Mutex::new(std::collections::HashMap::new()),
        }
    }

    pub fn seed(&self, key: &str, bytes: impl Into<Bytes>) {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), bytes.into());
    }

    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.objects.lock().unwrap().get(key).cloned()
    }
}

#[cfg(test)]
#[async_trait]
impl ArtifactStore for MemoryStore {
    async fn fetch(&self, key: &str) -> Result<Bytes, RenderError> {
        self.get(key)
            .ok_or_else(|| RenderError::Storage(format!("get '{key}': no such key")))
    }

    async fn store(
        &self,
        bytes: Bytes,
        key: &str,
        _content_type: &str,
    ) -> Result<String, RenderError> {
        self.seed(key, bytes);
        Ok(format!("memory://{}/{}", self.bucket, key))
    }
}
