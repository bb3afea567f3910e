//! Publishing facade
//!
//! Typed operations over the Publishing product (`publishing/v2`):
//! channels, episodes, and episode resources.

use pcokit_domain::constants::PUBLISHING_BASE;
use pcokit_domain::{PcoError, Resource, Result};
use serde_json::{json, Map, Value};

use crate::auth::{self, Credentials};
use crate::client::ResourceClient;
use crate::request::RequestDescriptor;

/// Typed client for the Publishing product.
pub struct PublishingClient {
    client: ResourceClient,
}

impl PublishingClient {
    /// Create a client against the production API root.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_api_root(credentials, auth::api_root())
    }

    /// Create a client against a specific API root (tests, proxies).
    pub fn with_api_root(credentials: Credentials, api_root: impl Into<String>) -> Result<Self> {
        let client = ResourceClient::builder()
            .api_root(api_root)
            .resource_base(PUBLISHING_BASE)
            .credentials(credentials)
            .build()?;
        Ok(Self { client })
    }

    /// Create a client with credentials resolved from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    // Channels

    /// List channels. Paginated.
    pub async fn channels(&self, params: &[(&str, &str)]) -> Result<Vec<Resource>> {
        self.client.collect(RequestDescriptor::get("channels").with_params(params)).await
    }

    pub async fn channel(&self, channel_id: &str) -> Result<Resource> {
        self.client.get_one(&format!("channels/{}", channel_id), &[]).await
    }

    /// Resolve a channel id by name.
    ///
    /// # Errors
    /// `PcoError::NotFound` when no channel carries that name.
    pub async fn channel_id_by_name(&self, name: &str) -> Result<String> {
        let channels = self.channels(&[("where[name]", name), ("per_page", "1")]).await?;
        channels
            .first()
            .map(|c| c.id_str().to_string())
            .ok_or_else(|| PcoError::NotFound(format!("channel '{}'", name)))
    }

    /// The first channel when ordered by name.
    ///
    /// # Errors
    /// `PcoError::NotFound` when no channels exist.
    pub async fn first_channel_id(&self) -> Result<String> {
        let channels = self.channels(&[("order", "name"), ("per_page", "1")]).await?;
        channels
            .first()
            .map(|c| c.id_str().to_string())
            .ok_or_else(|| PcoError::NotFound("no publishing channels".to_string()))
    }

    // Episodes

    /// Create an episode under a channel. `extra` attributes are merged in
    /// alongside the title.
    pub async fn create_episode(
        &self,
        title: &str,
        channel_id: &str,
        extra: Option<Map<String, Value>>,
    ) -> Result<Resource> {
        let mut attributes = extra.unwrap_or_default();
        attributes.insert("title".to_string(), json!(title));
        self.client
            .create(&format!("channels/{}/episodes", channel_id), Value::Object(attributes))
            .await
    }

    /// List a channel's episodes. Paginated.
    pub async fn episodes(&self, channel_id: &str, params: &[(&str, &str)]) -> Result<Vec<Resource>> {
        self.client
            .collect(
                RequestDescriptor::get(format!("channels/{}/episodes", channel_id))
                    .with_params(params),
            )
            .await
    }

    pub async fn episode(&self, episode_id: &str) -> Result<Resource> {
        self.client.get_one(&format!("episodes/{}", episode_id), &[]).await
    }

    pub async fn update_episode(
        &self,
        episode_id: &str,
        attributes: Map<String, Value>,
    ) -> Result<Resource> {
        self.client
            .update(&format!("episodes/{}", episode_id), Value::Object(attributes))
            .await
    }

    pub async fn delete_episode(&self, episode_id: &str) -> Result<()> {
        self.client.delete(&format!("episodes/{}", episode_id)).await
    }

    // Episode resources

    /// List an episode's attached resources. Paginated.
    pub async fn episode_resources(&self, episode_id: &str) -> Result<Vec<Resource>> {
        self.client
            .collect(RequestDescriptor::get(format!("episodes/{}/episode_resources", episode_id)))
            .await
    }

    pub async fn episode_resource(&self, resource_id: &str) -> Result<Resource> {
        self.client.get_one(&format!("episode_resources/{}", resource_id), &[]).await
    }

    pub async fn create_episode_resource(
        &self,
        episode_id: &str,
        attributes: Map<String, Value>,
    ) -> Result<Resource> {
        self.client
            .create(
                &format!("episodes/{}/episode_resources", episode_id),
                Value::Object(attributes),
            )
            .await
    }

    pub async fn update_episode_resource(
        &self,
        resource_id: &str,
        attributes: Map<String, Value>,
    ) -> Result<Resource> {
        self.client
            .update(&format!("episode_resources/{}", resource_id), Value::Object(attributes))
            .await
    }

    pub async fn delete_episode_resource(&self, resource_id: &str) -> Result<()> {
        self.client.delete(&format!("episode_resources/{}", resource_id)).await
    }
}
