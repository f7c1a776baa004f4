// Users API Client
// Thin CRUD wrapper over the remote users REST endpoints

use crate::config::ApiConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{User, UserEnvelope, UserId, UserPage, UserUpdate};

use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::{debug, warn};
use url::Url;

/// Operations the views need from the users API
#[async_trait::async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch one page of users (pages start at 1)
    async fn list_users(&self, page: u32) -> ServiceResult<UserPage>;

    /// Fetch a single user
    async fn get_user(&self, id: UserId) -> ServiceResult<User>;

    /// Replace a user's editable fields. The response body is not consumed.
    async fn update_user(&self, id: UserId, update: &UserUpdate) -> ServiceResult<()>;

    /// Remove a user
    async fn delete_user(&self, id: UserId) -> ServiceResult<()>;
}

/// `UserApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    config: ApiConfig,
    client: Client,
}

impl HttpUserApi {
    pub fn new(config: ApiConfig) -> ServiceResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "sending request");
        let request = self.client.request(method, url);
        match &self.config.api_key {
            Some(key) => request.header("x-api-key", key),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> ServiceResult<Response> {
        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "request failed");
            ServiceError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "unexpected response status");
            return Err(ServiceError::from_status(status, url));
        }
        Ok(response)
    }

    fn user_url(&self, id: UserId) -> ServiceResult<Url> {
        let id = id.to_string();
        self.config.endpoint(&["users", &id])
    }
}

#[async_trait::async_trait]
impl UserApi for HttpUserApi {
    async fn list_users(&self, page: u32) -> ServiceResult<UserPage> {
        if page == 0 {
            return Err(ServiceError::InvalidInput(
                "Page numbers start at 1".to_string(),
            ));
        }

        let mut url = self.config.endpoint(&["users"])?;
        url.query_pairs_mut().append_pair("page", &page.to_string());

        let request = self.request(Method::GET, url.clone());
        let body: UserPage = self.send(request, &url).await?.json().await?;
        debug!(page, users = body.data.len(), "page received");
        Ok(body)
    }

    async fn get_user(&self, id: UserId) -> ServiceResult<User> {
        let url = self.user_url(id)?;
        let request = self.request(Method::GET, url.clone());
        let envelope: UserEnvelope = self.send(request, &url).await?.json().await?;
        Ok(envelope.data)
    }

    async fn update_user(&self, id: UserId, update: &UserUpdate) -> ServiceResult<()> {
        let url = self.user_url(id)?;
        let request = self.request(Method::PUT, url.clone()).json(update);
        self.send(request, &url).await?;
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> ServiceResult<()> {
        let url = self.user_url(id)?;
        let request = self.request(Method::DELETE, url.clone());
        self.send(request, &url).await?;
        Ok(())
    }
}
