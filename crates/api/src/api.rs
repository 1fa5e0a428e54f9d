use crate::error::{ApiError, ApiResult};
use crate::types::{CreateSiteRequest, CreatedSite, ImagePost, SiteCredentials};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const USER_AGENT: &str = "pdiff/0.2";

#[derive(Clone)]
pub struct PdiffApi {
    client: Client,
}

impl Default for PdiffApi {
    fn default() -> Self {
        Self::new()
    }
}

impl PdiffApi {
    pub fn new() -> Self {
        Self::with_timeouts(DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT)
    }

    pub fn with_timeouts(connect_timeout: Duration, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    /// Encodes `data` exactly as [`PdiffApi::http`] sends it.
    pub fn form_body<D: Serialize + ?Sized>(data: &D) -> ApiResult<String> {
        serde_urlencoded::to_string(data).map_err(|e| ApiError::Validation(e.to_string()))
    }

    /// Sends `data` as an urlencoded form and decodes the JSON reply into `T`.
    pub async fn http<T, D>(&self, method: Method, url: &str, data: &D) -> ApiResult<T>
    where
        T: DeserializeOwned,
        D: Serialize + ?Sized,
    {
        let body = Self::form_body(data)?;
        debug!(%method, url, "Sending form request");

        let response = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn create_site(&self, url: &str, name: &str) -> ApiResult<CreatedSite> {
        let site: CreatedSite = self
            .http(Method::POST, url, &CreateSiteRequest { site: name })
            .await?;
        info!(site = %site.name, "Created site");
        Ok(site)
    }

    pub async fn post_image(&self, url: &str, post: &ImagePost) -> ApiResult<()> {
        debug!(url, site = %post.site, group = %post.group, id = post.id, "Posting image");
        let response = self.client.post(url).json(post).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    pub async fn post_image_file(
        &self,
        url: &str,
        credentials: &SiteCredentials,
        group: &str,
        id: i64,
        path: &Path,
    ) -> ApiResult<()> {
        let image = tokio::fs::read(path).await.map_err(|e| {
            ApiError::Validation(format!("cannot read {}: {e}", path.display()))
        })?;
        let post = ImagePost::signed(credentials, group, id, &image)?;
        self.post_image(url, &post).await?;
        info!(site = %credentials.site, group, id, "Uploaded image");
        Ok(())
    }

    async fn check_status(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body: body.trim().to_string(),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
