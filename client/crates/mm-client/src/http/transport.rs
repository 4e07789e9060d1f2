use crate::ClientResult;
use crate::http::Reply;

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};

const USER_AGENT: &str = concat!("moodmuse-client/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP plumbing for every MoodMuse client.
///
/// JSON is the default content type; form and multipart bodies override it
/// per request. Cookies are kept so that credentialed requests behave like
/// the browser client.
#[derive(Clone)]
pub struct Transport {
    base_url: String,
    client: ReqwestClient,
}

impl Transport {
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Send a request and read the whole body; no status handling here
    pub async fn send(&self, req: RequestBuilder) -> ClientResult<Reply> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("{} <- {}", status.as_u16(), self.base_url);
        Ok(Reply::new(status, body))
    }
}
