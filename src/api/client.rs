//! HTTP client wrapper for the Insyte Web API
//!
//! One network call per request, no internal retry: transport failures and
//! non-success statuses surface as a single [`ApiError`]. The paginated
//! fetcher lives here too, since it is the only operation that issues more
//! than one call.

use std::time::Duration;

use anyhow::Result;
use log::{debug, warn};
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use super::constants::{self, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, headers};
use super::error::ApiError;
use super::query::QueryOptions;
use crate::auth::{Connection, Credentials};

/// Extra headers supplied by a caller; merged on top of the fixed defaults.
pub type ExtraHeaders = [(String, String)];

pub struct InsyteClient {
    connection: Connection,
    http_client: reqwest::Client,
    default_page_size: u32,
    max_pages: u32,
}

impl InsyteClient {
    pub fn new(connection: Connection) -> Self {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("insyte-cli/0.1")
            .build()
            .expect("Failed to build HTTP client");

        Self {
            connection,
            http_client,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Create a client with custom HTTP client configuration.
    pub fn with_custom_client(connection: Connection, http_client: reqwest::Client) -> Self {
        Self {
            connection,
            http_client,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Override the pagination defaults (page size and iteration cap).
    pub fn with_page_limits(mut self, page_size: u32, max_pages: u32) -> Self {
        self.default_page_size = page_size.max(1);
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Issue one authenticated API call and parse the JSON response.
    ///
    /// The URL is `{base_url}/{api_version}{path}`. `Accept` and
    /// `Content-Type` are always `application/json`; `extra_headers` are
    /// merged on top and may override them. The body is attached only when
    /// non-empty. Errors of any kind surface as [`ApiError`].
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        extra_headers: Option<&ExtraHeaders>,
    ) -> Result<Value> {
        let url = constants::api_url(
            &self.connection.base_url,
            &self.connection.api_version,
            path,
        );
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .headers(build_headers(extra_headers)?);

        request = match &self.connection.credentials {
            Credentials::ApiKey(key) => request.bearer_auth(key),
            Credentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
        };

        if let Some(body) = body {
            if !is_empty_body(body) {
                request = request.json(body);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(e))?;

        Self::parse_response(response).await
    }

    /// Issue one unauthenticated call to an external endpoint family.
    ///
    /// Unlike [`request`](Self::request) this serializes the body to a raw
    /// JSON string instead of using the client's JSON encoding, and parses
    /// a string response body manually, falling back to the raw text when
    /// it is not JSON.
    pub async fn request_raw(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        extra_headers: Option<&ExtraHeaders>,
    ) -> Result<Value> {
        debug!("{} {} (raw)", method, url);

        let mut request = self
            .http_client
            .request(method, url)
            .headers(build_headers(extra_headers)?);

        if let Some(body) = body {
            if !is_empty_body(body) {
                let serialized = serde_json::to_string(body)
                    .map_err(|e| ApiError::malformed(e.to_string()))?;
                request = request.body(serialized);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::transport(e))?;

        if !status.is_success() {
            return Err(ApiError::http(status.as_u16(), text).into());
        }

        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }

    /// Fetch every page of a list endpoint and concatenate the records.
    ///
    /// `$skip` starts at 0 and `$top` defaults to the client's page size.
    /// Pages are requested strictly in sequence; a page shorter than `$top`
    /// or a response that is neither an envelope nor a bare array ends the
    /// loop. Iteration is capped at `max_pages` so a server that keeps
    /// returning full pages cannot loop forever.
    pub async fn fetch_all(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        options: QueryOptions,
    ) -> Result<Vec<Value>> {
        let top = options.top.unwrap_or(self.default_page_size).max(1);
        let mut options = options.with_top(top);
        let mut records = Vec::new();
        let mut skip = 0u32;

        for _ in 0..self.max_pages {
            options.skip = Some(skip);
            let paged_path = format!("{}{}", path, options.to_query_string());
            let response = self.request(method.clone(), &paged_path, body, None).await?;

            let page = match page_records(response) {
                Some(page) => page,
                None => return Ok(records),
            };

            let len = page.len();
            records.extend(page);
            if len < top as usize {
                return Ok(records);
            }
            skip += top;
        }

        warn!(
            "Pagination stopped after {} pages ({} records); raise max_pages if the result set is larger",
            self.max_pages,
            records.len()
        );
        Ok(records)
    }

    async fn parse_response(response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ApiError::http(status.as_u16(), detail).into());
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::transport(e))?;

        if text.trim().is_empty() {
            // DELETE and friends legitimately return no body.
            return Ok(Value::Null);
        }

        serde_json::from_str(&text)
            .map_err(|e| ApiError::malformed(format!("invalid JSON response: {}", e)).into())
    }
}

/// Fixed JSON headers plus caller extras; an extra with the same name
/// overrides the default rather than duplicating it.
fn build_headers(extra_headers: Option<&ExtraHeaders>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    map.insert(ACCEPT, HeaderValue::from_static(headers::ACCEPT_JSON));
    map.insert(
        CONTENT_TYPE,
        HeaderValue::from_static(headers::CONTENT_TYPE_JSON),
    );

    if let Some(extra) = extra_headers {
        for (name, value) in extra {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| anyhow::anyhow!("Invalid header name '{}': {}", name, e))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| anyhow::anyhow!("Invalid value for header '{}': {}", name, e))?;
            map.insert(header_name, header_value);
        }
    }

    Ok(map)
}

/// Classify a paged response: an envelope object exposing a `value` array,
/// a bare array, or anything else (`None`, ending the loop).
fn page_records(response: Value) -> Option<Vec<Value>> {
    match response {
        Value::Array(records) => Some(records),
        Value::Object(mut map) => match map.remove("value") {
            Some(Value::Array(records)) => Some(records),
            _ => None,
        },
        _ => None,
    }
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
