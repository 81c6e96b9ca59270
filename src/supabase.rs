//! Handle to the hosted Supabase project.
//!
//! The handle only carries the endpoint and the publishable key; it speaks to
//! the PostgREST data API under `/rest/v1`. One instance can be installed as
//! process-wide shared state with [`install`] and read back with [`shared`].

use std::sync::OnceLock;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::SupabaseConfig;
use crate::error::{BackendError, Result};

const REST_PATH: &str = "rest/v1";

static SHARED: OnceLock<SupabaseClient> = OnceLock::new();

#[derive(Clone, Debug)]
pub struct SupabaseClient {
    http: Client,
    endpoint: Url,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Result<Self> {
        let endpoint = parse_endpoint(&config.endpoint)?;

        if config.public_key.trim().is_empty() {
            return Err(BackendError::InvalidKey);
        }
        let mut apikey =
            HeaderValue::from_str(&config.public_key).map_err(|_| BackendError::InvalidKey)?;
        apikey.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.public_key))
            .map_err(|_| BackendError::InvalidKey)?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", apikey);
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder().default_headers(headers).build()?;

        debug!("Backend client configured for {}", endpoint);
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// URL of a table under the data API, e.g. `https://x.supabase.co/rest/v1/testimonials`.
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}{}/{}", self.endpoint, REST_PATH, table)
    }

    pub fn from(&self, table: &str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table: table.to_string(),
            params: Vec::new(),
        }
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|_| BackendError::InvalidEndpoint(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(BackendError::InvalidEndpoint(raw.to_string()));
    }
    // Keep a trailing slash so paths append instead of replacing the last segment.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Installs `client` as the process-wide handle. Only the first call succeeds.
pub fn install(client: SupabaseClient) -> Result<&'static SupabaseClient> {
    SHARED
        .set(client)
        .map_err(|_| BackendError::AlreadyInstalled)?;
    shared()
}

pub fn shared() -> Result<&'static SupabaseClient> {
    SHARED.get().ok_or(BackendError::NotInstalled)
}

/// PostgREST request against a single table.
pub struct TableQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
    params: Vec<(String, String)>,
}

impl<'a> TableQuery<'a> {
    pub fn select(mut self, columns: &str) -> Self {
        self.params.retain(|(k, _)| k != "select");
        self.params.push(("select".into(), columns.into()));
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.params
            .push((column.into(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.params.retain(|(k, _)| k != "order");
        self.params
            .push(("order".into(), format!("{}.{}", column, direction)));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.params.retain(|(k, _)| k != "limit");
        self.params.push(("limit".into(), count.to_string()));
        self
    }

    pub fn offset(mut self, count: usize) -> Self {
        self.params.retain(|(k, _)| k != "offset");
        self.params.push(("offset".into(), count.to_string()));
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        let url = self.client.rest_url(&self.table);
        debug!("GET {} {:?}", url, self.params);

        let response = self
            .client
            .http
            .get(&url)
            .query(&self.params)
            .send()
            .await?;

        read_json(response).await
    }

    pub async fn fetch_optional<T: DeserializeOwned>(self) -> Result<Option<T>> {
        let rows: Vec<T> = self.limit(1).fetch().await?;
        Ok(rows.into_iter().next())
    }

    /// Inserts `row` and returns what the backend stored.
    pub async fn insert<B, T>(self, row: &B) -> Result<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.client.rest_url(&self.table);
        debug!("POST {}", url);

        let response = self
            .client
            .http
            .post(&url)
            .header("Prefer", "return=representation")
            .query(&self.params)
            .json(row)
            .send()
            .await?;

        read_json(response).await
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);
        return Err(BackendError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
