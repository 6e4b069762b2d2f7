//! GitHub Gist client: one gist is the collection, each gist file is a named document.
//!
//! `GET /gists/{id}` reads, `PATCH /gists/{id}` with `{"files": {name: {"content": ..}}}` writes.
//! Files over the API's inline size limit come back `truncated` and are read from `raw_url`.

use crate::error::{StoreError, StoreResult};
use crate::DocumentStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use worklog_core::WorklogConfig;

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

#[derive(Debug, Deserialize)]
struct GistResponse {
    #[serde(default)]
    files: HashMap<String, GistFile>,
}

#[derive(Debug, Deserialize)]
struct GistFile {
    content: Option<String>,
    #[serde(default)]
    truncated: bool,
    raw_url: Option<String>,
}

#[derive(Serialize)]
struct UpdateRequest<'a> {
    files: HashMap<&'a str, FileContent<'a>>,
}

#[derive(Serialize)]
struct FileContent<'a> {
    content: &'a str,
}

pub struct GistStore {
    client: reqwest::Client,
    api_base: String,
    gist_id: String,
    token: String,
}

impl GistStore {
    pub fn new(config: &WorklogConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("worklog/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            api_base: config.api_base.clone(),
            gist_id: config.gist_id.clone(),
            token: config.token.clone(),
        }
    }

    fn gist_url(&self) -> String {
        format!("{}/gists/{}", self.api_base, self.gist_id)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> StoreResult<String> {
        let res = req.send().await?;
        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl DocumentStore for GistStore {
    async fn fetch(&self, name: &str) -> StoreResult<String> {
        let body = self
            .send(self.request(reqwest::Method::GET, &self.gist_url()))
            .await?;
        let mut gist: GistResponse = serde_json::from_str(&body)?;

        let Some(file) = gist.files.remove(name) else {
            tracing::info!(gist_id = %self.gist_id, file = name, "file not in gist; starting empty");
            return Ok(String::new());
        };

        let content = match (file.truncated, file.raw_url) {
            (true, Some(raw)) => {
                tracing::debug!(file = name, "content truncated; reading raw_url");
                self.send(self.request(reqwest::Method::GET, &raw)).await?
            }
            // never hand back partial content
            (true, None) => {
                return Err(StoreError::Decode(format!(
                    "{} is truncated and has no raw_url",
                    name
                )))
            }
            (false, _) => file.content.unwrap_or_default(),
        };

        tracing::info!(gist_id = %self.gist_id, file = name, bytes = content.len(), "fetched document");
        Ok(content)
    }

    async fn save(&self, name: &str, content: &str) -> StoreResult<()> {
        let body = UpdateRequest {
            files: HashMap::from([(name, FileContent { content })]),
        };
        self.send(self.request(reqwest::Method::PATCH, &self.gist_url()).json(&body))
            .await?;
        tracing::info!(gist_id = %self.gist_id, file = name, bytes = content.len(), "saved document");
        Ok(())
    }
}
