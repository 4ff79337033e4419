use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use std::num::NonZeroU32;
use url::Url;

use crate::feed::{ListingError, ListingSource};
use crate::showcase::ShowcaseItem;

pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Sent on every request; the API rejects anonymous user agents.
pub const LISTING_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct GitHubListing {
    client: reqwest::Client,
    api_base: Url,
    token: Option<String>,
}

impl GitHubListing {
    pub fn new(
        client: reqwest::Client,
        api_base: &str,
        token: Option<String>,
    ) -> Result<Self, ListingError> {
        let api_base = Url::parse(api_base)
            .map_err(|e| ListingError::InvalidRequest(format!("api base {api_base}: {e}")))?;

        if api_base.cannot_be_a_base() {
            return Err(ListingError::InvalidRequest(format!(
                "api base {api_base} cannot hold a path"
            )));
        }

        Ok(Self {
            client,
            api_base,
            token,
        })
    }

    /// `{api_base}/users/{owner}/repos?sort=updated&per_page={limit}`
    fn repos_url(&self, owner: &str, limit: NonZeroU32) -> Result<Url, ListingError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| ListingError::InvalidRequest("api base cannot hold a path".to_string()))?
            .pop_if_empty()
            .extend(["users", owner, "repos"]);
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &limit.to_string());
        Ok(url)
    }
}

#[async_trait]
impl ListingSource for GitHubListing {
    fn name(&self) -> &'static str {
        "github"
    }

    #[tracing::instrument(skip(self))]
    async fn list(
        &self,
        owner: &str,
        limit: NonZeroU32,
    ) -> Result<Vec<ShowcaseItem>, ListingError> {
        let url = self.repos_url(owner, limit)?;

        let mut request = self
            .client
            .get(url)
            .header(USER_AGENT, LISTING_USER_AGENT)
            .header(ACCEPT, "application/vnd.github+json");

        if let Some(ref token) = self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ListingError::Status(status));
        }

        let body = response.bytes().await?;
        let repos: Vec<GitHubRepo> = serde_json::from_slice(&body)?;

        tracing::debug!(count = repos.len(), "fetched repositories");
        Ok(repos.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Deserialize)]
struct GitHubRepo {
    id: u64,
    name: String,
    description: Option<String>,
    html_url: String,
    homepage: Option<String>,
    language: Option<String>,
    stargazers_count: u32,
    forks_count: u32,
    #[serde(default)]
    topics: Vec<String>,
    updated_at: String,
}

impl From<GitHubRepo> for ShowcaseItem {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            description: repo.description,
            url: repo.html_url,
            homepage: repo.homepage,
            language: repo.language,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            topics: repo.topics,
            updated_at: repo.updated_at,
        }
    }
}
