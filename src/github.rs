use crate::error::{ProfilePageError, Result};
use crate::types::{GraphQlResponse, Viewer, ViewerData};
use reqwest::{header, Client, StatusCode};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

pub const API_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Only the first page of 20 repositories is ever requested.
pub const VIEWER_QUERY: &str = r#"query {
  viewer {
    avatarUrl
    status {
      message
      emojiHTML
    }
    name
    login
    bio
    repositories(first: 20, orderBy: {field: UPDATED_AT, direction: DESC}) {
      totalCount
      nodes {
        name
        isPrivate
        isFork
        parent {
          nameWithOwner
        }
        description
        primaryLanguage {
          color
          name
        }
        stargazers {
          totalCount
        }
        forks {
          totalCount
        }
        licenseInfo {
          name
        }
        updatedAt
      }
    }
  }
}"#;

pub struct GitHubClient {
    client: Client,
    token: String,
    endpoint: Url,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        Self::with_endpoint(token, API_GRAPHQL_URL)
    }

    pub fn with_endpoint(token: String, endpoint: &str) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(ProfilePageError::EnvError("GitHub token is empty".to_string()));
        }

        let endpoint = Url::parse(endpoint)
            .map_err(|e| ProfilePageError::InvalidEndpointError(format!("{}: {}", endpoint, e)))?;

        let client = Client::builder()
            .user_agent(concat!("profile-page/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient {
            client,
            token,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue the viewer query once and return the validated viewer.
    pub async fn fetch_viewer(&self) -> Result<Viewer> {
        debug!(endpoint = %self.endpoint, "Querying GitHub GraphQL API");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("bearer {}", self.token))
            .json(&json!({ "query": VIEWER_QUERY }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match status {
            status if status.is_success() => {
                let viewer = parse_viewer_response(&body)?;
                info!(
                    login = %viewer.login,
                    repositories = viewer.repositories.nodes.len(),
                    "Fetched viewer profile"
                );
                Ok(viewer)
            }
            StatusCode::UNAUTHORIZED => {
                warn!("GitHub rejected the access token");
                Err(ProfilePageError::AuthError(body))
            }
            status => {
                warn!(status = status.as_u16(), "GitHub API request failed");
                Err(ProfilePageError::ApiError {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}

/// Unwrap `data.viewer` from a GraphQL response body.
///
/// Text that is not JSON at all is a [`ProfilePageError::JsonError`]; JSON of
/// the wrong shape, or a body without a viewer, is a
/// [`ProfilePageError::MalformedResponseError`].
pub fn parse_viewer_response(body: &str) -> Result<Viewer> {
    let envelope: GraphQlResponse<ViewerData> = serde_json::from_str(body).map_err(|e| {
        if e.is_data() {
            ProfilePageError::MalformedResponseError(e.to_string())
        } else {
            ProfilePageError::JsonError(e)
        }
    })?;

    match envelope.data.and_then(|data| data.viewer) {
        Some(viewer) => Ok(viewer),
        None if !envelope.errors.is_empty() => Err(ProfilePageError::GraphQlError(
            envelope.errors.into_iter().map(|e| e.message).collect(),
        )),
        None => Err(ProfilePageError::MalformedResponseError(
            "response has no data.viewer".to_string(),
        )),
    }
}
