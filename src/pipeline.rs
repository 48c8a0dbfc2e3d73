use crate::anchors::Anchors;
use crate::dom::Document;
use crate::error::{ProfilePageError, Result};
use crate::github::GitHubClient;
use crate::render::{render_account_info, render_repositories, show_failure, show_page};
use crate::skeleton;
use crate::types::Viewer;
use chrono::{DateTime, Utc};
use tracing::error;

pub const PAGE_TITLE: &str = "GitHub Profile";

/// Result of one page load.
#[derive(Debug)]
pub enum PageOutcome {
    Rendered { document: Document, viewer: Viewer },
    Failed { document: Document, error: ProfilePageError },
}

impl PageOutcome {
    pub fn document(&self) -> &Document {
        match self {
            PageOutcome::Rendered { document, .. } | PageOutcome::Failed { document, .. } => {
                document
            }
        }
    }

    pub fn error(&self) -> Option<&ProfilePageError> {
        match self {
            PageOutcome::Rendered { .. } => None,
            PageOutcome::Failed { error, .. } => Some(error),
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, PageOutcome::Rendered { .. })
    }

    pub fn to_html(&self) -> String {
        self.document().to_html()
    }
}

/// Render stage: paint a fetched viewer, or the failure state, into a fresh
/// page. Nothing from the viewer is written when the fetch failed.
pub fn render_page(fetched: Result<Viewer>, now: DateTime<Utc>) -> Result<PageOutcome> {
    let mut document = skeleton::profile_page(PAGE_TITLE);
    let anchors = Anchors::resolve(&document)?;

    let outcome = match fetched {
        Ok(viewer) => {
            show_page(&mut document, &anchors);
            render_account_info(&mut document, &anchors, &viewer);
            render_repositories(&mut document, &anchors, &viewer, now);
            PageOutcome::Rendered { document, viewer }
        }
        Err(error) => {
            error!(error = %error, "Failed to load profile");
            show_failure(&mut document, &anchors, &error);
            PageOutcome::Failed { document, error }
        }
    };

    Ok(outcome)
}

/// Fetch and validate the viewer, then render it.
pub async fn load_page(client: &GitHubClient) -> Result<PageOutcome> {
    let fetched = client.fetch_viewer().await;
    render_page(fetched, Utc::now())
}
