use crate::anchors::{Anchors, HIDDEN};
use crate::dom::Document;
use crate::error::ProfilePageError;
use crate::fragments::{default_status_emoji, repository_card, DEFAULT_STATUS_TEXT};
use crate::markup::Markup;
use crate::types::{Repository, Viewer};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Marks the preloader when it is showing a failure instead of progress.
pub const ERROR_CLASS: &str = "h-error";

pub fn show_page(document: &mut Document, anchors: &Anchors) {
    document.add_class(anchors.preloader, HIDDEN);
    document.remove_class(anchors.container, HIDDEN);
}

/// Replace the preloader with a visible error message. The profile
/// container stays hidden so no partial data is ever shown.
pub fn show_failure(document: &mut Document, anchors: &Anchors, error: &ProfilePageError) {
    document.add_class(anchors.container, HIDDEN);
    document.remove_class(anchors.preloader, HIDDEN);
    document.add_class(anchors.preloader, ERROR_CLASS);
    document.set_raw_attribute(anchors.preloader, "role", "alert");
    document.set_text(anchors.preloader, error.user_message());
}

/// Write the viewer's identity, status and repository counts.
///
/// Display name and bio are left untouched when empty.
pub fn render_account_info(document: &mut Document, anchors: &Anchors, viewer: &Viewer) {
    document.set_text(
        anchors.all_repositories_count,
        &viewer.repositories.total_count.to_string(),
    );
    document.set_text(
        anchors.public_repositories_count,
        &viewer.public_repository_count().to_string(),
    );

    for &node in &anchors.usernames {
        document.set_text(node, &viewer.login);
    }
    render_status(document, anchors, viewer);
    for &node in &anchors.avatar_images {
        document.set_attribute(node, "src", &viewer.avatar_url);
    }

    if let Some(name) = viewer.name.as_deref().filter(|name| !name.is_empty()) {
        document.set_text(anchors.full_name, name);
    }
    if let Some(bio) = viewer.bio.as_deref().filter(|bio| !bio.is_empty()) {
        document.set_text(anchors.bio, bio);
    }
}

fn render_status(document: &mut Document, anchors: &Anchors, viewer: &Viewer) {
    let (emoji, text) = match &viewer.status {
        Some(status) => (
            Markup::trusted(status.emoji_html.clone().unwrap_or_default()),
            status.message.clone().unwrap_or_default(),
        ),
        None => (default_status_emoji(), DEFAULT_STATUS_TEXT.to_string()),
    };

    for &node in &anchors.status_emoji_containers {
        document.set_inner_html(node, emoji.clone());
    }
    for &node in &anchors.status_texts {
        document.set_text(node, &text);
    }
}

/// Concatenate the cards of every public repository, in server order.
pub fn repository_list(repositories: &[Repository], now: DateTime<Utc>) -> Markup {
    repositories
        .iter()
        .map(|repository| repository_card(repository, now))
        .collect()
}

/// Replace the repository container's content in one write.
pub fn render_repositories(
    document: &mut Document,
    anchors: &Anchors,
    viewer: &Viewer,
    now: DateTime<Utc>,
) {
    let list = repository_list(&viewer.repositories.nodes, now);
    debug!(
        rendered = viewer.public_repository_count(),
        fetched = viewer.repositories.nodes.len(),
        "Rendered repository list"
    );
    document.set_inner_html(anchors.repos, list);
}
