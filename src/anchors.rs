use crate::dom::{Document, NodeId};
use crate::error::{ProfilePageError, Result};

pub const PRELOADER: &str = "preloader";
pub const CONTAINER: &str = "container";
pub const HAMBURGER: &str = "header-hamburger";
pub const MOBILE_MENU: &str = "mobile-menu";
pub const HEADER_FORM: &str = "header-form";
pub const DESKTOP_HEADER_FORM: &str = "header-form--desktop";
pub const NAV_USER: &str = "main-nav-user";
pub const USERNAME: &str = "username-text";
pub const AVATAR_IMAGE: &str = "avatar__image";
pub const STATUS_EMOJI_CONTAINER: &str = "avatar-status-image-container";
pub const STATUS_TEXT: &str = "avatar-status__text";
pub const FULL_NAME: &str = "account-heading__fullname";
pub const BIO: &str = "account-bio";
pub const ALL_REPOSITORIES_COUNT: &str = "main-nav-link__count";
pub const PUBLIC_REPOSITORIES_COUNT: &str = "repo-search__number";
pub const REPOS: &str = "repos";

/// Visibility toggle shared by the preloader, page container and mobile menu.
pub const HIDDEN: &str = "h-hide";

/// Handles to every element the renderers and event handlers touch, looked
/// up once per document.
#[derive(Debug, Clone)]
pub struct Anchors {
    pub preloader: NodeId,
    pub container: NodeId,
    pub hamburger: NodeId,
    pub mobile_menu: NodeId,
    pub header_forms: Vec<NodeId>,
    pub desktop_header_form: NodeId,
    pub nav_user: NodeId,
    pub usernames: Vec<NodeId>,
    pub avatar_images: Vec<NodeId>,
    pub status_emoji_containers: Vec<NodeId>,
    pub status_texts: Vec<NodeId>,
    pub full_name: NodeId,
    pub bio: NodeId,
    pub all_repositories_count: NodeId,
    pub public_repositories_count: NodeId,
    pub repos: NodeId,
}

impl Anchors {
    /// Single-instance anchors are required; repeated ones may match nothing.
    pub fn resolve(document: &Document) -> Result<Self> {
        let one = |class: &'static str| {
            document
                .select(class)
                .ok_or(ProfilePageError::MissingAnchorError(class))
        };

        Ok(Anchors {
            preloader: one(PRELOADER)?,
            container: one(CONTAINER)?,
            hamburger: one(HAMBURGER)?,
            mobile_menu: one(MOBILE_MENU)?,
            header_forms: document.select_all(HEADER_FORM),
            desktop_header_form: one(DESKTOP_HEADER_FORM)?,
            nav_user: one(NAV_USER)?,
            usernames: document.select_all(USERNAME),
            avatar_images: document.select_all(AVATAR_IMAGE),
            status_emoji_containers: document.select_all(STATUS_EMOJI_CONTAINER),
            status_texts: document.select_all(STATUS_TEXT),
            full_name: one(FULL_NAME)?,
            bio: one(BIO)?,
            all_repositories_count: one(ALL_REPOSITORIES_COUNT)?,
            public_repositories_count: one(PUBLIC_REPOSITORIES_COUNT)?,
            repos: one(REPOS)?,
        })
    }
}
