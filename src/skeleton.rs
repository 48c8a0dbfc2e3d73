use crate::anchors::{
    ALL_REPOSITORIES_COUNT, AVATAR_IMAGE, BIO, CONTAINER, DESKTOP_HEADER_FORM, FULL_NAME,
    HAMBURGER, HEADER_FORM, HIDDEN, MOBILE_MENU, NAV_USER, PRELOADER, PUBLIC_REPOSITORIES_COUNT,
    REPOS, STATUS_EMOJI_CONTAINER, STATUS_TEXT, USERNAME,
};
use crate::dom::{Document, NodeId};
use crate::markup::Markup;

const BASE_STYLES: &str = ".h-hide{display:none}.h-flex{display:flex}.h-mr-16{margin-right:16px}\
.h-screen-reader-text{position:absolute;width:1px;height:1px;overflow:hidden;clip:rect(0 0 0 0)}\
.main-nav-user{opacity:0;transition:opacity .2s}.preloader.h-error{color:#cb2431}";

/// Build the page shell the renderers fill in: header with search forms and
/// mobile menu, a preloader, and the hidden profile container.
pub fn profile_page(title: &str) -> Document {
    let mut document = Document::new("html");
    let root = document.root();
    document.set_raw_attribute(root, "lang", "en");

    let head = document.append(root, "head", &[]);
    let charset = document.append(head, "meta", &[]);
    document.set_raw_attribute(charset, "charset", "utf-8");
    let viewport = document.append(head, "meta", &[]);
    document.set_raw_attribute(viewport, "name", "viewport");
    document.set_raw_attribute(viewport, "content", "width=device-width, initial-scale=1");
    document.append_text(head, "title", &[], title);
    let style = document.append(head, "style", &[]);
    document.set_inner_html(style, Markup::trusted(BASE_STYLES));

    let body = document.append(root, "body", &[]);
    build_header(&mut document, body);
    document.append_text(body, "div", &[PRELOADER], "Loading profile");

    let container = document.append(body, "main", &[CONTAINER, HIDDEN]);
    build_account(&mut document, container);
    build_repositories(&mut document, container);

    document
}

fn build_header(document: &mut Document, body: NodeId) {
    let header = document.append(body, "header", &["header", "h-flex"]);

    let hamburger = document.append(header, "button", &[HAMBURGER]);
    document.set_raw_attribute(hamburger, "aria-label", "Toggle navigation");
    document.append(hamburger, "span", &["header-hamburger__bar"]);

    let desktop_form = document.append(header, "form", &[HEADER_FORM, DESKTOP_HEADER_FORM]);
    search_input(document, desktop_form);

    let header_avatar = document.append(header, "img", &["avatar", AVATAR_IMAGE]);
    document.set_raw_attribute(header_avatar, "alt", "");

    let menu = document.append(body, "nav", &[MOBILE_MENU, HIDDEN]);
    let mobile_form = document.append(menu, "form", &[HEADER_FORM]);
    search_input(document, mobile_form);
    let menu_user = document.append(menu, "div", &["mobile-menu__user", "h-flex"]);
    let menu_avatar = document.append(menu_user, "img", &["avatar", AVATAR_IMAGE]);
    document.set_raw_attribute(menu_avatar, "alt", "");
    document.append(menu_user, "span", &[USERNAME]);
}

fn search_input(document: &mut Document, form: NodeId) {
    let input = document.append(form, "input", &["header-form__input"]);
    document.set_raw_attribute(input, "type", "text");
    document.set_raw_attribute(input, "placeholder", "Search or jump to");
    document.set_raw_attribute(input, "aria-label", "Search or jump to");
}

fn build_account(document: &mut Document, container: NodeId) {
    let account = document.append(container, "aside", &["account"]);

    let avatar = document.append(account, "div", &["account-avatar"]);
    let image = document.append(avatar, "img", &["avatar", AVATAR_IMAGE]);
    document.set_raw_attribute(image, "alt", "");
    let status = document.append(avatar, "div", &["avatar-status", "h-flex"]);
    document.append(status, "div", &[STATUS_EMOJI_CONTAINER]);
    document.append(status, "span", &[STATUS_TEXT]);

    let heading = document.append(account, "h1", &["account-heading"]);
    document.append(heading, "span", &[FULL_NAME]);
    document.append(heading, "span", &["account-heading__username", USERNAME]);

    document.append(account, "p", &[BIO]);
}

fn build_repositories(document: &mut Document, container: NodeId) {
    let section = document.append(container, "section", &["repositories"]);

    let nav = document.append(section, "nav", &["main-nav", "h-flex"]);
    let nav_user = document.append(nav, "div", &[NAV_USER, "h-flex"]);
    let nav_avatar = document.append(nav_user, "img", &["avatar", AVATAR_IMAGE]);
    document.set_raw_attribute(nav_avatar, "alt", "");
    document.append(nav_user, "span", &[USERNAME]);
    let link = document.append(nav, "a", &["main-nav-link", "h-flex"]);
    document.set_raw_attribute(link, "href", "#");
    document.append_text(link, "span", &["main-nav-link__label"], "Repositories");
    document.append(link, "span", &[ALL_REPOSITORIES_COUNT]);

    let search = document.append(section, "div", &["repo-search"]);
    document.append(search, "strong", &[PUBLIC_REPOSITORIES_COUNT]);
    document.append_text(search, "span", &[], " results for public repositories");

    document.append(section, "div", &[REPOS]);
}
