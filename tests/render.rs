mod common;

use common::{bare_repository, full_repository, now, private_repository, viewer};
use profile_page::anchors::Anchors;
use profile_page::fragments::DEFAULT_STATUS_TEXT;
use profile_page::render::{render_account_info, render_repositories, repository_list};
use profile_page::skeleton;
use profile_page::types::Viewer;
use scraper::{Html, Selector};

fn render(viewer: &Viewer) -> Html {
    let mut document = skeleton::profile_page("test");
    let anchors = Anchors::resolve(&document).expect("skeleton has every anchor");
    render_account_info(&mut document, &anchors, viewer);
    render_repositories(&mut document, &anchors, viewer, now());
    Html::parse_document(&document.to_html())
}

fn texts(html: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    html.select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn test_repository_list_skips_private_and_keeps_order() {
    let viewer = viewer(vec![
        bare_repository("alpha"),
        private_repository("secret"),
        full_repository("beta"),
        private_repository("classified"),
        bare_repository("gamma"),
    ]);
    let html = render(&viewer);

    let names = texts(&html, ".repos .single-repo__link");
    assert_eq!(
        names,
        vec!["alpha repository", "beta repository", "gamma repository"]
    );
}

#[test]
fn test_repository_list_markup_matches_cards() {
    let repositories = vec![private_repository("only-private")];
    assert!(repository_list(&repositories, now()).is_empty());
}

#[test]
fn test_public_count_ignores_server_total() {
    let viewer = viewer(vec![
        bare_repository("one"),
        private_repository("two"),
        bare_repository("three"),
    ]);
    let html = render(&viewer);

    assert_eq!(texts(&html, ".repo-search__number"), vec!["2"]);
    assert_eq!(texts(&html, ".main-nav-link__count"), vec!["25"]);
}

#[test]
fn test_identity_written_to_every_anchor() {
    let html = render(&viewer(vec![]));

    let usernames = texts(&html, ".username-text");
    assert!(usernames.len() >= 2);
    assert!(usernames.iter().all(|name| name == "octocat"));

    let avatars = Selector::parse(".avatar__image").unwrap();
    let sources: Vec<_> = html
        .select(&avatars)
        .map(|el| el.value().attr("src").unwrap_or_default().to_string())
        .collect();
    assert!(sources.len() >= 2);
    assert!(sources
        .iter()
        .all(|src| src == "https://avatars.githubusercontent.com/u/583231"));

    assert_eq!(texts(&html, ".account-heading__fullname"), vec!["The Octocat"]);
    assert_eq!(texts(&html, ".account-bio"), vec!["I love Rust & GraphQL"]);
}

#[test]
fn test_status_written_when_set() {
    let html = render(&viewer(vec![]));

    assert_eq!(texts(&html, ".avatar-status__text"), vec!["Shipping"]);
    assert_eq!(texts(&html, ".avatar-status-image-container"), vec!["🚀"]);
}

#[test]
fn test_missing_status_falls_back_to_smiley() {
    let mut viewer = viewer(vec![]);
    viewer.status = None;
    let html = render(&viewer);

    assert_eq!(texts(&html, ".avatar-status__text"), vec![DEFAULT_STATUS_TEXT]);
    let smiley = Selector::parse(".avatar-status-image-container svg.avatar-status-image").unwrap();
    assert_eq!(html.select(&smiley).count(), 1);
}

#[test]
fn test_empty_name_and_bio_left_untouched() {
    let mut viewer = viewer(vec![]);
    viewer.name = Some(String::new());
    viewer.bio = None;

    let mut document = skeleton::profile_page("test");
    let anchors = Anchors::resolve(&document).unwrap();
    render_account_info(&mut document, &anchors, &viewer);

    assert_eq!(document.text(anchors.full_name), None);
    assert_eq!(document.text(anchors.bio), None);
}

#[test]
fn test_hostile_text_is_escaped_in_page() {
    let mut viewer = viewer(vec![bare_repository("<script>x</script>")]);
    viewer.bio = Some("<img src=x onerror=alert(1)>".to_string());
    let html = render(&viewer);

    let scripts = Selector::parse("body script, .account-bio img").unwrap();
    assert_eq!(html.select(&scripts).count(), 0);
    assert_eq!(texts(&html, ".account-bio"), vec!["<img src=x onerror=alert(1)>"]);
}
