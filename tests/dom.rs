use profile_page::dom::Document;
use profile_page::markup::Markup;
use profile_page::skeleton;

#[test]
fn test_serialization_escapes_text_and_attributes() {
    let mut document = Document::new("div");
    let root = document.root();
    let link = document.append(root, "a", &["link", "h-flex"]);
    document.set_attribute(link, "href", "https://example.com/?a=1&b=\"2\"");
    document.set_text(link, "<b>hi</b>");
    let image = document.append(root, "img", &[]);
    document.set_style(image, "opacity", "0");

    assert_eq!(
        document.to_html(),
        concat!(
            "<!DOCTYPE html>\n<div>",
            r#"<a class="link h-flex" href="https&#58;&#47;&#47;example.com&#47;&#63;a&#61;1&#38;b&#61;&#34;2&#34;">"#,
            "&#60;b&#62;hi&#60;&#47;b&#62;</a>",
            r#"<img style="opacity:0">"#,
            "</div>"
        )
    );
}

#[test]
fn test_raw_attributes_written_verbatim() {
    let mut document = Document::new("meta");
    let root = document.root();
    document.set_raw_attribute(root, "charset", "utf-8");
    document.set_attribute(root, "content", "utf-8");

    assert_eq!(
        document.to_html(),
        "<!DOCTYPE html>\n<meta charset=\"utf-8\" content=\"utf&#45;8\">"
    );
    assert_eq!(document.attribute(root, "charset"), Some("utf-8"));

    // Re-setting through the escaping setter escapes again.
    document.set_attribute(root, "charset", "utf-8");
    assert!(document.to_html().contains("charset=\"utf&#45;8\""));
}

#[test]
fn test_page_head_declares_charset_verbatim() {
    let html = skeleton::profile_page("t").to_html();

    assert!(html.contains(r#"<meta charset="utf-8">"#));
    assert!(html.contains(r#"content="width=device-width, initial-scale=1""#));
    assert!(!html.contains("utf&#45;8"));
}

#[test]
fn test_inner_html_written_verbatim() {
    let mut document = Document::new("div");
    let root = document.root();
    document.set_inner_html(root, Markup::trusted("<em>ok</em>"));

    assert_eq!(document.to_html(), "<!DOCTYPE html>\n<div><em>ok</em></div>");
    assert_eq!(document.inner_html(root).map(Markup::as_str), Some("<em>ok</em>"));
}

#[test]
fn test_select_in_document_order_and_closest() {
    let mut document = Document::new("body");
    let root = document.root();
    let outer = document.append(root, "form", &["header-form"]);
    let inner = document.append(outer, "input", &["field"]);
    let second = document.append(root, "span", &["field"]);

    assert_eq!(document.select_all("field"), vec![inner, second]);
    assert_eq!(document.closest(inner, "header-form"), Some(outer));
    assert_eq!(document.closest(outer, "header-form"), Some(outer));
    assert_eq!(document.closest(second, "header-form"), None);
}

#[test]
fn test_replaced_content_detaches_children() {
    let mut document = Document::new("div");
    let root = document.root();
    document.append(root, "span", &["stale"]);
    document.set_text(root, "fresh");

    assert!(document.select("stale").is_none());
    assert_eq!(document.text(root), Some("fresh"));
}

#[test]
fn test_class_toggling() {
    let mut document = Document::new("nav");
    let root = document.root();

    assert!(document.toggle_class(root, "h-hide"));
    assert!(document.has_class(root, "h-hide"));
    assert!(!document.toggle_class(root, "h-hide"));
    document.add_class(root, "a");
    document.add_class(root, "a");
    document.remove_class(root, "a");
    assert!(!document.has_class(root, "a"));
}
