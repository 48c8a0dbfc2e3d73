use profile_page::anchors::{Anchors, HIDDEN};
use profile_page::dom::{Document, NodeId};
use profile_page::events::{dispatch, UiEvent, CLICKED_FORM, CLICKED_FORM_DESKTOP};
use profile_page::skeleton;

fn page() -> (Document, Anchors) {
    let document = skeleton::profile_page("test");
    let anchors = Anchors::resolve(&document).unwrap();
    (document, anchors)
}

fn first_child(document: &Document, node: NodeId) -> NodeId {
    document.children(node)[0]
}

fn click(document: &mut Document, anchors: &Anchors, target: NodeId) {
    dispatch(document, anchors, UiEvent::Click { target });
}

#[test]
fn test_hamburger_toggles_mobile_menu() {
    let (mut document, anchors) = page();
    assert!(document.has_class(anchors.mobile_menu, HIDDEN));

    click(&mut document, &anchors, anchors.hamburger);
    assert!(!document.has_class(anchors.mobile_menu, HIDDEN));

    // Clicks on the button's contents count as clicks on the button.
    let bar = first_child(&document, anchors.hamburger);
    click(&mut document, &anchors, bar);
    assert!(document.has_class(anchors.mobile_menu, HIDDEN));
}

#[test]
fn test_click_in_desktop_form_expands_it() {
    let (mut document, anchors) = page();
    let input = first_child(&document, anchors.desktop_header_form);

    click(&mut document, &anchors, input);

    assert!(document.has_class(anchors.desktop_header_form, CLICKED_FORM));
    assert!(document.has_class(anchors.desktop_header_form, CLICKED_FORM_DESKTOP));
}

#[test]
fn test_click_in_mobile_form_expands_only_that_form() {
    let (mut document, anchors) = page();
    let mobile_form = anchors
        .header_forms
        .iter()
        .copied()
        .find(|&form| form != anchors.desktop_header_form)
        .unwrap();
    let input = first_child(&document, mobile_form);

    click(&mut document, &anchors, input);

    assert!(document.has_class(mobile_form, CLICKED_FORM));
    assert!(!document.has_class(anchors.desktop_header_form, CLICKED_FORM));
    assert!(!document.has_class(anchors.desktop_header_form, CLICKED_FORM_DESKTOP));
}

#[test]
fn test_click_on_form_itself_does_not_expand() {
    let (mut document, anchors) = page();

    // The form's parent is the header, not a header form.
    click(&mut document, &anchors, anchors.desktop_header_form);

    assert!(!document.has_class(anchors.desktop_header_form, CLICKED_FORM));
}

#[test]
fn test_click_outside_collapses_every_form() {
    let (mut document, anchors) = page();
    for &form in &anchors.header_forms {
        let input = first_child(&document, form);
        click(&mut document, &anchors, input);
    }
    assert!(anchors
        .header_forms
        .iter()
        .all(|&form| document.has_class(form, CLICKED_FORM)));

    click(&mut document, &anchors, anchors.repos);

    assert!(anchors
        .header_forms
        .iter()
        .all(|&form| !document.has_class(form, CLICKED_FORM)));
    assert!(!document.has_class(anchors.desktop_header_form, CLICKED_FORM_DESKTOP));
}

#[test]
fn test_scroll_fades_nav_avatar() {
    let (mut document, anchors) = page();

    dispatch(&mut document, &anchors, UiEvent::Scroll { offset: 359.5 });
    assert_eq!(document.style(anchors.nav_user, "opacity"), Some("0"));

    dispatch(&mut document, &anchors, UiEvent::Scroll { offset: 360.0 });
    assert_eq!(document.style(anchors.nav_user, "opacity"), Some("1"));

    dispatch(&mut document, &anchors, UiEvent::Scroll { offset: 0.0 });
    assert_eq!(document.style(anchors.nav_user, "opacity"), Some("0"));
}
