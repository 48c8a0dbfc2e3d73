//! Incidental page affordances. None of these depend on fetched data, so they
//! behave the same before and after the profile has rendered.

use crate::anchors::{Anchors, DESKTOP_HEADER_FORM, HAMBURGER, HEADER_FORM, HIDDEN};
use crate::dom::{Document, NodeId};

pub const CLICKED_FORM: &str = "h-clicked-form";
pub const CLICKED_FORM_DESKTOP: &str = "h-clicked-form-desktop";

/// Scroll offset (px) past which the avatar in the repository nav appears.
pub const NAV_AVATAR_THRESHOLD: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    Click { target: NodeId },
    Scroll { offset: f64 },
}

pub fn dispatch(document: &mut Document, anchors: &Anchors, event: UiEvent) {
    match event {
        UiEvent::Click { target } => {
            if document.closest(target, HAMBURGER).is_some() {
                toggle_mobile_menu(document, anchors);
            }
            toggle_header_form_expansion(document, anchors, target);
        }
        UiEvent::Scroll { offset } => toggle_nav_avatar(document, anchors, offset),
    }
}

pub fn toggle_mobile_menu(document: &mut Document, anchors: &Anchors) {
    document.toggle_class(anchors.mobile_menu, HIDDEN);
}

/// Expand the search form containing the click, or collapse every form when
/// the click landed outside all of them.
pub fn toggle_header_form_expansion(document: &mut Document, anchors: &Anchors, target: NodeId) {
    if document.closest(target, HEADER_FORM).is_none() {
        for &form in &anchors.header_forms {
            document.remove_class(form, CLICKED_FORM);
        }
        document.remove_class(anchors.desktop_header_form, CLICKED_FORM_DESKTOP);
        return;
    }

    let Some(parent) = document.parent(target) else {
        return;
    };
    if document.has_class(parent, HEADER_FORM) {
        document.add_class(parent, CLICKED_FORM);
    }
    if document.has_class(parent, DESKTOP_HEADER_FORM) {
        document.add_class(anchors.desktop_header_form, CLICKED_FORM_DESKTOP);
    }
}

pub fn toggle_nav_avatar(document: &mut Document, anchors: &Anchors, offset: f64) {
    let opacity = if offset >= NAV_AVATAR_THRESHOLD { "1" } else { "0" };
    document.set_style(anchors.nav_user, "opacity", opacity);
}
