use crate::constants::{HIDDEN_CLASS, MODAL_DESC_ID, MODAL_ID, MODAL_TITLE_ID};
use web_sys as web;

/// Fill the detail modal and make it visible.
pub fn show(document: &web::Document, title: &str, description: &str) {
    if let Some(el) = document.get_element_by_id(MODAL_TITLE_ID) {
        el.set_text_content(Some(title));
    }
    if let Some(el) = document.get_element_by_id(MODAL_DESC_ID) {
        el.set_text_content(Some(description));
    }
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(MODAL_ID)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(true)
}
