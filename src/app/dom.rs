use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

#[derive(Error, Debug, Clone)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("invalid selector {0:?}")]
    Selector(String),
    #[error("couldn't update {0}")]
    Rejected(&'static str),
}

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document()?
        .query_selector_all(selector)
        .map_err(|_| DomError::Selector(selector.to_string()))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn add_class(el: &Element, class: &str) -> Result<(), DomError> {
    el.class_list()
        .add_1(class)
        .map_err(|_| DomError::Rejected("class list"))
}

fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

/// `value` of `""` removes the override.
pub fn set_body_overflow(value: &str) -> Result<(), DomError> {
    let style = body()?.style();
    let res = if value.is_empty() {
        style.remove_property("overflow").map(|_| ())
    } else {
        style.set_property("overflow", value)
    };
    res.map_err(|_| DomError::Rejected("body overflow"))
}

/// Smooth-scroll to the element with `id`. Returns `false` if there is none.
pub fn scroll_to_id(id: &str) -> bool {
    let Some(el) = element_by_id(id) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
