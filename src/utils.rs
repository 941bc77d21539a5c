// src/utils.rs
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement};

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

/// First element matching `selector`, if any. Invalid selectors count as no match.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_html(selector: &str) -> Option<HtmlElement> {
    query(selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// All elements matching `selector` under `root` (or the document), in document order.
pub fn query_all<T: JsCast>(root: Option<&Element>, selector: &str) -> Vec<T> {
    let list = match root {
        Some(root) => root.query_selector_all(selector),
        None => match document() {
            Some(document) => document.query_selector_all(selector),
            None => return Vec::new(),
        },
    };
    match list {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<T>().ok())
            .collect(),
        Err(e) => {
            log::debug!("Query '{}' failed: {:?}", selector, e);
            Vec::new()
        }
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::debug!("Failed to set {} on element: {:?}", property, e);
    }
}

/// Helpers for the in-browser component tests.
#[cfg(all(test, target_arch = "wasm32"))]
pub mod testing {
    use gloo_timers::future::TimeoutFuture;
    use web_sys::Element;

    /// Empty container appended to the body, to mount a component into.
    pub fn mount_point() -> Element {
        let root = super::document()
            .expect("document")
            .create_element("div")
            .expect("create container");
        super::body()
            .expect("body")
            .append_child(&root)
            .expect("append container");
        root
    }

    /// Waits for pending renders, effects and zero-delay timers.
    pub async fn settle() {
        TimeoutFuture::new(50).await;
    }
}
