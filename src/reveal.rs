// src/reveal.rs
use crate::config::RevealConfig;
use crate::utils;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEALED_CLASS: &str = "animate-in";

const EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// Transition for the `index`-th revealed element, staggered by position.
pub fn reveal_transition(index: usize, config: &RevealConfig) -> String {
    let delay = index as f64 * config.stagger_secs;
    format!(
        "opacity {d}s {e} {delay}s, transform {d}s {e} {delay}s",
        d = config.duration_secs,
        e = EASING,
        delay = format_secs(delay),
    )
}

// Trims float noise such as 0.30000000000000004.
fn format_secs(secs: f64) -> String {
    let rounded = (secs * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}

/// One-shot entrance animations. Each matching element is hidden until it
/// first scrolls into view, then gets [`REVEALED_CLASS`] and is unobserved.
pub struct Revealer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Revealer {
    pub fn install(config: &RevealConfig) -> Result<Self, String> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        if let Err(e) = target.class_list().add_1(REVEALED_CLASS) {
                            log::debug!("Failed to mark element revealed: {:?}", e);
                        }
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| format!("Failed to create intersection observer: {:?}", e))?;

        let elements: Vec<HtmlElement> = utils::query_all(None, &config.selector);
        for (index, element) in elements.iter().enumerate() {
            utils::set_style(element, "opacity", "0");
            utils::set_style(element, "transform", "translateY(20px)");
            utils::set_style(element, "transition", &reveal_transition(index, config));
            observer.observe(element);
        }
        log::info!("Observing {} elements for reveal", elements.len());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Revealer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_element_has_no_delay() {
        let config = RevealConfig::default();
        assert_eq!(
            reveal_transition(0, &config),
            "opacity 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94) 0s, \
             transform 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94) 0s"
        );
    }

    #[test]
    fn test_delay_staggers_by_index() {
        let config = RevealConfig::default();
        assert!(reveal_transition(3, &config).ends_with(" 0.3s"));
        assert!(reveal_transition(12, &config).contains(" 1.2s,"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use crate::utils::testing::settle;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    async fn test_visible_element_is_marked_revealed() {
        let body = utils::body().expect("body");
        let element = utils::document()
            .expect("document")
            .create_element("div")
            .expect("create element");
        element.set_class_name("reveal-check");
        element.set_text_content(Some("Sobre"));
        body.prepend_with_node_1(&element).expect("prepend element");

        let config = RevealConfig {
            selector: ".reveal-check".to_string(),
            ..RevealConfig::default()
        };
        let _revealer = Revealer::install(&config).expect("install revealer");
        settle().await;
        settle().await;

        assert!(element.class_list().contains(REVEALED_CLASS));
    }
}
