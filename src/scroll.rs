// src/scroll.rs
//
// Window scroll handling: navbar styling, hero parallax and smooth in-page
// scrolling. Scroll events are coalesced to one update per animation frame.

use crate::config::{NavbarConfig, ParallaxConfig};
use crate::utils;
use gloo_events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::Callback;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarVariant {
    #[default]
    Base,
    Scrolled,
}

impl NavbarVariant {
    pub fn for_scroll(scroll_y: f64, config: &NavbarConfig) -> Self {
        if scroll_y > config.scroll_threshold {
            NavbarVariant::Scrolled
        } else {
            NavbarVariant::Base
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavbarVariant::Base => "rgba(10, 10, 10, 0.95)",
            NavbarVariant::Scrolled => "rgba(10, 10, 10, 0.98)",
        }
    }

    pub fn backdrop_filter(&self) -> &'static str {
        match self {
            NavbarVariant::Base => "blur(10px)",
            NavbarVariant::Scrolled => "blur(15px)",
        }
    }

    pub fn style(&self) -> String {
        format!(
            "background: {}; backdrop-filter: {};",
            self.background(),
            self.backdrop_filter()
        )
    }
}

/// Vertical offsets for the hero and its floating cards, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxOffsets {
    pub hero: f64,
    pub cards: Vec<f64>,
}

/// `None` once the page is scrolled past the parallax range; the last
/// applied transforms stay as they are.
pub fn parallax_offsets(
    scroll_y: f64,
    viewport_height: f64,
    card_count: usize,
    config: &ParallaxConfig,
) -> Option<ParallaxOffsets> {
    if scroll_y >= viewport_height * config.viewport_limit {
        return None;
    }
    let cards = (0..card_count)
        .map(|i| scroll_y * (config.card_base_speed + i as f64 * config.card_speed_step))
        .collect();
    Some(ParallaxOffsets {
        hero: scroll_y * config.hero_speed,
        cards,
    })
}

/// Keeps the window scroll listener alive. Dropping it detaches the
/// listener and cancels any pending frame.
pub struct ScrollObserver {
    _listener: EventListener,
    _pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl ScrollObserver {
    pub fn install(
        navbar: NavbarConfig,
        parallax: ParallaxConfig,
        on_variant: Callback<NavbarVariant>,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

        let update = Rc::new(move || {
            let scroll_y = current_scroll_y();
            on_variant.emit(NavbarVariant::for_scroll(scroll_y, &navbar));
            apply_parallax(scroll_y, &parallax);
        });
        update();

        let listener = {
            let pending = pending.clone();
            EventListener::new_with_options(
                &window,
                "scroll",
                EventListenerOptions::default(),
                move |_| {
                    if pending.borrow().is_some() {
                        return;
                    }
                    let frame_pending = pending.clone();
                    let update = update.clone();
                    let handle = request_animation_frame(move |_| {
                        frame_pending.borrow_mut().take();
                        update();
                    });
                    *pending.borrow_mut() = Some(handle);
                },
            )
        };

        log::info!("Scroll observer installed");
        Some(Self {
            _listener: listener,
            _pending: pending,
        })
    }
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn apply_parallax(scroll_y: f64, config: &ParallaxConfig) {
    let Some(hero) = utils::query_html(".hero") else {
        log::debug!("No hero section, skipping parallax");
        return;
    };
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let cards: Vec<HtmlElement> = utils::query_all(None, ".hero-visual .floating-card");

    if let Some(offsets) = parallax_offsets(scroll_y, viewport_height, cards.len(), config) {
        utils::set_style(&hero, "transform", &format!("translateY({}px)", offsets.hero));
        for (card, offset) in cards.iter().zip(offsets.cards) {
            utils::set_style(card, "transform", &format!("translateY({}px)", offset));
        }
    }
}

/// Smoothly scrolls the element matching `selector` to the top of the
/// viewport. Unknown or invalid selectors do nothing.
pub fn scroll_to_section(selector: &str) {
    match utils::query(selector) {
        Some(target) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("Scroll target '{}' not found", selector),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_variant_threshold() {
        let config = NavbarConfig::default();
        assert_eq!(NavbarVariant::for_scroll(0.0, &config), NavbarVariant::Base);
        assert_eq!(NavbarVariant::for_scroll(100.0, &config), NavbarVariant::Base);
        assert_eq!(NavbarVariant::for_scroll(100.5, &config), NavbarVariant::Scrolled);
        assert_eq!(NavbarVariant::for_scroll(2400.0, &config), NavbarVariant::Scrolled);
    }

    #[test]
    fn test_navbar_styles() {
        assert_eq!(
            NavbarVariant::Scrolled.style(),
            "background: rgba(10, 10, 10, 0.98); backdrop-filter: blur(15px);"
        );
        assert_eq!(
            NavbarVariant::Base.style(),
            "background: rgba(10, 10, 10, 0.95); backdrop-filter: blur(10px);"
        );
    }

    #[test]
    fn test_parallax_offsets() {
        let config = ParallaxConfig::default();
        let offsets = parallax_offsets(200.0, 800.0, 3, &config).unwrap();
        assert!((offsets.hero - 60.0).abs() < 1e-9);
        let expected = [10.0, 14.0, 18.0];
        for (got, want) in offsets.cards.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{} != {}", got, want);
        }
    }

    #[test]
    fn test_parallax_stops_past_range() {
        let config = ParallaxConfig::default();
        assert!(parallax_offsets(1199.0, 800.0, 2, &config).is_some());
        assert!(parallax_offsets(1200.0, 800.0, 2, &config).is_none());
    }
}
