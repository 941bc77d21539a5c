// src/components/gallery_modal.rs
use crate::config::ModalConfig;
use crate::gallery::{key_command, GalleryAction, GalleryState, KeyCommand};
use crate::portfolio::GalleryImage;
use crate::scroll::scroll_to_section;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GalleryModalProps {
    pub title: String,
    pub description: String,
    pub images: Vec<GalleryImage>,
    pub timing: ModalConfig,
    pub on_closed: Callback<()>,
}

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Entering,
    Open,
    Closing,
}

fn modal_style(phase: Phase) -> String {
    format!(
        "position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: 10000; \
         display: flex; align-items: center; justify-content: center; \
         opacity: {}; transition: opacity 0.3s ease;",
        if phase == Phase::Open { 1 } else { 0 }
    )
}

fn content_style(phase: Phase) -> String {
    format!(
        "background: var(--secondary-dark); border: 1px solid rgba(74, 157, 157, 0.3); \
         border-radius: 12px; max-width: 800px; width: 95%; max-height: 90vh; overflow-y: auto; \
         position: relative; z-index: 1; transform: scale({}); transition: transform 0.3s ease;",
        if phase == Phase::Open { "1" } else { "0.9" }
    )
}

/// Lightbox for one portfolio category. Mount it keyed per opening so each
/// opening starts fresh at the first image.
#[function_component(GalleryModal)]
pub fn gallery_modal(props: &GalleryModalProps) -> Html {
    let gallery = {
        let images = props.images.clone();
        use_reducer(move || GalleryState::new(images))
    };
    let phase = use_state(|| Phase::Entering);
    let closing = *phase == Phase::Closing;

    // ------ FADE IN / FADE OUT, THEN UNMOUNT ------
    {
        let phase = phase.clone();
        let on_closed = props.on_closed.clone();
        let ModalConfig {
            enter_delay_ms,
            exit_ms,
        } = props.timing;
        use_effect_with(closing, move |closing| {
            let timer = if *closing {
                Timeout::new(exit_ms, move || on_closed.emit(()))
            } else {
                Timeout::new(enter_delay_ms, move || phase.set(Phase::Open))
            };
            move || drop(timer)
        });
    }

    // ------ KEYBOARD NAVIGATION ------
    // Only attached while the modal is not closing.
    {
        let dispatcher = gallery.dispatcher();
        let phase = phase.clone();
        use_effect_with(closing, move |closing| {
            let listener = (!*closing).then(|| {
                EventListener::new(&document(), "keydown", move |event| {
                    let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    match key_command(&keyboard_event.key()) {
                        Some(KeyCommand::Navigate(action)) => dispatcher.dispatch(action),
                        Some(KeyCommand::Close) => phase.set(Phase::Closing),
                        None => {}
                    }
                })
            });
            move || drop(listener)
        });
    }

    let close = {
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| phase.set(Phase::Closing))
    };

    let request_quote = {
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| {
            phase.set(Phase::Closing);
            scroll_to_section("#contact");
        })
    };

    let prev_image = {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Previous))
    };

    let next_image = {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Next))
    };

    let current = gallery.current();

    html! {
        <div class="portfolio-modal" style={modal_style(*phase)}>
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="modal-content" style={content_style(*phase)}>
                <div class="modal-header">
                    <h3>{ props.title.clone() }</h3>
                    <button class="modal-close" onclick={close.clone()}>{"×"}</button>
                </div>
                <div class="modal-body">
                    <p>{ props.description.clone() }</p>
                    <div class="modal-image-container">
                        <img class="modal-main-image" src={current.src.clone()} alt={current.caption.clone()} />
                        <button class="modal-image-nav prev" onclick={prev_image}
                            disabled={!gallery.can_go_previous()}>
                            <i class="fas fa-chevron-left"></i>
                        </button>
                        <button class="modal-image-nav next" onclick={next_image}
                            disabled={!gallery.can_go_next()}>
                            <i class="fas fa-chevron-right"></i>
                        </button>
                    </div>
                    <div class="modal-thumbnails">
                        {for gallery.images().iter().enumerate().map(|(index, image)| {
                            let select = {
                                let gallery = gallery.clone();
                                Callback::from(move |_: MouseEvent| {
                                    gallery.dispatch(GalleryAction::Select(index))
                                })
                            };
                            html! {
                                <img
                                    class={classes!("modal-thumbnail", gallery.is_active(index).then_some("active"))}
                                    src={image.src.clone()}
                                    alt={image.caption.clone()}
                                    data-index={index.to_string()}
                                    onclick={select}
                                />
                            }
                        })}
                    </div>
                    <div class="modal-image-counter">
                        <span>{ gallery.counter_label() }</span>
                    </div>
                </div>
                <div class="modal-footer">
                    <button class="modal-btn modal-btn-primary" onclick={request_quote}>
                        {"Solicitar Orçamento"}
                    </button>
                    <button class="modal-btn modal-btn-secondary" onclick={close}>
                        {"Fechar"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_hidden_until_open() {
        assert!(modal_style(Phase::Entering).contains("opacity: 0;"));
        assert!(modal_style(Phase::Open).contains("opacity: 1;"));
        assert!(modal_style(Phase::Closing).contains("opacity: 0;"));
    }

    #[test]
    fn test_content_scales_in() {
        assert!(content_style(Phase::Entering).contains("scale(0.9)"));
        assert!(content_style(Phase::Open).contains("scale(1)"));
        assert!(content_style(Phase::Closing).contains("scale(0.9)"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use crate::portfolio::PortfolioCatalog;
    use crate::utils::testing::{mount_point, settle};
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::{Element, KeyboardEventInit};

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keyboard event");
        document().dispatch_event(&event).expect("dispatch keydown");
    }

    fn counter(root: &Element) -> String {
        root.query_selector(".modal-image-counter span")
            .expect("valid selector")
            .and_then(|span| span.text_content())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn test_escape_closes_and_detaches_keyboard() {
        let catalog = PortfolioCatalog::load();
        let closed = Rc::new(Cell::new(false));
        let props = GalleryModalProps {
            title: "Facetas".to_string(),
            description: String::new(),
            images: catalog.gallery_for("facetas"),
            timing: ModalConfig {
                enter_delay_ms: 0,
                exit_ms: 0,
            },
            on_closed: {
                let closed = closed.clone();
                Callback::from(move |_| closed.set(true))
            },
        };
        let root = mount_point();
        let _app =
            yew::Renderer::<GalleryModal>::with_root_and_props(root.clone(), props).render();
        settle().await;
        assert_eq!(counter(&root), "1 / 4");

        press("ArrowRight");
        settle().await;
        assert_eq!(counter(&root), "2 / 4");

        press("Escape");
        settle().await;
        assert!(closed.get());

        press("ArrowRight");
        settle().await;
        assert_eq!(counter(&root), "2 / 4");
    }
}
