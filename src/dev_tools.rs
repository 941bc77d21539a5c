// src/dev_tools.rs
//
// Console helpers for trying out portfolio thumbnails in the browser:
//   updatePortfolioImage(index, url, alt)
//   loadExampleImages()
//   restorePlaceholders()
//   showImages()

use crate::utils;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlImageElement};

pub const EXAMPLE_IMAGES: [(&str, &str); 6] = [
    (
        "https://images.unsplash.com/photo-1606811841689-23dfddceeee3?w=400&h=300&fit=crop",
        "Coroas Digitais - Exemplo",
    ),
    (
        "https://images.unsplash.com/photo-1609840114035-3c981b782dfe?w=400&h=300&fit=crop",
        "Facetas Laminadas - Exemplo",
    ),
    (
        "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=400&h=300&fit=crop",
        "Enceramento Digital - Exemplo",
    ),
    (
        "https://images.unsplash.com/photo-1582750433449-648ed127bb54?w=400&h=300&fit=crop",
        "Modelos 3D - Exemplo",
    ),
    (
        "https://images.unsplash.com/photo-1551601651-2a8555f1a136?w=400&h=300&fit=crop",
        "Guias Cirúrgicos - Exemplo",
    ),
    (
        "https://images.unsplash.com/photo-1606811841689-23dfddceeee3?w=400&h=300&fit=crop",
        "Placas Odontológicas - Exemplo",
    ),
];

fn portfolio_items() -> Vec<Element> {
    utils::query_all(None, ".portfolio-item")
}

fn item_image(item: &Element) -> Option<HtmlImageElement> {
    item.query_selector("img")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
}

fn item_placeholder(item: &Element) -> Option<HtmlElement> {
    item.query_selector(".placeholder-image")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn update_portfolio_image(index: usize, url: &str, alt: &str) -> bool {
    let items = portfolio_items();
    let Some(image) = items.get(index).and_then(item_image) else {
        log::debug!("No portfolio image at index {}", index);
        return false;
    };
    image.set_src(url);
    image.set_alt(alt);
    log::info!("Imagem {} atualizada: {}", index + 1, alt);
    true
}

pub fn load_example_images() {
    for (index, (url, alt)) in EXAMPLE_IMAGES.iter().enumerate() {
        update_portfolio_image(index, url, alt);
    }
    log::info!("Imagens de exemplo carregadas!");
}

fn set_images_visible(visible: bool) {
    for item in portfolio_items() {
        let Some(image) = item_image(&item) else {
            continue;
        };
        utils::set_style(&image, "display", if visible { "block" } else { "none" });
        if let Some(placeholder) = item_placeholder(&item) {
            utils::set_style(&placeholder, "display", if visible { "none" } else { "flex" });
        }
    }
}

pub fn restore_placeholders() {
    set_images_visible(false);
    log::info!("Placeholders restaurados!");
}

pub fn show_images() {
    set_images_visible(true);
    log::info!("Imagens mostradas!");
}

fn expose(window: &web_sys::Window, name: &str, function: &JsValue) {
    if let Err(e) = js_sys::Reflect::set(window, &JsValue::from_str(name), function) {
        log::warn!("Failed to expose {}: {:?}", name, e);
    }
}

/// Registers the helpers on `window`. They stay for the lifetime of the page.
pub fn install() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let update = Closure::<dyn Fn(JsValue, JsValue, JsValue)>::new(
        |index: JsValue, url: JsValue, alt: JsValue| {
            let (Some(index), Some(url)) = (index.as_f64(), url.as_string()) else {
                log::warn!("Uso: updatePortfolioImage(index, url, alt)");
                return;
            };
            if index < 0.0 || index.fract() != 0.0 {
                log::warn!("Índice inválido: {}", index);
                return;
            }
            let alt = alt.as_string().unwrap_or_default();
            update_portfolio_image(index as usize, &url, &alt);
        },
    );
    let load = Closure::<dyn Fn()>::new(load_example_images);
    let restore = Closure::<dyn Fn()>::new(restore_placeholders);
    let show = Closure::<dyn Fn()>::new(show_images);

    expose(&window, "updatePortfolioImage", update.as_ref());
    expose(&window, "loadExampleImages", load.as_ref());
    expose(&window, "restorePlaceholders", restore.as_ref());
    expose(&window, "showImages", show.as_ref());

    update.forget();
    load.forget();
    restore.forget();
    show.forget();

    log::info!(
        "Funções disponíveis: updatePortfolioImage(index, url, alt), loadExampleImages(), \
         restorePlaceholders(), showImages()"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_example_per_category() {
        assert_eq!(EXAMPLE_IMAGES.len(), 6);
        assert!(EXAMPLE_IMAGES
            .iter()
            .all(|(url, alt)| url.starts_with("https://") && alt.ends_with("- Exemplo")));
    }
}
