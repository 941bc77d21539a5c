// src/main.rs
mod components;
mod config;
mod dev_tools;
mod gallery;
mod notification;
mod portfolio;
mod reveal;
mod scroll;
mod utils;
mod validation;

use components::gallery_modal::GalleryModal;
use components::hero::Hero;
use components::navbar::Navbar;
use components::sections::{About, Contact, Footer, Portfolio};
use components::services::Services;
use components::toast::NotificationToast;
use config::SiteConfig;
use notification::{NotificationKind, NotificationQueue};
use portfolio::{GalleryImage, PortfolioCatalog};
use reveal::Revealer;
use scroll::{NavbarVariant, ScrollObserver};
use yew::prelude::*;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub enum AppMsg {
    NavbarChanged(NavbarVariant),
    Notify(String, NotificationKind),
    NotificationRemoved(u32),
    OpenGallery(String),
    GalleryClosed(u32),
}

/// Gallery currently on screen. `id` changes on every opening.
struct OpenGallery {
    id: u32,
    title: String,
    description: String,
    images: Vec<GalleryImage>,
}

pub struct App {
    config: SiteConfig,
    catalog: PortfolioCatalog,
    navbar_variant: NavbarVariant,
    notifications: NotificationQueue,
    gallery: Option<OpenGallery>,
    gallery_openings: u32,
    // Page-level listeners, held for the lifetime of the app.
    scroll_observer: Option<ScrollObserver>,
    revealer: Option<Revealer>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = SiteConfig::load();
        if config.dev_tools {
            dev_tools::install();
        }

        Self {
            config,
            catalog: PortfolioCatalog::load(),
            navbar_variant: NavbarVariant::default(),
            notifications: NotificationQueue::default(),
            gallery: None,
            gallery_openings: 0,
            scroll_observer: None,
            revealer: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        self.scroll_observer = ScrollObserver::install(
            self.config.navbar.clone(),
            self.config.parallax.clone(),
            ctx.link().callback(AppMsg::NavbarChanged),
        );

        match Revealer::install(&self.config.reveal) {
            Ok(revealer) => self.revealer = Some(revealer),
            Err(e) => log::warn!("Reveal animations disabled: {}", e),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::NavbarChanged(variant) => {
                if self.navbar_variant == variant {
                    return false;
                }
                self.navbar_variant = variant;
                true
            }
            AppMsg::Notify(message, kind) => {
                self.notifications.show(message, kind);
                true
            }
            AppMsg::NotificationRemoved(id) => self.notifications.dismiss(id),
            AppMsg::OpenGallery(key) => {
                let (title, description) = match self.catalog.get_category(&key) {
                    Some(category) => (category.title.clone(), category.description.clone()),
                    None => (key.clone(), String::new()),
                };
                self.gallery_openings = self.gallery_openings.wrapping_add(1);
                log::info!("Opening gallery '{}'", key);
                self.gallery = Some(OpenGallery {
                    id: self.gallery_openings,
                    title,
                    description,
                    images: self.catalog.gallery_for(&key),
                });
                true
            }
            AppMsg::GalleryClosed(id) => match &self.gallery {
                Some(open) if open.id == id => {
                    self.gallery = None;
                    true
                }
                _ => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_notify = ctx
            .link()
            .callback(|(message, kind): (String, NotificationKind)| AppMsg::Notify(message, kind));
        let on_open = ctx.link().callback(AppMsg::OpenGallery);

        html! {
            <>
                <Navbar variant={self.navbar_variant} />
                <main>
                    <Hero />
                    <Services />
                    <Portfolio categories={self.catalog.categories.clone()} {on_open} />
                    <About />
                    <Contact {on_notify} />
                </main>
                <Footer />

                { self.render_gallery(ctx) }
                { self.render_notification(ctx) }
            </>
        }
    }
}

impl App {
    fn render_gallery(&self, ctx: &Context<Self>) -> Html {
        let Some(open) = &self.gallery else {
            return html! {};
        };
        let id = open.id;
        let on_closed = ctx.link().callback(move |_| AppMsg::GalleryClosed(id));

        html! {
            <GalleryModal
                key={id}
                title={open.title.clone()}
                description={open.description.clone()}
                images={open.images.clone()}
                timing={self.config.modal.clone()}
                {on_closed}
            />
        }
    }

    fn render_notification(&self, ctx: &Context<Self>) -> Html {
        let Some(notification) = self.notifications.current() else {
            return html! {};
        };
        let on_removed = ctx.link().callback(AppMsg::NotificationRemoved);

        html! {
            <NotificationToast
                key={notification.id}
                notification={notification.clone()}
                timing={self.config.toast.clone()}
                {on_removed}
            />
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
