// src/components/navbar.rs
use crate::scroll::{scroll_to_section, NavbarVariant};
use yew::prelude::*;

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Início"),
    ("#services", "Serviços"),
    ("#portfolio", "Portfólio"),
    ("#about", "Sobre"),
    ("#contact", "Contato"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub variant: NavbarVariant,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let active = if *menu_open { Some("active") } else { None };

    html! {
        <nav class="navbar" style={props.variant.style()}>
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={Callback::from(|e: MouseEvent| {
                    e.prevent_default();
                    scroll_to_section("#home");
                })}>
                    <i class="fas fa-tooth"></i>
                    <span>{"Studio Dental Digital"}</span>
                </a>
                <ul class={classes!("nav-menu", active)}>
                    {for NAV_LINKS.iter().map(|(href, label)| {
                        let menu_open = menu_open.clone();
                        let href = *href;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            menu_open.set(false);
                            scroll_to_section(href);
                        });
                        html! {
                            <li class="nav-item">
                                <a href={href} class="nav-link" {onclick}>{*label}</a>
                            </li>
                        }
                    })}
                </ul>
                <div class={classes!("hamburger", active)} onclick={toggle_menu}>
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
