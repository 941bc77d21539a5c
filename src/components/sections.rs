// src/components/sections.rs
use crate::components::contact_form::ContactForm;
use crate::notification::NotificationKind;
use crate::portfolio::PortfolioCategory;
use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="container">
                <div class="about-content">
                    <div class="about-text">
                        <h2 class="section-title">{"Sobre"}</h2>
                        <p>{"Laboratório especializado em odontologia digital. Unimos escaneamento intraoral, \
                             desenho assistido por computador e impressão 3D para entregar trabalhos precisos, \
                             com prazos curtos e comunicação direta com o dentista."}</p>
                    </div>
                    <div class="about-stats">
                        <div class="stat-item">
                            <span class="stat-number">{"500+"}</span>
                            <span class="stat-label">{"Casos concluídos"}</span>
                        </div>
                        <div class="stat-item">
                            <span class="stat-number">{"8"}</span>
                            <span class="stat-label">{"Anos de experiência"}</span>
                        </div>
                        <div class="stat-item">
                            <span class="stat-number">{"48h"}</span>
                            <span class="stat-label">{"Prazo médio"}</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub categories: Vec<PortfolioCategory>,
    pub on_open: Callback<String>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    html! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <h2 class="section-title">{"Portfólio"}</h2>
                <div class="portfolio-grid">
                    {for props.categories.iter().map(|category| {
                        let onclick = {
                            let on_open = props.on_open.clone();
                            let key = category.key.clone();
                            Callback::from(move |_: MouseEvent| on_open.emit(key.clone()))
                        };
                        html! {
                            <div class="portfolio-item" data-category={category.key.clone()} {onclick}>
                                <img src={category.thumbnail.clone()} alt={category.title.clone()} />
                                <div class="placeholder-image">
                                    <i class="fas fa-image"></i>
                                    <span>{ category.title.clone() }</span>
                                </div>
                                <div class="portfolio-overlay">
                                    <h3>{ category.title.clone() }</h3>
                                    <p>{ category.description.clone() }</p>
                                </div>
                            </div>
                        }
                    })}
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub on_notify: Callback<(String, NotificationKind)>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    html! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">{"Contato"}</h2>
                <div class="contact-content">
                    <div class="contact-info">
                        <div class="contact-item">
                            <i class="fas fa-phone"></i>
                            <span>{"(11) 99999-0000"}</span>
                        </div>
                        <div class="contact-item">
                            <i class="fas fa-envelope"></i>
                            <span>{"contato@studiodentaldigital.com.br"}</span>
                        </div>
                        <div class="contact-item">
                            <i class="fas fa-map-marker-alt"></i>
                            <span>{"São Paulo, SP"}</span>
                        </div>
                    </div>
                    <ContactForm on_notify={props.on_notify.clone()} />
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <p>{"Studio Dental Digital © 2024"}</p>
        </footer>
    }
}
