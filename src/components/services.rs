// src/components/services.rs
use crate::utils;
use web_sys::HtmlElement;
use yew::prelude::*;

const SERVICES: [(&str, &str, &str); 6] = [
    (
        "fa-crown",
        "Coroas Digitais",
        "Coroas em cerâmica e zircônia fresadas a partir de escaneamento intraoral.",
    ),
    (
        "fa-gem",
        "Facetas Laminadas",
        "Lentes de contato dental com espessura mínima e estética natural.",
    ),
    (
        "fa-pencil-ruler",
        "Enceramento Digital",
        "Simulação do sorriso final para planejamento e aprovação do paciente.",
    ),
    (
        "fa-cube",
        "Modelos 3D",
        "Modelos impressos para estudo, prova de trabalhos e documentação.",
    ),
    (
        "fa-crosshairs",
        "Guias Cirúrgicos",
        "Guias para implantodontia com posicionamento planejado virtualmente.",
    ),
    (
        "fa-shield-alt",
        "Placas Odontológicas",
        "Placas de bruxismo e clareamento confeccionadas sob medida.",
    ),
];

const LIFTED: &str = "translateY(-8px) scale(1.01)";
const RESTING: &str = "translateY(0) scale(1)";

// Card inline style is shared with the reveal animation: touch single properties only.
fn hover_callback(transform: &'static str, with_transition: bool) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if let Some(card) = e.target_dyn_into::<HtmlElement>() {
            utils::set_style(&card, "transform", transform);
            if with_transition {
                utils::set_style(&card, "transition", "var(--transition-smooth)");
            }
        }
    })
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <div class="container">
                <h2 class="section-title">{"Serviços"}</h2>
                <div class="services-grid">
                    {for SERVICES.iter().map(|(icon, title, description)| html! {
                        <div
                            class="service-card"
                            onmouseenter={hover_callback(LIFTED, true)}
                            onmouseleave={hover_callback(RESTING, false)}
                        >
                            <div class="service-icon"><i class={classes!("fas", *icon)}></i></div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
