// src/components/hero.rs
use crate::scroll::scroll_to_section;
use crate::utils;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

const EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

// (show at ms after mount, animation delay in seconds) for title, subtitle,
// description and call-to-action.
const ENTRANCE: [(u32, f64); 4] = [(300, 0.0), (500, 0.2), (700, 0.4), (900, 0.6)];

const GLOW_ON_MS: u32 = 1500;
const GLOW_MS: u32 = 2000;

#[derive(Clone, Copy, PartialEq)]
enum Glow {
    Off,
    On,
    Faded,
}

fn entrance_style(step: usize, revealed: usize) -> String {
    if step >= revealed {
        return String::new();
    }
    let (_, delay) = ENTRANCE[step];
    if delay == 0.0 {
        format!("animation: fadeInUp 1.2s {} both;", EASING)
    } else {
        format!("animation: fadeInUp 1.2s {} {}s both;", EASING, delay)
    }
}

fn glow_style(glow: Glow) -> &'static str {
    match glow {
        Glow::Off => "",
        Glow::On => "text-shadow: 0 0 20px rgba(74, 157, 157, 0.3);",
        Glow::Faded => "text-shadow: none; transition: text-shadow 0.5s ease;",
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let revealed = use_state(|| 0usize);
    let glow = use_state(|| Glow::Off);

    // ------ PAGE ENTRANCE ------
    {
        let revealed = revealed.setter();
        let glow = glow.setter();
        use_effect_with((), move |_| {
            if let Some(body) = utils::body() {
                utils::set_style(&body, "opacity", "0");
                utils::set_style(
                    &body,
                    "transition",
                    &format!("opacity 0.8s {}", EASING),
                );
            }

            let mut timers = vec![Timeout::new(100, || {
                if let Some(body) = utils::body() {
                    utils::set_style(&body, "opacity", "1");
                }
            })];
            for (step, (at, _)) in ENTRANCE.iter().enumerate() {
                let revealed = revealed.clone();
                timers.push(Timeout::new(*at, move || revealed.set(step + 1)));
            }
            {
                let glow = glow.clone();
                timers.push(Timeout::new(GLOW_ON_MS, move || glow.set(Glow::On)));
            }
            timers.push(Timeout::new(GLOW_ON_MS + GLOW_MS, move || {
                glow.set(Glow::Faded)
            }));

            move || drop(timers)
        });
    }

    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("#contact");
    });

    html! {
        <section id="home" class="hero">
            <div class="hero-container">
                <div class="hero-content">
                    <h1 class="hero-title" style={format!("{}{}", entrance_style(0, *revealed), glow_style(*glow))}>
                        {"Odontologia Digital de Precisão"}
                    </h1>
                    <h2 class="hero-subtitle" style={entrance_style(1, *revealed)}>
                        {"Planejamento e produção CAD/CAM"}
                    </h2>
                    <p class="hero-description" style={entrance_style(2, *revealed)}>
                        {"Coroas, facetas, guias cirúrgicos e modelos 3D desenvolvidos com tecnologia digital para resultados previsíveis e naturais."}
                    </p>
                    <a href="#contact" class="cta-button" style={entrance_style(3, *revealed)} onclick={to_contact}>
                        {"Solicitar Orçamento"}
                    </a>
                </div>
                <div class="hero-visual">
                    <div class="floating-card"><i class="fas fa-tooth"></i><span>{"CAD/CAM"}</span></div>
                    <div class="floating-card"><i class="fas fa-cube"></i><span>{"Impressão 3D"}</span></div>
                    <div class="floating-card"><i class="fas fa-microscope"></i><span>{"Precisão"}</span></div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_waits_for_its_turn() {
        assert_eq!(entrance_style(0, 0), "");
        assert_eq!(entrance_style(2, 2), "");
        assert_eq!(
            entrance_style(0, 1),
            "animation: fadeInUp 1.2s cubic-bezier(0.25, 0.46, 0.45, 0.94) both;"
        );
        assert_eq!(
            entrance_style(3, 4),
            "animation: fadeInUp 1.2s cubic-bezier(0.25, 0.46, 0.45, 0.94) 0.6s both;"
        );
    }

    #[test]
    fn test_entrance_is_staggered() {
        let times: Vec<u32> = ENTRANCE.iter().map(|(at, _)| *at).collect();
        assert!(times.windows(2).all(|w| w[1] - w[0] == 200));
    }

    #[test]
    fn test_glow_styles() {
        assert_eq!(glow_style(Glow::Off), "");
        assert!(glow_style(Glow::On).contains("0 0 20px"));
        assert!(glow_style(Glow::Faded).starts_with("text-shadow: none"));
    }
}
