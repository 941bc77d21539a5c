// src/components/contact_form.rs
use crate::notification::{NotificationKind, SUCCESS_MESSAGE};
use crate::validation::ContactMessage;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_notify: Callback<(String, NotificationKind)>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    // Submission is simulated: nothing leaves the page.
    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut contact = ContactMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            match contact.validate() {
                Ok(()) => {
                    log::info!("Contact message accepted from {}", contact.email);
                    on_notify.emit((SUCCESS_MESSAGE.to_string(), NotificationKind::Success));
                    contact.clear();
                    name.set(contact.name);
                    email.set(contact.email);
                    message.set(contact.message);
                }
                Err(err) => {
                    log::debug!("Contact form rejected: {:?}", err);
                    on_notify.emit((err.to_string(), NotificationKind::Error));
                }
            }
        })
    };

    html! {
        <div class="contact-form">
            <form {onsubmit} novalidate=true>
                <div class="form-group">
                    <input type="text" name="name" placeholder="Seu nome"
                        value={(*name).clone()} oninput={on_name} />
                </div>
                <div class="form-group">
                    <input type="email" name="email" placeholder="Seu e-mail"
                        value={(*email).clone()} oninput={on_email} />
                </div>
                <div class="form-group">
                    <textarea name="message" rows="5" placeholder="Sua mensagem"
                        value={(*message).clone()} oninput={on_message} />
                </div>
                <button type="submit" class="submit-btn">{"Enviar Mensagem"}</button>
            </form>
        </div>
    }
}
