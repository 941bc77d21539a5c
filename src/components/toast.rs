// src/components/toast.rs
use crate::config::ToastConfig;
use crate::notification::{toast_style, Notification};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: Notification,
    pub timing: ToastConfig,
    pub on_removed: Callback<u32>,
}

pub enum ToastMsg {
    SlideIn,
    Dismiss,
    Remove,
}

/// A single toast. Mount it keyed by notification id: a new id replaces the
/// component, and dropping it cancels every pending timer.
pub struct NotificationToast {
    shown: bool,
    leaving: bool,
    enter_timer: Option<Timeout>,
    dismiss_timer: Option<Timeout>,
    remove_timer: Option<Timeout>,
}

impl Component for NotificationToast {
    type Message = ToastMsg;
    type Properties = ToastProps;

    fn create(ctx: &Context<Self>) -> Self {
        let timing = &ctx.props().timing;

        let link = ctx.link().clone();
        let enter_timer = Timeout::new(timing.enter_delay_ms, move || {
            link.send_message(ToastMsg::SlideIn)
        });
        let link = ctx.link().clone();
        let dismiss_timer = Timeout::new(timing.visible_ms, move || {
            link.send_message(ToastMsg::Dismiss)
        });

        Self {
            shown: false,
            leaving: false,
            enter_timer: Some(enter_timer),
            dismiss_timer: Some(dismiss_timer),
            remove_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ToastMsg::SlideIn => {
                self.enter_timer = None;
                if self.leaving {
                    return false;
                }
                self.shown = true;
                true
            }
            ToastMsg::Dismiss => {
                if self.leaving {
                    return false;
                }
                self.leaving = true;
                self.shown = false;
                self.enter_timer = None;
                self.dismiss_timer = None;
                let link = ctx.link().clone();
                self.remove_timer = Some(Timeout::new(ctx.props().timing.exit_ms, move || {
                    link.send_message(ToastMsg::Remove)
                }));
                true
            }
            ToastMsg::Remove => {
                self.remove_timer = None;
                ctx.props().on_removed.emit(ctx.props().notification.id);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let notification = &ctx.props().notification;
        let close = ctx.link().callback(|_: MouseEvent| ToastMsg::Dismiss);

        html! {
            <div
                class={classes!("notification", notification.kind.class_name())}
                style={toast_style(notification.kind, self.shown)}
                role="status"
            >
                <div class="notification-content">
                    <span class="notification-message">{ notification.message.clone() }</span>
                    <button class="notification-close" onclick={close}>{"×"}</button>
                </div>
            </div>
        }
    }
}
