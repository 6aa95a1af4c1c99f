use confeitaria_lib::data_types::{AlertBody, AlertConfig, AlertIcon};
use confeitaria_lib::render_access::AlertRenderer;
use dioxus::prelude::*;

use crate::components::layout::PanelContext;

/// The panel's alert renderer: firing a configuration opens the modal
/// drawn by [`AlertHost`]. A new alert replaces the one on screen.
#[derive(Clone, Copy)]
pub struct ModalAlerts {
    active: Signal<Option<AlertConfig>>,
}

impl AlertRenderer for ModalAlerts {
    fn fire(&mut self, config: AlertConfig) {
        self.active.set(Some(config));
    }
}

/// Convenience hook to get the renderer wired to the panel's modal.
pub fn use_alerts() -> ModalAlerts {
    ModalAlerts {
        active: use_context::<PanelContext>().active_alert,
    }
}

#[component]
pub fn AlertHost() -> Element {
    let mut active = use_context::<PanelContext>().active_alert;

    rsx! {
        if let Some(config) = active() {
            div { class: "alert-modal",
                div {
                    class: "alert-modal__backdrop",
                    onclick: move |_| active.set(None),
                }
                div { class: "alert-modal__panel",
                    match config.icon {
                        Some(AlertIcon::Success) => rsx! {
                            div { class: "alert-modal__icon alert-modal__icon--success", "✓" }
                        },
                        Some(AlertIcon::Error) => rsx! {
                            div { class: "alert-modal__icon alert-modal__icon--error", "✕" }
                        },
                        None => rsx! {},
                    }
                    if let Some(title) = config.title {
                        h2 { class: "alert-modal__title", {title} }
                    }
                    match config.body.clone() {
                        AlertBody::Text(text) => rsx! {
                            p { class: "alert-modal__body", {text} }
                        },
                        AlertBody::Html(html) => rsx! {
                            div { class: "alert-modal__body", dangerous_inner_html: html }
                        },
                    }
                    button {
                        class: "alert-modal__confirm",
                        style: format!("background-color: {};", config.confirm_button_color),
                        onclick: move |_| active.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}
