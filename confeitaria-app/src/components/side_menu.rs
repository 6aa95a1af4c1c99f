use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::layout::use_menu;
use crate::components::main_view::ViewKind;
use crate::i18n::t;

#[component]
pub fn SideMenu(mut selection: Signal<ViewKind>) -> Element {
    let mut menu = use_menu();
    let state = menu();

    rsx! {
        nav { class: state.container_class(),
            button {
                class: "menu-lateral__toggle",
                aria_label: t("menu-toggle-label"),
                onclick: move |_| menu.write().toggle(),
                if state.is_collapsed() { "»" } else { "«" }
            }
            if !state.is_collapsed() {
                span { class: "menu-lateral__title", {t("app-title")} }
            }
            for view in ViewKind::iter() {
                button {
                    class: if selection() == view {
                        "menu-lateral__item menu-lateral__item--selected"
                    } else {
                        "menu-lateral__item"
                    },
                    onclick: move |_| selection.set(view),
                    span { class: "menu-lateral__label", {t(view.label_key())} }
                }
            }
        }
    }
}
