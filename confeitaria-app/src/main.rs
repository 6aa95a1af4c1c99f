use dioxus::prelude::*;

/// Define a components module that contains all shared components for our app.
mod components;
mod i18n;

use components::{
    alert_host::AlertHost,
    layout::PanelContext,
    main_view::{MainView, ViewKind},
    side_menu::SideMenu,
};
use confeitaria_lib::data_types::AlertConfig;
use confeitaria_lib::menu::MenuState;

// The asset macro also minifies some assets like CSS and JS to make bundles smaller
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const SIDE_MENU_CSS: Asset = asset!("/assets/styling/side_menu.css");
const ALERT_CSS: Asset = asset!("/assets/styling/alert.css");

fn main() {
    // The `launch` function is the main entry point for a dioxus app. It takes a component and renders it with the platform feature
    // you have enabled
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let menu = use_signal(MenuState::new);
    let active_alert = use_signal(|| None::<AlertConfig>);
    use_context_provider(|| PanelContext { menu, active_alert });

    let selection = use_signal(|| ViewKind::Dashboard);

    // Web builds may be embedded in a host page that ships its own menu
    // control next to the wasm bundle; wire it up if it is there.
    #[cfg(target_arch = "wasm32")]
    use_effect(|| confeitaria_lib::menu::bind_menu_toggle());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: SIDE_MENU_CSS }
        document::Link { rel: "stylesheet", href: ALERT_CSS }

        div { class: "app-shell",
            SideMenu { selection }
            MainView { selection }
            AlertHost {}
        }
    }
}
