use confeitaria_lib::data_types::AlertConfig;
use confeitaria_lib::menu::MenuState;
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct PanelContext {
    pub menu: Signal<MenuState>,
    pub active_alert: Signal<Option<AlertConfig>>,
}

/// Convenience hook to access the side menu state signal.
pub fn use_menu() -> Signal<MenuState> {
    use_context::<PanelContext>().menu
}
