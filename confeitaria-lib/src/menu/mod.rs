#[cfg(target_arch = "wasm32")]
mod dom_binding;
#[cfg(target_arch = "wasm32")]
pub use dom_binding::bind_menu_toggle;

/// Ids and class carried by the host page markup.
pub const TOGGLE_CONTROL_ID: &str = "toggleMenu";
pub const MENU_CONTAINER_ID: &str = "menuLateral";
pub const COLLAPSED_CLASS: &str = "recolhido";

/// Collapsed/expanded state of the side menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    collapsed: bool,
}

impl MenuState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    #[must_use]
    pub fn is_collapsed(self) -> bool {
        self.collapsed
    }

    /// Class string for the menu container element.
    #[must_use]
    pub fn container_class(self) -> &'static str {
        if self.collapsed {
            "menu-lateral recolhido"
        } else {
            "menu-lateral"
        }
    }
}
