//! Shared components for the panel. Components are the building blocks of
//! dioxus apps; the side menu, the main view switch and the modal alert host
//! live here next to the feature views they frame.

pub mod alert_host;
pub mod dashboard;
pub mod estoque;
pub mod layout;
pub mod main_view;
pub mod side_menu;
pub mod vendas;
