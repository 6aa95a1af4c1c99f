use dioxus::prelude::*;
use strum_macros::EnumIter;

use crate::components::{dashboard::DashboardView, estoque::EstoqueView, vendas::VendasView};

#[derive(Clone, Copy, PartialEq, EnumIter)]
pub enum ViewKind {
    Dashboard,
    Vendas,
    Estoque,
}

impl ViewKind {
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Dashboard => "menu-inicio",
            Self::Vendas => "menu-vendas",
            Self::Estoque => "menu-estoque",
        }
    }
}

#[component]
pub fn MainView(selection: Signal<ViewKind>) -> Element {
    rsx! {
        main { class: "content-shell", role: "main",
            match selection() {
                ViewKind::Dashboard => rsx! {
                    DashboardView {}
                },
                ViewKind::Vendas => rsx! {
                    VendasView {}
                },
                ViewKind::Estoque => rsx! {
                    EstoqueView {}
                },
            }
        }
    }
}
