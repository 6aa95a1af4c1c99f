use confeitaria_lib::alert_builder::show_alert;
use dioxus::prelude::*;

use crate::components::alert_host::use_alerts;
use crate::i18n::t;

const SOBRE_HTML: &str = "Painel de gestão da confeitaria.<br>\
<b>Vendas</b>: registre as vendas do dia.<br>\
<b>Estoque</b>: dê entrada de matérias-primas.";

#[component]
pub fn DashboardView() -> Element {
    let mut alerts = use_alerts();

    rsx! {
        section { class: "view-content",
            h1 { {t("dashboard-heading")} }
            p { {t("dashboard-intro")} }
            button {
                class: "button",
                onclick: move |_| show_alert(&mut alerts, "info", SOBRE_HTML, true),
                {t("dashboard-about-button")}
            }
        }
    }
}
