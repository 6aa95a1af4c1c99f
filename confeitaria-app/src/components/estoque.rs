use confeitaria_lib::alert_builder::show_alert;
use dioxus::prelude::*;

use crate::components::alert_host::use_alerts;
use crate::i18n::t;

const UNIDADES: [&str; 5] = ["kg", "g", "L", "mL", "un"];

fn validar_entrada(nome: &str, quantidade: &str) -> Vec<String> {
    let mut erros = Vec::new();
    if nome.trim().is_empty() {
        erros.push("Informe o nome da matéria-prima.".to_string());
    }
    match quantidade.trim().replace(',', ".").parse::<f64>() {
        Ok(quantidade) if quantidade > 0.0 => {}
        _ => erros.push("Quantidade deve ser maior que zero.".to_string()),
    }
    erros
}

#[component]
pub fn EstoqueView() -> Element {
    let mut alerts = use_alerts();
    let mut nome = use_signal(String::new);
    let mut quantidade = use_signal(String::new);
    let mut unidade = use_signal(|| UNIDADES[0].to_string());

    let mut salvar = move || {
        let erros = validar_entrada(&nome(), &quantidade());
        if erros.is_empty() {
            nome.set(String::new());
            quantidade.set(String::new());
            show_alert(
                &mut alerts,
                "success",
                "Matéria-prima salva com sucesso!",
                false,
            );
        } else {
            show_alert(&mut alerts, "error", erros, false);
        }
    };

    rsx! {
        section { class: "view-content",
            h1 { {t("estoque-heading")} }
            div { class: "form-grid",
                label { {t("estoque-nome-label")}
                    input {
                        r#type: "text",
                        placeholder: t("estoque-nome-placeholder"),
                        value: nome(),
                        oninput: move |evt| nome.set(evt.value()),
                    }
                }
                label { {t("estoque-quantidade-label")}
                    input {
                        r#type: "text",
                        value: quantidade(),
                        oninput: move |evt| quantidade.set(evt.value()),
                    }
                }
                label { {t("estoque-unidade-label")}
                    select {
                        value: unidade(),
                        onchange: move |evt| unidade.set(evt.value()),
                        for u in UNIDADES {
                            option { value: u, {u} }
                        }
                    }
                }
                button {
                    class: "button",
                    onclick: move |_| salvar(),
                    {t("estoque-submit")}
                }
            }
        }
    }
}
