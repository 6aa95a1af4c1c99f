use confeitaria_lib::alert_builder::show_alert;
use dioxus::prelude::*;

use crate::components::alert_host::use_alerts;
use crate::i18n::t;

const FORMAS_PAGAMENTO: [&str; 4] = ["Dinheiro", "Pix", "Cartão", "Doação"];

/// One message per invalid field, in form order. Donated sales carry
/// no value, so the value field is only checked for regular sales.
fn validar_venda(produto: &str, quantidade: &str, valor: &str, doado: bool) -> Vec<String> {
    let mut erros = Vec::new();
    if produto.trim().is_empty() {
        erros.push("Informe o produto vendido.".to_string());
    }
    match quantidade.trim().parse::<u32>() {
        Ok(quantidade) if quantidade > 0 => {}
        _ => erros.push("Quantidade deve ser um número inteiro maior que zero.".to_string()),
    }
    if !doado {
        match valor.trim().replace(',', ".").parse::<f64>() {
            Ok(valor) if valor > 0.0 => {}
            _ => erros.push("Informe um valor de venda maior que zero.".to_string()),
        }
    }
    erros
}

#[component]
pub fn VendasView() -> Element {
    let mut alerts = use_alerts();
    let mut produto = use_signal(String::new);
    let mut quantidade = use_signal(String::new);
    let mut valor = use_signal(String::new);
    let mut forma_pagamento = use_signal(|| FORMAS_PAGAMENTO[0].to_string());

    let mut registrar = move || {
        let doado = forma_pagamento() == "Doação";
        let erros = validar_venda(&produto(), &quantidade(), &valor(), doado);
        if erros.is_empty() {
            produto.set(String::new());
            quantidade.set(String::new());
            valor.set(String::new());
            show_alert(&mut alerts, "success", "Venda registrada com sucesso!", false);
        } else {
            show_alert(&mut alerts, "error", erros, false);
        }
    };

    rsx! {
        section { class: "view-content",
            h1 { {t("vendas-heading")} }
            div { class: "form-grid",
                label { {t("vendas-produto-label")}
                    input {
                        r#type: "text",
                        placeholder: t("vendas-produto-placeholder"),
                        value: produto(),
                        oninput: move |evt| produto.set(evt.value()),
                    }
                }
                label { {t("vendas-quantidade-label")}
                    input {
                        r#type: "text",
                        value: quantidade(),
                        oninput: move |evt| quantidade.set(evt.value()),
                    }
                }
                label { {t("vendas-valor-label")}
                    input {
                        r#type: "text",
                        value: valor(),
                        oninput: move |evt| valor.set(evt.value()),
                    }
                }
                label { {t("vendas-forma-label")}
                    select {
                        value: forma_pagamento(),
                        onchange: move |evt| forma_pagamento.set(evt.value()),
                        for forma in FORMAS_PAGAMENTO {
                            option { value: forma, {forma} }
                        }
                    }
                }
                button {
                    class: "button",
                    onclick: move |_| registrar(),
                    {t("vendas-submit")}
                }
            }
        }
    }
}
