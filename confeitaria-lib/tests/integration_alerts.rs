#![cfg(feature = "test-utils")]

use confeitaria_lib::alert_builder::show_alert;
use confeitaria_lib::data_types::{
    AlertBody, AlertIcon, DEFAULT_CONFIRM_COLOR, ERROR_CONFIRM_COLOR, SUCCESS_CONFIRM_COLOR,
};
use confeitaria_lib::render_access::{MockRenderer, RendererTypes, get_renderer};

#[test]
fn test_user_sees_one_success_modal_after_saving_a_sale() {
    let mut renderer = MockRenderer::new();

    show_alert(
        &mut renderer,
        "success",
        "Venda registrada com sucesso!",
        false,
    );

    assert_eq!(renderer.fired.len(), 1);
    let config = &renderer.fired[0];
    assert_eq!(config.icon, Some(AlertIcon::Success));
    assert_eq!(config.title, Some("Sucesso!"));
    assert_eq!(config.confirm_button_color, SUCCESS_CONFIRM_COLOR);
    assert_eq!(
        config.body,
        AlertBody::Text("Venda registrada com sucesso!".to_string())
    );
}

#[test]
fn test_user_sees_every_stock_validation_error_in_one_modal() {
    let mut renderer = MockRenderer::new();
    let erros_de_estoque = vec![
        "Estoque insuficiente de Chocolate.".to_string(),
        "Estoque insuficiente de Açúcar.".to_string(),
        "Nenhum produto foi adicionado à produção.".to_string(),
    ];

    show_alert(&mut renderer, "error", erros_de_estoque, false);

    assert_eq!(renderer.fired.len(), 1);
    let config = &renderer.fired[0];
    assert_eq!(config.icon, Some(AlertIcon::Error));
    assert_eq!(config.title, Some("Oops..."));
    assert_eq!(config.confirm_button_color, ERROR_CONFIRM_COLOR);
    match &config.body {
        AlertBody::Text(text) => assert_eq!(text.lines().count(), 3),
        AlertBody::Html(_) => panic!("plain messages must not land in the markup field"),
    }
}

#[test]
fn test_user_sees_nothing_when_there_is_nothing_to_say() {
    let mut renderer = MockRenderer::new();

    show_alert(&mut renderer, "success", "", false);
    show_alert(&mut renderer, "error", Vec::<String>::new(), true);

    assert!(renderer.fired.is_empty());
}

#[test]
fn test_markup_notice_keeps_the_default_accent() {
    let mut renderer = MockRenderer::new();

    show_alert(
        &mut renderer,
        "info",
        "Bem-vindo ao <b>painel</b> da confeitaria.",
        true,
    );

    assert_eq!(renderer.fired.len(), 1);
    let config = &renderer.fired[0];
    assert_eq!(config.icon, None);
    assert_eq!(config.title, None);
    assert_eq!(config.confirm_button_color, DEFAULT_CONFIRM_COLOR);
    assert_eq!(
        config.body,
        AlertBody::Html("Bem-vindo ao <b>painel</b> da confeitaria.".to_string())
    );
}

#[test]
fn test_factory_provides_the_test_renderer() {
    assert!(get_renderer(RendererTypes::Mock).is_some());
    assert!(get_renderer(RendererTypes::Log).is_some());
}
