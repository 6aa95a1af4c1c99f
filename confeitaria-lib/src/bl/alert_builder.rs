use crate::data_types::{AlertBody, AlertConfig, AlertKind, AlertMessage};
use crate::render_access::AlertRenderer;

/// Maps a `(category, message)` pair onto a renderer configuration.
///
/// Returns `None` when the message is empty or absent. Otherwise the
/// config carries the default accent, the body in the markup or
/// plain-text field per `is_html`, and for the `success` and `error`
/// categories the matching icon, title and accent override.
pub fn build_alert(
    category: &str,
    message: impl Into<AlertMessage>,
    is_html: bool,
) -> Option<AlertConfig> {
    let message = message.into();
    if message.is_empty() {
        return None;
    }

    let body = if is_html {
        AlertBody::Html(message.joined_markup())
    } else {
        AlertBody::Text(message.joined_text())
    };

    let kind = AlertKind::from_category(category);
    Some(AlertConfig {
        icon: kind.icon(),
        title: kind.title(),
        confirm_button_color: kind.confirm_button_color(),
        body,
    })
}

/// Builds the configuration and hands it to the renderer. An empty or
/// absent message short-circuits without a rendering call; nothing is
/// reported back either way.
pub fn show_alert(
    renderer: &mut dyn AlertRenderer,
    category: &str,
    message: impl Into<AlertMessage>,
    is_html: bool,
) {
    let Some(config) = build_alert(category, message, is_html) else {
        tracing::debug!(category, "empty alert message, nothing to render");
        return;
    };
    renderer.fire(config);
}
