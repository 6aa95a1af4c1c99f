use super::AlertRenderer;
use crate::data_types::{AlertBody, AlertConfig};

/// Renderer for builds without a host page: alerts land in the log
/// stream instead of a modal.
pub struct LogRenderer;

impl AlertRenderer for LogRenderer {
    fn fire(&mut self, config: AlertConfig) {
        let body = match &config.body {
            AlertBody::Text(text) | AlertBody::Html(text) => text.as_str(),
        };
        tracing::info!(
            icon = ?config.icon,
            title = config.title,
            color = config.confirm_button_color,
            "{body}"
        );
    }
}
