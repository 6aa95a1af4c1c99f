use std::str::FromStr;

use serde::Serialize;
use strum_macros::EnumString;

/// Accent used when the category carries no styling of its own.
pub const DEFAULT_CONFIRM_COLOR: &str = "#ff7700";
pub const SUCCESS_CONFIRM_COLOR: &str = "#2ecc71";
pub const ERROR_CONFIRM_COLOR: &str = "#e74c3c";

pub const SUCCESS_TITLE: &str = "Sucesso!";
pub const ERROR_TITLE: &str = "Oops...";

/// Icon identifiers understood by the modal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertIcon {
    Success,
    Error,
}

/// Message body, routed to the `text` or `html` field of the
/// rendered configuration depending on how the caller built it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertBody {
    Text(String),
    Html(String),
}

/// Alert category parsed from a free-form string. Unrecognized
/// categories (including the empty string) fall back to `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum AlertKind {
    #[strum(serialize = "success")]
    Success,
    #[strum(serialize = "error")]
    Error,
    Neutral,
}

impl AlertKind {
    #[must_use]
    pub fn from_category(category: &str) -> Self {
        Self::from_str(category).unwrap_or(Self::Neutral)
    }

    #[must_use]
    pub fn icon(self) -> Option<AlertIcon> {
        match self {
            Self::Success => Some(AlertIcon::Success),
            Self::Error => Some(AlertIcon::Error),
            Self::Neutral => None,
        }
    }

    #[must_use]
    pub fn title(self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SUCCESS_TITLE),
            Self::Error => Some(ERROR_TITLE),
            Self::Neutral => None,
        }
    }

    #[must_use]
    pub fn confirm_button_color(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_CONFIRM_COLOR,
            Self::Error => ERROR_CONFIRM_COLOR,
            Self::Neutral => DEFAULT_CONFIRM_COLOR,
        }
    }
}

/// Configuration handed to the alert renderer. Serializes to the
/// modal library's own shape: `icon`, `title`, `confirmButtonColor`
/// and a `text` or `html` body key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<AlertIcon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    pub confirm_button_color: &'static str,
    #[serde(flatten)]
    pub body: AlertBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_parse_case_sensitively() {
        assert_eq!(AlertKind::from_category("success"), AlertKind::Success);
        assert_eq!(AlertKind::from_category("error"), AlertKind::Error);
        assert_eq!(AlertKind::from_category("Success"), AlertKind::Neutral);
        assert_eq!(AlertKind::from_category("ERROR"), AlertKind::Neutral);
    }

    #[test]
    fn test_unknown_categories_keep_default_styling() {
        for category in ["info", "", "warning", "sucesso"] {
            let kind = AlertKind::from_category(category);
            assert_eq!(kind, AlertKind::Neutral);
            assert_eq!(kind.icon(), None);
            assert_eq!(kind.title(), None);
            assert_eq!(kind.confirm_button_color(), DEFAULT_CONFIRM_COLOR);
        }
    }

    #[test]
    fn test_config_serializes_to_the_library_shape() {
        let config = AlertConfig {
            icon: Some(AlertIcon::Success),
            title: Some(SUCCESS_TITLE),
            confirm_button_color: SUCCESS_CONFIRM_COLOR,
            body: AlertBody::Text("Venda registrada com sucesso!".to_string()),
        };
        let value = serde_json::to_value(&config).expect("config must serialize");
        assert_eq!(value["icon"], "success");
        assert_eq!(value["title"], "Sucesso!");
        assert_eq!(value["confirmButtonColor"], "#2ecc71");
        assert_eq!(value["text"], "Venda registrada com sucesso!");
        assert!(value.get("html").is_none());
    }

    #[test]
    fn test_markup_body_uses_the_html_key() {
        let config = AlertConfig {
            icon: None,
            title: None,
            confirm_button_color: DEFAULT_CONFIRM_COLOR,
            body: AlertBody::Html("<b>atalhos</b>".to_string()),
        };
        let value = serde_json::to_value(&config).expect("config must serialize");
        assert_eq!(value["html"], "<b>atalhos</b>");
        assert!(value.get("text").is_none());
        assert!(value.get("icon").is_none());
        assert!(value.get("title").is_none());
    }
}
