/// Message input for an alert: a single string, a sequence of lines
/// (validation errors arrive as one message per field), or nothing.
/// An absent message is the `Empty` variant, which `Default` yields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlertMessage {
    #[default]
    Empty,
    Text(String),
    Lines(Vec<String>),
}

impl AlertMessage {
    /// True for the empty string and the empty sequence as well as
    /// for the absent message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Lines(lines) => lines.is_empty(),
        }
    }

    #[must_use]
    pub fn joined_text(&self) -> String {
        self.joined("\n")
    }

    #[must_use]
    pub fn joined_markup(&self) -> String {
        self.joined("<br>")
    }

    fn joined(&self, separator: &str) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Lines(lines) => lines.join(separator),
        }
    }
}

impl From<&str> for AlertMessage {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AlertMessage {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for AlertMessage {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}

impl From<&[&str]> for AlertMessage {
    fn from(lines: &[&str]) -> Self {
        Self::Lines(lines.iter().map(ToString::to_string).collect())
    }
}
