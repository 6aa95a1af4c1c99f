use super::AlertRenderer;
use crate::data_types::AlertConfig;

/// Records every configuration it is asked to render.
#[derive(Debug, Default)]
pub struct MockRenderer {
    pub fired: Vec<AlertConfig>,
}

impl MockRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AlertRenderer for MockRenderer {
    fn fire(&mut self, config: AlertConfig) {
        self.fired.push(config);
    }
}
