use wasm_bindgen::prelude::*;

use super::AlertRenderer;
use crate::data_types::AlertConfig;

#[wasm_bindgen]
unsafe extern "C" {
    /// `Swal.fire(config)` from the host page's bundled modal library.
    #[wasm_bindgen(js_namespace = Swal, js_name = fire)]
    fn swal_fire(config: &JsValue);
}

/// Renderer for web builds embedded in a host page that ships the
/// modal library. The configuration crosses the boundary as a plain
/// object, built from its JSON form.
pub struct SwalRenderer;

impl AlertRenderer for SwalRenderer {
    fn fire(&mut self, config: AlertConfig) {
        let parsed = serde_json::to_string(&config)
            .ok()
            .and_then(|json| js_sys::JSON::parse(&json).ok());
        match parsed {
            Some(value) => swal_fire(&value),
            None => tracing::error!("alert config could not cross into the host page"),
        }
    }
}
