use crate::data_types::AlertConfig;

mod log_renderer;
#[cfg(any(test, feature = "test-utils"))]
mod mock_renderer;
#[cfg(target_arch = "wasm32")]
mod swal;

pub use log_renderer::LogRenderer;
#[cfg(any(test, feature = "test-utils"))]
pub use mock_renderer::MockRenderer;
#[cfg(target_arch = "wasm32")]
pub use swal::SwalRenderer;

/// The external modal library, seen from this crate: one
/// fire-and-forget call taking a finished configuration.
pub trait AlertRenderer {
    fn fire(&mut self, config: AlertConfig);
}

pub enum RendererTypes {
    #[cfg(any(test, feature = "test-utils"))]
    Mock,
    Log,
    #[cfg(target_arch = "wasm32")]
    Swal,
}

#[must_use]
pub fn get_renderer(renderer_type: RendererTypes) -> Option<Box<dyn AlertRenderer>> {
    match renderer_type {
        #[cfg(any(test, feature = "test-utils"))]
        RendererTypes::Mock => Some(Box::new(MockRenderer::new())),
        RendererTypes::Log => Some(Box::new(LogRenderer)),
        #[cfg(target_arch = "wasm32")]
        RendererTypes::Swal => Some(Box::new(SwalRenderer)),
    }
}
