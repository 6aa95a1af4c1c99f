mod bl;
pub mod data_types;
pub mod menu;
pub mod render_access;

pub use bl::alert_builder;
