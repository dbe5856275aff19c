pub mod app;
pub mod components;
pub mod palette;
pub mod state;

pub use app::ChatApp;
