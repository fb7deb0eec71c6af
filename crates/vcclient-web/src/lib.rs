pub mod api;
pub mod app;
pub mod components;
pub mod notify;
pub mod state;

pub use app::App;
