pub mod app;
pub mod components;
pub mod routes;
pub mod views;

pub use app::App;
pub use routes::Route;
