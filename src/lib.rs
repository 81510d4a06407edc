pub mod api;
pub mod assets;
pub mod configuration;
pub mod docs;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod tailwind;
pub mod templates;
pub mod typewriter;

pub use routes::router;
