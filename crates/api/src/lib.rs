pub mod directive;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::{create_api_routes, create_app, create_embed_routes, create_page_routes};
pub use state::AppState;
