pub mod embed;
pub mod health;
pub mod pages;
pub mod visitors;

pub use embed::get_embed_visitors;
pub use health::health_check;
pub use pages::{get_index, get_page};
pub use visitors::get_visitors;
