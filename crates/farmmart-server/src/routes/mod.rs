//! HTTP route handlers.

mod assist;
mod products;

pub use assist::{chat_handler, predict_handler};
pub use products::{get_product, list_products};
