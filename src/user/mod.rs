pub mod handlers;
pub mod models;
pub mod service;

pub use handlers::{create_user, delete_current_user, get_current_user};
