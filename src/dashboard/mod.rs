pub mod handlers;
pub mod models;
pub mod service;
pub mod summary;

pub use handlers::get_dashboard;
