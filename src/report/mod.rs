pub mod aggregate;
pub mod handlers;
pub mod models;
pub mod period;
pub mod service;

pub use handlers::generate_report;
