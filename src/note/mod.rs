pub mod handlers;
pub mod models;
pub mod service;

pub use handlers::{create_note, delete_note, get_note, list_notes, update_note};
