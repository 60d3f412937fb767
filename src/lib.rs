pub mod auth;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod extractors;
pub mod models;
pub mod note;
pub mod openapi;
pub mod report;
pub mod routes;
pub mod transaction;
pub mod user;
