pub mod config;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod storage;
pub mod validation;
