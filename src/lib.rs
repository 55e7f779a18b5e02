pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;

pub use config::ServerConfig;
pub use error::{DirectoryError, ErrorKind};
