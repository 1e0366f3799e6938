pub mod auth;
pub mod config;
pub mod content;
pub mod model;
pub use deadpool_diesel;
