pub mod assets;
pub mod auth;
pub mod config;
pub mod db;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;
pub mod user;

pub use routes::AppState;
