// Presentation layer - HTTP facade
pub mod app_state;
pub mod handlers;
pub mod routes;
