// Application layer: request/response shaping and endpoint handlers

#[cfg(feature = "server")]
pub mod http_service;
pub mod mappers;

#[cfg(feature = "server")]
pub use http_service::AppState;
