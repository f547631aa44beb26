// Infrastructure module: server lifecycle

pub mod server;

pub use server::{start_server, ServerConfig};
