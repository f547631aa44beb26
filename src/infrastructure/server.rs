// Infrastructure: Server setup and configuration
// Single Responsibility: Manage server lifecycle and configuration

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::application::http_service::{self, AppState};
use crate::domain::solver_service::SolverService;

pub struct ServerConfig {
    pub address: SocketAddr,
    pub solver: Arc<dyn SolverService>,
}

impl ServerConfig {
    pub fn new(address: SocketAddr, solver: Arc<dyn SolverService>) -> Self {
        Self { address, solver }
    }
}

pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        solver: config.solver,
    });

    // Allow-all CORS so the plotting frontend can be served from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = http_service::router(state)
        .fallback_service(ServeDir::new("static"))
        .layer(cors);

    print_banner(&config.address);
    tracing::info!(address = %config.address, "server starting");

    let listener = tokio::net::TcpListener::bind(config.address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner(address: &SocketAddr) {
    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║  GraphLP - Linear Programming Solver with Graphical Method ║");
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║  Listening on: {:43} ║", address);
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║  Endpoints:                                                ║");
    println!("║    POST /api/LPPsolver/Numerical                           ║");
    println!("║    POST /api/LPPsolver/graphical2D                         ║");
    println!("║    POST /api/LPPsolver/graphical3D                         ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!("\nReady to solve optimization problems.\n");
}
