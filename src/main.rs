use graphlp::{start_server, ServerConfig, SolverFactory};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Bind address is configurable; defaults cover local development
    let address = std::env::var("GRAPHLP_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;

    // Default numerical backend; requests may override per problem
    let solver = SolverFactory::default_solver();

    let config = ServerConfig::new(address, solver);
    start_server(config).await?;

    Ok(())
}
