use std::error::Error;

use ecom::executable_utils::{
    build_analysis_service, initialize_executable, initialize_tracing, install_metrics_recorder,
    run_backend,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    println!("Starting backend...");
    let config = initialize_executable()?;
    initialize_tracing(&config.backend.log_level);
    let metrics = install_metrics_recorder()?;
    let service = build_analysis_service(&config)?;
    run_backend(config.backend, service, metrics).await
}
