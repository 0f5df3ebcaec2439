use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use common::config::{AnalyzerMode, BackendConfig, Config};
use http::header;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::{sync::Arc, time::Instant};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    GenericError,
    model::{AnalyzeListingRequest, PredictRequest},
    remote::RemoteAnalysisService,
    service::{AnalysisService, LocalAnalysisService},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "ecom/config/dev.yaml")]
    pub config: String,
}

pub fn initialize_executable() -> Result<Config, GenericError> {
    if let Ok(path) = dotenvy::dotenv() {
        println!("Loaded environment from {:?}", path);
    }

    let args = Args::parse();
    println!("Loading config from: {}", args.config);
    let config = Config::load(&args.config)?;

    Ok(config)
}

pub fn initialize_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn install_metrics_recorder() -> Result<PrometheusHandle, GenericError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install metrics recorder: {e}"))?;
    Ok(handle)
}

pub fn build_analysis_service(config: &Config) -> Result<Arc<dyn AnalysisService>, GenericError> {
    let service: Arc<dyn AnalysisService> = match config.backend.analyzer {
        AnalyzerMode::Local => Arc::new(LocalAnalysisService::new(&config.scoring)),
        AnalyzerMode::Remote => Arc::new(RemoteAnalysisService::from_config(&config.backend)?),
    };
    tracing::info!(analyzer = ?config.backend.analyzer, "Analysis service ready");
    Ok(service)
}

#[derive(Clone)]
pub struct AppState {
    service: Arc<dyn AnalysisService>,
    metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(service: Arc<dyn AnalysisService>, metrics: Option<PrometheusHandle>) -> Self {
        Self { service, metrics }
    }
}

pub fn build_router(state: AppState, allowed_origin: &str) -> Result<Router, GenericError> {
    let origin = allowed_origin.parse::<header::HeaderValue>()?;

    let app = Router::new()
        .route("/analyze-amazon", post(analyze_listing))
        .route("/predict", post(predict_review))
        .route("/health", get(health_check))
        .route("/metrics", get(render_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    Ok(app)
}

pub async fn run_backend(
    config: BackendConfig,
    service: Arc<dyn AnalysisService>,
    metrics: PrometheusHandle,
) -> Result<(), GenericError> {
    let app = build_router(AppState::new(service, Some(metrics)), &config.allowed_origin)?;

    tracing::info!("Starting backend service at {}", config.server_address);
    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub async fn analyze_listing(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeListingRequest>,
) -> Response {
    tracing::info!(
        url = %request.url,
        check_product = request.check_product,
        check_reviews = request.check_reviews,
        "Processing listing analysis request"
    );

    let t0 = Instant::now();
    let result = state.service.analyze_listing(request).await;
    histogram!("fakescan_request_seconds", "op" => "analyze_listing")
        .record(t0.elapsed().as_secs_f64());

    match result {
        Ok(analysis) => {
            if let Some(product) = &analysis.product_result {
                let verdict = if product.is_fake { "fake" } else { "genuine" };
                counter!("fakescan_listing_verdicts_total", "verdict" => verdict).increment(1);
            }
            (StatusCode::OK, Json(analysis)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn predict_review(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Response {
    tracing::info!(review_len = request.review.len(), "Processing review prediction request");

    let t0 = Instant::now();
    let result = state.service.predict_review(request).await;
    histogram!("fakescan_request_seconds", "op" => "predict_review")
        .record(t0.elapsed().as_secs_f64());

    match result {
        Ok(response) => {
            counter!(
                "fakescan_review_predictions_total",
                "prediction" => response.prediction.to_string()
            )
            .increment(1);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK").into_response()
}

async fn render_metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => (StatusCode::NOT_FOUND, "metrics recorder not installed").into_response(),
    }
}
