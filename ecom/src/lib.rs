//! HTTP adapter around the scoring core.
//!
//! Requests are answered either by the local heuristics or by forwarding to a
//! remote classifier with the same wire contract.

use std::error::Error;

pub mod error;
pub mod executable_utils;
pub mod model;
pub mod remote;
pub mod service;

pub type GenericError = Box<dyn Error + Send + Sync>;

pub use error::AnalysisError;
pub use model::{AnalyzeListingRequest, ErrorBody, PredictRequest, PredictResponse};
pub use remote::RemoteAnalysisService;
pub use service::{AnalysisService, LocalAnalysisService};
