use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::ReferenceError;
use thiserror::Error;

use crate::model::ErrorBody;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error("At least one of checkProduct or checkReviews must be set")]
    NothingSelected,

    #[error("Remote analyzer request failed: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("Remote analyzer returned status {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("Remote analyzer returned an unexpected payload: {0}")]
    RemotePayload(String),

    #[error("Invalid remote endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

impl AnalysisError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::Reference(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AnalysisError::NothingSelected => StatusCode::BAD_REQUEST,
            AnalysisError::Remote(_)
            | AnalysisError::RemoteStatus { .. }
            | AnalysisError::RemotePayload(_) => StatusCode::BAD_GATEWAY,
            AnalysisError::Endpoint(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Reference(ReferenceError::UnparseableReference(_)) => {
                "unparseable_reference"
            }
            AnalysisError::Reference(ReferenceError::EmptyListingId) => "empty_listing_id",
            AnalysisError::NothingSelected => "nothing_selected",
            AnalysisError::Remote(_) => "remote_unavailable",
            AnalysisError::RemoteStatus { .. } => "remote_status",
            AnalysisError::RemotePayload(_) => "remote_payload",
            AnalysisError::Endpoint(_) => "endpoint",
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let kind = self.kind();
        if status.is_server_error() {
            tracing::error!(error = %self, kind, "Analysis failed");
        } else {
            tracing::warn!(error = %self, kind, "Analysis rejected");
        }

        let body = ErrorBody {
            kind: kind.to_string(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
