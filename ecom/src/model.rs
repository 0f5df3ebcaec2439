use scoring::Prediction;
use serde::{Deserialize, Serialize};

/// Body of `POST /analyze-amazon`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeListingRequest {
    pub url: String,
    pub check_product: bool,
    pub check_reviews: bool,
}

impl AnalyzeListingRequest {
    pub fn new(url: impl Into<String>, check_product: bool, check_reviews: bool) -> Self {
        Self {
            url: url.into(),
            check_product,
            check_reviews,
        }
    }
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub review: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub review: String,
    pub prediction: Prediction,
}

/// JSON body returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub error: String,
}
