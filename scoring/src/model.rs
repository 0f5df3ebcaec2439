use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display as EnumDisplay, EnumString};

use crate::reference::ReferenceError;

/// Opaque, non-empty listing token such as an ASIN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ListingId(pub(crate) String);

impl ListingId {
    pub fn new(value: impl Into<String>) -> Result<Self, ReferenceError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ReferenceError::EmptyListingId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ListingId {
    type Error = ReferenceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRequest {
    pub listing_id: ListingId,
    pub analyze_product: bool,
    pub analyze_reviews: bool,
}

impl ScoreRequest {
    pub fn new(listing_id: ListingId, analyze_product: bool, analyze_reviews: bool) -> Self {
        Self {
            listing_id,
            analyze_product,
            analyze_reviews,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVerdict {
    pub is_fake: bool,
    pub confidence: f64,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCorpusVerdict {
    pub fake_percentage: f64,
    pub total_reviews: u32,
    pub suspicious_patterns: Vec<String>,
}

/// Result of a listing analysis. A field is absent when its analysis was not requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_result: Option<ProductVerdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews_result: Option<ReviewCorpusVerdict>,
}

impl ListingAnalysis {
    pub fn is_empty(&self) -> bool {
        self.product_result.is_none() && self.reviews_result.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewVerdict {
    pub is_fake: bool,
    pub score: f64,
}

impl ReviewVerdict {
    pub fn prediction(&self) -> Prediction {
        if self.is_fake {
            Prediction::Fake
        } else {
            Prediction::Genuine
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumDisplay, EnumString)]
pub enum Prediction {
    Fake,
    Genuine,
}
