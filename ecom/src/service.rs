use async_trait::async_trait;
use common::config::ScoringConfig;
use scoring::{
    IdentifierFakeScorer, ListingAnalysis, ListingId, ScoreRequest, TextFakeScorer,
    extract_listing_id,
    jitter::ThreadJitter,
    reference::extract_listing_id_or_random,
};
use tracing::{debug, info};

use crate::{
    error::AnalysisError,
    model::{AnalyzeListingRequest, PredictRequest, PredictResponse},
};

#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze_listing(
        &self,
        request: AnalyzeListingRequest,
    ) -> Result<ListingAnalysis, AnalysisError>;

    async fn predict_review(&self, request: PredictRequest)
    -> Result<PredictResponse, AnalysisError>;
}

/// Answers requests with the in-process heuristics.
#[derive(Debug, Default, Clone)]
pub struct LocalAnalysisService {
    identifier_scorer: IdentifierFakeScorer,
    text_scorer: TextFakeScorer,
    random_fallback_token: bool,
}

impl LocalAnalysisService {
    pub fn new(config: &ScoringConfig) -> Self {
        info!(
            random_fallback_token = config.random_fallback_token,
            "Initializing local analysis service"
        );
        Self {
            identifier_scorer: IdentifierFakeScorer::new(),
            text_scorer: TextFakeScorer::new(),
            random_fallback_token: config.random_fallback_token,
        }
    }

    fn listing_id(&self, url: &str) -> Result<ListingId, AnalysisError> {
        let listing_id = if self.random_fallback_token {
            extract_listing_id_or_random(url, &mut rand::rng())?
        } else {
            extract_listing_id(url)?
        };
        Ok(listing_id)
    }

    fn score_listing(
        &self,
        request: &AnalyzeListingRequest,
    ) -> Result<ListingAnalysis, AnalysisError> {
        if !request.check_product && !request.check_reviews {
            return Err(AnalysisError::NothingSelected);
        }

        let listing_id = self.listing_id(&request.url)?;
        debug!(listing_id = %listing_id, "Extracted listing id");

        let score_request =
            ScoreRequest::new(listing_id, request.check_product, request.check_reviews);
        Ok(self
            .identifier_scorer
            .score(&score_request, &mut ThreadJitter))
    }
}

#[async_trait]
impl AnalysisService for LocalAnalysisService {
    async fn analyze_listing(
        &self,
        request: AnalyzeListingRequest,
    ) -> Result<ListingAnalysis, AnalysisError> {
        self.score_listing(&request)
    }

    async fn predict_review(
        &self,
        request: PredictRequest,
    ) -> Result<PredictResponse, AnalysisError> {
        let verdict = self.text_scorer.score(&request.review);
        debug!(score = verdict.score, is_fake = verdict.is_fake, "Review scored");

        Ok(PredictResponse {
            review: request.review,
            prediction: verdict.prediction(),
        })
    }
}
