use std::ops::Range;
use tracing::{debug, trace};

use crate::{
    jitter::JitterSource,
    model::{ListingAnalysis, ListingId, ProductVerdict, ReviewCorpusVerdict, ScoreRequest},
};

/// Ranked explanations for a fake product verdict.
pub const PRODUCT_REASONS: [&str; 4] = [
    "Unusually low price compared to similar products",
    "Seller has multiple negative reviews",
    "Product description contains inconsistencies",
    "Images appear to be stock photos or from different products",
];

/// Ranked patterns reported for a heavily faked review corpus.
pub const REVIEW_PATTERNS: [&str; 5] = [
    "Multiple reviews posted within a short time period",
    "Several reviews with similar phrasing and vocabulary",
    "Excessive use of superlatives and perfect ratings",
    "Reviews from accounts with limited history",
    "Unusual distribution of ratings (mostly 5-star and 1-star)",
];

const FAKE_CONFIDENCE: Range<f64> = 0.7..0.9;
const GENUINE_CONFIDENCE: Range<f64> = 0.8..0.95;
const SUSPICIOUS_PERCENTAGE: f64 = 30.0;
const MIN_TOTAL_REVIEWS: u32 = 50;

/// Sum of the UTF-16 code units of the identifier.
pub fn listing_digest(listing_id: &ListingId) -> u64 {
    listing_id.as_str().encode_utf16().map(u64::from).sum()
}

/// Derives product and review-corpus verdicts from a listing identifier.
///
/// Everything except the product confidence is a function of the identifier digest.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentifierFakeScorer;

impl IdentifierFakeScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score<J: JitterSource + ?Sized>(
        &self,
        request: &ScoreRequest,
        jitter: &mut J,
    ) -> ListingAnalysis {
        let digest = listing_digest(&request.listing_id);
        trace!(listing_id = %request.listing_id, digest, "Scoring listing");

        let analysis = ListingAnalysis {
            product_result: request
                .analyze_product
                .then(|| self.score_product(digest, jitter)),
            reviews_result: request
                .analyze_reviews
                .then(|| self.score_reviews(digest)),
        };

        debug!(
            listing_id = %request.listing_id,
            product_fake = ?analysis.product_result.as_ref().map(|p| p.is_fake),
            fake_percentage = ?analysis.reviews_result.as_ref().map(|r| r.fake_percentage),
            "Listing scored"
        );
        analysis
    }

    pub fn score_product<J: JitterSource + ?Sized>(
        &self,
        digest: u64,
        jitter: &mut J,
    ) -> ProductVerdict {
        let is_fake = digest % 10 > 6;

        let confidence = if is_fake {
            draw_confidence(FAKE_CONFIDENCE, jitter)
        } else {
            draw_confidence(GENUINE_CONFIDENCE, jitter)
        };

        let reasons = if is_fake {
            take_ranked(&PRODUCT_REASONS, 2 + (digest % 3) as usize)
        } else {
            Vec::new()
        };

        ProductVerdict {
            is_fake,
            confidence,
            reasons,
        }
    }

    pub fn score_reviews(&self, digest: u64) -> ReviewCorpusVerdict {
        let fake_percentage = (digest % 100) as f64 / 2.0;
        let total_reviews = MIN_TOTAL_REVIEWS + (digest % 200) as u32;

        let suspicious_patterns = if fake_percentage > SUSPICIOUS_PERCENTAGE {
            take_ranked(&REVIEW_PATTERNS, 2 + (digest % 4) as usize)
        } else {
            Vec::new()
        };

        ReviewCorpusVerdict {
            fake_percentage,
            total_reviews,
            suspicious_patterns,
        }
    }
}

// A unit sample just below 1.0 can round the sum up onto the excluded end.
fn draw_confidence<J: JitterSource + ?Sized>(range: Range<f64>, jitter: &mut J) -> f64 {
    let value = range.start + jitter.jitter(range.end - range.start);
    value.min(range.end - f64::EPSILON)
}

fn take_ranked(table: &[&str], count: usize) -> Vec<String> {
    table.iter().take(count).map(|s| s.to_string()).collect()
}
