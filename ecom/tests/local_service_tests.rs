use common::config::ScoringConfig;
use common::fixtures::{
    EVERYTHING_REVIEW, FAKE_LISTING_ID, GENUINE_LISTING_ID, GENUINE_REVIEW, SUPERLATIVE_REVIEW,
    product_url,
};
use ecom::{AnalysisError, AnalyzeListingRequest, PredictRequest, service::{AnalysisService, LocalAnalysisService}};
use scoring::{Prediction, ReferenceError};

fn strict_service() -> LocalAnalysisService {
    LocalAnalysisService::new(&ScoringConfig::default())
}

#[tokio::test]
async fn test_listing_url_is_scored() {
    let analysis = strict_service()
        .analyze_listing(AnalyzeListingRequest::new(product_url(GENUINE_LISTING_ID), true, true))
        .await
        .unwrap();

    let product = analysis.product_result.unwrap();
    assert!(!product.is_fake);
    assert!((0.8..0.95).contains(&product.confidence));

    let reviews = analysis.reviews_result.unwrap();
    assert_eq!(reviews.fake_percentage, 28.0);
    assert_eq!(reviews.total_reviews, 106);
}

#[tokio::test]
async fn test_fake_listing_keeps_verdict_across_calls() {
    let service = strict_service();
    let request = AnalyzeListingRequest::new(product_url(FAKE_LISTING_ID), true, false);

    let first = service.analyze_listing(request.clone()).await.unwrap();
    let second = service.analyze_listing(request).await.unwrap();

    let (a, b) = (first.product_result.unwrap(), second.product_result.unwrap());
    assert!(a.is_fake && b.is_fake);
    assert_eq!(a.reasons, b.reasons);
    assert!(first.reviews_result.is_none());
}

#[tokio::test]
async fn test_nothing_selected_is_rejected() {
    let err = strict_service()
        .analyze_listing(AnalyzeListingRequest::new(product_url(GENUINE_LISTING_ID), false, false))
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::NothingSelected));
}

#[tokio::test]
async fn test_unparseable_reference_fails_by_default() {
    let err = strict_service()
        .analyze_listing(AnalyzeListingRequest::new("https://shop.example/item/42", true, true))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Reference(ReferenceError::UnparseableReference(_))
    ));
}

#[tokio::test]
async fn test_random_fallback_scores_unparseable_reference() {
    let service = LocalAnalysisService::new(&ScoringConfig {
        random_fallback_token: true,
    });

    let analysis = service
        .analyze_listing(AnalyzeListingRequest::new("https://shop.example/item/42", true, true))
        .await
        .unwrap();
    assert!(analysis.product_result.is_some());
    assert!(analysis.reviews_result.is_some());

    // An empty /dp/ segment is still an error
    let err = service
        .analyze_listing(AnalyzeListingRequest::new("https://shop.example/dp/", true, true))
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Reference(ReferenceError::EmptyListingId)));
}

#[tokio::test]
async fn test_predictions_follow_text_verdict() {
    let service = strict_service();

    for (review, expected) in [
        (EVERYTHING_REVIEW, Prediction::Fake),
        (SUPERLATIVE_REVIEW, Prediction::Genuine),
        (GENUINE_REVIEW, Prediction::Genuine),
        ("", Prediction::Genuine),
    ] {
        let response = service
            .predict_review(PredictRequest {
                review: review.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.review, review);
        assert_eq!(response.prediction, expected, "review {:?}", review);
    }
}
