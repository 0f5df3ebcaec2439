use common::fixtures::{EVERYTHING_REVIEW, GENUINE_REVIEW, SHOUTING_REVIEW, SUPERLATIVE_REVIEW};
use scoring::{Prediction, TextFakeScorer, scorers::ReviewFeatures};

#[test]
fn test_boundary_examples() {
    let scorer = TextFakeScorer::new();

    let shouting = scorer.score(SHOUTING_REVIEW);
    assert_eq!(shouting.score, 2.0);
    assert!(shouting.is_fake);

    let superlative = scorer.score(SUPERLATIVE_REVIEW);
    assert_eq!(superlative.score, 0.5);
    assert!(!superlative.is_fake);

    let everything = scorer.score(EVERYTHING_REVIEW);
    assert_eq!(everything.score, 2.5);
    assert!(everything.is_fake);

    let empty = scorer.score("");
    assert_eq!(empty.score, 0.0);
    assert!(!empty.is_fake);
}

#[test]
fn test_single_strong_signal_is_enough() {
    let scorer = TextFakeScorer::new();

    let punctuation = scorer.score("Did it arrive on time?? No.");
    assert_eq!(punctuation.score, 1.0);
    assert_eq!(punctuation.prediction(), Prediction::Fake);

    let shouting = scorer.score("Do NOT buy this one");
    assert_eq!(shouting.score, 0.0);

    let shouting = scorer.score("Please READ the manual first");
    assert_eq!(shouting.score, 1.0);
    assert_eq!(shouting.prediction(), Prediction::Fake);
}

#[test]
fn test_genuine_review_has_no_signals() {
    let scorer = TextFakeScorer::new();
    assert_eq!(scorer.extract_features(GENUINE_REVIEW), ReviewFeatures::default());
    assert_eq!(scorer.score(GENUINE_REVIEW).prediction(), Prediction::Genuine);
}

#[test]
fn test_punctuation_needs_a_run() {
    let features = ReviewFeatures::extract("Nice! Really? Yes!");
    assert!(!features.excessive_punctuation);

    assert!(!ReviewFeatures::extract("why?!?").excessive_punctuation);
    assert!(ReviewFeatures::extract("what???").excessive_punctuation);
}

#[test]
fn test_shouting_requires_word_boundaries() {
    // Caps run glued to lowercase letters or digits is not a shouted word
    assert!(!ReviewFeatures::extract("GREATness").shouting_words);
    assert!(!ReviewFeatures::extract("USB3C cable").shouting_words);
    assert!(!ReviewFeatures::extract("iPHONE case").shouting_words);

    // Punctuation and whitespace are boundaries
    assert!(ReviewFeatures::extract("(LOVE)").shouting_words);
    assert!(ReviewFeatures::extract("well-MADE product").shouting_words);
    assert!(ReviewFeatures::extract("BEST.").shouting_words);
}

#[test]
fn test_shouting_boundaries_are_ascii_only() {
    // Non-ASCII letters are not word characters, so they bound a caps run
    for text in ["ÜBERGOOD", "caféGOOD", "STRAßE", "GOODé"] {
        let verdict = TextFakeScorer::new().score(text);
        assert!(ReviewFeatures::extract(text).shouting_words, "{text}");
        assert!(verdict.is_fake, "{text}");
    }

    // Non-ASCII capitals never count towards the run length
    assert!(!ReviewFeatures::extract("ÉCOL").shouting_words);
    assert!(!ReviewFeatures::extract("ÜÖÄÉ").shouting_words);
}

#[test]
fn test_superlatives_match_case_insensitively_inside_words() {
    assert!(ReviewFeatures::extract("The Best purchase").superlatives);
    assert!(ReviewFeatures::extract("a bestseller").superlatives);
    assert!(ReviewFeatures::extract("TeRrIbLe").superlatives);
    assert!(!ReviewFeatures::extract("fine, good, decent").superlatives);
}

#[test]
fn test_superlative_case_folding_is_ascii_only() {
    // U+017F LATIN SMALL LETTER LONG S folds to 's' only under Unicode rules
    assert!(!ReviewFeatures::extract("beſt").superlatives);
    assert!(ReviewFeatures::extract("BEST ever").superlatives);
}

#[test]
fn test_superlatives_alone_never_flag() {
    let scorer = TextFakeScorer::new();
    let verdict = scorer.score("amazing incredible best perfect worst terrible awful");
    assert_eq!(verdict.score, 0.5);
    assert!(!verdict.is_fake);
}

#[test]
fn test_scoring_is_idempotent() {
    let scorer = TextFakeScorer::new();
    for text in [EVERYTHING_REVIEW, GENUINE_REVIEW, "", "OK!! fine"] {
        assert_eq!(scorer.score(text), scorer.score(text));
    }
}
