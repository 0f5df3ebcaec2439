//! Heuristic scoring core for fake listing and fake review detection.
//!
//! Both scorers are pure: the only nondeterminism is the confidence jitter,
//! which callers supply per call through a [`jitter::JitterSource`].

pub mod jitter;
pub mod model;
pub mod reference;
pub mod scorers;

pub use model::{
    ListingAnalysis, ListingId, Prediction, ProductVerdict, ReviewCorpusVerdict, ReviewVerdict,
    ScoreRequest,
};
pub use reference::{ReferenceError, extract_listing_id};
pub use scorers::{IdentifierFakeScorer, TextFakeScorer};
