use rand::Rng;
use thiserror::Error;

use crate::model::ListingId;

const LISTING_MARKER: &str = "/dp/";
const FALLBACK_TOKEN_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("No listing identifier found in reference: {0}")]
    UnparseableReference(String),

    #[error("Listing identifier is empty")]
    EmptyListingId,
}

/// Extracts the listing identifier from a product reference.
///
/// A reference containing `/dp/` yields the segment after the first marker, cut at
/// the next `/` or `?`. A bare token made of ASCII letters and digits is taken as the
/// identifier itself. Anything else is unparseable.
pub fn extract_listing_id(reference: &str) -> Result<ListingId, ReferenceError> {
    if let Some((_, after)) = reference.split_once(LISTING_MARKER) {
        let end = after.find(['/', '?']).unwrap_or(after.len());
        return ListingId::new(&after[..end]);
    }

    let reference = reference.trim();
    if !reference.is_empty() && reference.chars().all(|c| c.is_ascii_alphanumeric()) {
        return ListingId::new(reference);
    }

    Err(ReferenceError::UnparseableReference(reference.to_string()))
}

/// Like [`extract_listing_id`], but substitutes a random token for unparseable references.
///
/// Scores for such references are not reproducible.
pub fn extract_listing_id_or_random<R: Rng + ?Sized>(
    reference: &str,
    rng: &mut R,
) -> Result<ListingId, ReferenceError> {
    match extract_listing_id(reference) {
        Err(ReferenceError::UnparseableReference(_)) => {
            let token = random_listing_token(rng);
            tracing::warn!(reference, token = %token, "Substituting random listing token");
            Ok(token)
        }
        other => other,
    }
}

/// Random lowercase base-36 token.
pub fn random_listing_token<R: Rng + ?Sized>(rng: &mut R) -> ListingId {
    let token: String = (0..FALLBACK_TOKEN_LEN)
        .map(|_| char::from_digit(rng.random_range(0..36), 36).unwrap_or('0'))
        .collect();
    ListingId(token)
}
