//! Blended product reputation.
//!
//! Every product starts life with a synthetic seed rating. Real customer
//! feedback is blended with that seed as a weighted prior: the recompute
//! always runs over the complete feedback set for the product, so a
//! last-writer-wins race between concurrent submissions still lands on a
//! correct value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::round_rating;

/// A product's visible reputation: blended average (one decimal place) and
/// the review count backing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reputation {
    /// Blended average rating, rounded to one decimal place.
    pub average: Decimal,
    /// Number of ratings behind the average, seed included.
    pub review_count: u64,
}

/// Recomputes a product's reputation from its captured seed and the complete
/// set of real feedback ratings.
///
/// The seed must be the reputation the product held before any real feedback
/// existed; re-deriving it from the evolving average would double-count the
/// prior.
#[must_use]
pub fn recompute(seed: Reputation, ratings: &[u8]) -> Reputation {
    let review_count = seed.review_count + ratings.len() as u64;

    if review_count == 0 {
        return seed;
    }

    let prior_weighted_sum = seed.average * Decimal::from(seed.review_count);
    let feedback_sum: Decimal = ratings.iter().map(|rating| Decimal::from(*rating)).sum();

    Reputation {
        average: round_rating((prior_weighted_sum + feedback_sum) / Decimal::from(review_count)),
        review_count,
    }
}
