//! Review / AggregateRating builder.

use super::Schema;
use super::organization::{OrganizationInfo, apply_organization_fields};
use crate::constants::{DEFAULT_BEST_RATING, DEFAULT_WORST_RATING};
use crate::json;

/// One individual review.
#[derive(Clone, Debug)]
pub struct ReviewEntry {
    pub(crate) author: String,
    pub(crate) rating: f64,
    pub(crate) body: String,
    pub(crate) date: String,
}

impl ReviewEntry {
    /// Create a review entry.
    ///
    /// The rating is not checked against the aggregate's bounds; it is
    /// copied through as given.
    #[must_use]
    pub fn new(author: &str, rating: f64, body: &str, date: &str) -> Self {
        Self {
            author: author.to_string(),
            rating,
            body: body.to_string(),
            date: date.to_string(),
        }
    }
}

/// Input for the [`review`] builder.
#[derive(Clone, Debug)]
pub struct ReviewOptions {
    pub(crate) organization: OrganizationInfo,
    pub(crate) review_count: u32,
    pub(crate) rating_value: f64,
    pub(crate) best_rating: Option<f64>,
    pub(crate) worst_rating: Option<f64>,
    pub(crate) reviews: Vec<ReviewEntry>,
}

impl ReviewOptions {
    /// Options with the mandatory aggregate inputs and no individual
    /// reviews. Bounds default to 5 / 1 when left unset.
    #[must_use]
    pub fn new(organization: OrganizationInfo, review_count: u32, rating_value: f64) -> Self {
        Self {
            organization,
            review_count,
            rating_value,
            best_rating: None,
            worst_rating: None,
            reviews: Vec::new(),
        }
    }

    /// Upper rating bound.
    #[must_use]
    pub fn best_rating(mut self, best: f64) -> Self {
        self.best_rating = Some(best);
        self
    }

    /// Lower rating bound.
    #[must_use]
    pub fn worst_rating(mut self, worst: f64) -> Self {
        self.worst_rating = Some(worst);
        self
    }

    /// Ordered individual reviews.
    #[must_use]
    pub fn reviews<I>(mut self, reviews: I) -> Self
    where
        I: IntoIterator<Item = ReviewEntry>,
    {
        self.reviews = reviews.into_iter().collect();
        self
    }
}

/// Build a rating-carrying business record.
///
/// The `@type` is fixed to `"LocalBusiness"`, not `"Review"`: search
/// engines read aggregate ratings off the business entity itself, so the
/// rating attaches there. `aggregateRating` is always emitted, review
/// count zero included, and each individual review nests its author as a
/// `Person` and its rating as a `Rating` carrying the same bounds as the
/// aggregate.
pub fn review(options: &ReviewOptions) -> Schema {
    let best = options.best_rating.unwrap_or(DEFAULT_BEST_RATING);
    let worst = options.worst_rating.unwrap_or(DEFAULT_WORST_RATING);

    let schema = apply_organization_fields(Schema::typed("LocalBusiness"), &options.organization)
        .set(
            "aggregateRating",
            json::obj()
                .set("@type", "AggregateRating")
                .set("ratingValue", options.rating_value)
                .set("reviewCount", options.review_count)
                .set("bestRating", best)
                .set("worstRating", worst),
        );

    let mut reviews = json::arr();
    for entry in &options.reviews {
        reviews = reviews.push(
            json::obj()
                .set("@type", "Review")
                .set(
                    "author",
                    json::obj().set("@type", "Person").set("name", &entry.author),
                )
                .set(
                    "reviewRating",
                    json::obj()
                        .set("@type", "Rating")
                        .set("ratingValue", entry.rating)
                        .set("bestRating", best)
                        .set("worstRating", worst),
                )
                .set("reviewBody", &entry.body)
                .set("datePublished", &entry.date),
        );
    }

    schema.set("review", reviews)
}
