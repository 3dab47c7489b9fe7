//! Shared constants for Schema.org rendering.
//!
//! Everything a builder stamps onto more than one record lives here, so the
//! vocabulary URLs and defaults stay in one place.

/// JSON-LD context URL carried by every schema record as `@context`.
pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// Namespace prefix for fully-qualified Schema.org enumeration members.
///
/// Enumerated values such as product availability or event status are
/// rendered as absolute references, e.g. `https://schema.org/InStock`.
pub const SCHEMA_ORG_NAMESPACE: &str = "https://schema.org/";

/// `openingHours` token for businesses that never close.
pub const OPEN_ALL_WEEK: &str = "Mo-Su";

/// Schema type emitted by the organization builder when no override is given.
pub const DEFAULT_ORGANIZATION_TYPE: &str = "LocalBusiness";

/// Upper rating bound used when a review input supplies none.
pub const DEFAULT_BEST_RATING: f64 = 5.0;

/// Lower rating bound used when a review input supplies none.
pub const DEFAULT_WORST_RATING: f64 = 1.0;
