//! Organization / LocalBusiness builder.
//!
//! The richest of the builders: base organization fields, an optional
//! service area, and an optional opening-hours spec. The service-area and
//! opening-hours policies both degrade silently on partial input - see
//! [`organization`] for the exact precedence rules.

use super::Schema;
use crate::constants::{DEFAULT_ORGANIZATION_TYPE, OPEN_ALL_WEEK};
use crate::json::{self, JsonValue};

/// Identity fields for an organization.
///
/// Name and URL are mandatory; everything else is copied into the record
/// only when present. The same struct feeds the review builder and the
/// provider slot of the service builder.
#[derive(Clone, Debug)]
pub struct OrganizationInfo {
    pub(crate) name: String,
    pub(crate) url: String,
    pub(crate) id: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) logo: Option<String>,
    pub(crate) image: Option<String>,
    pub(crate) telephone: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) price_range: Option<String>,
    pub(crate) same_as: Vec<String>,
}

impl OrganizationInfo {
    /// Create organization info with the two mandatory fields.
    #[must_use]
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            id: None,
            description: None,
            logo: None,
            image: None,
            telephone: None,
            email: None,
            price_range: None,
            same_as: Vec::new(),
        }
    }

    /// Stable identifier, emitted as `@id`.
    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Free-text description.
    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Logo image URL.
    #[must_use]
    pub fn logo(mut self, logo: &str) -> Self {
        self.logo = Some(logo.to_string());
        self
    }

    /// Representative image URL.
    #[must_use]
    pub fn image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    /// Contact telephone number.
    #[must_use]
    pub fn telephone(mut self, telephone: &str) -> Self {
        self.telephone = Some(telephone.to_string());
        self
    }

    /// Contact email address.
    #[must_use]
    pub fn email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Price range indicator (e.g. `"$$"`).
    #[must_use]
    pub fn price_range(mut self, price_range: &str) -> Self {
        self.price_range = Some(price_range.to_string());
        self
    }

    /// Associated profile URLs, emitted as `sameAs` when non-empty.
    #[must_use]
    pub fn same_as<I, S>(mut self, profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.same_as = profiles.into_iter().map(Into::into).collect();
        self
    }
}

/// Center coordinates for a circular service area.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct GeoMidpoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Geographic area an organization serves.
///
/// A circle (midpoint + radius) takes precedence over a named city. Region
/// and country are accepted for callers that carry them, but render
/// nothing on their own.
#[derive(Clone, Debug, Default)]
pub struct ServiceArea {
    pub(crate) geo_midpoint: Option<GeoMidpoint>,
    pub(crate) geo_radius: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) region: Option<String>,
    pub(crate) country: Option<String>,
}

impl ServiceArea {
    /// Create an empty service area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Center point of a circular area.
    #[must_use]
    pub fn midpoint(mut self, latitude: f64, longitude: f64) -> Self {
        self.geo_midpoint = Some(GeoMidpoint {
            latitude,
            longitude,
        });
        self
    }

    /// Radius of a circular area, as the unit-carrying string Schema.org
    /// expects (e.g. `"5000"` meters).
    #[must_use]
    pub fn radius(mut self, radius: &str) -> Self {
        self.geo_radius = Some(radius.to_string());
        self
    }

    /// Named city.
    #[must_use]
    pub fn city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    /// Region or state. Accepted but not rendered.
    #[must_use]
    pub fn region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Country. Accepted but not rendered.
    #[must_use]
    pub fn country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }
}

/// Weekly opening hours.
///
/// Either the always-open flag, or all three of day list / opening time /
/// closing time. Partially-specified schedules render nothing.
#[derive(Clone, Debug, Default)]
pub struct OpeningHours {
    pub(crate) open_24_hours: bool,
    pub(crate) days: Option<Vec<String>>,
    pub(crate) opens: Option<String>,
    pub(crate) closes: Option<String>,
}

impl OpeningHours {
    /// Create an empty opening-hours spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the business as always open. Takes precedence over any weekly
    /// schedule fields.
    #[must_use]
    pub fn open_24_hours(mut self) -> Self {
        self.open_24_hours = true;
        self
    }

    /// Weekday names the schedule applies to.
    #[must_use]
    pub fn days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days = Some(days.into_iter().map(Into::into).collect());
        self
    }

    /// Opening time string (e.g. `"09:00"`).
    #[must_use]
    pub fn opens(mut self, opens: &str) -> Self {
        self.opens = Some(opens.to_string());
        self
    }

    /// Closing time string (e.g. `"17:00"`).
    #[must_use]
    pub fn closes(mut self, closes: &str) -> Self {
        self.closes = Some(closes.to_string());
        self
    }
}

/// Input for the [`organization`] builder.
#[derive(Clone, Debug)]
pub struct OrganizationOptions {
    pub(crate) organization: OrganizationInfo,
    pub(crate) area_served: Option<ServiceArea>,
    pub(crate) opening_hours: Option<OpeningHours>,
    pub(crate) schema_type: Option<String>,
}

impl OrganizationOptions {
    /// Options with defaults: no service area, no hours, type
    /// `"LocalBusiness"`.
    #[must_use]
    pub fn new(organization: OrganizationInfo) -> Self {
        Self {
            organization,
            area_served: None,
            opening_hours: None,
            schema_type: None,
        }
    }

    /// Attach a service area.
    #[must_use]
    pub fn area_served(mut self, area: ServiceArea) -> Self {
        self.area_served = Some(area);
        self
    }

    /// Attach opening hours.
    #[must_use]
    pub fn opening_hours(mut self, hours: OpeningHours) -> Self {
        self.opening_hours = Some(hours);
        self
    }

    /// Override the `@type` tag (e.g. `"Organization"`, `"Dentist"`).
    #[must_use]
    pub fn schema_type(mut self, schema_type: &str) -> Self {
        self.schema_type = Some(schema_type.to_string());
        self
    }
}

/// Build an Organization / LocalBusiness record.
///
/// - `@type` defaults to `"LocalBusiness"` unless overridden.
/// - `areaServed`: a midpoint+radius pair wins and emits a `GeoCircle`
///   with nested `GeoCoordinates`; otherwise a city emits a `City` record;
///   region/country-only input emits nothing.
/// - Opening hours: the always-open flag wins and emits the literal
///   `"Mo-Su"` under `openingHours`; otherwise days, opens and closes must
///   all be present to emit an `OpeningHoursSpecification`; any partial
///   combination emits nothing.
///
/// Total over its input; no combination of options fails.
pub fn organization(options: &OrganizationOptions) -> Schema {
    let type_tag = options
        .schema_type
        .as_deref()
        .unwrap_or(DEFAULT_ORGANIZATION_TYPE);

    let mut schema = apply_organization_fields(Schema::typed(type_tag), &options.organization);

    if let Some(area) = options.area_served.as_ref().and_then(area_served_record) {
        schema = schema.set("areaServed", area);
    }

    if let Some(hours) = &options.opening_hours {
        if hours.open_24_hours {
            schema = schema.set("openingHours", OPEN_ALL_WEEK);
        } else if let (Some(days), Some(opens), Some(closes)) =
            (&hours.days, &hours.opens, &hours.closes)
        {
            schema = schema.set(
                "openingHoursSpecification",
                json::obj()
                    .set("@type", "OpeningHoursSpecification")
                    .set("dayOfWeek", days)
                    .set("opens", opens.as_str())
                    .set("closes", closes.as_str()),
            );
        }
    }

    schema
}

/// Copy the shared organization fields onto a record.
///
/// Used by both the organization and review builders so the two emit the
/// same base shape for the same input.
pub(crate) fn apply_organization_fields(record: Schema, info: &OrganizationInfo) -> Schema {
    let record = record
        .set("name", &info.name)
        .set("url", &info.url)
        .set_some("@id", info.id.as_deref())
        .set_some("description", info.description.as_deref())
        .set_some("telephone", info.telephone.as_deref())
        .set_some("email", info.email.as_deref())
        .set_some("priceRange", info.price_range.as_deref())
        .set_some("image", info.image.as_deref())
        .set_some("logo", info.logo.as_deref());

    if info.same_as.is_empty() {
        record
    } else {
        record.set("sameAs", &info.same_as)
    }
}

/// The `areaServed` record, when the area resolves to one.
fn area_served_record(area: &ServiceArea) -> Option<JsonValue> {
    if let (Some(midpoint), Some(radius)) = (area.geo_midpoint, area.geo_radius.as_deref()) {
        return Some(
            json::obj()
                .set("@type", "GeoCircle")
                .set(
                    "geoMidpoint",
                    json::obj()
                        .set("@type", "GeoCoordinates")
                        .set("latitude", midpoint.latitude)
                        .set("longitude", midpoint.longitude),
                )
                .set("geoRadius", radius),
        );
    }

    // Region/country never render on their own; a known gap, not an error.
    area.city
        .as_deref()
        .map(|city| json::obj().set("@type", "City").set("name", city))
}
