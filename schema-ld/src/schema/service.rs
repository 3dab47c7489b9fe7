//! Service builder.

use super::Schema;
use super::organization::OrganizationInfo;
use crate::json;

/// Input for the [`service`] builder.
///
/// Name, description, URL and provider are mandatory. The service area is
/// city-only here; a service offered over a geographic circle should model
/// the circle on the organization record instead.
#[derive(Clone, Debug)]
pub struct ServiceOptions {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) url: String,
    pub(crate) image: Option<String>,
    pub(crate) provider: OrganizationInfo,
    pub(crate) service_type: Option<String>,
    pub(crate) area_served_city: Option<String>,
}

impl ServiceOptions {
    /// Create service options with the mandatory fields.
    #[must_use]
    pub fn new(name: &str, description: &str, url: &str, provider: OrganizationInfo) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            image: None,
            provider,
            service_type: None,
            area_served_city: None,
        }
    }

    /// Representative image URL.
    #[must_use]
    pub fn image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    /// Service category string (emitted as `serviceType`).
    #[must_use]
    pub fn service_type(mut self, service_type: &str) -> Self {
        self.service_type = Some(service_type.to_string());
        self
    }

    /// City the service is offered in.
    #[must_use]
    pub fn area_served_city(mut self, city: &str) -> Self {
        self.area_served_city = Some(city.to_string());
        self
    }
}

/// Build a Service record.
///
/// The provider nests as a `LocalBusiness` sub-record carrying name and URL
/// only - the provider is summarized, not fully expanded, so any optional
/// fields on the provider's [`OrganizationInfo`] are dropped here even when
/// present.
pub fn service(options: &ServiceOptions) -> Schema {
    Schema::typed("Service")
        .set("name", &options.name)
        .set("description", &options.description)
        .set("url", &options.url)
        .set_some("image", options.image.as_deref())
        .set(
            "provider",
            json::obj()
                .set("@type", "LocalBusiness")
                .set("name", &options.provider.name)
                .set("url", &options.provider.url),
        )
        .set_some("serviceType", options.service_type.as_deref())
        .set_some(
            "areaServed",
            options
                .area_served_city
                .as_deref()
                .map(|city| json::obj().set("@type", "City").set("name", city)),
        )
}
