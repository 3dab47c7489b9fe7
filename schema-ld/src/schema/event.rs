//! Event builder.

use super::Schema;
use crate::constants::SCHEMA_ORG_NAMESPACE;
use crate::json;

/// Event lifecycle status, per the Schema.org EventStatusType enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventStatus {
    /// Going ahead as planned.
    Scheduled,
    /// Called off.
    Cancelled,
    /// Postponed without a new date.
    Postponed,
    /// Moved to a new date.
    Rescheduled,
}

impl EventStatus {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "EventScheduled",
            Self::Cancelled => "EventCancelled",
            Self::Postponed => "EventPostponed",
            Self::Rescheduled => "EventRescheduled",
        }
    }

    /// Fully-qualified Schema.org reference URL for this member.
    #[must_use]
    pub fn reference(self) -> String {
        format!("{SCHEMA_ORG_NAMESPACE}{}", self.as_str())
    }
}

/// How attendees participate, per the Schema.org EventAttendanceModeEnumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttendanceMode {
    /// In person.
    Offline,
    /// Online only.
    Online,
    /// Both in person and online.
    Mixed,
}

impl AttendanceMode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Offline => "OfflineEventAttendanceMode",
            Self::Online => "OnlineEventAttendanceMode",
            Self::Mixed => "MixedEventAttendanceMode",
        }
    }

    /// Fully-qualified Schema.org reference URL for this member.
    #[must_use]
    pub fn reference(self) -> String {
        format!("{SCHEMA_ORG_NAMESPACE}{}", self.as_str())
    }
}

/// Where an event takes place.
#[derive(Clone, Debug)]
pub struct EventLocation {
    pub(crate) name: String,
    pub(crate) address: Option<String>,
}

impl EventLocation {
    /// Create a venue with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            address: None,
        }
    }

    /// Street address string, nested as a `PostalAddress`.
    #[must_use]
    pub fn address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }
}

/// Input for the [`event`] builder.
#[derive(Clone, Debug)]
pub struct EventOptions {
    pub(crate) name: String,
    pub(crate) start_date: String,
    pub(crate) description: Option<String>,
    pub(crate) end_date: Option<String>,
    pub(crate) location: Option<EventLocation>,
    pub(crate) url: Option<String>,
    pub(crate) image: Option<String>,
    pub(crate) status: Option<EventStatus>,
    pub(crate) attendance_mode: Option<AttendanceMode>,
}

impl EventOptions {
    /// Create event options with the mandatory fields.
    #[must_use]
    pub fn new(name: &str, start_date: &str) -> Self {
        Self {
            name: name.to_string(),
            start_date: start_date.to_string(),
            description: None,
            end_date: None,
            location: None,
            url: None,
            image: None,
            status: None,
            attendance_mode: None,
        }
    }

    /// Free-text description.
    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// End date string.
    #[must_use]
    pub fn end_date(mut self, end_date: &str) -> Self {
        self.end_date = Some(end_date.to_string());
        self
    }

    /// Venue.
    #[must_use]
    pub fn location(mut self, location: EventLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Event page URL.
    #[must_use]
    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Representative image URL.
    #[must_use]
    pub fn image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    /// Lifecycle status.
    #[must_use]
    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Attendance mode.
    #[must_use]
    pub fn attendance_mode(mut self, mode: AttendanceMode) -> Self {
        self.attendance_mode = Some(mode);
        self
    }
}

/// Build an Event record.
///
/// The location, when present, nests as a `Place`; its `PostalAddress`
/// sub-record is only built when an address string was supplied. Status
/// and attendance mode render as fully-qualified Schema.org enum URLs.
pub fn event(options: &EventOptions) -> Schema {
    Schema::typed("Event")
        .set("name", &options.name)
        .set("startDate", &options.start_date)
        .set_some("endDate", options.end_date.as_deref())
        .set_some("description", options.description.as_deref())
        .set_some(
            "location",
            options.location.as_ref().map(|location| {
                json::obj()
                    .set("@type", "Place")
                    .set("name", &location.name)
                    .set_some(
                        "address",
                        location.address.as_deref().map(|address| {
                            json::obj()
                                .set("@type", "PostalAddress")
                                .set("streetAddress", address)
                        }),
                    )
            }),
        )
        .set_some("url", options.url.as_deref())
        .set_some("image", options.image.as_deref())
        .set_some("eventStatus", options.status.map(EventStatus::reference))
        .set_some(
            "eventAttendanceMode",
            options.attendance_mode.map(AttendanceMode::reference),
        )
}
