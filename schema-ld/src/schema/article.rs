//! Article builder.

use super::Schema;
use crate::json;

/// Input for the [`article`] builder.
#[derive(Clone, Debug)]
pub struct ArticleOptions {
    pub(crate) headline: String,
    pub(crate) date_published: String,
    pub(crate) author: String,
    pub(crate) publisher: String,
    pub(crate) description: Option<String>,
    pub(crate) image: Option<String>,
    pub(crate) date_modified: Option<String>,
    pub(crate) publisher_logo: Option<String>,
    pub(crate) url: Option<String>,
}

impl ArticleOptions {
    /// Create article options with the mandatory fields.
    #[must_use]
    pub fn new(headline: &str, date_published: &str, author: &str, publisher: &str) -> Self {
        Self {
            headline: headline.to_string(),
            date_published: date_published.to_string(),
            author: author.to_string(),
            publisher: publisher.to_string(),
            description: None,
            image: None,
            date_modified: None,
            publisher_logo: None,
            url: None,
        }
    }

    /// Free-text description.
    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Header image URL.
    #[must_use]
    pub fn image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    /// Last-modified date string.
    #[must_use]
    pub fn date_modified(mut self, date_modified: &str) -> Self {
        self.date_modified = Some(date_modified.to_string());
        self
    }

    /// Publisher logo URL, nested as an `ImageObject` on the publisher.
    #[must_use]
    pub fn publisher_logo(mut self, logo: &str) -> Self {
        self.publisher_logo = Some(logo.to_string());
        self
    }

    /// Canonical article URL; keys the `mainEntityOfPage` WebPage record.
    #[must_use]
    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }
}

/// Build an Article record.
///
/// The author always nests as a `Person` and the publisher as an
/// `Organization`; the publisher's logo nests as an `ImageObject` only
/// when given. `mainEntityOfPage` is a `WebPage` record keyed by `@id`,
/// emitted only when a URL is present.
pub fn article(options: &ArticleOptions) -> Schema {
    Schema::typed("Article")
        .set("headline", &options.headline)
        .set_some("description", options.description.as_deref())
        .set_some("image", options.image.as_deref())
        .set("datePublished", &options.date_published)
        .set_some("dateModified", options.date_modified.as_deref())
        .set(
            "author",
            json::obj().set("@type", "Person").set("name", &options.author),
        )
        .set(
            "publisher",
            json::obj()
                .set("@type", "Organization")
                .set("name", &options.publisher)
                .set_some(
                    "logo",
                    options.publisher_logo.as_deref().map(|url| {
                        json::obj().set("@type", "ImageObject").set("url", url)
                    }),
                ),
        )
        .set_some(
            "mainEntityOfPage",
            options
                .url
                .as_deref()
                .map(|url| json::obj().set("@type", "WebPage").set("@id", url)),
        )
}
