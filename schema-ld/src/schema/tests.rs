//! All tests for the schema builders.

#[cfg(test)]
use super::*;
use crate::script;

fn acme() -> OrganizationInfo {
    OrganizationInfo::new("Acme Plumbing", "https://acme.example")
}

// =========================================================================
// Organization builder
// =========================================================================

#[test]
fn organization_base_record() {
    let schema = organization(&OrganizationOptions::new(acme()));
    assert_eq!(schema.type_tag().as_deref(), Some("LocalBusiness"));
    assert_eq!(schema.get("@context").str().as_deref(), Some("https://schema.org"));
    assert_eq!(schema.get("name").str().as_deref(), Some("Acme Plumbing"));
    assert_eq!(schema.get("url").str().as_deref(), Some("https://acme.example"));
    assert!(!schema.has("description"));
    assert!(!schema.has("sameAs"));
}

#[test]
fn organization_type_override() {
    let options = OrganizationOptions::new(acme()).schema_type("Organization");
    assert_eq!(organization(&options).type_tag().as_deref(), Some("Organization"));
}

#[test]
fn organization_optional_fields_copied_when_present() {
    let info = acme()
        .id("https://acme.example/#business")
        .description("Emergency plumbing")
        .telephone("+1-555-0100")
        .email("office@acme.example")
        .price_range("$$")
        .image("https://acme.example/shop.jpg")
        .logo("https://acme.example/logo.png")
        .same_as(["https://twitter.com/acme", "https://facebook.com/acme"]);
    let schema = organization(&OrganizationOptions::new(info));

    assert_eq!(schema.get("@id").str().as_deref(), Some("https://acme.example/#business"));
    assert_eq!(schema.get("telephone").str().as_deref(), Some("+1-555-0100"));
    assert_eq!(schema.get("priceRange").str().as_deref(), Some("$$"));
    assert_eq!(schema.get("sameAs").len(), Some(2));
    assert_eq!(
        schema.get("sameAs").at(0).str().as_deref(),
        Some("https://twitter.com/acme")
    );
}

#[test]
fn organization_empty_same_as_omitted() {
    let schema = organization(&OrganizationOptions::new(acme().same_as(Vec::<String>::new())));
    assert!(!schema.has("sameAs"));
}

#[test]
fn service_area_circle_wins_over_city() {
    let area = ServiceArea::new()
        .midpoint(34.05, -118.24)
        .radius("5000")
        .city("Los Angeles");
    let schema = organization(&OrganizationOptions::new(acme()).area_served(area));

    let area = schema.get("areaServed");
    assert_eq!(area.get("@type").str().as_deref(), Some("GeoCircle"));
    assert_eq!(area.get("geoMidpoint").get("@type").str().as_deref(), Some("GeoCoordinates"));
    assert_eq!(area.get("geoMidpoint").get("latitude").float(), Some(34.05));
    assert_eq!(area.get("geoMidpoint").get("longitude").float(), Some(-118.24));
    assert_eq!(area.get("geoRadius").str().as_deref(), Some("5000"));
}

#[test]
fn service_area_city_only() {
    let schema = organization(
        &OrganizationOptions::new(acme()).area_served(ServiceArea::new().city("Los Angeles")),
    );
    let area = schema.get("areaServed");
    assert_eq!(area.get("@type").str().as_deref(), Some("City"));
    assert_eq!(area.get("name").str().as_deref(), Some("Los Angeles"));
}

#[test]
fn service_area_region_country_only_is_absent() {
    let schema = organization(
        &OrganizationOptions::new(acme())
            .area_served(ServiceArea::new().region("California").country("USA")),
    );
    assert!(!schema.has("areaServed"));
}

#[test]
fn service_area_radius_without_midpoint_falls_back_to_city() {
    let schema = organization(
        &OrganizationOptions::new(acme())
            .area_served(ServiceArea::new().radius("5000").city("Los Angeles")),
    );
    assert_eq!(schema.get("areaServed").get("@type").str().as_deref(), Some("City"));
}

#[test]
fn open_24_hours_renders_fixed_token() {
    let schema = organization(
        &OrganizationOptions::new(acme()).opening_hours(OpeningHours::new().open_24_hours()),
    );
    assert_eq!(schema.get("openingHours").str().as_deref(), Some("Mo-Su"));
    assert!(!schema.has("openingHoursSpecification"));
}

#[test]
fn open_24_hours_wins_over_weekly_schedule() {
    let hours = OpeningHours::new()
        .open_24_hours()
        .days(["Monday"])
        .opens("09:00")
        .closes("17:00");
    let schema = organization(&OrganizationOptions::new(acme()).opening_hours(hours));
    assert_eq!(schema.get("openingHours").str().as_deref(), Some("Mo-Su"));
    assert!(!schema.has("openingHoursSpecification"));
}

#[test]
fn full_weekly_schedule_renders_specification() {
    let hours = OpeningHours::new()
        .days(["Monday", "Tuesday", "Wednesday"])
        .opens("09:00")
        .closes("17:00");
    let schema = organization(&OrganizationOptions::new(acme()).opening_hours(hours));

    let spec = schema.get("openingHoursSpecification");
    assert_eq!(spec.get("@type").str().as_deref(), Some("OpeningHoursSpecification"));
    assert_eq!(spec.get("dayOfWeek").len(), Some(3));
    assert_eq!(spec.get("opens").str().as_deref(), Some("09:00"));
    assert_eq!(spec.get("closes").str().as_deref(), Some("17:00"));
    assert!(!schema.has("openingHours"));
}

#[test]
fn partial_weekly_schedule_renders_nothing() {
    for hours in [
        OpeningHours::new().days(["Monday"]).opens("09:00"),
        OpeningHours::new().days(["Monday"]).closes("17:00"),
        OpeningHours::new().opens("09:00").closes("17:00"),
        OpeningHours::new(),
    ] {
        let schema = organization(&OrganizationOptions::new(acme()).opening_hours(hours));
        assert!(!schema.has("openingHours"));
        assert!(!schema.has("openingHoursSpecification"));
    }
}

// =========================================================================
// Service builder
// =========================================================================

#[test]
fn service_provider_is_summarized() {
    let provider = acme()
        .telephone("+1-555-0100")
        .description("should not leak into the provider record");
    let options = ServiceOptions::new(
        "Drain Cleaning",
        "Fast drain unblocking",
        "https://acme.example/drains",
        provider,
    );
    let schema = service(&options);

    assert_eq!(schema.type_tag().as_deref(), Some("Service"));
    let provider = schema.get("provider");
    assert_eq!(provider.get("@type").str().as_deref(), Some("LocalBusiness"));
    assert_eq!(provider.get("name").str().as_deref(), Some("Acme Plumbing"));
    assert_eq!(provider.get("url").str().as_deref(), Some("https://acme.example"));
    assert!(!provider.has("telephone"));
    assert!(!provider.has("description"));
}

#[test]
fn service_optional_fields() {
    let options = ServiceOptions::new("Drain Cleaning", "Desc", "https://acme.example/d", acme())
        .image("https://acme.example/drain.jpg")
        .service_type("Plumbing")
        .area_served_city("Los Angeles");
    let schema = service(&options);

    assert_eq!(schema.get("serviceType").str().as_deref(), Some("Plumbing"));
    assert_eq!(schema.get("areaServed").get("@type").str().as_deref(), Some("City"));
    assert_eq!(schema.get("areaServed").get("name").str().as_deref(), Some("Los Angeles"));
}

#[test]
fn service_without_optionals_omits_keys() {
    let schema = service(&ServiceOptions::new("S", "D", "https://u.example", acme()));
    assert!(!schema.has("image"));
    assert!(!schema.has("serviceType"));
    assert!(!schema.has("areaServed"));
}

// =========================================================================
// FAQ builder
// =========================================================================

#[test]
fn faq_preserves_order_and_nests_answers() {
    let schema = faq_page(&[
        FaqItem::new("Do you work weekends?", "Yes, Saturday and Sunday."),
        FaqItem::new("Are you insured?", "Fully insured."),
    ]);

    assert_eq!(schema.type_tag().as_deref(), Some("FAQPage"));
    let main = schema.get("mainEntity");
    assert_eq!(main.len(), Some(2));
    assert_eq!(main.at(0).get("@type").str().as_deref(), Some("Question"));
    assert_eq!(main.at(0).get("name").str().as_deref(), Some("Do you work weekends?"));
    assert_eq!(
        main.at(0).get("acceptedAnswer").get("text").str().as_deref(),
        Some("Yes, Saturday and Sunday.")
    );
    assert_eq!(main.at(1).get("name").str().as_deref(), Some("Are you insured?"));
}

#[test]
fn faq_empty_input_yields_empty_main_entity() {
    let schema = faq_page(&[]);
    assert!(schema.has("mainEntity"));
    assert_eq!(schema.get("mainEntity").len(), Some(0));
}

// =========================================================================
// Breadcrumb builder
// =========================================================================

#[test]
fn breadcrumb_positions_are_one_based() {
    let schema = breadcrumb_list(&[
        BreadcrumbItem::new("Home", "https://example.com"),
        BreadcrumbItem::new("Products", "https://example.com/products"),
    ]);

    let items = schema.get("itemListElement");
    assert_eq!(items.len(), Some(2));
    assert_eq!(items.at(0).get("position").int(), Some(1));
    assert_eq!(items.at(0).get("name").str().as_deref(), Some("Home"));
    assert_eq!(items.at(0).get("item").str().as_deref(), Some("https://example.com"));
    assert_eq!(items.at(1).get("position").int(), Some(2));
}

#[test]
fn breadcrumb_empty_trail() {
    let schema = breadcrumb_list(&[]);
    assert_eq!(schema.type_tag().as_deref(), Some("BreadcrumbList"));
    assert_eq!(schema.get("itemListElement").len(), Some(0));
}

// =========================================================================
// Review builder
// =========================================================================

#[test]
fn review_type_is_local_business() {
    let schema = review(&ReviewOptions::new(acme(), 0, 0.0));
    assert_eq!(schema.type_tag().as_deref(), Some("LocalBusiness"));
}

#[test]
fn review_bounds_default_to_five_and_one() {
    let schema = review(&ReviewOptions::new(acme(), 12, 4.6));
    let aggregate = schema.get("aggregateRating");
    assert_eq!(aggregate.get("@type").str().as_deref(), Some("AggregateRating"));
    assert_eq!(aggregate.get("ratingValue").float(), Some(4.6));
    assert_eq!(aggregate.get("reviewCount").int(), Some(12));
    assert_eq!(aggregate.get("bestRating").float(), Some(5.0));
    assert_eq!(aggregate.get("worstRating").float(), Some(1.0));
}

#[test]
fn review_explicit_bounds_propagate_to_entries() {
    let options = ReviewOptions::new(acme(), 3, 8.9)
        .best_rating(10.0)
        .worst_rating(0.0)
        .reviews([ReviewEntry::new("Pat", 9.5, "Great work", "2026-01-12")]);
    let schema = review(&options);

    assert_eq!(schema.get("aggregateRating").get("bestRating").float(), Some(10.0));
    let entry = schema.get("review").at(0);
    assert_eq!(entry.get("@type").str().as_deref(), Some("Review"));
    assert_eq!(entry.get("author").get("@type").str().as_deref(), Some("Person"));
    assert_eq!(entry.get("author").get("name").str().as_deref(), Some("Pat"));
    let rating = entry.get("reviewRating");
    assert_eq!(rating.get("@type").str().as_deref(), Some("Rating"));
    assert_eq!(rating.get("ratingValue").float(), Some(9.5));
    assert_eq!(rating.get("bestRating").float(), Some(10.0));
    assert_eq!(rating.get("worstRating").float(), Some(0.0));
    assert_eq!(entry.get("reviewBody").str().as_deref(), Some("Great work"));
    assert_eq!(entry.get("datePublished").str().as_deref(), Some("2026-01-12"));
}

#[test]
fn review_aggregate_emitted_for_zero_reviews() {
    let schema = review(&ReviewOptions::new(acme(), 0, 0.0));
    assert!(schema.has("aggregateRating"));
    assert_eq!(schema.get("aggregateRating").get("reviewCount").int(), Some(0));
    assert_eq!(schema.get("review").len(), Some(0));
}

// =========================================================================
// Product builder
// =========================================================================

#[test]
fn product_offers_requires_price_and_currency() {
    let base = ProductOptions::new("Widget", "A widget");
    assert!(!product(&base).has("offers"));
    assert!(!product(&base.clone().price(9.99)).has("offers"));
    assert!(!product(&base.clone().price_currency("USD")).has("offers"));
    assert!(product(&base.price(9.99).price_currency("USD")).has("offers"));
}

#[test]
fn product_zero_price_renders_as_zero_point_zero_zero() {
    let options = ProductOptions::new("Free Item", "Free product")
        .price(0.0)
        .price_currency("USD");
    let offers = product(&options).get("offers");
    assert_eq!(offers.get("price").str().as_deref(), Some("0.00"));
    assert_eq!(offers.get("priceCurrency").str().as_deref(), Some("USD"));
}

#[test]
fn product_price_renders_two_decimals() {
    let options = ProductOptions::new("Widget", "A widget")
        .price(1234.5)
        .price_currency("EUR");
    assert_eq!(product(&options).get("offers").get("price").str().as_deref(), Some("1234.50"));
}

#[test]
fn product_availability_renders_reference_url() {
    let options = ProductOptions::new("Widget", "A widget")
        .price(9.99)
        .price_currency("USD")
        .availability(Availability::InStock);
    assert_eq!(
        product(&options).get("offers").get("availability").str().as_deref(),
        Some("https://schema.org/InStock")
    );
}

#[test]
fn product_availability_key_omitted_when_absent() {
    let options = ProductOptions::new("Widget", "A widget")
        .price(9.99)
        .price_currency("USD");
    let offers = product(&options).get("offers");
    assert!(!offers.has("availability"));
    assert_eq!(offers.keys(), vec!["@type", "price", "priceCurrency"]);
}

#[test]
fn product_single_and_many_images() {
    let one = ProductOptions::new("W", "D").image("https://img.example/a.jpg");
    assert_eq!(
        product(&one).get("image").str().as_deref(),
        Some("https://img.example/a.jpg")
    );

    let many = ProductOptions::new("W", "D").image(vec![
        "https://img.example/a.jpg".to_string(),
        "https://img.example/b.jpg".to_string(),
    ]);
    let image = product(&many).get("image");
    assert_eq!(image.len(), Some(2));
    assert_eq!(image.at(1).str().as_deref(), Some("https://img.example/b.jpg"));
}

#[test]
fn product_brand_nests_as_record() {
    let schema = product(&ProductOptions::new("W", "D").brand("Acme"));
    assert_eq!(schema.get("brand").get("@type").str().as_deref(), Some("Brand"));
    assert_eq!(schema.get("brand").get("name").str().as_deref(), Some("Acme"));
}

// =========================================================================
// Article builder
// =========================================================================

#[test]
fn article_nests_author_and_publisher() {
    let options = ArticleOptions::new("Pipes 101", "2026-02-01", "Sam Reed", "Acme Press");
    let schema = article(&options);

    assert_eq!(schema.type_tag().as_deref(), Some("Article"));
    assert_eq!(schema.get("author").get("@type").str().as_deref(), Some("Person"));
    assert_eq!(schema.get("author").get("name").str().as_deref(), Some("Sam Reed"));
    assert_eq!(schema.get("publisher").get("@type").str().as_deref(), Some("Organization"));
    assert!(!schema.get("publisher").has("logo"));
    assert!(!schema.has("mainEntityOfPage"));
}

#[test]
fn article_publisher_logo_and_main_entity() {
    let options = ArticleOptions::new("Pipes 101", "2026-02-01", "Sam Reed", "Acme Press")
        .publisher_logo("https://press.example/logo.png")
        .url("https://press.example/pipes-101")
        .date_modified("2026-02-03");
    let schema = article(&options);

    let logo = schema.get("publisher").get("logo");
    assert_eq!(logo.get("@type").str().as_deref(), Some("ImageObject"));
    assert_eq!(logo.get("url").str().as_deref(), Some("https://press.example/logo.png"));

    let page = schema.get("mainEntityOfPage");
    assert_eq!(page.get("@type").str().as_deref(), Some("WebPage"));
    assert_eq!(page.get("@id").str().as_deref(), Some("https://press.example/pipes-101"));
    assert_eq!(schema.get("dateModified").str().as_deref(), Some("2026-02-03"));
}

// =========================================================================
// Event builder
// =========================================================================

#[test]
fn event_minimal() {
    let schema = event(&EventOptions::new("Open House", "2026-09-12T10:00"));
    assert_eq!(schema.type_tag().as_deref(), Some("Event"));
    assert_eq!(schema.get("startDate").str().as_deref(), Some("2026-09-12T10:00"));
    assert!(!schema.has("location"));
    assert!(!schema.has("eventStatus"));
}

#[test]
fn event_location_with_and_without_address() {
    let with = EventOptions::new("Open House", "2026-09-12")
        .location(EventLocation::new("Acme HQ").address("1 Main St"));
    let place = event(&with).get("location");
    assert_eq!(place.get("@type").str().as_deref(), Some("Place"));
    assert_eq!(place.get("address").get("@type").str().as_deref(), Some("PostalAddress"));
    assert_eq!(place.get("address").get("streetAddress").str().as_deref(), Some("1 Main St"));

    let without =
        EventOptions::new("Open House", "2026-09-12").location(EventLocation::new("Acme HQ"));
    assert!(!event(&without).get("location").has("address"));
}

#[test]
fn event_enums_render_reference_urls() {
    let options = EventOptions::new("Open House", "2026-09-12")
        .status(EventStatus::Cancelled)
        .attendance_mode(AttendanceMode::Mixed);
    let schema = event(&options);

    assert_eq!(
        schema.get("eventStatus").str().as_deref(),
        Some("https://schema.org/EventCancelled")
    );
    assert_eq!(
        schema.get("eventAttendanceMode").str().as_deref(),
        Some("https://schema.org/MixedEventAttendanceMode")
    );
}

// =========================================================================
// Serializer & merger
// =========================================================================

#[test]
fn merge_is_identity_on_order() {
    assert!(script::merge(Vec::new()).is_empty());

    let merged = script::merge(vec![faq_page(&[]), breadcrumb_list(&[]), event(&EventOptions::new("E", "2026-01-01"))]);
    let tags: Vec<_> = merged.iter().filter_map(Schema::type_tag).collect();
    assert_eq!(tags, vec!["FAQPage", "BreadcrumbList", "Event"]);
}

#[test]
fn payload_wraps_sequences_in_an_array() {
    let one = script::payload(faq_page(&[]));
    assert!(one.starts_with('{') && one.ends_with('}'));

    let many = script::payload(vec![faq_page(&[]), breadcrumb_list(&[])]);
    assert!(many.starts_with('[') && many.ends_with(']'));

    let reparsed = crate::json::JsonValue::new(
        miniserde::json::from_str(&many).expect("payload must be valid JSON"),
    );
    assert_eq!(reparsed.len(), Some(2));
    assert_eq!(reparsed.at(0).get("@type").str().as_deref(), Some("FAQPage"));
    assert_eq!(reparsed.at(1).get("@type").str().as_deref(), Some("BreadcrumbList"));
}

#[test]
fn extension_fields_via_with() {
    let schema = faq_page(&[]).with("inLanguage", "en");
    assert_eq!(schema.get("inLanguage").str().as_deref(), Some("en"));
}

// =========================================================================
// Snapshots
// =========================================================================

#[test]
fn snapshot_free_product_payload() {
    let options = ProductOptions::new("Free Item", "Free product")
        .price(0.0)
        .price_currency("USD");
    insta::assert_snapshot!(
        script::payload(product(&options)),
        @r#"{"@context":"https://schema.org","@type":"Product","description":"Free product","name":"Free Item","offers":{"@type":"Offer","price":"0.00","priceCurrency":"USD"}}"#
    );
}

#[test]
fn snapshot_breadcrumb_payload() {
    let schema = breadcrumb_list(&[
        BreadcrumbItem::new("Home", "https://example.com"),
        BreadcrumbItem::new("Products", "https://example.com/products"),
    ]);
    insta::assert_snapshot!(
        script::payload(schema),
        @r#"{"@context":"https://schema.org","@type":"BreadcrumbList","itemListElement":[{"@type":"ListItem","item":"https://example.com","name":"Home","position":1},{"@type":"ListItem","item":"https://example.com/products","name":"Products","position":2}]}"#
    );
}
