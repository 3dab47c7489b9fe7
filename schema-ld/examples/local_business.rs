//! Assemble the structured data for a local-business landing page and
//! print the script-tag payload.
//!
//! Run with: cargo run -p schema-ld --example local_business

use schema_ld::prelude::*;

fn main() {
    let info = OrganizationInfo::new("Acme Plumbing", "https://acme.example")
        .description("24/7 emergency plumbing")
        .telephone("+1-555-0100")
        .price_range("$$")
        .same_as(["https://twitter.com/acme", "https://facebook.com/acme"]);

    let business = organization(
        &OrganizationOptions::new(info)
            .area_served(ServiceArea::new().city("Los Angeles"))
            .opening_hours(OpeningHours::new().open_24_hours()),
    );

    let crumbs = breadcrumb_list(&[
        BreadcrumbItem::new("Home", "https://acme.example"),
        BreadcrumbItem::new("Services", "https://acme.example/services"),
    ]);

    let faqs = faq_page(&[
        FaqItem::new("Do you handle emergencies?", "Yes, around the clock."),
        FaqItem::new("Which areas do you serve?", "Greater Los Angeles."),
    ]);

    let json = script::payload(script::merge(vec![business, crumbs, faqs]));

    // The caller owns the surrounding markup; this crate only produces the
    // element's text content.
    println!("<script type=\"application/ld+json\">{json}</script>");
}
