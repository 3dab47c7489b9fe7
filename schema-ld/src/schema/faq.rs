//! FAQPage builder.

use super::Schema;
use crate::json;

/// One question/answer pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqItem {
    pub(crate) question: String,
    pub(crate) answer: String,
}

impl FaqItem {
    /// Create a question/answer pair.
    #[must_use]
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// Build a FAQPage record from an ordered list of question/answer pairs.
///
/// Order is preserved. An empty input yields an empty `mainEntity` array,
/// not an absent one.
pub fn faq_page(items: &[FaqItem]) -> Schema {
    let mut main_entity = json::arr();
    for item in items {
        main_entity = main_entity.push(
            json::obj()
                .set("@type", "Question")
                .set("name", &item.question)
                .set(
                    "acceptedAnswer",
                    json::obj()
                        .set("@type", "Answer")
                        .set("text", &item.answer),
                ),
        );
    }

    Schema::typed("FAQPage").set("mainEntity", main_entity)
}
