use askama::Template;
use serde::Deserialize;

/// One contact-form submission as posted by the marketing site.
///
/// Every field is optional on the wire; missing keys deserialize to empty
/// strings. The submission lives for the duration of one request and is
/// never persisted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
    pub project_details: String,
}

/// Contact inquiry plain text body
#[derive(Template)]
#[template(path = "emails/contact-inquiry.txt")]
struct InquiryTextTemplate<'a> {
    submission: &'a ContactSubmission,
}

/// Contact inquiry HTML body
#[derive(Template)]
#[template(path = "emails/contact-inquiry.html")]
struct InquiryHtmlTemplate<'a> {
    submission: &'a ContactSubmission,
}

impl ContactSubmission {
    /// Render the plain-text email body.
    pub fn text_body(&self) -> askama::Result<String> {
        InquiryTextTemplate { submission: self }.render()
    }

    /// Render the HTML email body.
    ///
    /// Field values are escaped by the template engine, so markup submitted
    /// through the form arrives inert in the delivered email.
    pub fn html_body(&self) -> askama::Result<String> {
        InquiryHtmlTemplate { submission: self }.render()
    }
}
