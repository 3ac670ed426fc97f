use time::OffsetDateTime;

use crate::{ContactSubmission, OutgoingMail};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactHtmlTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub company: Option<&'a str>,
    pub lines: Vec<&'a str>,
    pub year: i32,
}

#[derive(askama::Template)]
#[template(path = "contact.txt")]
pub struct ContactPlainTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub company: Option<&'a str>,
    pub message: &'a str,
}

/// Builds the notification sent to `to` for a contact submission, replying
/// to the submitter.
pub fn compose_contact_mail(
    submission: &ContactSubmission,
    to: impl Into<String>,
) -> Result<OutgoingMail, askama::Error> {
    let name = submission.name.trim();
    let email = submission.email.trim();
    let company = submission.company();
    let message = submission.message.replace("\r\n", "\n");

    let html = askama::Template::render(&ContactHtmlTemplate {
        name,
        email,
        company,
        lines: message.split('\n').collect(),
        year: OffsetDateTime::now_utc().year(),
    })?;

    let plain = askama::Template::render(&ContactPlainTemplate {
        name,
        email,
        company,
        message: &submission.message,
    })?;

    Ok(OutgoingMail {
        to: to.into(),
        reply_to: Some(email.to_owned()),
        subject: format!("New Contact Form Submission from {name}"),
        html,
        plain,
    })
}
