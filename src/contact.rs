use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("Sorry, your message could not be sent ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Could not reach the server, please check your connection and try again. ({0})")]
    Transport(String),
}

#[derive(Deserialize)]
struct FieldError {
    message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<FieldError>,
    error: Option<String>,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.name.trim().is_empty() {
            return Err(SubmitError::Invalid("Please tell us your name."));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(SubmitError::Invalid("Please enter a valid email address."));
        }
        if self.message.trim().is_empty() {
            return Err(SubmitError::Invalid("Please include a short message."));
        }
        Ok(())
    }

    /// `application/x-www-form-urlencoded` body; empty optional fields are
    /// left out.
    pub fn encode(&self) -> String {
        [
            ("name", self.name.trim()),
            ("email", self.email.trim()),
            ("company", self.company.trim()),
            ("service", self.service.trim()),
            ("message", self.message.trim()),
        ]
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Human readable reason from a non-2xx reply body.
pub fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(resp) if !resp.errors.is_empty() => resp
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join(", "),
        Ok(ErrorResponse { error: Some(error), .. }) => error,
        _ => "the form service returned an error".to_string(),
    }
}

/// Posts the message once. No retry and no timeout beyond the browser's own.
pub async fn submit(endpoint: &str, message: &ContactMessage) -> Result<(), SubmitError> {
    message.validate()?;

    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(message.encode())
        .send()
        .await
        .map_err(|e| {
            warn!("Contact form transport error: {}", e);
            SubmitError::Transport(e.to_string())
        })?;

    if response.ok() {
        info!("Contact form accepted");
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    warn!("Contact form rejected with status {}", status);
    Err(SubmitError::Rejected {
        status,
        message: rejection_message(&body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: String::new(),
            service: "engineering".to_string(),
            message: "Hello & welcome".to_string(),
        }
    }

    #[test]
    fn complete_message_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_name_is_rejected() {
        let msg = ContactMessage { name: "   ".to_string(), ..filled() };
        assert!(matches!(msg.validate(), Err(SubmitError::Invalid(_))));
    }

    #[test]
    fn email_needs_a_domain() {
        for email in ["ada", "ada@", "@example.com", "ada@example", "a@b@c.com", "ada@.com"] {
            let msg = ContactMessage { email: email.to_string(), ..filled() };
            assert!(msg.validate().is_err(), "{} accepted", email);
        }
    }

    #[test]
    fn blank_message_is_rejected() {
        let msg = ContactMessage { message: "\n".to_string(), ..filled() };
        assert!(msg.validate().is_err());
    }

    #[test]
    fn encodes_form_body_and_skips_empty_fields() {
        assert_eq!(
            filled().encode(),
            "name=Ada%20Lovelace&email=ada%40example.com&service=engineering&message=Hello%20%26%20welcome"
        );
    }

    #[test]
    fn reads_error_list_from_rejection() {
        let body = r#"{"errors":[{"field":"email","message":"should be an email"},{"message":"too short"}]}"#;
        assert_eq!(rejection_message(body), "should be an email, too short");
    }

    #[test]
    fn reads_single_error_from_rejection() {
        assert_eq!(rejection_message(r#"{"error":"Form not found"}"#), "Form not found");
    }

    #[test]
    fn falls_back_for_non_json_rejection() {
        assert_eq!(rejection_message("<html>502</html>"), "the form service returned an error");
        assert_eq!(rejection_message("{}"), "the form service returned an error");
    }
}
