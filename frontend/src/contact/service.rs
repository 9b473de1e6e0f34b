use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::AbortController;

use crate::config;
use crate::contact::validation::ContactFormData;

pub const SUBMIT_TIMEOUT_MS: u32 = 10_000;

const GENERIC_FAILURE: &str = "Form submission failed";
const UNEXPECTED_FAILURE: &str = "An unexpected error occurred";

/// Every way a submission can fail. `Display` is the message shown to the
/// visitor.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SubmissionError {
    #[error("Form submission endpoint not configured")]
    MissingEndpoint,
    #[error("Request timed out. Please try again.")]
    Timeout,
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
    #[error("Unable to encode form data: {0}")]
    Encode(String),
}

#[derive(Serialize)]
struct ContactPayload<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

impl<'a> From<&'a ContactFormData> for ContactPayload<'a> {
    fn from(data: &'a ContactFormData) -> Self {
        Self {
            name: data.name.trim(),
            email: data.email.trim(),
            message: data.message.trim(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Maps a non-2xx response to an error, preferring the body's `error` field.
pub fn rejection(status: u16, body: Option<&str>) -> SubmissionError {
    let message = body
        .and_then(|b| serde_json::from_str::<ErrorBody>(b).ok())
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string());
    SubmissionError::Rejected { status, message }
}

pub fn transport_failure(timed_out: bool, message: String) -> SubmissionError {
    if timed_out {
        SubmissionError::Timeout
    } else if message.trim().is_empty() {
        SubmissionError::Transport(UNEXPECTED_FAILURE.to_string())
    } else {
        SubmissionError::Transport(message)
    }
}

/// Posts the form to the configured endpoint. One request per call, aborted
/// after `SUBMIT_TIMEOUT_MS`; retrying is left to the visitor.
pub async fn submit_contact_form(data: &ContactFormData) -> Result<(), SubmissionError> {
    let endpoint = config::require_form_endpoint()?;
    send(endpoint, data).await
}

pub async fn send(endpoint: &str, data: &ContactFormData) -> Result<(), SubmissionError> {
    let controller = AbortController::new()
        .map_err(|_| SubmissionError::Transport(UNEXPECTED_FAILURE.to_string()))?;

    let timed_out = Rc::new(Cell::new(false));
    let _deadline = {
        let timed_out = timed_out.clone();
        let controller = controller.clone();
        Timeout::new(SUBMIT_TIMEOUT_MS, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let request = Request::post(endpoint)
        .header("Accept", "application/json")
        .abort_signal(Some(&controller.signal()))
        .json(&ContactPayload::from(data))
        .map_err(|e| SubmissionError::Encode(e.to_string()))?;

    match request.send().await {
        Ok(response) if response.ok() => {
            info!("Contact form accepted with status {}", response.status());
            Ok(())
        }
        Ok(response) => {
            let status = response.status();
            let body = response.text().await.ok();
            warn!("Contact form rejected with status {}", status);
            Err(rejection(status, body.as_deref()))
        }
        Err(e) => {
            warn!("Contact form request failed: {}", e);
            Err(transport_failure(timed_out.get(), e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_trimmed_json() {
        let data = ContactFormData {
            name: "  Jo ".into(),
            email: " jo@example.com ".into(),
            message: " Need help with a UAE entity. ".into(),
        };
        let json = serde_json::to_value(ContactPayload::from(&data)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jo",
                "email": "jo@example.com",
                "message": "Need help with a UAE entity."
            })
        );
    }

    #[test]
    fn rejection_uses_server_message() {
        let err = rejection(422, Some(r#"{"error":"Email is blocked"}"#));
        assert_eq!(
            err,
            SubmissionError::Rejected { status: 422, message: "Email is blocked".into() }
        );
        assert_eq!(err.to_string(), "Email is blocked");
    }

    #[test]
    fn rejection_falls_back_to_generic_message() {
        for body in [None, Some(""), Some("<html>502</html>"), Some("{}"), Some(r#"{"error":""}"#), Some(r#"{"error":null}"#)] {
            assert_eq!(rejection(500, body).to_string(), "Form submission failed", "{body:?}");
        }
    }

    #[test]
    fn timeout_has_its_own_message() {
        let err = transport_failure(true, "The operation was aborted.".into());
        assert_eq!(err, SubmissionError::Timeout);
        assert_eq!(err.to_string(), "Request timed out. Please try again.");
    }

    #[test]
    fn transport_failure_keeps_underlying_message() {
        assert_eq!(
            transport_failure(false, "Failed to fetch".into()).to_string(),
            "Failed to fetch"
        );
        assert_eq!(
            transport_failure(false, "  ".into()).to_string(),
            "An unexpected error occurred"
        );
    }

    #[test]
    fn missing_endpoint_message() {
        assert_eq!(
            SubmissionError::MissingEndpoint.to_string(),
            "Form submission endpoint not configured"
        );
    }
}
