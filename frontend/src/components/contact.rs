use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::service::submit_contact_form;
use crate::contact::validation::{validate_form, ContactFormData, Field, ValidationResult};
use crate::content::JURISDICTIONS;

const SUCCESS_RESET_MS: u32 = 5_000;
const ERROR_RESET_MS: u32 = 8_000;
const FALLBACK_ERROR: &str = "Unable to submit form. Please try again or contact us directly.";

const CONTACT_EMAILS: &[&str] = &["rlm@boru-consulting.com", "jl@boru-consulting.com"];

#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Idle,
    Validating,
    Submitting,
    Success,
    Error(String),
}

impl FormStatus {
    /// Submit and the fields are disabled while a request is in flight or
    /// the success overlay is up.
    pub fn is_locked(&self) -> bool {
        matches!(self, FormStatus::Submitting | FormStatus::Success)
    }

    pub fn announcement(&self) -> &str {
        match self {
            FormStatus::Success => "Form submitted successfully",
            FormStatus::Error(message) => message,
            _ => "",
        }
    }

    pub fn after_validation(result: &ValidationResult) -> FormStatus {
        if result.is_valid() {
            FormStatus::Submitting
        } else {
            FormStatus::Idle
        }
    }
}

fn error_message(message: String) -> String {
    if message.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    }
}

fn field_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactFormData::default);
    let status = use_state(|| FormStatus::Idle);
    let errors = use_state(ValidationResult::default);
    // A new timer replaces (and so cancels) the previous one.
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let on_input = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let Some(value) = field_value(&e) else { return };
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
            if errors.error(field).is_some() {
                let mut cleared = (*errors).clone();
                cleared.errors.remove(&field);
                errors.set(cleared);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let errors = errors.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_locked() {
                return;
            }

            status.set(FormStatus::Validating);
            let result = validate_form(&form);
            let next = FormStatus::after_validation(&result);
            errors.set(result);
            status.set(next.clone());
            if next != FormStatus::Submitting {
                return;
            }

            let data = form.trimmed();
            let form = form.clone();
            let status = status.clone();
            let reset_timer = reset_timer.clone();
            spawn_local(async move {
                match submit_contact_form(&data).await {
                    Ok(()) => {
                        info!("Contact form submitted");
                        status.set(FormStatus::Success);
                        form.set(ContactFormData::default());
                        let status = status.clone();
                        *reset_timer.borrow_mut() = Some(Timeout::new(SUCCESS_RESET_MS, move || {
                            status.set(FormStatus::Idle);
                        }));
                    }
                    Err(err) => {
                        warn!("Contact form submission failed: {:?}", err);
                        status.set(FormStatus::Error(error_message(err.to_string())));
                        let status = status.clone();
                        *reset_timer.borrow_mut() = Some(Timeout::new(ERROR_RESET_MS, move || {
                            status.set(FormStatus::Idle);
                        }));
                    }
                }
            });
        })
    };

    let locked = status.is_locked();
    let field_error = |field: Field| -> Html {
        match errors.error(field) {
            Some(message) => html! {
                <p id={format!("{}-error", field.as_str())} class="field-error">{message}</p>
            },
            None => html! {},
        }
    };
    let described_by = |field: Field| -> Option<AttrValue> {
        errors
            .error(field)
            .map(|_| AttrValue::from(format!("{}-error", field.as_str())))
    };
    let invalid = |field: Field| -> AttrValue {
        if errors.error(field).is_some() { "true" } else { "false" }.into()
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="contact-grid">
                <div class="contact-intro">
                    <span class="eyebrow">{"Inquiry"}</span>
                    <h2>{"Start the dialogue"}</h2>
                    <p>{"We are selective with our engagements. Please provide brief details regarding your strategic requirements."}</p>

                    <div class="contact-details">
                        {
                            JURISDICTIONS.iter().filter(|j| j.registration.starts_with("Company No.")).map(|j| html! {
                                <div class="contact-office">
                                    <h4>{j.name}</h4>
                                    <span>{j.entity}</span>
                                    <span>{j.registration}</span>
                                </div>
                            }).collect::<Html>()
                        }
                        <div class="contact-office">
                            <h4>{"Electronic"}</h4>
                            {
                                CONTACT_EMAILS.iter().map(|email| html! {
                                    <a href={format!("mailto:{}", email)}>{*email}</a>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>

                <div class="contact-form-column">
                    <div role="status" aria-live="polite" aria-atomic="true" class="sr-only">
                        {status.announcement()}
                    </div>

                    <form {onsubmit} class="contact-form" aria-label="Contact form">
                        if *status == FormStatus::Success {
                            <div class="contact-success">
                                <span class="contact-success-icon">{"✓"}</span>
                                <h3>{"Request Received"}</h3>
                                <p>{"Our partners will review your inquiry shortly."}</p>
                            </div>
                        }
                        if let FormStatus::Error(message) = &*status {
                            <div class="contact-error">{message.clone()}</div>
                        }

                        <fieldset disabled={locked}>
                            <div class="contact-row">
                                <div class="contact-field">
                                    <input
                                        id="name-input"
                                        type="text"
                                        name="name"
                                        placeholder="Name"
                                        value={form.name.clone()}
                                        oninput={on_input(Field::Name)}
                                        aria-invalid={invalid(Field::Name)}
                                        aria-describedby={described_by(Field::Name)}
                                    />
                                    <label for="name-input">{"Name"}</label>
                                    { field_error(Field::Name) }
                                </div>
                                <div class="contact-field">
                                    <input
                                        id="email-input"
                                        type="email"
                                        name="email"
                                        placeholder="Email"
                                        value={form.email.clone()}
                                        oninput={on_input(Field::Email)}
                                        aria-invalid={invalid(Field::Email)}
                                        aria-describedby={described_by(Field::Email)}
                                    />
                                    <label for="email-input">{"Email"}</label>
                                    { field_error(Field::Email) }
                                </div>
                            </div>
                            <div class="contact-field">
                                <textarea
                                    id="message-input"
                                    name="message"
                                    rows="4"
                                    placeholder="Context"
                                    value={form.message.clone()}
                                    oninput={on_input(Field::Message)}
                                    aria-invalid={invalid(Field::Message)}
                                    aria-describedby={described_by(Field::Message)}
                                />
                                <label for="message-input">{"Strategic Context"}</label>
                                { field_error(Field::Message) }
                            </div>
                        </fieldset>

                        <div class="contact-actions">
                            <button type="submit" class="contact-submit" disabled={locked}>
                                if *status == FormStatus::Submitting {
                                    <span>{"Processing"}</span>
                                    <span class="spinner" aria-hidden="true"></span>
                                } else {
                                    <span>{"Submit Request"}</span>
                                    <span class="arrow" aria-hidden="true">{"→"}</span>
                                }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
            <style>
                {r#"
                .contact-section {
                    padding: 6rem 1.5rem;
                    border-top: 1px solid var(--border);
                    background: var(--surface);
                }
                .contact-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 5fr 7fr;
                    gap: 6rem;
                }
                .contact-intro h2 {
                    font-family: var(--serif);
                    font-size: 3.5rem;
                    margin: 0 0 1.5rem;
                }
                .contact-intro p {
                    color: var(--muted);
                    line-height: 1.6;
                }
                .contact-details {
                    margin-top: 3rem;
                    padding-top: 2.5rem;
                    border-top: 1px solid var(--border);
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .contact-office h4 {
                    font-family: var(--serif);
                    font-size: 1.25rem;
                    margin: 0 0 0.5rem;
                }
                .contact-office span,
                .contact-office a {
                    display: block;
                    color: var(--muted);
                    font-size: 0.875rem;
                    text-decoration: none;
                }
                .contact-form-column {
                    border-left: 1px solid var(--border);
                    padding-left: 3rem;
                }
                .contact-form {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }
                .contact-form fieldset {
                    border: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .contact-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-field {
                    position: relative;
                    display: flex;
                    flex-direction: column-reverse;
                }
                .contact-field input,
                .contact-field textarea {
                    background: transparent;
                    border: none;
                    border-bottom: 1px solid var(--border);
                    padding: 0.75rem 0;
                    font-size: 1.125rem;
                    color: var(--text);
                    resize: none;
                }
                .contact-field input:focus,
                .contact-field textarea:focus {
                    outline: none;
                    border-color: var(--gold);
                }
                .contact-field label {
                    font-size: 0.625rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: var(--muted);
                }
                .field-error {
                    order: -1;
                    color: #dc2626;
                    font-size: 0.75rem;
                    margin: 0.25rem 0 0;
                }
                .contact-error {
                    padding: 1rem;
                    border: 1px solid #fca5a5;
                    background: rgba(254, 226, 226, 0.4);
                    color: #991b1b;
                    font-size: 0.875rem;
                    border-radius: 4px;
                }
                .contact-success {
                    position: absolute;
                    inset: 0;
                    z-index: 20;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    text-align: center;
                    animation: fade-in 0.4s ease;
                }
                .contact-success-icon {
                    font-size: 2.5rem;
                    color: var(--gold);
                }
                .contact-success h3 {
                    font-family: var(--serif);
                    font-size: 1.875rem;
                    margin: 0.5rem 0;
                }
                .contact-actions {
                    display: flex;
                    justify-content: flex-end;
                }
                .contact-submit {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: none;
                    border: none;
                    color: var(--text);
                    font-size: 0.625rem;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    cursor: pointer;
                }
                .contact-submit:hover { color: var(--gold); }
                .contact-submit:disabled { opacity: 0.5; cursor: default; }
                .spinner {
                    width: 1rem;
                    height: 1rem;
                    border: 2px solid currentColor;
                    border-top-color: transparent;
                    border-radius: 50%;
                    animation: spin 0.8s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                @keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
                @media (max-width: 1024px) {
                    .contact-grid { grid-template-columns: 1fr; gap: 3rem; }
                    .contact-form-column { border-left: none; padding-left: 0; }
                    .contact-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_while_submitting_or_showing_success() {
        assert!(FormStatus::Submitting.is_locked());
        assert!(FormStatus::Success.is_locked());
        assert!(!FormStatus::Idle.is_locked());
        assert!(!FormStatus::Validating.is_locked());
        assert!(!FormStatus::Error("nope".into()).is_locked());
    }

    #[test]
    fn invalid_form_returns_to_idle() {
        let result = validate_form(&ContactFormData::default());
        assert_eq!(FormStatus::after_validation(&result), FormStatus::Idle);

        let result = validate_form(&ContactFormData {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            message: "We need a UK holding structure.".into(),
        });
        assert_eq!(FormStatus::after_validation(&result), FormStatus::Submitting);
    }

    #[test]
    fn live_region_mirrors_status() {
        assert_eq!(FormStatus::Success.announcement(), "Form submitted successfully");
        assert_eq!(
            FormStatus::Error("Request timed out. Please try again.".into()).announcement(),
            "Request timed out. Please try again."
        );
        assert_eq!(FormStatus::Submitting.announcement(), "");
    }

    #[test]
    fn blank_error_falls_back() {
        assert_eq!(error_message("  ".into()), FALLBACK_ERROR);
        assert_eq!(error_message("Form submission failed".into()), "Form submission failed");
    }
}
