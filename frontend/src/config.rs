use crate::contact::service::SubmissionError;

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://www.boruconsulting.com"
}

/// Contact form endpoint, baked in at build time from `BORU_FORM_ENDPOINT`.
pub fn form_endpoint() -> Option<&'static str> {
    non_blank(option_env!("BORU_FORM_ENDPOINT"))
}

pub fn require_form_endpoint() -> Result<&'static str, SubmissionError> {
    form_endpoint().ok_or(SubmissionError::MissingEndpoint)
}

fn non_blank(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn absolute_url(path: &str) -> String {
    format!("{}{}", get_site_url(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_endpoint_counts_as_missing() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(
            non_blank(Some(" https://formspree.io/f/abc ")),
            Some("https://formspree.io/f/abc")
        );
    }

    #[test]
    fn absolute_url_prefixes_site_origin() {
        let url = absolute_url("/blog");
        assert!(url.starts_with(get_site_url()));
        assert!(url.ends_with("/blog"));
    }
}
