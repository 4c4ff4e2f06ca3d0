//! Localization provider and generic HTTP error messages.

/// Message key for the catch-all server error string.
pub const UNKNOWN_SERVER_ERROR_KEY: &str = "errors.unknown_server_error";

/// Access to the user's language and localized console strings.
pub trait Localizer: Send + Sync {
    /// Current language as a BCP 47 tag, sent as `Accept-Language`.
    fn language(&self) -> String;

    /// Look up a console string by key. Returns the key itself when the
    /// active language has no entry, so callers always get something usable.
    fn message(&self, key: &str) -> String;
}

/// Generic message for an HTTP status code, used when the error body carries
/// no usable message.
pub fn http_code_to_message(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("The request is malformed."),
        401 => Some("Authentication is required to access this resource."),
        403 => Some("You do not have permission to access this resource."),
        404 => Some("The requested resource was not found."),
        405 => Some("The request method is not allowed."),
        409 => Some("The request conflicts with the current state."),
        422 => Some("The request could not be processed."),
        429 => Some("Too many requests. Please try again later."),
        500 => Some("An internal server error occurred."),
        502 => Some("The upstream server returned an invalid response."),
        503 => Some("The service is temporarily unavailable."),
        504 => Some("The upstream server timed out."),
        _ => None,
    }
}

/// Built-in English localizer, used as the default and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLocalizer {
    language: Option<String>,
}

impl StaticLocalizer {
    pub fn new<S: Into<String>>(language: S) -> Self {
        Self { language: Some(language.into()) }
    }
}

impl Localizer for StaticLocalizer {
    fn language(&self) -> String {
        self.language.clone().unwrap_or_else(|| "en".to_string())
    }

    fn message(&self, key: &str) -> String {
        match key {
            UNKNOWN_SERVER_ERROR_KEY => "An unknown server error occurred.".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_codes_have_messages() {
        for status in [400, 401, 403, 404, 405, 409, 422, 429, 500, 502, 503, 504] {
            assert!(http_code_to_message(status).is_some(), "missing message for {}", status);
        }
    }

    #[test]
    fn unknown_status_codes_have_none() {
        assert_eq!(http_code_to_message(200), None);
        assert_eq!(http_code_to_message(418), None);
        assert_eq!(http_code_to_message(599), None);
    }

    #[test]
    fn static_localizer_defaults_to_english() {
        let localizer = StaticLocalizer::default();
        assert_eq!(localizer.language(), "en");
        assert_eq!(
            localizer.message(UNKNOWN_SERVER_ERROR_KEY),
            "An unknown server error occurred."
        );
        assert_eq!(localizer.message("some.other.key"), "some.other.key");
    }

    #[test]
    fn static_localizer_carries_language() {
        let localizer = StaticLocalizer::new("fr-FR");
        assert_eq!(localizer.language(), "fr-FR");
    }
}
