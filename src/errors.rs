use thiserror::Error;

/// Everything that can stop a generation before an image lands in the
/// gallery. Validation failures never reach the network; the rest are
/// reported through [`classify`].
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("API key is required")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ApiKey,
    Quota,
    SafetyBlocked,
    Unknown,
}

// Checked in order, first match wins. This is a best-effort heuristic over
// free-text messages from the API; it is intentionally left brittle rather
// than chasing every phrasing the backend might use.
const RULES: &[(&[&str], ErrorCategory)] = &[
    (&["api key", "authentication"], ErrorCategory::ApiKey),
    (&["quota", "limit"], ErrorCategory::Quota),
    (&["safety", "blocked"], ErrorCategory::SafetyBlocked),
];

/// Map a failure's message text to a user-facing category.
pub fn classify(message: &str) -> ErrorCategory {
    let message = message.to_lowercase();
    for (needles, category) in RULES {
        if needles.iter().any(|needle| message.contains(needle)) {
            return *category;
        }
    }
    ErrorCategory::Unknown
}

impl ErrorCategory {
    pub fn title(self) -> &'static str {
        match self {
            ErrorCategory::ApiKey => "API key error",
            ErrorCategory::Quota => "Quota error",
            ErrorCategory::SafetyBlocked => "Safety filter",
            ErrorCategory::Unknown => "Unknown error",
        }
    }

    pub fn remediation(self) -> &'static str {
        match self {
            ErrorCategory::ApiKey => {
                "The API key was rejected. Check that it was entered correctly, \
                 that it is activated, and that the Generative AI API is enabled \
                 for your project."
            }
            ErrorCategory::Quota => {
                "The API usage limit has been reached. Wait a while and try again."
            }
            ErrorCategory::SafetyBlocked => {
                "The prompt was blocked by the safety filters. Try rephrasing it."
            }
            ErrorCategory::Unknown => {
                "Check the error details, change the prompt, or wait a while and \
                 try again."
            }
        }
    }
}
