use thiserror::Error;

/// Errors produced while normalizing timestamp input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// Input text matched none of the accepted timestamp formats.
    ///
    /// The original text is preserved so callers can surface it to clients.
    /// Results in a 400 Bad Request when it reaches the response layer.
    #[error("Unable to parse timestamp: '{text}'. Supported formats: 2025-10-07T01:33, 2025-10-07T01:33:00, 2025-10-07T01:33:00Z, 2025-10-07")]
    Unparseable { text: String },
}
