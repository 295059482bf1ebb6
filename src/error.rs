use thiserror::Error;

/// Errors that can occur during an eVatR confirmation request.
///
/// Unknown-but-structurally-valid response values (an unlisted status code,
/// an unknown match letter) are deliberately *not* errors — they resolve to
/// fallback descriptions so a well-formed response always yields a complete
/// result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvatrError {
    /// Required request parameters were missing or blank.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// The HTTP call did not succeed (network failure or non-2xx status).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response was not well-formed XML or lacked required fields.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
