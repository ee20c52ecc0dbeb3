use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("failed to encode function: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode function: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("unsupported wire protocol version {found}, expected {expected}")]
    UnsupportedVersion { expected: u32, found: u32 },
}
