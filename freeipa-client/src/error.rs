use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /* transport-level faults: DNS, TLS handshake, connection refused.
       Rejected credentials are NOT an error, login reports them as None. */
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /* the server (or something in front of it) answered with a body that
       is not JSON */
    #[error("invalid JSON in response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0} is not a valid member type, specify user or group")]
    InvalidMemberType(String),

    #[error("failed to read CA bundle {path}: {source}")]
    CaBundle {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
