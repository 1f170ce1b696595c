use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Activate Jobs Error. {0:?}")]
    ActivateJobsError(tonic::Status),
    #[error("Receive Jobs Error. {0:?}")]
    ReceiveJobsError(tonic::Status),
    #[error("Request timed out after {0:?}.")]
    RequestTimeout(Duration),
    #[error("Job type must not be empty.")]
    InvalidJobType,
    #[error("Amount must be positive, got {0}.")]
    InvalidAmount(i32),
    #[error("Worker name must not be empty.")]
    InvalidWorkerName,
    #[error("Json Payload Serialization Error. {0:?}")]
    JsonError(#[from] serde_json::Error),
    #[error("Std IO Error. {0:?}")]
    StdIoError(#[from] std::io::Error),
    #[error("Tonic Error: {0:?}")]
    TonicError(#[from] tonic::transport::Error),
    #[error("Configuration Error: {0}")]
    ConfigError(#[from] envy::Error),
    #[error("Invalid URI: {0}")]
    InvalidUri(#[from] tonic::codegen::http::uri::InvalidUri),
    #[error("URI Scheme (e.g. HTTPS) is required.")]
    SchemeMissingError,
    #[error("Invalid URI Scheme supplied: {0:?}")]
    InvalidSchemeError(String),
}
