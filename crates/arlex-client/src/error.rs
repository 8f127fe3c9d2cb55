//! Error taxonomy for the dashboard pipeline.

use thiserror::Error;

use crate::api::ApiError;

/// Errors surfaced to the dashboard frontend.
///
/// Both variants are recoverable: the frontend reports them and leaves the
/// previously displayed state intact.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The device list could not be loaded at startup.
    #[error("device directory unavailable: {0}")]
    DirectoryUnavailable(#[source] ApiError),

    /// A reading fetch for the selected device failed.
    #[error("reading retrieval failed: {0}")]
    Retrieval(#[source] ApiError),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
