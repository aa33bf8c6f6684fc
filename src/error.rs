//! Error types for the configuration synthesis pipeline.
//!
//! Each pipeline stage has its own error type; every stage fails fast and
//! propagates to the top-level caller. There is no partial-success path: a
//! failure anywhere means no configuration file is written.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while draining the paginated stack resource listing.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The listing service rejected or failed a page request.
    #[error("listing resources for stack {stack_name} failed: {source}")]
    Service {
        stack_name: String,
        #[source]
        source: aws_sdk_cloudformation::Error,
    },

    /// Listing failure from a non-SDK source (used by in-memory page sources).
    #[error("stack resource listing failed: {message}")]
    Other { message: String },
}

/// Failure while resolving a resource's configuration fragment.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The secondary lookup service rejected or failed a request.
    #[error("fetching GraphQL API {api_id} failed: {source}")]
    Service {
        api_id: String,
        #[source]
        source: aws_sdk_appsync::Error,
    },

    /// The lookup succeeded but the API carries no GraphQL endpoint uri.
    #[error("GraphQL API {api_id} has no GRAPHQL endpoint uri")]
    MissingEndpoint { api_id: String },

    /// A classified, settled resource is missing the physical id its rule
    /// extracts. This indicates a malformed stack state, not a skippable
    /// unknown resource.
    #[error("resource {logical_id} ({resource_type}) has no physical id")]
    MissingPhysicalId {
        logical_id: String,
        resource_type: String,
    },

    /// Lookup failure from a non-SDK source (used by in-memory lookups).
    #[error("endpoint lookup failed: {message}")]
    Other { message: String },
}

/// Failure while persisting the merged configuration document.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("serializing configuration document failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination path cannot hold a file (e.g. ends in `..` or `/`).
    #[error("destination {path} has no file name")]
    InvalidDestination { path: PathBuf },
}

/// Top-level error for a single pipeline invocation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}
