//! stackconfig - client configuration synthesis for deployed stacks
//!
//! This library inspects a deployed CloudFormation stack and produces the
//! configuration document a client application reads at startup: Cognito
//! identifiers straight from the stack's resource inventory, and the AppSync
//! GraphQL endpoint via a secondary lookup against the owning service.
//!
//! # Core concepts
//!
//! - **Lister**: drains the paginated resource inventory, keeping only
//!   resources that finished provisioning (create/update complete)
//! - **Classifier**: maps declared resource types onto the finite set of
//!   extraction rules; unknown types are skipped
//! - **Resolver**: turns classified resources into configuration fragments,
//!   fanning out the remote lookups concurrently
//! - **Writer**: folds the fragments into one deterministic document and
//!   persists it atomically
//!
//! The remote services sit behind the [`pipeline::lister::ResourcePages`] and
//! [`pipeline::resolver::EndpointLookup`] traits, so the whole pipeline runs
//! against in-memory doubles in tests.

pub mod aws;
pub mod cli;
pub mod error;
pub mod model;
pub mod pipeline;

pub use error::{GenerateError, LookupError, PersistError, ResolutionError};
pub use model::{ResourcePage, ResourceStatus, StackResourceSummary};
pub use pipeline::document::{ConfigDocument, ConfigFragment, ConfigSection};
pub use pipeline::ConfigGenerator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
