//! Resolves classified resources into configuration fragments.
//!
//! Fragments whose values live on the resource summary are extracted
//! directly. The GraphQL API needs a secondary lookup against the owning
//! service; all such lookups fan out concurrently and are joined before the
//! resolver returns. Any lookup failure fails the whole resolve step, so
//! nothing is ever written from a partially resolved stack.

use async_trait::async_trait;
use futures_util::future::try_join_all;
use tracing::debug;

use super::classify::{classify, ResourceKind};
use super::document::{ConfigFragment, ConfigSection};
use crate::error::ResolutionError;
use crate::model::StackResourceSummary;

/// Secondary lookup for resources whose configuration is not on the summary.
/// The production implementation queries AppSync; tests use in-memory maps.
#[async_trait]
pub trait EndpointLookup: Send + Sync {
    /// Returns the GraphQL endpoint uri for the given API id.
    async fn graphql_endpoint(&self, api_id: &str) -> Result<String, ResolutionError>;
}

/// Extracts the lookup key from a GraphQL API's composite physical id.
///
/// The physical id is an ARN-like string whose final `/`-separated segment is
/// the API id (`…:apis/abcd1234` -> `abcd1234`). The split convention is
/// service-specific, so it lives here as a standalone function. A trailing
/// separator is tolerated by taking the last non-empty segment.
pub fn graphql_api_id(physical_id: &str) -> &str {
    physical_id
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(physical_id)
}

/// Resolves every classifiable summary into a fragment. Unclassified types
/// are skipped (forward-compatibility), with a debug log so skips stay
/// visible.
pub async fn resolve(
    summaries: &[StackResourceSummary],
    region: &str,
    lookup: &dyn EndpointLookup,
) -> Result<Vec<ConfigFragment>, ResolutionError> {
    let mut fragments = Vec::new();
    let mut pending_lookups = Vec::new();

    for summary in summaries {
        let Some(kind) = classify(&summary.resource_type) else {
            debug!(
                logical_id = %summary.logical_id,
                resource_type = %summary.resource_type,
                "skipping unclassified resource type"
            );
            continue;
        };

        let physical_id = summary.physical_id.as_deref().ok_or_else(|| {
            ResolutionError::MissingPhysicalId {
                logical_id: summary.logical_id.clone(),
                resource_type: summary.resource_type.clone(),
            }
        })?;

        match kind {
            ResourceKind::IdentityPool => fragments.push(ConfigFragment::new(
                ConfigSection::Auth,
                [("identityPoolId", physical_id), ("region", region)],
            )),
            ResourceKind::UserPool => fragments.push(ConfigFragment::new(
                ConfigSection::Auth,
                [("userPoolId", physical_id)],
            )),
            ResourceKind::UserPoolClient => fragments.push(ConfigFragment::new(
                ConfigSection::Auth,
                [("userPoolWebClientId", physical_id)],
            )),
            ResourceKind::GraphqlApi => {
                let api_id = graphql_api_id(physical_id).to_string();
                debug!(
                    logical_id = %summary.logical_id,
                    api_id = %api_id,
                    "queueing GraphQL endpoint lookup"
                );
                pending_lookups.push(async move { lookup.graphql_endpoint(&api_id).await });
            }
        }
    }

    // Fan-out/fan-in: all lookups run concurrently, and the first failure
    // fails the aggregate. In-flight siblings are dropped at that point; no
    // side effect has happened yet, so abandoning them is safe.
    let endpoints = try_join_all(pending_lookups).await?;
    for endpoint in endpoints {
        fragments.push(ConfigFragment::new(
            ConfigSection::Api,
            [
                ("graphql_endpoint", endpoint.as_str()),
                ("graphql_endpoint_iam_region", region),
            ],
        ));
    }

    Ok(fragments)
}
