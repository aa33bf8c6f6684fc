//! Production implementations of the remote-service seams.
//!
//! This is the only module that touches SDK types; responses are converted
//! into the crate's own model at this boundary. Retry with backoff for
//! transient/throttling errors and a per-attempt timeout are delegated to the
//! SDK's standard runtime configuration rather than hand-rolled.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};

use crate::error::{LookupError, ResolutionError};
use crate::model::{ResourcePage, ResourceStatus, StackResourceSummary};
use crate::pipeline::lister::ResourcePages;
use crate::pipeline::resolver::EndpointLookup;

const MAX_ATTEMPTS: u32 = 5;

/// Key of the GraphQL endpoint in the API's uri map.
const GRAPHQL_URI_KEY: &str = "GRAPHQL";

/// Loads shared SDK configuration for the given deployment region.
/// Credentials come from the ambient environment (profile, env vars, or
/// instance metadata), as with any SDK-based tool.
pub async fn sdk_config(region: &str, attempt_timeout: Duration) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .retry_config(RetryConfig::standard().with_max_attempts(MAX_ATTEMPTS))
        .timeout_config(
            TimeoutConfig::builder()
                .operation_attempt_timeout(attempt_timeout)
                .build(),
        )
        .load()
        .await
}

/// [`ResourcePages`] backed by the CloudFormation `ListStackResources` API.
pub struct CloudFormationPages {
    client: aws_sdk_cloudformation::Client,
}

impl CloudFormationPages {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_cloudformation::Client::new(config),
        }
    }
}

#[async_trait]
impl ResourcePages for CloudFormationPages {
    async fn fetch_page(
        &self,
        stack_name: &str,
        continuation: Option<String>,
    ) -> Result<ResourcePage, LookupError> {
        let output = self
            .client
            .list_stack_resources()
            .stack_name(stack_name)
            .set_next_token(continuation)
            .send()
            .await
            .map_err(|source| LookupError::Service {
                stack_name: stack_name.to_string(),
                source: source.into(),
            })?;

        let summaries = output
            .stack_resource_summaries
            .unwrap_or_default()
            .into_iter()
            .map(convert_summary)
            .collect();

        Ok(ResourcePage {
            summaries,
            continuation: output.next_token,
        })
    }
}

fn convert_summary(
    summary: aws_sdk_cloudformation::types::StackResourceSummary,
) -> StackResourceSummary {
    StackResourceSummary {
        logical_id: summary.logical_resource_id.unwrap_or_default(),
        resource_type: summary.resource_type.unwrap_or_default(),
        physical_id: summary.physical_resource_id,
        status: summary
            .resource_status
            .as_ref()
            .map(|status| ResourceStatus::parse(status.as_str()))
            .unwrap_or(ResourceStatus::Other),
    }
}

/// [`EndpointLookup`] backed by the AppSync `GetGraphqlApi` API.
pub struct AppSyncLookup {
    client: aws_sdk_appsync::Client,
}

impl AppSyncLookup {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_appsync::Client::new(config),
        }
    }
}

#[async_trait]
impl EndpointLookup for AppSyncLookup {
    async fn graphql_endpoint(&self, api_id: &str) -> Result<String, ResolutionError> {
        let output = self
            .client
            .get_graphql_api()
            .api_id(api_id)
            .send()
            .await
            .map_err(|source| ResolutionError::Service {
                api_id: api_id.to_string(),
                source: source.into(),
            })?;

        output
            .graphql_api
            .and_then(|api| api.uris)
            .and_then(|mut uris| uris.remove(GRAPHQL_URI_KEY))
            .ok_or_else(|| ResolutionError::MissingEndpoint {
                api_id: api_id.to_string(),
            })
    }
}
