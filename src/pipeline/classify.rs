//! Maps declared resource types to configuration-extraction rules.

use super::document::ConfigSection;

/// The finite set of resource types the generator understands. Each variant
/// knows which section it feeds and whether its value lives on the resource
/// summary itself or must be fetched from the owning service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    IdentityPool,
    UserPool,
    UserPoolClient,
    GraphqlApi,
}

impl ResourceKind {
    pub fn section(&self) -> ConfigSection {
        match self {
            ResourceKind::IdentityPool
            | ResourceKind::UserPool
            | ResourceKind::UserPoolClient => ConfigSection::Auth,
            ResourceKind::GraphqlApi => ConfigSection::Api,
        }
    }

    /// True when the summary alone cannot supply the configuration value and
    /// the owning service must be queried.
    pub fn requires_remote_lookup(&self) -> bool {
        matches!(self, ResourceKind::GraphqlApi)
    }
}

/// Pure lookup from the declared resource type. Unknown types yield `None`
/// and are skipped by the pipeline, keeping the generator forward-compatible
/// with resource types it does not yet understand.
pub fn classify(resource_type: &str) -> Option<ResourceKind> {
    match resource_type {
        "AWS::Cognito::IdentityPool" => Some(ResourceKind::IdentityPool),
        "AWS::Cognito::UserPool" => Some(ResourceKind::UserPool),
        "AWS::Cognito::UserPoolClient" => Some(ResourceKind::UserPoolClient),
        "AWS::AppSync::GraphQLApi" => Some(ResourceKind::GraphqlApi),
        _ => None,
    }
}
