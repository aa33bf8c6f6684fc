//! End-to-end tests of the synthesis pipeline against in-memory services.
//!
//! Covers the full Lister -> Classifier -> Resolver -> Writer flow: the
//! Cognito triple scenario, the AppSync endpoint lookup, failure behavior
//! (no file written), and byte-level idempotence of the output.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

use stackconfig::pipeline::lister::ResourcePages;
use stackconfig::pipeline::resolver::EndpointLookup;
use stackconfig::{
    ConfigGenerator, GenerateError, LookupError, ResolutionError, ResourcePage, ResourceStatus,
    StackResourceSummary,
};

fn resource(resource_type: &str, physical_id: &str, status: ResourceStatus) -> StackResourceSummary {
    StackResourceSummary {
        logical_id: format!("{physical_id}-logical"),
        resource_type: resource_type.to_string(),
        physical_id: Some(physical_id.to_string()),
        status,
    }
}

fn settled(resource_type: &str, physical_id: &str) -> StackResourceSummary {
    resource(resource_type, physical_id, ResourceStatus::CreateComplete)
}

/// In-memory stack inventory, split into pages of two to exercise the
/// pagination path on every run.
struct InMemoryStack {
    resources: Vec<StackResourceSummary>,
}

impl InMemoryStack {
    fn new(resources: Vec<StackResourceSummary>) -> Self {
        Self { resources }
    }
}

#[async_trait]
impl ResourcePages for InMemoryStack {
    async fn fetch_page(
        &self,
        _stack_name: &str,
        continuation: Option<String>,
    ) -> Result<ResourcePage, LookupError> {
        let offset: usize = match continuation {
            Some(token) => token.parse().map_err(|_| LookupError::Other {
                message: format!("bad continuation token {token}"),
            })?,
            None => 0,
        };
        let page: Vec<_> = self.resources.iter().skip(offset).take(2).cloned().collect();
        let next = offset + page.len();
        let continuation = (next < self.resources.len()).then(|| next.to_string());
        Ok(ResourcePage {
            summaries: page,
            continuation,
        })
    }
}

/// Endpoint lookup backed by a fixed api-id -> uri map.
struct InMemoryEndpoints {
    endpoints: HashMap<String, String>,
}

impl InMemoryEndpoints {
    fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            endpoints: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn empty() -> Self {
        Self::new(&[])
    }
}

#[async_trait]
impl EndpointLookup for InMemoryEndpoints {
    async fn graphql_endpoint(&self, api_id: &str) -> Result<String, ResolutionError> {
        self.endpoints
            .get(api_id)
            .cloned()
            .ok_or_else(|| ResolutionError::Other {
                message: format!("no endpoint registered for {api_id}"),
            })
    }
}

fn cognito_stack() -> InMemoryStack {
    InMemoryStack::new(vec![
        settled("AWS::Cognito::UserPool", "pool-1"),
        settled("AWS::Cognito::UserPoolClient", "client-1"),
        settled("AWS::Cognito::IdentityPool", "idp-1"),
    ])
}

#[tokio::test]
async fn cognito_resources_produce_the_auth_section() {
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("awsConfig.json");

    let stack = cognito_stack();
    let endpoints = InMemoryEndpoints::empty();
    let generator = ConfigGenerator::new(&stack, &endpoints, "eu-west-1");
    generator.run("demo", &destination).await.unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&destination).unwrap()).unwrap();
    assert_eq!(written["Auth"]["userPoolId"], "pool-1");
    assert_eq!(written["Auth"]["userPoolWebClientId"], "client-1");
    assert_eq!(written["Auth"]["identityPoolId"], "idp-1");
    assert_eq!(written["Auth"]["region"], "eu-west-1");
    assert!(written.get("API").is_none());
}

#[tokio::test]
async fn graphql_api_endpoint_comes_from_the_secondary_lookup() {
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("awsConfig.json");

    let stack = InMemoryStack::new(vec![settled(
        "AWS::AppSync::GraphQLApi",
        "arn:aws:appsync:eu-west-1:123:apis/abcd1234",
    )]);
    let endpoints = InMemoryEndpoints::new(&[(
        "abcd1234",
        "https://abcd1234.appsync-api.eu-west-1.amazonaws.com/graphql",
    )]);

    let generator = ConfigGenerator::new(&stack, &endpoints, "eu-west-1");
    generator.run("demo", &destination).await.unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&destination).unwrap()).unwrap();
    assert_eq!(
        written["API"]["graphql_endpoint"],
        "https://abcd1234.appsync-api.eu-west-1.amazonaws.com/graphql"
    );
    assert_eq!(written["API"]["graphql_endpoint_iam_region"], "eu-west-1");
}

#[tokio::test]
async fn failed_resources_never_contribute_even_when_classifiable() {
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("awsConfig.json");

    let stack = InMemoryStack::new(vec![
        settled("AWS::Cognito::UserPool", "pool-1"),
        resource("AWS::Cognito::IdentityPool", "idp-1", ResourceStatus::Failed),
        resource(
            "AWS::Cognito::UserPoolClient",
            "client-1",
            ResourceStatus::InProgress,
        ),
    ]);
    let endpoints = InMemoryEndpoints::empty();
    let generator = ConfigGenerator::new(&stack, &endpoints, "eu-west-1");
    generator.run("demo", &destination).await.unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&destination).unwrap()).unwrap();
    assert_eq!(written["Auth"]["userPoolId"], "pool-1");
    assert!(written["Auth"].get("identityPoolId").is_none());
    assert!(written["Auth"].get("userPoolWebClientId").is_none());
}

#[tokio::test]
async fn stack_without_classifiable_resources_writes_an_empty_document() {
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("awsConfig.json");

    let stack = InMemoryStack::new(vec![
        settled("AWS::DynamoDB::Table", "table-1"),
        settled("AWS::IAM::Role", "role-1"),
    ]);
    let endpoints = InMemoryEndpoints::empty();
    let generator = ConfigGenerator::new(&stack, &endpoints, "eu-west-1");
    let document = generator.run("demo", &destination).await.unwrap();

    assert!(document.is_empty());
    assert_eq!(fs::read_to_string(&destination).unwrap(), "{}\n");
}

#[tokio::test]
async fn failed_lookup_leaves_the_previous_file_untouched() {
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("awsConfig.json");
    fs::write(&destination, "previous run").unwrap();

    let stack = InMemoryStack::new(vec![settled("AWS::AppSync::GraphQLApi", "apis/abcd1234")]);
    let endpoints = InMemoryEndpoints::empty();
    let generator = ConfigGenerator::new(&stack, &endpoints, "eu-west-1");

    let err = generator.run("demo", &destination).await.unwrap_err();
    assert!(matches!(err, GenerateError::Resolution(_)));
    assert_eq!(fs::read_to_string(&destination).unwrap(), "previous run");
}

#[tokio::test]
async fn listing_failure_writes_nothing() {
    struct BrokenStack;

    #[async_trait]
    impl ResourcePages for BrokenStack {
        async fn fetch_page(
            &self,
            _stack_name: &str,
            _continuation: Option<String>,
        ) -> Result<ResourcePage, LookupError> {
            Err(LookupError::Other {
                message: "access denied".to_string(),
            })
        }
    }

    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("awsConfig.json");

    let endpoints = InMemoryEndpoints::empty();
    let generator = ConfigGenerator::new(&BrokenStack, &endpoints, "eu-west-1");

    let err = generator.run("demo", &destination).await.unwrap_err();
    assert!(matches!(err, GenerateError::Lookup(_)));
    assert!(!destination.exists());
}

#[tokio::test]
async fn repeated_runs_produce_byte_identical_documents() {
    let dir = TempDir::new().unwrap();
    let first_path = dir.path().join("first.json");
    let second_path = dir.path().join("second.json");

    let stack = InMemoryStack::new(vec![
        settled("AWS::Cognito::UserPool", "pool-1"),
        settled("AWS::Cognito::UserPoolClient", "client-1"),
        settled("AWS::Cognito::IdentityPool", "idp-1"),
        settled(
            "AWS::AppSync::GraphQLApi",
            "arn:aws:appsync:eu-west-1:123:apis/abcd1234",
        ),
    ]);
    let endpoints = InMemoryEndpoints::new(&[(
        "abcd1234",
        "https://abcd1234.appsync-api.eu-west-1.amazonaws.com/graphql",
    )]);

    let generator = ConfigGenerator::new(&stack, &endpoints, "eu-west-1");
    generator.run("demo", &first_path).await.unwrap();
    generator.run("demo", &second_path).await.unwrap();

    let first = fs::read(&first_path).unwrap();
    let second = fs::read(&second_path).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}
