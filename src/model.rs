//! Data model for stack resource summaries.
//!
//! These types are deliberately free of SDK types: the production page source
//! converts service responses into this model at the boundary, so the rest of
//! the pipeline (and its tests) never touch the control-plane API surface.

/// Provisioning status of a stack resource.
///
/// Only `CreateComplete` and `UpdateComplete` are "settled"; resources in any
/// other status never contribute to the generated configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    CreateComplete,
    UpdateComplete,
    InProgress,
    Failed,
    Other,
}

impl ResourceStatus {
    /// Parses the service's status string (e.g. `"CREATE_COMPLETE"`).
    /// Unrecognized strings map to `Other` rather than failing, so new
    /// statuses introduced by the service are simply excluded.
    pub fn parse(status: &str) -> Self {
        match status {
            "CREATE_COMPLETE" => ResourceStatus::CreateComplete,
            "UPDATE_COMPLETE" => ResourceStatus::UpdateComplete,
            s if s.ends_with("_IN_PROGRESS") => ResourceStatus::InProgress,
            s if s.ends_with("_FAILED") => ResourceStatus::Failed,
            _ => ResourceStatus::Other,
        }
    }

    /// Whether the resource finished provisioning successfully.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            ResourceStatus::CreateComplete | ResourceStatus::UpdateComplete
        )
    }
}

/// One resource from the stack inventory. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackResourceSummary {
    pub logical_id: String,
    pub resource_type: String,
    pub physical_id: Option<String>,
    pub status: ResourceStatus,
}

/// One page of the stack resource listing.
#[derive(Debug, Clone)]
pub struct ResourcePage {
    pub summaries: Vec<StackResourceSummary>,
    /// Continuation token for the next page, if any.
    pub continuation: Option<String>,
}
