//! The configuration synthesis pipeline.
//!
//! Data flows strictly forward through four stages: list the stack's settled
//! resources, classify them, resolve configuration fragments (with concurrent
//! secondary lookups where needed), and write the merged document. No stage
//! calls back into an earlier one, and a failure at any stage means no file
//! is written.

pub mod classify;
pub mod document;
pub mod lister;
pub mod resolver;
pub mod writer;

use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::error::GenerateError;
use document::ConfigDocument;
use lister::{list_settled_resources, ResourcePages};
use resolver::{resolve, EndpointLookup};
use writer::write_document;

/// Runs the whole pipeline for one stack. Holds the two remote-service seams
/// so both production clients and in-memory test doubles plug in unchanged.
pub struct ConfigGenerator<'a> {
    pages: &'a dyn ResourcePages,
    lookup: &'a dyn EndpointLookup,
    region: String,
}

impl<'a> ConfigGenerator<'a> {
    pub fn new(
        pages: &'a dyn ResourcePages,
        lookup: &'a dyn EndpointLookup,
        region: impl Into<String>,
    ) -> Self {
        Self {
            pages,
            lookup,
            region: region.into(),
        }
    }

    /// Synthesizes the configuration document for `stack_name` and persists
    /// it at `destination`. Returns the document for inspection.
    pub async fn run(
        &self,
        stack_name: &str,
        destination: &Path,
    ) -> Result<ConfigDocument, GenerateError> {
        let start = Instant::now();
        info!(stack = %stack_name, "listing stack resources");
        let resources = list_settled_resources(self.pages, stack_name).await?;

        info!(resources = resources.len(), "resolving resource configurations");
        let fragments = resolve(&resources, &self.region, self.lookup).await?;

        let document = ConfigDocument::from_fragments(fragments);
        write_document(&document, destination)?;

        info!(
            destination = %destination.display(),
            duration_ms = start.elapsed().as_millis(),
            "configuration written"
        );
        Ok(document)
    }
}
