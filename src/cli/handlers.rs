use std::time::Duration;
use tracing::{error, info};

use super::commands::GenerateArgs;
use crate::aws::{sdk_config, AppSyncLookup, CloudFormationPages};
use crate::pipeline::ConfigGenerator;

/// Runs the synthesis pipeline once and maps the result to an exit code, so
/// calling tooling can detect failure.
pub async fn handle_generate(args: &GenerateArgs) -> i32 {
    let config = sdk_config(&args.region, Duration::from_secs(args.timeout)).await;
    let pages = CloudFormationPages::new(&config);
    let lookup = AppSyncLookup::new(&config);
    let generator = ConfigGenerator::new(&pages, &lookup, args.region.clone());

    match generator.run(&args.stack, &args.output).await {
        Ok(document) => {
            if document.is_empty() {
                info!(
                    stack = %args.stack,
                    "no classifiable resources found; wrote an empty document"
                );
            }
            0
        }
        Err(err) => {
            error!(error = %err, stack = %args.stack, "configuration generation failed");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                error!(cause = %cause, "caused by");
                source = cause.source();
            }
            1
        }
    }
}
