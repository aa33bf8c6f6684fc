use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Client configuration generator for deployed CloudFormation stacks
#[derive(Parser, Debug)]
#[command(
    name = "stackconfig",
    about = "Generates a client AWS configuration file from a deployed stack",
    version,
    long_about = "stackconfig inspects a deployed CloudFormation stack, extracts the \
                  identifiers of its auth and GraphQL API resources, and writes the \
                  merged client configuration document the frontend reads at startup."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug output")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Generate the configuration file for a deployed stack",
        long_about = "Drains the stack's resource inventory, resolves the configuration \
                      of each known resource, and writes the merged document.\n\n\
                      Examples:\n  \
                      stackconfig generate --stack MyAppprod --region eu-west-1\n  \
                      stackconfig generate --stack MyAppprod --region eu-west-1 -o build/awsConfig.json"
    )]
    Generate(GenerateArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(
        short = 's',
        long,
        value_name = "STACK",
        help = "Name or id of the deployed stack"
    )]
    pub stack: String,

    #[arg(
        short = 'r',
        long,
        value_name = "REGION",
        help = "Region the stack is deployed in"
    )]
    pub region: String,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        default_value = "client/awsConfig.json",
        help = "Destination path for the configuration document"
    )]
    pub output: PathBuf,

    #[arg(
        long,
        value_name = "SECONDS",
        default_value = "30",
        help = "Per-request timeout in seconds"
    )]
    pub timeout: u64,
}
