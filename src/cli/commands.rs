//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Clash Detection API CLI
#[derive(Parser, Debug)]
#[command(name = "clash-detection")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Authorization header value, e.g. "Bearer ey..."
    #[arg(
        long,
        global = true,
        env = "CLASH_DETECTION_ACCESS_TOKEN",
        hide_env_values = true
    )]
    pub access_token: Option<String>,

    /// Clash Detection API base URL
    #[arg(long, global = true, env = "CLASH_DETECTION_BASE_URL")]
    pub base_url: Option<String>,

    /// Project id used to filter listings
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Entities per page requested from the service
    #[arg(long, global = true)]
    pub top: Option<u32>,

    /// Stop listing after this many entities
    #[arg(short, long, global = true)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List suppression rule templates
    Templates,

    /// List suppression rules
    Rules {
        /// Full rule representations instead of id and name only
        #[arg(long)]
        representation: bool,
    },

    /// List clash tests
    Tests,

    /// List runs
    Runs {
        /// Full run representations instead of id and name only
        #[arg(long)]
        representation: bool,
    },

    /// Show the clashes found by a run
    Result {
        /// Result id, found on a completed run
        result_id: String,
    },

    /// Show extracted schema info of an iModel
    SchemaInfo {
        /// iModel id
        imodel_id: String,
    },

    /// Show extracted models and categories of an iModel
    ModelsAndCategories {
        /// iModel id
        imodel_id: String,
    },

    /// Start a run of a clash test
    RunTest {
        /// Test id
        test_id: String,

        /// iModel id
        imodel_id: String,

        /// Named version to run against; latest when omitted
        #[arg(long)]
        named_version: Option<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one entity per line)
    Json,
    /// Human-readable output
    Pretty,
}
