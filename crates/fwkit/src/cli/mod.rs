pub mod objects;
pub mod review;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fwkit")]
#[command(about = "Firewall policy review and object scripting toolkit", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, short = 'v', global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, short = 'q', global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Review an exported policy CSV and flag risky rules")]
    Review {
        #[arg(help = "Path to the exported policy CSV")]
        file: PathBuf,

        #[arg(long, help = "Path to a review config file (TOML)")]
        config: Option<PathBuf>,

        #[arg(long, help = "Write the classified rules to a CSV file")]
        export: bool,

        #[arg(
            long,
            short = 'o',
            help = "Export file path (default: classified_rules_<timestamp>.csv)"
        )]
        output: Option<PathBuf>,

        #[arg(long, help = "Print classified rules as JSON instead of a table")]
        json: bool,
    },

    #[command(about = "Generate add-host commands from a pasted object list")]
    Hosts {
        #[arg(long, help = "Change ticket reference stamped into comments")]
        ticket: String,

        #[arg(long, help = "Group to add created objects to")]
        group: String,

        #[arg(help = "Input file (reads stdin when omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Generate add-network commands from a pasted CIDR list")]
    Networks {
        #[arg(long, help = "Change ticket reference stamped into comments")]
        ticket: String,

        #[arg(long, help = "Group to add created objects to")]
        group: String,

        #[arg(help = "Input file (reads stdin when omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Generate add-dns-domain commands from a pasted domain list")]
    Domains {
        #[arg(long, help = "Change ticket reference stamped into comments")]
        ticket: String,

        #[arg(long, help = "Group to add created objects to")]
        group: String,

        #[arg(long, help = "Create top-level domain objects (not sub-domains)")]
        top_level: bool,

        #[arg(help = "Input file (reads stdin when omitted)")]
        file: Option<PathBuf>,
    },
}
