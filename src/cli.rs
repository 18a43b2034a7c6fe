use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "certgen")]
#[command(about = "Generate participant certificates (PNG + PDF) from a spreadsheet", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ~/.config/certgen/config.json or $CERTGEN_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one certificate per spreadsheet row
    Generate {
        /// Participant spreadsheet (xlsx/xls/ods)
        #[arg(required = true)]
        sheet: PathBuf,

        /// Template for titles that fit on one line
        #[arg(long)]
        single: Option<PathBuf>,

        /// Template for wrapped titles
        #[arg(long)]
        multi: Option<PathBuf>,

        /// Output folder (png/ and pdf/ are created inside)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum title characters per line
        #[arg(long)]
        max_line_width: Option<usize>,

        /// Extra pixels between wrapped title lines
        #[arg(long)]
        line_spacing: Option<i32>,

        /// Participant type label when the sheet has no type column
        #[arg(long)]
        default_type: Option<String>,

        /// Fail when two rows share a paper id
        #[arg(long)]
        strict_ids: bool,
    },

    /// Show how the sheet's headers map to certificate fields
    Columns {
        #[arg(required = true)]
        sheet: PathBuf,
    },

    /// Write an empty participant sheet with the expected headers
    InitSheet {
        #[arg(required = true)]
        output: PathBuf,
    },

    /// Show or initialise the config file
    Config {
        /// Print the effective configuration
        #[arg(long)]
        show: bool,

        /// Write the default configuration to the config path
        #[arg(long)]
        init: bool,
    },
}
