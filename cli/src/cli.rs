use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "doclist")]
#[command(about = "Render documented lists as tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./doclist.toml when present)
    #[arg(long, short = 'c', global = true, env = "DOCLIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the JSON data modules
    #[arg(long, short = 'd', global = true)]
    pub data_root: Option<PathBuf>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one list named on the command line
    Render(RenderArgs),
    /// Render every documentedlist directive found in a file
    Directive {
        /// reStructuredText file containing the directives
        file: PathBuf,

        /// Output format
        #[arg(long, short = 'f', value_enum)]
        format: Option<Format>,
    },
    /// Resolve and build every directive in a file without printing tables
    Check {
        /// reStructuredText file containing the directives
        file: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Dotted path of the row data, `module.member`
    #[arg(long, short = 'l')]
    pub listobject: String,

    /// Header labels, shell quoted (default: "Item Description")
    #[arg(long)]
    pub header: Option<String>,

    /// Stretch the last cell of short rows over the missing columns
    #[arg(long)]
    pub spantolast: bool,

    /// Turn nested lists into sub-tables
    #[arg(long)]
    pub descend: bool,

    /// Column widths, e.g. "1 2 3"
    #[arg(long)]
    pub widths: Option<String>,

    /// Table caption
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Target name (HTML id) for the table
    #[arg(long)]
    pub name: Option<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<Format>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Html,
    Json,
    Text,
}
