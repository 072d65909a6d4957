use clap::{Parser, Subcommand, ValueEnum};
use rn_advisor::models::{Category, Severity};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rn-advisor")]
#[command(about = "Heuristic analysis and test scaffolding for React Native codebases", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log debug diagnostics to stderr (RN_ADVISOR_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze every source file under a project root
    Analyze {
        /// Project root (defaults to the current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Only run these categories (comma separated)
        #[arg(long, value_delimiter = ',')]
        only: Vec<Category>,

        /// Hide findings below this severity
        #[arg(long)]
        min_severity: Option<Severity>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Analyze a single component file
    Component {
        /// Component source file
        file: PathBuf,

        /// Only run these categories (comma separated)
        #[arg(long, value_delimiter = ',')]
        only: Vec<Category>,

        /// Hide findings below this severity
        #[arg(long)]
        min_severity: Option<Severity>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check package.json for outdated or deprecated dependencies
    Upgrades {
        /// Project root (defaults to the current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Generate a Jest test file for a component
    GenTest {
        /// Component source file
        file: PathBuf,

        /// Component name (inferred from the source when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Write the test here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing output file
        #[arg(long)]
        force: bool,
    },

    /// Check for a newer release
    CheckUpdates {
        /// Ignore the check interval
        #[arg(long)]
        force: bool,
    },

    /// Inspect or invoke the tool surface directly
    Tools {
        #[command(subcommand)]
        command: ToolsCommands,
    },
}

#[derive(Subcommand)]
pub enum ToolsCommands {
    /// Print every tool's name, description and input schema as JSON
    List,

    /// Call a tool and print its result as JSON
    Call {
        /// Tool name
        name: String,

        /// Arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}
