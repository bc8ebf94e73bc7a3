use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bngm",
    about = "BioNetGen XML model translation",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Translate a model and print what it contains
    #[command(visible_alias = "s")]
    Summary(SummaryArgs),

    /// Translate a model and write every builder event as JSON
    #[command(visible_alias = "e")]
    Events(EventsArgs),
}

impl Command {
    pub fn common(&self) -> &CommonOptions {
        match self {
            Command::Summary(args) => &args.common,
            Command::Events(args) => &args.common,
        }
    }
}

/// Options shared by all commands.
#[derive(Args)]
pub struct CommonOptions {
    /// BioNetGen XML model (stdin if omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,
}

/// Translation settings shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Translation")]
pub struct TranslateOptions {
    /// Translation settings (TOML file); flags below override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Store seed-species molecule names without their @compartment suffix
    #[arg(long = "strip-compartments")]
    pub strip_compartments: bool,

    /// Report bond endpoint states the way older consumers expect
    #[arg(long)]
    pub legacy_bond_states: bool,

    /// Accept molecules that have no component list
    #[arg(long)]
    pub allow_bare_molecules: bool,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub common: CommonOptions,

    #[command(flatten)]
    pub translate: TranslateOptions,

    /// Print the counts as JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct EventsArgs {
    #[command(flatten)]
    pub common: CommonOptions,

    #[command(flatten)]
    pub translate: TranslateOptions,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
