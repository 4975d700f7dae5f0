//! Clap derive structures for the `liveboard` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// liveboard -- live status dashboard for tracked streamers
#[derive(Debug, Parser)]
#[command(
    name = "liveboard",
    version,
    about = "Live status dashboard for tracked streamers",
    long_about = "Polls a streamer status API and renders a live-updating HTML\n\
        dashboard: one card per streamer plus per-streamer statistics.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Status API base URL (overrides config)
    #[arg(long, short = 'u', global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(long, short = 'c', env = "LIVEBOARD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Poll continuously and keep the page file up to date
    #[command(alias = "w")]
    Watch(WatchArgs),

    /// Poll once and write the page
    #[command(alias = "s")]
    Snapshot(SnapshotArgs),

    /// Show statistics and recent broadcasts for one streamer
    #[command(alias = "d")]
    Detail(DetailArgs),

    /// Inspect or initialize configuration
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Page file to rewrite after every poll
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Seconds between polls (overrides config)
    #[arg(long, short = 'i')]
    pub interval: Option<u64>,
}

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Page file to write
    #[arg(long, short = 'o', conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the page to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Debug, Args)]
pub struct DetailArgs {
    /// Streamer id
    pub id: String,

    /// Display name for the title (looked up from the list when omitted)
    #[arg(long, short = 'n')]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
