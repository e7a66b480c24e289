//! Clap derive structures for the `rokuctl` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// rokuctl -- drive a Roku from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "rokuctl",
    version,
    about = "Control a Roku device from the command line",
    long_about = "Send remote-control key presses, type text, and launch channels on a Roku\n\
        device using its External Control Protocol (ECP, HTTP on port 8060).\n\n\
        The device is chosen by --ip, then the ROKU environment variable, then a\n\
        configured device profile, then the first device found by SSDP discovery.",
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
    /// Device IP address or hostname (falls back to $ROKU)
    #[arg(long, short = 'i', global = true)]
    pub ip: Option<String>,

    /// Named device profile from the config file
    #[arg(long, short = 'd', env = "ROKUCTL_DEVICE", global = true)]
    pub device: Option<String>,

    /// ECP port (default 8060)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Request timeout in seconds
    #[arg(long, env = "ROKUCTL_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ROKUCTL_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Press one or more keys in order (e.g. `rokuctl key down down select`)
    #[command(alias = "k", alias = "press")]
    Key(KeyArgs),

    /// Hold a key down until a matching `up`
    Down(HoldArgs),

    /// Release a key held with `down`
    Up(HoldArgs),

    /// Type text into the focused field, one character at a time
    #[command(alias = "t")]
    Type(TypeArgs),

    /// List key names and the tokens sent to the device
    Keys,

    /// Query and launch installed channels
    #[command(alias = "app")]
    Apps(AppsArgs),

    /// Search the local network for devices (5 second SSDP sweep)
    Discover,

    /// Manage CLI configuration and device profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  KEYS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct KeyArgs {
    /// Key names (see `rokuctl keys`)
    #[arg(required = true, value_name = "KEY")]
    pub names: Vec<String>,
}

#[derive(Debug, Args)]
pub struct HoldArgs {
    /// Key name (see `rokuctl keys`)
    #[arg(value_name = "KEY")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct TypeArgs {
    /// Text to send
    pub text: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  APPS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AppsArgs {
    #[command(subcommand)]
    pub command: AppsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AppsCommand {
    /// List installed channels
    #[command(alias = "ls")]
    List,

    /// Show the channel currently in the foreground
    Active,

    /// Launch a channel by name
    Launch {
        /// Channel name, or a case-insensitive part of one
        query: String,

        /// Require an exact, case-sensitive name match
        #[arg(long, conflicts_with = "id")]
        exact: bool,

        /// Treat QUERY as a channel id and launch it without a lookup
        #[arg(long)]
        id: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create a config file by picking a discovered device
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config file location
    Path,

    /// Add or update a named device profile
    SetDevice {
        /// Profile name
        name: String,

        /// Device IP address or hostname
        host: String,

        /// ECP port override for this device
        #[arg(long)]
        port: Option<u16>,

        /// Make this the default device
        #[arg(long)]
        default: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
