//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use sealant_types::OutputFormat;

#[derive(Parser)]
#[command(name = "sealant-calculator")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Joint sealant volume and cartridge estimation")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Config file override (default: ~/.config/sealant-calculator/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Joint dimensions and estimate settings shared by several commands
#[derive(Args, Debug, Clone)]
pub struct JointArgs {
    /// Joint profile (square, deep, wide, v, u)
    #[arg(long, short = 'p', default_value = "square")]
    pub profile: String,

    /// Joint width in mm. Defaults to the profile's typical width.
    #[arg(long, short = 'w')]
    pub width: Option<f64>,

    /// Joint depth in mm. Defaults to the profile's typical depth.
    #[arg(long, short = 'd')]
    pub depth: Option<f64>,

    /// Joint length in m
    #[arg(long, short = 'l')]
    pub length: f64,

    /// Wastage allowance in percent. Uses config value if not specified.
    #[arg(long, conflicts_with = "no_wastage")]
    pub wastage: Option<f64>,

    /// Do not add any wastage allowance
    #[arg(long)]
    pub no_wastage: bool,

    /// Area multiplier for U-joints (>= 1.0). Uses config value if not specified.
    #[arg(long)]
    pub u_factor: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate sealant volume and cartridges for one joint
    Calc {
        #[command(flatten)]
        joint: JointArgs,

        /// Cartridge key, label or size (e.g. cartridge-310, 600). Uses config value if not specified.
        #[arg(long, short = 'c')]
        cartridge: Option<String>,

        /// Write an Excel summary to this path
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Compare every cartridge size for one joint
    Compare {
        #[command(flatten)]
        joint: JointArgs,
    },

    /// List joint profile presets
    Profiles,

    /// List available cartridges
    Cartridges,

    /// Build a shareable link for an estimate
    Share {
        #[command(flatten)]
        joint: JointArgs,

        /// Cartridge key, label or size
        #[arg(long, short = 'c')]
        cartridge: Option<String>,

        /// Base URL for the link. Uses config value if not specified.
        #[arg(long)]
        base_url: Option<String>,

        /// Shorten the link through the configured shortener
        #[arg(long)]
        shorten: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default cartridge
        #[arg(long)]
        set_cartridge: Option<String>,

        /// Enable/disable the wastage allowance
        #[arg(long)]
        set_wastage: Option<bool>,

        /// Set wastage allowance percent
        #[arg(long)]
        set_wastage_percent: Option<f64>,

        /// Set U-joint area multiplier
        #[arg(long)]
        set_u_factor: Option<f64>,

        /// Set cartridge catalogue TOML path
        #[arg(long)]
        set_catalogue: Option<PathBuf>,

        /// Set share link base URL
        #[arg(long)]
        set_share_base_url: Option<String>,

        /// Set link shortener endpoint
        #[arg(long)]
        set_shortener: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
