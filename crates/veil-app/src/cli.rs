use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hotbar Veil: hide and show virtual-tabletop interface chrome.
#[derive(Parser, Debug)]
#[command(name = "veil", version, about)]
pub struct Args {
    /// World store file (defaults to the platform config directory).
    #[arg(long, global = true)]
    pub world: Option<PathBuf>,

    /// Participant the stylesheet is built for.
    #[arg(long, global = true, default_value = "player")]
    pub user: String,

    /// Treat the participant as the session owner (GM).
    #[arg(long, global = true)]
    pub owner: bool,

    /// Answer yes to confirmation prompts.
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print (or write) the stylesheet for the participant.
    Compile(CompileArgs),
    /// Recompile whenever the world store changes on disk.
    Watch(CompileArgs),
    /// Print the current settings as JSON.
    Show,
    /// Set one setting by its stored name, e.g. `set slotOpacity 60`.
    Set {
        name: String,
        /// JSON value; bare words are taken as strings.
        value: String,
    },
    /// Check stored settings for out-of-range values.
    Check,
    /// Manage presets.
    #[command(subcommand)]
    Preset(PresetCommand),
    /// Write the settings to an export file.
    Export {
        /// Target directory (defaults to the download directory).
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Apply an export file after confirmation.
    Import { file: PathBuf },
    /// Print a share code and copy it to the clipboard.
    Share,
    /// Apply a share code.
    LoadShared { code: String },
}

#[derive(clap::Args, Debug, Clone)]
pub struct CompileArgs {
    /// Append the keyframe animation block.
    #[arg(long)]
    pub keyframes: bool,

    /// Emit a script that installs the stylesheet in a live page.
    #[arg(long)]
    pub js: bool,

    /// Write `<id>.css` into this directory instead of printing.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum PresetCommand {
    /// List built-in and custom presets.
    List,
    /// Save the current settings as a preset (prompts when no name is given).
    Save { name: Option<String> },
    /// Apply a preset.
    Load { name: String },
    /// Delete a custom preset.
    Delete { name: String },
}

pub fn parse() -> Args {
    Args::parse()
}
