use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::settings::import::DEFAULT_REGEDIT;

#[derive(Debug, Parser)]
#[command(
    name = "wineasio-settings",
    version,
    about = "View and edit WineASIO driver settings"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Wine prefix to use instead of $WINEPREFIX")]
    pub prefix: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_REGEDIT,
        help = "Command used to import the settings file"
    )]
    pub regedit: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Show the current settings")]
    Show,
    #[command(about = "Change one or more settings and import them")]
    Set(SetArgs),
    #[command(about = "Restore and import the default settings")]
    Reset,
    #[command(about = "Show where settings are read from and written to")]
    Paths,
    #[command(about = "List the supported buffer sizes")]
    BufferSizes,
}

#[derive(Debug, Default, Args)]
pub struct SetArgs {
    #[arg(long, help = "Number of input ports (even, 0-128)")]
    pub inputs: Option<u32>,
    #[arg(long, help = "Number of output ports (even, 2-128)")]
    pub outputs: Option<u32>,
    #[arg(long, value_name = "BOOL", help = "Connect ports to hardware")]
    pub connect_hw: Option<bool>,
    #[arg(long, value_name = "BOOL", help = "Start the JACK server automatically")]
    pub autostart: Option<bool>,
    #[arg(long, value_name = "BOOL", help = "Keep the buffer size fixed")]
    pub fixed_buffer: Option<bool>,
    #[arg(long, help = "Preferred buffer size in frames")]
    pub buffer_size: Option<u32>,
}
