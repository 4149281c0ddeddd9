use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vpet::Action;

#[derive(Parser)]
#[command(name = "vpet")]
#[command(about = "Look after a virtual pet in your terminal", version)]
pub struct Args {
    /// Config file path (defaults to <config_dir>/vpet/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session with live decay
    Run,
    /// Fast-forward a fresh pet on a virtual clock
    Simulate {
        /// Minutes of virtual time to simulate
        #[arg(long, default_value = "60")]
        minutes: u64,
        /// Minutes between decay ticks
        #[arg(long, default_value = "1")]
        step: u64,
        /// Actions to perform first, comma separated (feed,drink,play,clean,sleep)
        #[arg(long, value_delimiter = ',')]
        actions: Vec<Action>,
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a fresh pet
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
