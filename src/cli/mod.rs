pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "inkcard")]
#[command(about = "Render Medium RSS feeds as SVG cards and JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Render latest.svg and latest.json to disk
    Generate {
        /// Feed URL to read (overrides RSS_FEED_URL)
        #[arg(long)]
        rss: Option<String>,

        /// Medium handle, with or without the leading @
        #[arg(short, long)]
        username: Option<String>,

        /// Number of posts on the card, 1 to 10
        #[arg(short, long)]
        limit: Option<String>,

        /// Card theme: dark or light
        #[arg(short, long, default_value = "dark")]
        theme: String,

        /// Show the publication date row (true/false, yes/no, 1/0)
        #[arg(long)]
        show_date: Option<String>,

        /// Show the tag pills (true/false, yes/no, 1/0)
        #[arg(long)]
        show_tags: Option<String>,

        /// Directory to write latest.svg and latest.json into
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}
