use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;

use crate::client::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(name = "cosmos-sky")]
#[command(version = "0.1.0")]
#[command(about = "Terminal client for the CosmosAI astronomy backend")]
pub struct Args {
    /// Backend base URL (falls back to $COSMOS_BASE_URL, then localhost:5000)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Also write the result as a standalone HTML report
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether the ISS is currently overhead near a city
    Iss {
        /// City to check visibility from
        city: String,
    },
    /// Upload a sky photo for AI analysis
    Analyze {
        /// Path to the image (max 10MB)
        image: PathBuf,
    },
    /// Ask the astronomy chatbot; no message starts an interactive session
    Chat {
        /// Single message to send
        message: Option<String>,
    },
    /// Suggest dark-sky stargazing locations near a city
    DarkSky {
        /// City to search around
        city: String,
    },
    /// Show the built-in 2026 astronomy calendar
    Events,
}

/// Pick the backend base URL: explicit flag, then environment, then the
/// compiled-in default.
pub fn resolve_base_url(flag: Option<&str>) -> String {
    if let Some(url) = flag {
        return url.to_string();
    }
    env::var("COSMOS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}
