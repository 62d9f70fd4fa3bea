//! InviteGuard console entry point.

mod commands;
mod state;

use commands::ConsoleLine;
use ig_core::config::BotConfig;
use state::AppState;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let data_dir = dirs::data_dir()
        .map(|p| p.join("inviteguard"))
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&data_dir)?;

    let config = load_config(std::env::args().nth(1).map(PathBuf::from), &data_dir)?;
    let state = AppState::open(data_dir, config)?;
    tracing::info!(data_dir = %state.data_dir.display(), "inviteguard ready");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let parsed = match commands::parse_line(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                println!("[WARN] {e}");
                continue;
            }
        };
        if parsed == ConsoleLine::Quit {
            break;
        }
        if let Some(reply) = commands::dispatch(&state, parsed).await {
            println!("{reply}");
        }
    }

    Ok(())
}

/// Explicit path first, then `<data_dir>/config.json`, then defaults.
fn load_config(explicit: Option<PathBuf>, data_dir: &Path) -> anyhow::Result<BotConfig> {
    if let Some(path) = explicit {
        return Ok(BotConfig::load(&path)?);
    }
    let default_path = data_dir.join("config.json");
    if default_path.exists() {
        return Ok(BotConfig::load(&default_path)?);
    }
    tracing::debug!("no config file, using defaults");
    Ok(BotConfig::default())
}
