use std::io::{self, BufRead, Write};

use cache::{CacheError, Event, MemoryCache, Options};
use serde::Deserialize;
use tracing::{debug, error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Deserialize, Debug)]
struct Config {
    #[serde(default)]
    json_log: bool,
}

fn main() -> Result<(), CacheError> {
    let config: Config = envy::prefixed("CACHE_").from_env()?;
    configure_logging(&config);

    let opts = Options::from_env()?;
    info!(options = ?opts, "Replaying gateway events from stdin");

    let cache = MemoryCache::new(opts);
    let mut applied = 0usize;

    for (line_no, line) in io::stdin().lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "Failed to read from stdin");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let event = match Event::from_dispatch(&line) {
            Ok(Some(event)) => event,
            Ok(None) => {
                debug!(line = line_no + 1, "Skipping untracked event");
                continue;
            }
            Err(e) => {
                error!(line = line_no + 1, error = %e, "Failed to parse event");
                continue;
            }
        };

        let name = event.name();
        if let Err(e) = cache.handle(event) {
            error!(line = line_no + 1, event = name, error = %e, "Error updating cache");
            continue;
        }

        applied += 1;
    }

    info!(applied, "Finished replay");
    dump_emojis(&cache)
}

fn configure_logging(config: &Config) {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    if config.json_log {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

/// Writes every cached emoji as one JSON object per line, with its creator
/// inlined when the user is cached.
fn dump_emojis(cache: &MemoryCache) -> Result<(), CacheError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for guild_id in cache.get_guild_ids()? {
        for emoji in cache.get_guild_emojis(guild_id)? {
            let json = cache.emoji_json(&emoji, &["guild_id"]);
            let line = serde_json::to_string(&json)?;
            if writeln!(out, "{}", line).is_err() {
                return Ok(());
            }
        }
    }

    Ok(())
}
