mod battle;
mod display;
mod error;
mod fetch;
mod game;
mod models;
mod stats;
mod utils;

use crate::fetch::PokeClient;
use crate::game::{Game, RealDelay};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::io;

const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Log to stderr so the game transcript on stdout stays clean. Level comes
/// from the `POKEBATTLE_LOG` environment variable, default warn.
fn init_logger() -> Result<(), log::SetLoggerError> {
    let level = std::env::var("POKEBATTLE_LOG")
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Warn);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {}: {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logger()?;

    // The base URL can be pointed at a local mirror via `POKEAPI_BASE`.
    let base_url =
        std::env::var("POKEAPI_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let client = PokeClient::new(base_url, StdRng::from_entropy());
    let mut game = Game::new(client, RealDelay);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    game.run(&mut input, &mut out).await?;
    Ok(())
}
