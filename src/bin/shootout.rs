//! Terminal shootout against the computer.
//!
//! Reads one command per line: `k` (or an empty line) kicks, `r` resets,
//! `q` quits. The orchestrator's virtual clock is mapped onto wall-clock
//! time since start.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use penalty_shootout::{ShootoutConfig, TurnOrchestrator, ROUND_LIMIT};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{self, Instant};
use tracing_subscriber::EnvFilter;

/// Penalty shootout against the computer
#[derive(Parser, Debug)]
#[command(name = "shootout", version, long_about = None)]
struct Cli {
    /// RNG seed (random when omitted)
    #[arg(long, env = "SHOOTOUT_SEED")]
    seed: Option<u64>,

    /// Rounds per game
    #[arg(long, env = "SHOOTOUT_ROUNDS", default_value_t = ROUND_LIMIT)]
    rounds: u32,

    /// Computer delay and result display time, in milliseconds
    #[arg(long, env = "SHOOTOUT_DELAY_MS", default_value_t = 1500)]
    delay_ms: u64,
}

impl Cli {
    fn config(&self) -> ShootoutConfig {
        let config = ShootoutConfig::default()
            .with_round_limit(self.rounds)
            .with_animation_delay(Duration::from_millis(self.delay_ms));
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Kick,
    Reset,
    Quit,
    Unknown(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "k" | "kick" => Input::Kick,
            "r" | "reset" => Input::Reset,
            "q" | "quit" => Input::Quit,
            other => Input::Unknown(other.to_string()),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut game = TurnOrchestrator::from_config(&cli.config())?;

    let start = Instant::now();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("PENALTY SHOOTOUT CHALLENGE  ([k]ick, [r]eset, [q]uit)");
    let mut frame = game.scoreboard();
    println!("{frame}");

    loop {
        let deadline = game.next_deadline().map(|at| start + at);

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                game.advance_to(start.elapsed());

                match Input::parse(&line) {
                    Input::Kick => {
                        if !game.request_player_turn() {
                            println!("({})", frame.kick_button.map_or("PLAY AGAIN?", |b| b.label()));
                        }
                    }
                    Input::Reset => game.reset(),
                    Input::Quit => break,
                    Input::Unknown(other) => println!("unknown command {other:?}"),
                }
            }
            () = sleep_until(deadline) => {
                // The timer may wake a hair before the virtual deadline.
                let now = start.elapsed();
                let due = game.next_deadline().map_or(now, |at| at.max(now));
                game.advance_to(due);
            }
        }

        let next = game.scoreboard();
        if next != frame {
            println!("\n{next}");
            frame = next;
        }
    }

    Ok(())
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_parse() {
        assert_eq!(Input::parse(""), Input::Kick);
        assert_eq!(Input::parse(" K \n"), Input::Kick);
        assert_eq!(Input::parse("reset"), Input::Reset);
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse("shoot"), Input::Unknown("shoot".to_string()));
    }

    #[test]
    fn test_cli_config() {
        let cli = Cli::parse_from(["shootout", "--seed", "9", "--rounds", "3", "--delay-ms", "10"]);
        let config = cli.config();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.round_limit, 3);
        assert_eq!(config.opponent_delay, Duration::from_millis(10));
    }
}
