use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four_minimax::ai::Difficulty;
use connect_four_minimax::arena::{play_match, Contender, MatchStats};
use connect_four_minimax::config::AppConfig;
use connect_four_minimax::game::Player;

/// Pit two engine difficulties against each other.
#[derive(Parser)]
#[command(name = "arena", about = "Play engine-vs-engine Connect Four matches")]
struct Cli {
    /// Difficulty of the engine that moves first: easy, medium or hard
    #[arg(long, default_value = "hard")]
    first: String,

    /// Difficulty of the engine that moves second
    #[arg(long, default_value = "easy")]
    second: String,

    /// Number of games to play
    #[arg(long, default_value_t = 20)]
    games: usize,

    /// Base seed for the random strategies (game i seeds its engines from seed + 2i)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file (board size and search depth)
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let first: Difficulty = cli.first.parse().context("parsing --first")?;
    let second: Difficulty = cli.second.parse().context("parsing --second")?;
    if cli.games == 0 {
        bail!("--games must be at least 1");
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let (rows, cols) = (config.board.rows, config.board.cols);
    let depth = config.engine.depth;

    if !cli.json {
        println!(
            "Arena: {first} (first) vs {second} (second), {} games on {rows}x{cols}, depth {depth}",
            cli.games
        );
        println!("-------------------------------------------");
    }

    let mut stats = MatchStats::new();
    for game in 0..cli.games {
        let mut one = Contender::new(Player::One, first, rows, cols, depth);
        let mut two = Contender::new(Player::Two, second, rows, cols, depth);
        if let Some(seed) = cli.seed {
            let base = seed.wrapping_add(game as u64 * 2);
            one = one.seeded(base);
            two = two.seeded(base.wrapping_add(1));
        }

        let result = play_match(&mut one, &mut two, rows, cols)
            .with_context(|| format!("game {} produced an illegal move", game + 1))?;
        stats.record(result);

        if !cli.json {
            let winner = match result.winner {
                Some(player) => format!("{} wins", player.name()),
                None => "draw".to_string(),
            };
            println!("Game {}/{} | {winner} | {} moves", game + 1, cli.games, result.game_length);
        }
    }

    if cli.json {
        let summary = serde_json::json!({
            "first": first,
            "second": second,
            "rows": rows,
            "cols": cols,
            "depth": depth,
            "stats": stats,
            "average_game_length": stats.average_game_length(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("-------------------------------------------");
        println!(
            "{first}: {:.1}% | {second}: {:.1}% | draws: {} | avg_len: {:.1}",
            stats.first_win_rate() * 100.0,
            stats.second_win_rate() * 100.0,
            stats.draws,
            stats.average_game_length(),
        );
    }

    Ok(())
}
