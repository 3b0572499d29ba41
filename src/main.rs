#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, ConsoleInput, ConsoleView, Match, Player};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Two-player console Battleship.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value = "Player 1")]
    player1: String,
    #[arg(long, default_value = "Player 2")]
    player2: String,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (fleets will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut player1 = Player::new(cli.player1);
    let mut player2 = Player::new(cli.player2);
    player1
        .place_fleet(&mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    player2
        .place_fleet(&mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut game = Match::new(player1, player2);
    game.run(&mut ConsoleInput::new(), &mut ConsoleView::new())
        .map_err(|e| anyhow::anyhow!(e))?;

    if let Some(winner) = game.winner() {
        println!("\nWinner is {} with score {}.", winner.name(), winner.score());
    }
    println!("Game over.");
    Ok(())
}
