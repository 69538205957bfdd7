use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use holdem_trainer::config::TrainerSettings;
use holdem_trainer::history::FileHistorian;
use holdem_trainer::holdem::{Action, Recommendation, Street};
use holdem_trainer::trainer::{Trainer, TrainerEvent};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Always take the Chen recommendation
    Recommended,
    /// Never fold, check when possible
    Station,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "holdem-drill")]
#[command(about = "Play training hands automatically and print the session as PokerStars text")]
struct Cli {
    /// Number of hands to play
    #[arg(short = 'n', long, default_value_t = 10)]
    hands: usize,

    /// Seats at the table
    #[arg(short, long)]
    players: Option<usize>,

    /// Big blind
    #[arg(short, long)]
    big_blind: Option<u32>,

    /// Deal the flop, turn and river
    #[arg(short, long)]
    all_streets: bool,

    /// Settings file in JSON with camelCase keys
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Append every finished hand to this JSON Lines file
    #[arg(long)]
    out: Option<PathBuf>,

    /// Seed for a repeatable session
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Strategy::Recommended)]
    strategy: Strategy,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    let rng = cli
        .seed
        .map(StdRng::seed_from_u64)
        .unwrap_or_else(StdRng::from_os_rng);

    let mut trainer = Trainer::with_rng(settings, rng)?;
    if let Some(path) = &cli.out {
        trainer.add_historian(Box::new(FileHistorian::new(path)));
    }

    for _ in 0..cli.hands {
        trainer.new_hand()?;
        while trainer.hand_in_progress() {
            let action = choose_action(&trainer, cli.strategy);
            let feedback = trainer.act(action)?;
            println!("{}", feedback.message);
            drain(&mut trainer)?;
        }
    }

    println!();
    print!("{}", trainer.export());
    let stats = trainer.stats();
    if let Some(accuracy) = stats.accuracy() {
        println!(
            "Preflop accuracy: {}/{} ({accuracy:.1}%)",
            stats.correct, stats.hands
        );
    }
    Ok(())
}

fn load_settings(cli: &Cli) -> Result<TrainerSettings, Box<dyn std::error::Error>> {
    let mut settings = match &cli.settings {
        Some(path) => TrainerSettings::from_json(&std::fs::read_to_string(path)?)?,
        None => TrainerSettings::default(),
    };
    if let Some(players) = cli.players {
        settings.num_players = players;
    }
    if let Some(big_blind) = cli.big_blind {
        settings.big_blind = big_blind;
    }
    if cli.all_streets {
        settings.show_flop = true;
        settings.show_turn = true;
        settings.show_river = true;
    }
    // Hands are dealt by the loop in main.
    settings.auto_new = false;
    Ok(settings)
}

fn choose_action(trainer: &Trainer<StdRng>, strategy: Strategy) -> Action {
    let check_or_call = if trainer.can_check() {
        Action::Check
    } else {
        Action::Call
    };
    if trainer.engine().street() != Street::Preflop {
        return check_or_call;
    }
    match (strategy, trainer.recommendation()) {
        (Strategy::Recommended, Some(Recommendation::Raise)) => Action::Raise,
        (Strategy::Recommended, Some(Recommendation::Fold)) => Action::Fold,
        _ => check_or_call,
    }
}

/// Run the clock until nothing is pending.
fn drain(trainer: &mut Trainer<StdRng>) -> Result<(), Box<dyn std::error::Error>> {
    while let Some(due) = trainer.next_due() {
        let wait = due.saturating_sub(trainer.clock());
        for e in trainer.tick(wait)? {
            match e {
                TrainerEvent::StreetAdvanced(street) => println!("*** {street} ***"),
                TrainerEvent::HandComplete { pot, hero_won } => {
                    event!(Level::DEBUG, pot, ?hero_won, "Hand settled")
                }
                TrainerEvent::NewHand(token) => {
                    event!(Level::DEBUG, generation = token.generation(), "Dealt")
                }
            }
        }
    }
    Ok(())
}
