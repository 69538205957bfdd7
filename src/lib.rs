//! holdem_trainer is a Texas Hold'em decision trainer.
//!
//! It deals hands against a virtual table, scores the hero's preflop
//! decisions with the Chen formula and records every hand so a session
//! can be exported as PokerStars hand history text.
//!
//! ```
//! use std::time::Duration;
//!
//! use rand::{SeedableRng, rngs::StdRng};
//! use holdem_trainer::config::TrainerSettings;
//! use holdem_trainer::holdem::Action;
//! use holdem_trainer::trainer::Trainer;
//!
//! let settings = TrainerSettings { auto_new: false, ..Default::default() };
//! let mut trainer = Trainer::with_rng(settings, StdRng::seed_from_u64(7)).unwrap();
//! trainer.new_hand().unwrap();
//!
//! let feedback = trainer.act(Action::Call).unwrap();
//! println!("{}", feedback.message);
//!
//! trainer.tick(Duration::from_secs(1)).unwrap();
//! assert_eq!(1, trainer.session().len());
//! ```

/// Cards, the deck and hand categories. Nothing in core knows about
/// seats or streets.
pub mod core;
/// Seats, blinds, betting math, streets and settlement.
pub mod holdem;
/// The per hand state machine and deferred actions.
pub mod engine;
/// Trainer settings.
pub mod config;
/// Hand histories and the sinks they are written to.
pub mod history;
/// Exports of finished sessions.
pub mod export;
/// Grading and pacing of the hero's decisions.
pub mod trainer;
