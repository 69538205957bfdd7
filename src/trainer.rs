//! The training loop.
//!
//! A [`Trainer`] deals hands with a [`GameEngine`], grades every hero
//! decision against the Chen recommendation and paces the hand so the
//! feedback can be read. Nothing here sleeps: the caller moves a logical
//! clock forward with [`Trainer::tick`] and gets back what happened.
use std::time::Duration;

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{event, trace_span};

use crate::config::TrainerSettings;
use crate::core::TrainerError;
use crate::engine::{Deferred, DeferredQueue, GameEngine, HandToken};
use crate::export::export_session_to_pokerstars;
use crate::history::{HandRecorder, HandResult, Historian, Session};
use crate::holdem::{
    Action, Player, Recommendation, Street, can_hero_check, chen_score, compute_hero_result,
    recommend_action,
};

/// The hero always sits in seat 0.
pub const HERO_SEAT: usize = 0;

/// Preflop grading tally for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrainerStats {
    pub hands: u32,
    pub correct: u32,
}

impl TrainerStats {
    pub fn record(&mut self, correct: bool) {
        self.hands += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Percentage of graded hands played correctly. `None` before the
    /// first graded hand.
    pub fn accuracy(&self) -> Option<f64> {
        if self.hands == 0 {
            None
        } else {
            Some(f64::from(self.correct) * 100.0 / f64::from(self.hands))
        }
    }
}

/// What the trainer says about one hero action.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub action: Action,
    pub street: Street,
    /// Only preflop decisions are graded. Later streets are always correct.
    pub correct: bool,
    pub chen_score: f32,
    pub recommendation: Recommendation,
    /// The hero's street bet after acting.
    pub amount: u32,
    pub total_pot: u32,
    pub message: String,
}

/// Things that happened while the clock moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerEvent {
    /// Community cards for this street were dealt.
    StreetAdvanced(Street),
    /// The hand settled. `hero_won` is only set after a river showdown.
    HandComplete { pot: u32, hero_won: Option<bool> },
    /// A new hand was dealt on its own.
    NewHand(HandToken),
}

/// # Trainer
///
/// Owns the engine, the settings, the session and its stats.
///
/// - `new_hand` deals and opens a hand history.
/// - `act` grades and applies the hero's action, then schedules the next
///   step after the feedback delay.
/// - `tick` advances the clock and runs whatever came due.
pub struct Trainer<R: Rng = ThreadRng> {
    engine: GameEngine<R>,
    settings: TrainerSettings,
    session: Session,
    recorder: HandRecorder,
    stats: TrainerStats,
    queue: DeferredQueue,
    clock: Duration,
    folded: bool,
    historians: Vec<Box<dyn Historian>>,
}

impl Trainer<ThreadRng> {
    pub fn new(settings: TrainerSettings) -> Result<Self, TrainerError> {
        Self::with_rng(settings, rand::rng())
    }
}

impl<R: Rng> Trainer<R> {
    pub fn with_rng(settings: TrainerSettings, rng: R) -> Result<Self, TrainerError> {
        settings.validate()?;
        Ok(Self {
            engine: GameEngine::with_rng(rng),
            settings,
            session: Session::new(),
            recorder: HandRecorder::new(),
            stats: TrainerStats::default(),
            queue: DeferredQueue::new(),
            clock: Duration::ZERO,
            folded: false,
            historians: vec![],
        })
    }

    pub fn add_historian(&mut self, historian: Box<dyn Historian>) {
        self.historians.push(historian);
    }

    /// Replace the settings. The table size and blinds apply from the next
    /// deal.
    pub fn set_settings(&mut self, settings: TrainerSettings) -> Result<(), TrainerError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Deal a new hand with the current settings. Anything still pending
    /// for the old hand is cancelled.
    pub fn new_hand(&mut self) -> Result<&[Player], TrainerError> {
        self.deal(
            self.settings.num_players,
            self.settings.big_blind,
            HERO_SEAT,
        )
    }

    fn deal(
        &mut self,
        num_players: usize,
        big_blind: u32,
        hero_seat: usize,
    ) -> Result<&[Player], TrainerError> {
        self.queue.cancel_all();
        self.folded = false;
        let players = self
            .engine
            .deal_table(num_players, big_blind, Some(hero_seat))?;
        self.recorder.begin(players, big_blind);
        Ok(players)
    }

    /// True while the hero still has a decision to make.
    pub fn hand_in_progress(&self) -> bool {
        !self.folded && !self.engine.players().is_empty() && !self.engine.street().is_complete()
    }

    pub fn hero_score(&self) -> Option<f32> {
        self.engine
            .hero()
            .map(|hero| chen_score(hero.cards[0], hero.cards[1]))
    }

    pub fn recommendation(&self) -> Option<Recommendation> {
        self.hero_score().map(|score| {
            recommend_action(score, self.settings.num_players, self.settings.facing_raise)
        })
    }

    pub fn can_check(&self) -> bool {
        can_hero_check(self.engine.players(), self.engine.hero())
    }

    /// Apply the hero's action to the current street.
    ///
    /// A fold ends the hand for the history right away and the engine
    /// settles once the feedback delay passes. Anything else advances the
    /// street after the delay.
    pub fn act(&mut self, action: Action) -> Result<Feedback, TrainerError> {
        if !self.hand_in_progress() {
            return Err(TrainerError::NoHandInProgress);
        }
        let (Some(score), Some(recommendation)) = (self.hero_score(), self.recommendation())
        else {
            return Err(TrainerError::NoHandInProgress);
        };
        let street = self.engine.street();
        let span = trace_span!("Trainer::act", %action, %street);
        let _enter = span.enter();

        // A new decision replaces whatever was waiting on the last one.
        self.queue.cancel_all();

        let correct = if street == Street::Preflop {
            let correct = recommendation.matches(action);
            self.stats.record(correct);
            correct
        } else {
            true
        };

        let amount = self.engine.place_hero_bet(action);
        let hero_name = self.engine.hero().map(|hero| hero.name.clone());
        self.recorder.record(action, amount, street, hero_name.as_deref());
        let total_pot = self.engine.total_pot();

        let due = self.clock + self.settings.feedback_delay();
        let token = self.engine.hand_token();
        if action == Action::Fold {
            self.folded = true;
            self.finish_hand(total_pot, HandResult::Folded, None);
            self.queue.schedule(due, token, Deferred::CompleteHand);
            if self.settings.auto_new {
                self.schedule_new_hand(due, token);
            }
        } else {
            self.queue.schedule(
                due,
                token,
                Deferred::AdvanceStreet(self.settings.street_settings()),
            );
        }

        event!(
            tracing::Level::DEBUG,
            correct,
            amount,
            total_pot,
            %recommendation,
            "Graded hero action"
        );

        let message =
            self.feedback_message(action, street, correct, score, recommendation, total_pot);
        Ok(Feedback {
            action,
            street,
            correct,
            chen_score: score,
            recommendation,
            amount,
            total_pot,
            message,
        })
    }

    /// Move the clock forward by `elapsed` and run everything that came
    /// due, in order.
    pub fn tick(&mut self, elapsed: Duration) -> Result<Vec<TrainerEvent>, TrainerError> {
        self.clock += elapsed;
        let mut events = vec![];
        while let Some(scheduled) = self.queue.pop_due(self.clock) {
            if scheduled.token != self.engine.hand_token() {
                event!(
                    tracing::Level::DEBUG,
                    action = ?scheduled.action,
                    "Skipping deferred action for a replaced hand"
                );
                continue;
            }
            match scheduled.action {
                Deferred::NewHand {
                    num_players,
                    big_blind,
                    hero_seat,
                } => {
                    self.deal(num_players, big_blind, hero_seat.unwrap_or(HERO_SEAT))?;
                    events.push(TrainerEvent::NewHand(self.engine.hand_token()));
                }
                action => {
                    let before = self.engine.street();
                    let Some(street) = self.engine.apply(scheduled.token, action)? else {
                        continue;
                    };
                    if !street.is_complete() {
                        events.push(TrainerEvent::StreetAdvanced(street));
                    } else if !before.is_complete() {
                        events.push(self.complete(before, scheduled.due));
                    }
                }
            }
        }
        Ok(events)
    }

    /// The engine just reached `Complete` from `before`.
    fn complete(&mut self, before: Street, now: Duration) -> TrainerEvent {
        let pot = self.engine.pot();
        if self.folded {
            return TrainerEvent::HandComplete {
                pot,
                hero_won: None,
            };
        }

        let hero_won = if before == Street::River {
            compute_hero_result(self.engine.players(), &self.engine.community().cards())
        } else {
            None
        };
        self.finish_hand(pot, HandResult::Completed, hero_won);
        if self.settings.auto_new {
            let token = self.engine.hand_token();
            self.schedule_new_hand(now + self.settings.feedback_delay(), token);
        }
        TrainerEvent::HandComplete { pot, hero_won }
    }

    fn schedule_new_hand(&mut self, due: Duration, token: HandToken) {
        self.queue.schedule(
            due,
            token,
            Deferred::NewHand {
                num_players: self.settings.num_players,
                big_blind: self.settings.big_blind,
                hero_seat: Some(HERO_SEAT),
            },
        );
    }

    /// Close the hand history, add it to the session and tell the
    /// historians. A historian that fails is dropped.
    fn finish_hand(&mut self, pot: u32, result: HandResult, hero_won: Option<bool>) {
        let community = *self.engine.community();
        let Some(hand) = self.recorder.finalize(pot, result, community, hero_won) else {
            return;
        };
        event!(
            tracing::Level::INFO,
            hand_id = %hand.hand_id,
            pot,
            ?result,
            ?hero_won,
            "Hand complete"
        );

        let session_id = self.session.id;
        self.historians
            .retain_mut(|historian| match historian.record_hand(&session_id, &hand) {
                Ok(()) => true,
                Err(error) => {
                    event!(tracing::Level::WARN, %error, "Dropping historian");
                    false
                }
            });
        self.session.push(hand);
    }

    fn feedback_message(
        &self,
        action: Action,
        street: Street,
        correct: bool,
        score: f32,
        recommendation: Recommendation,
        total_pot: u32,
    ) -> String {
        if street == Street::Preflop {
            format!(
                "{} Recommended: {}. Score: {} (Chen). {} {} players. Pot: ${}.",
                if correct { "Correct." } else { "Incorrect." },
                recommendation.to_string().to_uppercase(),
                score,
                if self.settings.facing_raise {
                    "Facing a raise."
                } else {
                    "No raise yet."
                },
                self.settings.num_players,
                total_pot
            )
        } else {
            format!(
                "{} Action: {}. {} betting. Continue playing or fold. Pot: ${}.",
                street.to_string().to_uppercase(),
                action.to_string().to_uppercase(),
                street,
                total_pot
            )
        }
    }

    /// Throw away the session and its stats. The hand on the table keeps
    /// going but is no longer recorded.
    pub fn start_new_session(&mut self) -> &Session {
        self.session = Session::new();
        self.recorder.discard();
        self.stats = TrainerStats::default();
        event!(tracing::Level::DEBUG, session_id = %self.session.id, "Started new session");
        &self.session
    }

    /// The session so far in PokerStars format.
    pub fn export(&self) -> String {
        export_session_to_pokerstars(Some(&self.session))
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn settings(&self) -> &TrainerSettings {
        &self.settings
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn stats(&self) -> TrainerStats {
        self.stats
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// When the next deferred action is due, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.next_due()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
