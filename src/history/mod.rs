//! Hand histories for a training session.
//!
//! [`HandRecorder`] builds the history of the hand on the table. Finished
//! hands land in a [`Session`] and are passed to every registered
//! [`Historian`].
use thiserror::Error;

mod fn_historian;
mod hand;
mod recorder;
mod vec;
#[cfg(feature = "serde")]
mod writer;

pub use fn_historian::FnHistorian;
pub use hand::{Blinds, HandAction, HandHistory, HandResult, HistoryPlayer, Session};
pub use recorder::{DEFAULT_ACTOR, HandRecorder};
pub use vec::VecHistorian;
#[cfg(feature = "serde")]
pub use writer::{FileHistorian, append_hand};

/// HistorianError is the error type for historian implementations.
#[derive(Error, Debug)]
pub enum HistorianError {
    #[error("Unable to record hand")]
    UnableToRecordHand,
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Borrow Mut Error: {0}")]
    BorrowMutError(#[from] std::cell::BorrowMutError),
}

/// Historians are told about every hand once it's finished. This is
/// where hands get logged, persisted or counted.
pub trait Historian {
    /// Called when a hand of session `session_id` is finalized.
    ///
    /// Returning an error drops the historian from the trainer.
    fn record_hand(
        &mut self,
        session_id: &uuid::Uuid,
        hand: &HandHistory,
    ) -> Result<(), HistorianError>;
}
