use super::{HandHistory, Historian, HistorianError};

/// A historian that calls a function for every finished hand. Handy for
/// tests and for wiring a trainer to something that isn't a historian.
#[derive(Debug, Clone)]
pub struct FnHistorian<F> {
    func: F,
}

impl<F: FnMut(&uuid::Uuid, &HandHistory) -> Result<(), HistorianError>> FnHistorian<F> {
    pub fn new(f: F) -> Self {
        Self { func: f }
    }
}

impl<F: FnMut(&uuid::Uuid, &HandHistory) -> Result<(), HistorianError>> Historian
    for FnHistorian<F>
{
    fn record_hand(
        &mut self,
        session_id: &uuid::Uuid,
        hand: &HandHistory,
    ) -> Result<(), HistorianError> {
        (self.func)(session_id, hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Session;

    #[test]
    fn test_fn_historian_counts() {
        let mut count = 0;
        {
            let mut hist = FnHistorian::new(|_, _| {
                count += 1;
                Ok(())
            });
            let session = Session::new();
            let hand = crate::history::HandRecorder::new()
                .begin(&[], 2)
                .clone();
            hist.record_hand(&session.id, &hand).unwrap();
            hist.record_hand(&session.id, &hand).unwrap();
        }
        assert_eq!(2, count);
    }

    #[test]
    fn test_fn_historian_error() {
        let mut hist = FnHistorian::new(|_, _| Err(HistorianError::UnableToRecordHand));
        let hand = crate::history::HandRecorder::new().begin(&[], 2).clone();
        assert!(matches!(
            hist.record_hand(&uuid::Uuid::new_v4(), &hand),
            Err(HistorianError::UnableToRecordHand)
        ));
    }
}
