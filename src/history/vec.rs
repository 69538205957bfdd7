use std::{cell::RefCell, rc::Rc};

use super::{HandHistory, Historian, HistorianError};

/// VecHistorian appends every finished hand to a shared vector.
pub struct VecHistorian {
    hands: Rc<RefCell<Vec<HandHistory>>>,
}

impl VecHistorian {
    /// Create storage that can be inspected after the historian has been
    /// handed to a trainer.
    pub fn new_storage() -> Rc<RefCell<Vec<HandHistory>>> {
        Rc::new(RefCell::new(vec![]))
    }

    pub fn new(hands: Rc<RefCell<Vec<HandHistory>>>) -> Self {
        Self { hands }
    }
}

impl Historian for VecHistorian {
    fn record_hand(
        &mut self,
        _session_id: &uuid::Uuid,
        hand: &HandHistory,
    ) -> Result<(), HistorianError> {
        self.hands.try_borrow_mut()?.push(hand.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Deck;
    use crate::history::{HandRecorder, HandResult};
    use crate::holdem::{Community, deal_players};

    fn finished_hand() -> HandHistory {
        let players = deal_players(3, &mut Deck::ordered(), 2, 0, 0).unwrap();
        let mut recorder = HandRecorder::new();
        recorder.begin(&players, 2);
        recorder
            .finalize(3, HandResult::Folded, Community::default(), None)
            .unwrap()
    }

    #[test]
    fn test_vec_historian() {
        let storage = VecHistorian::new_storage();
        let mut hist = VecHistorian::new(storage.clone());
        let id = uuid::Uuid::new_v4();

        hist.record_hand(&id, &finished_hand()).unwrap();
        hist.record_hand(&id, &finished_hand()).unwrap();

        assert_eq!(2, storage.borrow().len());
        assert_eq!(3, storage.borrow()[0].pot);
    }

    #[test]
    fn test_vec_historian_busy_storage() {
        let storage = VecHistorian::new_storage();
        let mut hist = VecHistorian::new(storage.clone());

        let _held = storage.borrow();
        assert!(matches!(
            hist.record_hand(&uuid::Uuid::new_v4(), &finished_hand()),
            Err(HistorianError::BorrowMutError(_))
        ));
    }
}
