use trx_core::{LchanType, TchMode};

use crate::prim::TxPrim;

/// Per-logical-channel transmit state: holds at most one primitive that is
/// actively being transmitted, separate from the timeslot queue. The clock
/// driver moves a dequeued primitive in here for the duration of its bursts.
#[derive(Debug)]
pub struct LchanState {
    chan: LchanType,
    tch_mode: TchMode,
    prim: Option<TxPrim>,
}

impl LchanState {
    pub fn new(chan: LchanType) -> Self {
        LchanState {
            chan,
            tch_mode: TchMode::default(),
            prim: None,
        }
    }

    pub fn chan(&self) -> LchanType {
        self.chan
    }

    pub fn tch_mode(&self) -> TchMode {
        self.tch_mode
    }

    /// Selects the channel mode; only meaningful on traffic channels
    pub fn set_tch_mode(&mut self, mode: TchMode) {
        self.tch_mode = mode;
    }

    /// Installs prim as the current primitive. The slot must be empty: a
    /// stale primitive here means the scheduling logic lost track of a
    /// transmission, which is a caller bug rather than a runtime condition.
    pub fn set_current(&mut self, prim: TxPrim) {
        assert!(self.prim.is_none(),
            "lchan {}: current primitive already set", self.chan);
        self.prim = Some(prim);
    }

    pub fn has_current(&self) -> bool {
        self.prim.is_some()
    }

    pub fn current(&self) -> Option<&TxPrim> {
        self.prim.as_ref()
    }

    /// Removes and returns the current primitive, leaving the slot empty
    pub fn take_current(&mut self) -> Option<TxPrim> {
        self.prim.take()
    }

    /// Destroys the current primitive and clears the slot
    pub fn drop_current(&mut self) {
        self.prim = None;
    }
}
