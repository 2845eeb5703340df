use std::collections::VecDeque;

use trx_core::LchanType;

use crate::prim::TxPrim;

/// Ordered transmit queue of one timeslot. Arrival order is transmission
/// order; extraction is channel-type aware (see [`TxQueue::dequeue`]).
/// The queue is unbounded; backpressure belongs to the layers above.
#[derive(Debug, Default)]
pub struct TxQueue {
    prims: VecDeque<TxPrim>,
}

impl TxQueue {
    pub fn new() -> Self {
        TxQueue { prims: VecDeque::new() }
    }

    /// Appends a primitive at the tail
    pub fn push_back(&mut self, prim: TxPrim) {
        tracing::debug!("queueing a {} primitive, {} octets", prim.chan(), prim.payload_len());
        self.prims.push_back(prim);
    }

    pub fn len(&self) -> usize {
        self.prims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prims.is_empty()
    }

    /// Queued primitives in transmission order
    pub fn iter(&self) -> impl Iterator<Item = &TxPrim> {
        self.prims.iter()
    }

    /// Removes and returns one primitive satisfying a transmit opportunity
    /// for the requested channel type, or None if nothing matches.
    ///
    /// Traffic requests run TCH / FACCH arbitration; every other type takes
    /// the first exact match in queue order, leaving the rest untouched.
    pub fn dequeue(&mut self, chan: LchanType) -> Option<TxPrim> {
        // There is nothing to dequeue
        if self.prims.is_empty() {
            return None;
        }

        // TCH requires FACCH prioritization, so handle it separately
        if chan.is_traffic() {
            return self.dequeue_tch();
        }

        let idx = self.prims.iter().position(|p| p.chan() == chan)?;
        self.prims.remove(idx)
    }

    /// Dequeues a TCH or FACCH frame, prioritizing the latter. When both are
    /// queued, the FACCH frame replaces the traffic frame, which is dropped
    /// and never transmitted.
    fn dequeue_tch(&mut self) -> Option<TxPrim> {
        let mut facch = None;
        let mut tch = None;

        // Single pass: first occurrence of each, independent of their
        // relative order
        for (idx, prim) in self.prims.iter().enumerate() {
            if facch.is_none() && prim.chan().is_facch() {
                facch = Some(idx);
            }
            if tch.is_none() && prim.chan().is_traffic() {
                tch = Some(idx);
            }
            if facch.is_some() && tch.is_some() {
                break;
            }
        }

        match (facch, tch) {
            (Some(f), Some(t)) => {
                // Remove the higher index first so the lower one stays valid
                let (hi, lo) = if f > t { (f, t) } else { (t, f) };
                let hi_prim = self.prims.remove(hi).unwrap();
                let lo_prim = self.prims.remove(lo).unwrap();
                let (facch_prim, tch_prim) =
                    if f > t { (hi_prim, lo_prim) } else { (lo_prim, hi_prim) };

                tracing::debug!("dropping a queued {} frame, replaced by {}",
                    tch_prim.chan(), facch_prim.chan());
                drop(tch_prim);
                Some(facch_prim)
            }
            // Only one of the two was found
            (Some(f), None) => self.prims.remove(f),
            (None, Some(t)) => self.prims.remove(t),
            // Nothing eligible, e.g. only SACCH frames are queued
            (None, None) => None,
        }
    }

    /// Unlinks and destroys every queued primitive
    pub fn flush(&mut self) {
        if !self.prims.is_empty() {
            tracing::debug!("flushing {} queued primitives", self.prims.len());
        }
        self.prims.clear();
    }
}
