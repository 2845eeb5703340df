use trx_core::PchanConfig;

use crate::multiframe::{self, MfLayout};
use crate::queue::TxQueue;

/// One of the 8 physical timeslots of a carrier. Owns the transmit queue
/// for everything scheduled on this slot; enqueueing requires a multiframe
/// layout to be assigned first.
#[derive(Debug)]
pub struct Timeslot {
    index: u8,
    mf_layout: Option<&'static MfLayout>,
    pub queue: TxQueue,
}

impl Timeslot {
    pub fn new(index: u8) -> Self {
        Timeslot {
            index,
            mf_layout: None,
            queue: TxQueue::new(),
        }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    /// Assigns the multiframe layout for the given channel combination,
    /// marking the timeslot as configured
    pub fn configure(&mut self, pchan: PchanConfig) {
        let layout = multiframe::layout_for_pchan(pchan);
        tracing::info!("ts {}: configured as {}", self.index, layout.name);
        self.mf_layout = Some(layout);
    }

    /// Removes the multiframe layout and destroys all queued primitives.
    /// Used on channel release and reconfiguration.
    pub fn deconfigure(&mut self) {
        if self.mf_layout.take().is_some() {
            tracing::info!("ts {}: released", self.index);
        }
        self.queue.flush();
    }

    pub fn is_configured(&self) -> bool {
        self.mf_layout.is_some()
    }

    pub fn mf_layout(&self) -> Option<&'static MfLayout> {
        self.mf_layout
    }
}

#[cfg(test)]
mod tests {
    use trx_core::LchanType;

    use super::*;
    use crate::prim::TxPrim;

    #[test]
    fn test_new_timeslot_is_unconfigured() {
        let ts = Timeslot::new(3);
        assert_eq!(ts.index(), 3);
        assert!(!ts.is_configured());
        assert!(ts.mf_layout().is_none());
    }

    #[test]
    fn test_configure_assigns_layout() {
        let mut ts = Timeslot::new(1);
        ts.configure(PchanConfig::Sdcch8);
        assert!(ts.is_configured());
        assert_eq!(ts.mf_layout().unwrap().pchan, PchanConfig::Sdcch8);
    }

    #[test]
    fn test_deconfigure_flushes_queue() {
        let mut ts = Timeslot::new(2);
        ts.configure(PchanConfig::TchF);
        ts.queue.push_back(TxPrim::alloc(LchanType::FacchF, 23).unwrap());
        ts.queue.push_back(TxPrim::alloc(LchanType::SacchTf, 23).unwrap());

        ts.deconfigure();
        assert!(!ts.is_configured());
        assert!(ts.queue.is_empty());
    }
}
