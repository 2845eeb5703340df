use trx_core::{PchanConfig, TS_PER_CARRIER, chan_nr};

use crate::error::{PushErr, SchedErr};
use crate::prim::TxPrim;
use crate::timeslot::Timeslot;

/// Transceiver context: owns the timeslots of one carrier and is where new
/// primitives are allocated before they are pushed to a timeslot queue.
#[derive(Debug)]
pub struct Transceiver {
    ts: [Timeslot; TS_PER_CARRIER],
}

impl Default for Transceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl Transceiver {
    pub fn new() -> Self {
        Transceiver {
            ts: std::array::from_fn(|tn| Timeslot::new(tn as u8)),
        }
    }

    pub fn ts(&self, tn: u8) -> Result<&Timeslot, SchedErr> {
        self.ts.get(tn as usize).ok_or(SchedErr::InvalidTimeslot(tn))
    }

    pub fn ts_mut(&mut self, tn: u8) -> Result<&mut Timeslot, SchedErr> {
        self.ts.get_mut(tn as usize).ok_or(SchedErr::InvalidTimeslot(tn))
    }

    /// Assigns a multiframe layout to timeslot tn
    pub fn configure_ts(&mut self, tn: u8, pchan: PchanConfig) -> Result<(), SchedErr> {
        self.ts_mut(tn)?.configure(pchan);
        Ok(())
    }

    /// Releases timeslot tn, destroying everything still queued on it
    pub fn release_ts(&mut self, tn: u8) -> Result<(), SchedErr> {
        self.ts_mut(tn)?.deconfigure();
        Ok(())
    }

    /// Initializes a new primitive for the logical channel described by the
    /// chan_nr / link_id pair. The payload is zero-initialized and sized to
    /// pl_len; the caller fills it in before pushing.
    pub fn init_prim(&self, pl_len: usize, chan_nr: u8, link_id: u8) -> Result<TxPrim, SchedErr> {
        // Determine lchan type
        let Some(chan) = trx_core::resolve_lchan_type(chan_nr, link_id) else {
            tracing::error!(
                "couldn't determine lchan type for chan_nr={:02x} and link_id={:02x}",
                chan_nr, link_id);
            return Err(SchedErr::InvalidChannel { chan_nr, link_id });
        };

        TxPrim::alloc(chan, pl_len).map_err(|e| {
            tracing::error!("failed to allocate a {} octet primitive", pl_len);
            e
        })
    }

    /// Adds a primitive to the tail of the transmit queue of the timeslot
    /// whose index is carried in chan_nr. On failure the primitive is handed
    /// back to the caller, unqueued.
    pub fn push_prim(&mut self, prim: TxPrim, chan_nr: u8) -> Result<(), PushErr> {
        let tn = chan_nr::chan_nr_tn(chan_nr);

        // The derivation cannot produce an index above 7; the range check
        // stays as an explicit part of the contract
        if tn as usize >= self.ts.len() {
            tracing::error!("incorrect ts index {}", tn);
            return Err(PushErr { cause: SchedErr::InvalidTimeslot(tn), prim });
        }

        // Check whether the required timeslot is configured
        let ts = &mut self.ts[tn as usize];
        if !ts.is_configured() {
            tracing::error!("timeslot {} isn't configured", tn);
            return Err(PushErr { cause: SchedErr::NotConfigured { tn }, prim });
        }

        ts.queue.push_back(prim);
        Ok(())
    }

    /// Destroys every primitive queued on timeslot tn
    pub fn flush_ts(&mut self, tn: u8) -> Result<(), SchedErr> {
        self.ts_mut(tn)?.queue.flush();
        Ok(())
    }
}
