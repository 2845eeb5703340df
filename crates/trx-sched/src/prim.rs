use trx_core::LchanType;

use crate::error::SchedErr;

/// One unit of ready-to-transmit payload data, bound to a logical channel
/// type at creation. Channel type and payload length never change after
/// allocation; a primitive has exactly one owner at any time (the caller,
/// a timeslot queue, or a logical channel slot) and moves between them.
#[derive(Debug)]
pub struct TxPrim {
    chan: LchanType,
    payload: Vec<u8>,
}

impl TxPrim {
    /// Allocates a primitive with a zero-initialized payload of pl_len
    /// octets. Allocation failure is reported, not aborted on.
    pub fn alloc(chan: LchanType, pl_len: usize) -> Result<TxPrim, SchedErr> {
        let mut payload = Vec::new();
        payload
            .try_reserve_exact(pl_len)
            .map_err(|_| SchedErr::OutOfMemory)?;
        payload.resize(pl_len, 0);
        Ok(TxPrim { chan, payload })
    }

    /// Allocates a primitive carrying a copy of the given payload
    pub fn from_slice(chan: LchanType, payload: &[u8]) -> Result<TxPrim, SchedErr> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(payload.len())
            .map_err(|_| SchedErr::OutOfMemory)?;
        buf.extend_from_slice(payload);
        Ok(TxPrim { chan, payload: buf })
    }

    pub fn chan(&self) -> LchanType {
        self.chan
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload access for the caller filling in content after allocation
    pub fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.payload
    }

    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_zero_initialized() {
        let prim = TxPrim::alloc(LchanType::Sdcch8, 23).unwrap();
        assert_eq!(prim.chan(), LchanType::Sdcch8);
        assert_eq!(prim.payload_len(), 23);
        assert!(prim.payload().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_from_slice_copies_payload() {
        let prim = TxPrim::from_slice(LchanType::SacchTf, &[0xab, 0xcd]).unwrap();
        assert_eq!(prim.payload(), &[0xab, 0xcd]);
    }

    #[test]
    fn test_payload_mut_keeps_length() {
        let mut prim = TxPrim::alloc(LchanType::FacchF, 4).unwrap();
        prim.payload_mut().copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(prim.payload(), &[1, 2, 3, 4]);
        assert_eq!(prim.payload_len(), 4);
    }
}
