//! RSL channel descriptor resolution
//!
//! Higher layers address a logical channel with the channel number /
//! link identifier pair of 3GPP TS 48.058 (clauses 9.3.1 and 9.3.2).
//! The channel number carries the channel combination in bits C5..C1 and
//! the timeslot number in bits TN3..TN1; the link identifier selects
//! between the main signalling link and the SACCH.

use crate::lchan::LchanType;

/// Bm + ACCHs (TCH/F), C5..C1 = 0b00001
pub const RSL_CHAN_BM_ACCH: u8 = 0x08;
/// Lm + ACCHs (TCH/H), C5..C2 = 0b0001, C1 = subchannel
pub const RSL_CHAN_LM_ACCH: u8 = 0x10;
/// SDCCH/4 + ACCH, C5..C3 = 0b001, C2..C1 = subchannel
pub const RSL_CHAN_SDCCH4_ACCH: u8 = 0x20;
/// SDCCH/8 + ACCH, C5..C4 = 0b01, C3..C1 = subchannel
pub const RSL_CHAN_SDCCH8_ACCH: u8 = 0x40;
/// BCCH, C5..C1 = 0b10000
pub const RSL_CHAN_BCCH: u8 = 0x80;
/// Uplink CCCH (RACH), C5..C1 = 0b10001
pub const RSL_CHAN_RACH: u8 = 0x88;
/// Downlink CCCH (PCH + AGCH), C5..C1 = 0b10010
pub const RSL_CHAN_PCH_AGCH: u8 = 0x90;

/// Channel flag of the link identifier: set means SACCH, clear means the
/// main signalling link
pub const RSL_LINK_SACCH: u8 = 0x40;

/// Extracts the timeslot number from a channel number
#[inline(always)]
pub fn chan_nr_tn(chan_nr: u8) -> u8 {
    chan_nr & 0x07
}

/// Resolves a chan_nr / link_id pair to a logical channel type.
/// Returns None if the pair does not describe any known channel.
pub fn resolve_lchan_type(chan_nr: u8, link_id: u8) -> Option<LchanType> {
    let on_sacch = (link_id & 0xc0) == RSL_LINK_SACCH;

    if chan_nr & 0xf8 == RSL_CHAN_BM_ACCH {
        Some(if on_sacch { LchanType::SacchTf } else { LchanType::FacchF })
    } else if chan_nr & 0xf0 == RSL_CHAN_LM_ACCH {
        Some(if on_sacch { LchanType::SacchTh } else { LchanType::FacchH })
    } else if chan_nr & 0xe0 == RSL_CHAN_SDCCH4_ACCH {
        Some(if on_sacch { LchanType::Sacch4 } else { LchanType::Sdcch4 })
    } else if chan_nr & 0xc0 == RSL_CHAN_SDCCH8_ACCH {
        Some(if on_sacch { LchanType::Sacch8 } else { LchanType::Sdcch8 })
    } else if on_sacch {
        // No SACCH exists for the common channels below
        None
    } else if chan_nr & 0xf8 == RSL_CHAN_BCCH {
        Some(LchanType::Bcch)
    } else if chan_nr & 0xf8 == RSL_CHAN_RACH {
        Some(LchanType::Rach)
    } else if chan_nr & 0xf8 == RSL_CHAN_PCH_AGCH {
        Some(LchanType::PchAgch)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dedicated_channels() {
        // TCH/F on ts 2: main link is FACCH, SACCH flag selects SACCH/TF
        assert_eq!(resolve_lchan_type(RSL_CHAN_BM_ACCH | 2, 0x00), Some(LchanType::FacchF));
        assert_eq!(resolve_lchan_type(RSL_CHAN_BM_ACCH | 2, RSL_LINK_SACCH), Some(LchanType::SacchTf));

        // TCH/H, both subchannels
        assert_eq!(resolve_lchan_type(RSL_CHAN_LM_ACCH | 3, 0x00), Some(LchanType::FacchH));
        assert_eq!(resolve_lchan_type(RSL_CHAN_LM_ACCH | 0x08 | 3, RSL_LINK_SACCH), Some(LchanType::SacchTh));

        // SDCCH/4 subchannel 3 on ts 0
        assert_eq!(resolve_lchan_type(RSL_CHAN_SDCCH4_ACCH | 0x18, 0x00), Some(LchanType::Sdcch4));
        assert_eq!(resolve_lchan_type(RSL_CHAN_SDCCH4_ACCH | 0x18, RSL_LINK_SACCH), Some(LchanType::Sacch4));

        // SDCCH/8 subchannel 5 on ts 1
        assert_eq!(resolve_lchan_type(RSL_CHAN_SDCCH8_ACCH | 0x28 | 1, 0x00), Some(LchanType::Sdcch8));
        assert_eq!(resolve_lchan_type(RSL_CHAN_SDCCH8_ACCH | 0x28 | 1, RSL_LINK_SACCH), Some(LchanType::Sacch8));
    }

    #[test]
    fn test_resolve_common_channels() {
        assert_eq!(resolve_lchan_type(RSL_CHAN_BCCH, 0x00), Some(LchanType::Bcch));
        assert_eq!(resolve_lchan_type(RSL_CHAN_RACH, 0x00), Some(LchanType::Rach));
        assert_eq!(resolve_lchan_type(RSL_CHAN_PCH_AGCH, 0x00), Some(LchanType::PchAgch));

        // Common channels carry no SACCH
        assert_eq!(resolve_lchan_type(RSL_CHAN_BCCH, RSL_LINK_SACCH), None);
        assert_eq!(resolve_lchan_type(RSL_CHAN_PCH_AGCH, RSL_LINK_SACCH), None);
    }

    #[test]
    fn test_resolve_invalid() {
        // C-bits 0b10011 and up are not assigned
        assert_eq!(resolve_lchan_type(0x98, 0x00), None);
        assert_eq!(resolve_lchan_type(0xc0, 0x00), None);
        assert_eq!(resolve_lchan_type(0xff, 0x00), None);
        // All-zero channel number is not a valid combination either
        assert_eq!(resolve_lchan_type(0x00, 0x00), None);
    }

    #[test]
    fn test_chan_nr_tn() {
        assert_eq!(chan_nr_tn(RSL_CHAN_BM_ACCH | 5), 5);
        assert_eq!(chan_nr_tn(RSL_CHAN_SDCCH8_ACCH | 0x28 | 7), 7);
    }
}
