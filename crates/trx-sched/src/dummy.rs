//! Dummy / fill frame synthesis
//!
//! A logical channel under continuous burst transmission must put something
//! on the air every time it is due, even with an empty transmit queue. This
//! module substitutes a standards-defined filler: a LAPDm fill frame on
//! signalling channels, a bad frame indication on speech traffic channels.

use rand::RngCore;

use trx_core::{GSM_MACBLOCK_LEN, TchMode};

use crate::error::SchedErr;
use crate::lchan_state::LchanState;
use crate::prim::TxPrim;

/// TS 144.006, section 8.4.2.3 "Fill frames"
/// A fill frame is a UI command frame for SAPI 0, P=0,
/// with an information field of 0 octet length.
const LAPDM_FILL_FRAME: [u8; 4] = [0x01, 0x03, 0x01, 0x2b];

/// Octets of the 2-byte SACCH L1 header (timing advance and MS power,
/// populated by lower layers, not here)
const SACCH_L1_HDR_LEN: usize = 2;

/// Formats substitute payloads for missing / erased speech frames. The
/// encoding depends on the active codec, so the formatter sits behind a
/// trait; tests and non-speech deployments can stub it out.
pub trait BadFrameInd {
    /// Returns the substitute payload for the given channel mode.
    /// An empty result means no substitute exists for this mode and
    /// nothing will be assigned.
    fn bad_frame_ind(&self, mode: TchMode) -> Vec<u8>;
}

/// TS 101 318 frame sizes of the codecs we can substitute frames for
const GSM_FR_BYTES: usize = 33;
const GSM_EFR_BYTES: usize = 31;

/// Bad frame indications for the GSM full rate codecs: a zeroed frame
/// carrying the codec signature in the first nibble.
#[derive(Debug, Default)]
pub struct GsmCodecBfi;

impl BadFrameInd for GsmCodecBfi {
    fn bad_frame_ind(&self, mode: TchMode) -> Vec<u8> {
        match mode {
            TchMode::SpeechV1 => {
                let mut buf = vec![0x00; GSM_FR_BYTES];
                buf[0] = 0xd0;
                buf
            }
            TchMode::SpeechEfr => {
                let mut buf = vec![0x00; GSM_EFR_BYTES];
                buf[0] = 0xc0;
                buf
            }
            // No substitute frame defined for the remaining modes
            _ => Vec::new(),
        }
    }
}

impl LchanState {
    /// Assigns a dummy primitive to this channel, for when there is nothing
    /// to transmit but continuous burst transmission is assumed.
    ///
    /// Speech-mode traffic channels get a bad frame indication from the
    /// codec formatter. Data-mode traffic channels get nothing (success
    /// with no primitive assigned). Every other channel type gets a LAPDm
    /// fill frame padded with random octets to one MAC block; SACCH types
    /// carry their L1 header in front, within the same 23-octet block.
    pub fn assign_dummy(
        &mut self,
        rng: &mut dyn RngCore,
        bfi: &dyn BadFrameInd,
    ) -> Result<(), SchedErr> {
        let chan = self.chan();
        let tch_mode = self.tch_mode();

        // Make sure that there is no existing primitive. A stale one here
        // means the scheduling logic lost track of a transmission: that is
        // a caller bug, not a runtime condition.
        assert!(!self.has_current(),
            "assign_dummy: lchan {} still holds a primitive", chan);

        let speech_buf;
        let mut block = [0u8; GSM_MACBLOCK_LEN];

        let payload: &[u8] = if chan.is_traffic() && tch_mode.is_speech() {
            speech_buf = bfi.bad_frame_ind(tch_mode);
            &speech_buf
        } else if chan.is_traffic() && tch_mode.is_data() {
            // Filling data channels is not done at this layer
            return Ok(());
        } else {
            let mut off = 0;

            if chan.is_sacch() {
                // L1 header octets stay zero, displacing two padding octets
                off += SACCH_L1_HDR_LEN;
            }

            block[off..off + LAPDM_FILL_FRAME.len()].copy_from_slice(&LAPDM_FILL_FRAME);
            off += LAPDM_FILL_FRAME.len();

            // TS 144.006, section 5.2 "Frame delimitation and fill bits":
            // fill bits after the first fill octet shall be random when
            // sent by the network
            rng.fill_bytes(&mut block[off..]);

            &block
        };

        // Nothing to allocate / assign
        if payload.is_empty() {
            return Ok(());
        }

        let prim = TxPrim::from_slice(chan, payload)?;
        tracing::debug!("transmitting a dummy / silence frame on lchan {}", chan);
        self.set_current(prim);

        Ok(())
    }
}
