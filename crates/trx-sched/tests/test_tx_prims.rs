//! End-to-end exercises of the transmit-primitive lifecycle: allocation,
//! routing to a timeslot, arbitration at dequeue time, dummy synthesis and
//! teardown, driven through the public Transceiver API.

use rand::SeedableRng;
use rand::rngs::StdRng;

use trx_core::chan_nr::{RSL_CHAN_BM_ACCH, RSL_CHAN_SDCCH8_ACCH, RSL_LINK_SACCH};
use trx_core::{GSM_MACBLOCK_LEN, LchanType, PchanConfig, TchMode, debug};
use trx_sched::{GsmCodecBfi, LchanState, SchedErr, Transceiver, TxPrim};

#[test]
fn test_init_push_dequeue_roundtrip() {
    debug::setup_logging_verbose();

    let mut trx = Transceiver::new();
    trx.configure_ts(1, PchanConfig::Sdcch8).unwrap();

    // SDCCH/8 on ts 1, main signalling link
    let chan_nr = RSL_CHAN_SDCCH8_ACCH | 1;
    let mut prim = trx.init_prim(GSM_MACBLOCK_LEN, chan_nr, 0x00).unwrap();
    assert_eq!(prim.chan(), LchanType::Sdcch8);
    prim.payload_mut()[0] = 0x01;

    trx.push_prim(prim, chan_nr).unwrap();
    assert_eq!(trx.ts(1).unwrap().queue.len(), 1);

    let got = trx.ts_mut(1).unwrap().queue.dequeue(LchanType::Sdcch8).unwrap();
    assert_eq!(got.payload()[0], 0x01);
    assert!(trx.ts(1).unwrap().queue.is_empty());
}

#[test]
fn test_push_appends_at_tail() {
    debug::setup_logging_verbose();

    let mut trx = Transceiver::new();
    trx.configure_ts(4, PchanConfig::Sdcch8).unwrap();

    let chan_nr = RSL_CHAN_SDCCH8_ACCH | 4;
    for n in 0..3u8 {
        let mut prim = trx.init_prim(GSM_MACBLOCK_LEN, chan_nr, 0x00).unwrap();
        prim.payload_mut()[0] = n;
        trx.push_prim(prim, chan_nr).unwrap();
    }

    // Arrival order is transmission order
    let queue = &mut trx.ts_mut(4).unwrap().queue;
    for n in 0..3u8 {
        assert_eq!(queue.dequeue(LchanType::Sdcch8).unwrap().payload()[0], n);
    }
}

#[test]
fn test_push_to_unconfigured_timeslot() {
    debug::setup_logging_verbose();

    let mut trx = Transceiver::new();
    let chan_nr = RSL_CHAN_SDCCH8_ACCH | 6;
    let prim = trx.init_prim(GSM_MACBLOCK_LEN, chan_nr, 0x00).unwrap();

    let err = trx.push_prim(prim, chan_nr).unwrap_err();
    assert_eq!(err.cause, SchedErr::NotConfigured { tn: 6 });
    assert!(trx.ts(6).unwrap().queue.is_empty());
}

#[test]
fn test_facch_supersedes_queued_tch() {
    debug::setup_logging_verbose();

    let mut trx = Transceiver::new();
    trx.configure_ts(2, PchanConfig::TchF).unwrap();
    let chan_nr = RSL_CHAN_BM_ACCH | 2;

    // One voice frame (traffic path), then one FACCH frame (RSL path)
    let mut voice = TxPrim::alloc(LchanType::TchF, 33).unwrap();
    voice.payload_mut()[0] = 0xd0;
    trx.push_prim(voice, chan_nr).unwrap();

    let facch = trx.init_prim(GSM_MACBLOCK_LEN, chan_nr, 0x00).unwrap();
    assert_eq!(facch.chan(), LchanType::FacchF);
    trx.push_prim(facch, chan_nr).unwrap();

    // The control frame wins, the voice frame is gone for good
    let queue = &mut trx.ts_mut(2).unwrap().queue;
    let got = queue.dequeue(LchanType::TchF).unwrap();
    assert_eq!(got.chan(), LchanType::FacchF);
    assert!(queue.is_empty());
    assert!(queue.dequeue(LchanType::TchF).is_none());
}

#[test]
fn test_sacch_prims_resolve_and_route() {
    debug::setup_logging_verbose();

    let mut trx = Transceiver::new();
    trx.configure_ts(2, PchanConfig::TchF).unwrap();
    let chan_nr = RSL_CHAN_BM_ACCH | 2;

    let prim = trx.init_prim(GSM_MACBLOCK_LEN, chan_nr, RSL_LINK_SACCH).unwrap();
    assert_eq!(prim.chan(), LchanType::SacchTf);
    trx.push_prim(prim, chan_nr).unwrap();

    // A traffic request leaves the SACCH frame alone
    let queue = &mut trx.ts_mut(2).unwrap().queue;
    assert!(queue.dequeue(LchanType::TchF).is_none());
    assert_eq!(queue.len(), 1);

    let got = queue.dequeue(LchanType::SacchTf).unwrap();
    assert_eq!(got.chan(), LchanType::SacchTf);
}

#[test]
fn test_release_destroys_queued_prims() {
    debug::setup_logging_verbose();

    let mut trx = Transceiver::new();
    trx.configure_ts(3, PchanConfig::Sdcch8).unwrap();
    let chan_nr = RSL_CHAN_SDCCH8_ACCH | 3;

    for _ in 0..4 {
        let prim = trx.init_prim(GSM_MACBLOCK_LEN, chan_nr, 0x00).unwrap();
        trx.push_prim(prim, chan_nr).unwrap();
    }
    assert_eq!(trx.ts(3).unwrap().queue.len(), 4);

    trx.release_ts(3).unwrap();
    assert!(trx.ts(3).unwrap().queue.is_empty());
    assert!(!trx.ts(3).unwrap().is_configured());

    // Pushes are rejected again until the slot is reconfigured
    let prim = trx.init_prim(GSM_MACBLOCK_LEN, chan_nr, 0x00).unwrap();
    let err = trx.push_prim(prim, chan_nr).unwrap_err();
    assert_eq!(err.cause, SchedErr::NotConfigured { tn: 3 });
}

#[test]
fn test_clock_tick_with_empty_queue_synthesizes_fill() {
    debug::setup_logging_verbose();

    let mut trx = Transceiver::new();
    trx.configure_ts(5, PchanConfig::Sdcch8).unwrap();

    let mut lchan = LchanState::new(LchanType::Sdcch8);
    let mut rng = StdRng::seed_from_u64(42);

    // Empty queue: the dequeue misses and the channel falls back to a
    // synthesized fill frame, exactly one MAC block long
    assert!(trx.ts_mut(5).unwrap().queue.dequeue(LchanType::Sdcch8).is_none());
    lchan.assign_dummy(&mut rng, &GsmCodecBfi).unwrap();

    let prim = lchan.take_current().unwrap();
    assert_eq!(prim.payload_len(), GSM_MACBLOCK_LEN);
    assert_eq!(&prim.payload()[..4], &[0x01, 0x03, 0x01, 0x2b]);
}

#[test]
fn test_speech_dummy_then_drop() {
    debug::setup_logging_verbose();

    let mut lchan = LchanState::new(LchanType::TchF);
    lchan.set_tch_mode(TchMode::SpeechV1);
    let mut rng = StdRng::seed_from_u64(42);

    lchan.assign_dummy(&mut rng, &GsmCodecBfi).unwrap();
    assert!(lchan.has_current());

    // Transmission is aborted, e.g. on channel release
    lchan.drop_current();
    assert!(!lchan.has_current());

    // The slot accepts a fresh dummy again afterwards
    lchan.assign_dummy(&mut rng, &GsmCodecBfi).unwrap();
    assert!(lchan.has_current());
}
