use clap::Parser;

use rand::SeedableRng;
use rand::rngs::StdRng;

use trx_core::chan_nr::{RSL_CHAN_BM_ACCH, RSL_CHAN_SDCCH4_ACCH, RSL_CHAN_SDCCH8_ACCH};
use trx_core::{GSM_MACBLOCK_LEN, LchanType, PchanConfig, TchMode, debug};
use trx_config::{TrxConfig, toml_config};
use trx_sched::{GsmCodecBfi, LchanState, Transceiver};

/// Load configuration file
fn load_config_from_toml(cfg_path: &str) -> TrxConfig {
    match toml_config::from_file(cfg_path) {
        Ok(c) => c,
        Err(e) => {
            println!("Failed to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    }
}

/// Fallback configuration when no file is given: a combined CCCH slot, one
/// SDCCH/8 slot and one full rate traffic slot
fn default_config() -> TrxConfig {
    let mut cfg = TrxConfig::default();
    cfg.timeslots[0] = Some(PchanConfig::CcchSdcch4);
    cfg.timeslots[1] = Some(PchanConfig::Sdcch8);
    cfg.timeslots[2] = Some(PchanConfig::TchF);
    cfg
}

/// RSL channel number addressing the dedicated channel of a timeslot
fn dcch_chan_nr(pchan: PchanConfig, tn: u8) -> Option<u8> {
    match pchan {
        PchanConfig::BcchCcch => None,
        PchanConfig::CcchSdcch4 => Some(RSL_CHAN_SDCCH4_ACCH | tn),
        PchanConfig::Sdcch8 => Some(RSL_CHAN_SDCCH8_ACCH | tn),
        PchanConfig::TchF | PchanConfig::TchH => Some(RSL_CHAN_BM_ACCH | tn),
    }
}

/// Queues a few example frames so the first ticks drain real payloads
/// before the scheduler falls back to fill frames
fn seed_example_prims(trx: &mut Transceiver, cfg: &TrxConfig) {
    // LAPDm SABM, SAPI 0, then fill octets
    let mut sabm = [0x2b; GSM_MACBLOCK_LEN];
    sabm[..3].copy_from_slice(&[0x01, 0x3f, 0x01]);

    for (tn, pchan) in cfg.timeslots.iter().enumerate() {
        let Some(pchan) = *pchan else { continue };
        let Some(chan_nr) = dcch_chan_nr(pchan, tn as u8) else { continue };

        let mut prim = trx.init_prim(sabm.len(), chan_nr, 0x00).unwrap();
        prim.payload_mut().copy_from_slice(&sabm);
        let chan = prim.chan();
        trx.push_prim(prim, chan_nr).unwrap();
        tracing::info!("ts {}: queued an example {} frame", tn, chan);

        if pchan == PchanConfig::TchF {
            // Also queue one voice frame so the FACCH above replaces it
            let mut voice = trx_sched::TxPrim::alloc(LchanType::TchF, 33).unwrap();
            voice.payload_mut()[0] = 0xd0;
            trx.push_prim(voice, chan_nr).unwrap();
            tracing::info!("ts {}: queued an example TCH/F voice frame", tn);
        }
    }
}

fn hexdump(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).collect()
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "trxbridge scheduler simulator",
    long_about = "Drives the trxbridge transmit scheduler with a simulated \
                  TDMA frame clock and logs what each burst would carry"
)]
struct Args {
    /// TOML config with per-timeslot channel combinations
    config: Option<String>,

    /// Number of TDMA frames to simulate
    #[arg(short, long, default_value_t = 12)]
    frames: u32,

    /// Seed for the fill bit generator
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() {
    eprintln!("trxbridge scheduler simulator\n");

    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => load_config_from_toml(path),
        None => default_config(),
    };
    let _log_guard = debug::setup_logging_default(cfg.debug_log.clone());

    let mut rng = StdRng::seed_from_u64(args.seed);
    let bfi = GsmCodecBfi;

    // Configure timeslots and set up the per-channel transmit states the
    // clock driver owns. FACCH never gets its own service slot: a traffic
    // channel dequeue covers it through arbitration.
    let mut trx = Transceiver::new();
    let mut lchans: Vec<(u8, Vec<LchanState>)> = Vec::new();
    for (tn, pchan) in cfg.timeslots.iter().enumerate() {
        let Some(pchan) = *pchan else { continue };
        let tn = tn as u8;
        trx.configure_ts(tn, pchan).unwrap();

        let layout = trx.ts(tn).unwrap().mf_layout().unwrap();
        let states: Vec<LchanState> = layout
            .lchans
            .iter()
            .filter(|c| c.is_dedicated() && !c.is_facch())
            .map(|c| {
                let mut state = LchanState::new(*c);
                if c.is_traffic() {
                    state.set_tch_mode(TchMode::SpeechV1);
                }
                state
            })
            .collect();
        if states.is_empty() {
            tracing::info!("ts {}: no dedicated channels to service", tn);
            continue;
        }
        lchans.push((tn, states));
    }

    if lchans.is_empty() {
        tracing::warn!("no serviceable timeslots configured, nothing to do");
        return;
    }

    seed_example_prims(&mut trx, &cfg);

    // The frame clock. Each frame, every active timeslot services one of
    // its channels; round robin stands in for the real per-frame multiframe
    // mapping, which lives below this layer.
    for frame in 0..args.frames {
        for (tn, states) in lchans.iter_mut() {
            let idx = frame as usize % states.len();
            let lchan = &mut states[idx];
            let ts = trx.ts_mut(*tn).unwrap();

            match ts.queue.dequeue(lchan.chan()) {
                Some(prim) => lchan.set_current(prim),
                None => lchan.assign_dummy(&mut rng, &bfi).unwrap(),
            }

            match lchan.take_current() {
                Some(prim) => {
                    tracing::info!("fn={} ts {} {}: tx {} octets: {}",
                        frame, tn, prim.chan(), prim.payload_len(),
                        hexdump(prim.payload()));
                }
                None => {
                    tracing::debug!("fn={} ts {} {}: nothing to transmit",
                        frame, tn, lchan.chan());
                }
            }
        }
    }

    // Channel release path: drain and drop whatever never got sent
    for (tn, _) in lchans.iter() {
        trx.release_ts(*tn).unwrap();
    }
}
