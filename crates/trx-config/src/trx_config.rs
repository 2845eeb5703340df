use trx_core::{PchanConfig, TS_PER_CARRIER};

/// Top-level trxbridge configuration
#[derive(Debug, Clone)]
pub struct TrxConfig {
    /// Optional verbose log file, written alongside stdout logging
    pub debug_log: Option<String>,

    /// Channel combination per timeslot. None leaves the slot unconfigured;
    /// pushes to it are rejected until a combination is assigned.
    pub timeslots: [Option<PchanConfig>; TS_PER_CARRIER],
}

impl Default for TrxConfig {
    fn default() -> Self {
        TrxConfig {
            debug_log: None,
            timeslots: [None; TS_PER_CARRIER],
        }
    }
}

impl TrxConfig {
    /// Number of timeslots carrying a channel combination
    pub fn num_configured(&self) -> usize {
        self.timeslots.iter().filter(|ts| ts.is_some()).count()
    }
}
